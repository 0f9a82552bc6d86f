//! 单次同步预测

use serde::Serialize;

use crate::classifier::Classifier;

use super::error::PredictError;
use super::features::FeatureRecord;
use super::personality::Personality;

/// 预测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// 模型返回的原始标签
    pub label: String,
    pub personality: Personality,
}

/// 用单行批次调用模型，取第一个结果并解读
pub fn predict_one(
    classifier: &dyn Classifier,
    record: &FeatureRecord,
) -> Result<Prediction, PredictError> {
    record.check_ranges()?;

    let labels = classifier
        .predict(std::slice::from_ref(record))
        .map_err(PredictError::Model)?;
    let label = labels
        .into_iter()
        .next()
        .ok_or(PredictError::EmptyOutput)?;

    let personality = Personality::from_label(&label);
    Ok(Prediction { label, personality })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::classifier::ModelInfo;

    /// 测试用分类器：固定返回给定标签
    pub(crate) struct FixedClassifier {
        pub labels: Vec<String>,
        pub info: ModelInfo,
    }

    impl FixedClassifier {
        pub fn new(labels: &[&str]) -> Self {
            Self {
                labels: labels.iter().map(|s| s.to_string()).collect(),
                info: ModelInfo::for_tests("fixed"),
            }
        }
    }

    impl Classifier for FixedClassifier {
        fn predict(&self, batch: &[FeatureRecord]) -> anyhow::Result<Vec<String>> {
            Ok(self.labels.iter().take(batch.len()).cloned().collect())
        }

        fn info(&self) -> &ModelInfo {
            &self.info
        }
    }

    /// 测试用分类器：推理总是失败
    pub(crate) struct FailingClassifier {
        pub info: ModelInfo,
    }

    impl Classifier for FailingClassifier {
        fn predict(&self, _batch: &[FeatureRecord]) -> anyhow::Result<Vec<String>> {
            anyhow::bail!("feature shape mismatch")
        }

        fn info(&self) -> &ModelInfo {
            &self.info
        }
    }

    #[test]
    fn test_predict_introvert() {
        let classifier = FixedClassifier::new(&["Introvert"]);
        let prediction = predict_one(&classifier, &FeatureRecord::default()).unwrap();
        assert_eq!(prediction.label, "Introvert");
        assert_eq!(prediction.personality, Personality::Introvert);
    }

    #[test]
    fn test_predict_extrovert() {
        let classifier = FixedClassifier::new(&["Extrovert"]);
        let prediction = predict_one(&classifier, &FeatureRecord::default()).unwrap();
        assert_eq!(prediction.personality, Personality::Extrovert);
    }

    #[test]
    fn test_empty_output_is_an_error() {
        let classifier = FixedClassifier::new(&[]);
        let err = predict_one(&classifier, &FeatureRecord::default()).unwrap_err();
        assert!(matches!(err, PredictError::EmptyOutput));
    }

    #[test]
    fn test_model_failure_is_propagated() {
        let classifier = FailingClassifier {
            info: ModelInfo::for_tests("failing"),
        };
        let err = predict_one(&classifier, &FeatureRecord::default()).unwrap_err();
        assert!(matches!(err, PredictError::Model(_)));
        assert!(err.to_string().contains("feature shape mismatch"));
    }

    #[test]
    fn test_out_of_range_never_reaches_the_model() {
        let classifier = FailingClassifier {
            info: ModelInfo::for_tests("failing"),
        };
        let record = FeatureRecord {
            post_freq: 99,
            ..FeatureRecord::default()
        };
        let err = predict_one(&classifier, &record).unwrap_err();
        assert!(matches!(err, PredictError::OutOfRange { field: "post_freq", .. }));
    }
}

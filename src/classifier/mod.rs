//! 预训练分类器
//!
//! 模型在进程启动时从磁盘加载一次，之后作为只读共享状态使用。
//! 训练过程不在本项目范围内，模型被当作黑盒调用。

mod artifact;
mod estimator;

use serde::Serialize;

use crate::prediction::FeatureRecord;

pub use artifact::ArtifactClassifier;

/// 分类器接口
pub trait Classifier: Send + Sync {
    /// 对一批特征记录做预测，每行返回一个类别标签
    fn predict(&self, batch: &[FeatureRecord]) -> anyhow::Result<Vec<String>>;

    /// 模型元数据
    fn info(&self) -> &ModelInfo;
}

/// 模型元数据
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// 估计器类型
    pub kind: &'static str,
    /// 训练时的列顺序
    pub feature_names: Vec<String>,
    pub classes: Vec<String>,
    /// 模型文件 SHA-256
    pub sha256: String,
    pub path: String,
}

#[cfg(test)]
impl ModelInfo {
    pub(crate) fn for_tests(kind: &'static str) -> Self {
        Self {
            name: None,
            version: None,
            kind,
            feature_names: crate::prediction::features::FEATURE_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            classes: vec!["Extrovert".to_string(), "Introvert".to_string()],
            sha256: String::new(),
            path: String::new(),
        }
    }
}

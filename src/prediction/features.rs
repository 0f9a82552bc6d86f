//! 特征记录
//!
//! 每次预测请求现场组装、用完即弃的七字段结构。
//! 列名与模型训练时的列名保持一致。

use serde::{Deserialize, Serialize};

use super::error::PredictError;

pub const TIME_SPENT_ALONE: &str = "Time_spent_Alone";
pub const SOCIAL_EVENT_ATTENDANCE: &str = "Social_event_attendance";
pub const GOING_OUTSIDE: &str = "Going_outside";
pub const FRIENDS_CIRCLE_SIZE: &str = "Friends_circle_size";
pub const POST_FREQUENCY: &str = "Post_frequency";
pub const STAGE_FEAR: &str = "Stage_fear";
pub const DRAINED_AFTER_SOCIALIZING: &str = "Drained_after_socializing";

/// 模型输入列（固定顺序）
pub const FEATURE_NAMES: [&str; 7] = [
    TIME_SPENT_ALONE,
    SOCIAL_EVENT_ATTENDANCE,
    GOING_OUTSIDE,
    FRIENDS_CIRCLE_SIZE,
    POST_FREQUENCY,
    STAGE_FEAR,
    DRAINED_AFTER_SOCIALIZING,
];

/// 是/否选择框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YesNo {
    #[default]
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    /// Yes → 1，No → 0
    pub fn as_flag(self) -> u8 {
        match self {
            YesNo::Yes => 1,
            YesNo::No => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

/// 数值滑块定义
#[derive(Debug, Clone, Copy)]
pub struct SliderSpec {
    /// 表单字段名
    pub field: &'static str,
    /// 界面标签
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

/// 五个数值滑块，顺序与 `FeatureRecord::numeric_values` 一致
pub const SLIDERS: [SliderSpec; 5] = [
    SliderSpec {
        field: "time_alone",
        label: "Time Spent Alone (hours/day)",
        min: 0,
        max: 24,
        default: 5,
    },
    SliderSpec {
        field: "social_attend",
        label: "Social Event Attendance (per week)",
        min: 0,
        max: 14,
        default: 3,
    },
    SliderSpec {
        field: "going_out",
        label: "Going Outside Frequency (per week)",
        min: 0,
        max: 14,
        default: 4,
    },
    SliderSpec {
        field: "friends",
        label: "Friends Circle Size",
        min: 0,
        max: 50,
        default: 8,
    },
    SliderSpec {
        field: "post_freq",
        label: "Social Media Post Frequency (per week)",
        min: 0,
        max: 50,
        default: 5,
    },
];

/// 是/否选择框定义：(表单字段名, 界面标签)
pub const SELECTORS: [(&str, &str); 2] = [
    ("stage_fear", "Stage Fear"),
    ("drained", "Drained After Socializing"),
];

/// 特征记录
///
/// 表单提交使用字段名（`time_alone` 等），JSON API 同时接受模型列名。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(alias = "Time_spent_Alone")]
    pub time_alone: u32,
    #[serde(alias = "Social_event_attendance")]
    pub social_attend: u32,
    #[serde(alias = "Going_outside")]
    pub going_out: u32,
    #[serde(alias = "Friends_circle_size")]
    pub friends: u32,
    #[serde(alias = "Post_frequency")]
    pub post_freq: u32,
    #[serde(alias = "Stage_fear")]
    pub stage_fear: YesNo,
    #[serde(alias = "Drained_after_socializing")]
    pub drained: YesNo,
}

impl Default for FeatureRecord {
    fn default() -> Self {
        Self {
            time_alone: SLIDERS[0].default,
            social_attend: SLIDERS[1].default,
            going_out: SLIDERS[2].default,
            friends: SLIDERS[3].default,
            post_freq: SLIDERS[4].default,
            stage_fear: YesNo::default(),
            drained: YesNo::default(),
        }
    }
}

impl FeatureRecord {
    /// 数值字段，顺序与 `SLIDERS` 一致
    pub fn numeric_values(&self) -> [u32; 5] {
        [
            self.time_alone,
            self.social_attend,
            self.going_out,
            self.friends,
            self.post_freq,
        ]
    }

    /// 是/否字段，顺序与 `SELECTORS` 一致
    pub fn selector_values(&self) -> [YesNo; 2] {
        [self.stage_fear, self.drained]
    }

    /// 模型输入的七列 (列名, 值)，分类字段已映射为 0/1
    pub fn columns(&self) -> [(&'static str, f64); 7] {
        [
            (TIME_SPENT_ALONE, f64::from(self.time_alone)),
            (SOCIAL_EVENT_ATTENDANCE, f64::from(self.social_attend)),
            (GOING_OUTSIDE, f64::from(self.going_out)),
            (FRIENDS_CIRCLE_SIZE, f64::from(self.friends)),
            (POST_FREQUENCY, f64::from(self.post_freq)),
            (STAGE_FEAR, f64::from(self.stage_fear.as_flag())),
            (
                DRAINED_AFTER_SOCIALIZING,
                f64::from(self.drained.as_flag()),
            ),
        ]
    }

    /// 按列名取值
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.columns()
            .into_iter()
            .find(|(column, _)| *column == name)
            .map(|(_, value)| value)
    }

    /// 检查数值字段是否落在滑块范围内
    pub fn check_ranges(&self) -> Result<(), PredictError> {
        for (spec, value) in SLIDERS.iter().zip(self.numeric_values()) {
            if value < spec.min || value > spec.max {
                return Err(PredictError::OutOfRange {
                    field: spec.field,
                    value,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureRecord {
        FeatureRecord {
            time_alone: 10,
            social_attend: 1,
            going_out: 2,
            friends: 3,
            post_freq: 0,
            stage_fear: YesNo::Yes,
            drained: YesNo::No,
        }
    }

    #[test]
    fn test_columns_are_exactly_the_seven_names() {
        let columns = sample().columns();
        let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, FEATURE_NAMES.to_vec());
    }

    #[test]
    fn test_categorical_fields_map_to_flags() {
        for stage_fear in YesNo::ALL {
            for drained in YesNo::ALL {
                let record = FeatureRecord {
                    stage_fear,
                    drained,
                    ..sample()
                };
                let stage = record.value_of(STAGE_FEAR).unwrap();
                let drain = record.value_of(DRAINED_AFTER_SOCIALIZING).unwrap();
                assert!(stage == 0.0 || stage == 1.0);
                assert!(drain == 0.0 || drain == 1.0);
                assert_eq!(stage == 1.0, stage_fear == YesNo::Yes);
                assert_eq!(drain == 1.0, drained == YesNo::Yes);
            }
        }
    }

    #[test]
    fn test_value_of() {
        let record = sample();
        assert_eq!(record.value_of(TIME_SPENT_ALONE), Some(10.0));
        assert_eq!(record.value_of(FRIENDS_CIRCLE_SIZE), Some(3.0));
        assert_eq!(record.value_of("Unknown_column"), None);
    }

    #[test]
    fn test_default_matches_widget_defaults() {
        let record = FeatureRecord::default();
        assert_eq!(record.numeric_values(), [5, 3, 4, 8, 5]);
        assert_eq!(record.stage_fear, YesNo::Yes);
        assert_eq!(record.drained, YesNo::Yes);
    }

    #[test]
    fn test_check_ranges() {
        assert!(sample().check_ranges().is_ok());

        let upper = FeatureRecord {
            time_alone: 24,
            social_attend: 14,
            going_out: 14,
            friends: 50,
            post_freq: 50,
            ..sample()
        };
        assert!(upper.check_ranges().is_ok());

        let too_many_hours = FeatureRecord {
            time_alone: 25,
            ..sample()
        };
        match too_many_hours.check_ranges() {
            Err(PredictError::OutOfRange { field, value, max, .. }) => {
                assert_eq!(field, "time_alone");
                assert_eq!(value, 25);
                assert_eq!(max, 24);
            }
            other => panic!("期望 OutOfRange，实际: {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_from_form_and_column_names() {
        let form: FeatureRecord = serde_json::from_str(
            r#"{"time_alone":10,"social_attend":1,"going_out":2,"friends":3,
                "post_freq":0,"stage_fear":"Yes","drained":"No"}"#,
        )
        .unwrap();
        let columns: FeatureRecord = serde_json::from_str(
            r#"{"Time_spent_Alone":10,"Social_event_attendance":1,"Going_outside":2,
                "Friends_circle_size":3,"Post_frequency":0,"Stage_fear":"Yes",
                "Drained_after_socializing":"No"}"#,
        )
        .unwrap();
        assert_eq!(form, sample());
        assert_eq!(columns, sample());
    }

    #[test]
    fn test_yes_no_rejects_other_strings() {
        let result: Result<YesNo, _> = serde_json::from_str(r#""yes""#);
        assert!(result.is_err());
    }
}

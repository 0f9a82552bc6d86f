//! 预测标签解读

use serde::Serialize;

/// 分类器的两个输出类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Introvert,
    Extrovert,
}

impl Personality {
    /// 标签（不区分大小写）以 "intro" 开头即为内向，其余一律视为外向
    pub fn from_label(label: &str) -> Self {
        if label.to_lowercase().starts_with("intro") {
            Personality::Introvert
        } else {
            Personality::Extrovert
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Personality::Introvert => "🧠",
            Personality::Extrovert => "🔥",
        }
    }

    /// 大写类别名（用于结果提示）
    pub fn headline(self) -> &'static str {
        match self {
            Personality::Introvert => "INTROVERT",
            Personality::Extrovert => "EXTROVERT",
        }
    }

    /// 纯文本结果提示
    pub fn message(self) -> String {
        format!(
            "{} You are predicted to be an {}",
            self.emoji(),
            self.headline()
        )
    }
}

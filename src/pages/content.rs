//! 导航目标与静态页面内容

/// 侧边栏导航的四个互斥目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Types,
    Factors,
    Predictor,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Types,
        Section::Factors,
        Section::Predictor,
    ];

    /// URL 查询参数值
    pub fn slug(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Types => "types",
            Section::Factors => "factors",
            Section::Predictor => "predictor",
        }
    }

    /// 侧边栏显示文本
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "🏠 Home",
            Section::Types => "🧠 Introvert vs Extrovert",
            Section::Factors => "📊 What Affects Personality?",
            Section::Predictor => "🤖 Personality Predictor",
        }
    }

    /// 页面主标题
    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "SocialLens – Discover Your Personality",
            Section::Types => "Introvert vs Extrovert",
            Section::Factors => "What Affects Introversion &amp; Extroversion?",
            Section::Predictor => "AI Personality Prediction",
        }
    }

    /// 未知或缺失的参数回退到首页
    pub fn from_slug(slug: Option<&str>) -> Self {
        Self::ALL
            .into_iter()
            .find(|section| Some(section.slug()) == slug)
            .unwrap_or_default()
    }
}

pub const INTROVERT_TRAITS: [&str; 5] = [
    "Gains energy from <strong>being alone</strong>",
    "Thinks deeply before speaking",
    "Prefers quiet environments",
    "Good listener",
    "Small close friend groups",
];

pub const EXTROVERT_TRAITS: [&str; 5] = [
    "Gains energy from <strong>social interaction</strong>",
    "Enjoys being around people",
    "Thinks while speaking",
    "Expressive and talkative",
    "Large social circles",
];

/// Key Differences 表格：(Introvert, Extrovert)
pub const KEY_DIFFERENCES: [(&str, &str); 5] = [
    ("Quiet", "Talkative"),
    ("Enjoys solitude", "Enjoys crowds"),
    ("Deep focus", "Fast action"),
    ("Few friends", "Many friends"),
    ("Observer", "Leader"),
];

/// 影响因素：(图标, 标题, 说明)
pub const FACTORS: [(&str, &str, &str); 5] = [
    ("🧬", "Genetics", "Personality is partly inherited from parents."),
    (
        "🧠",
        "Brain Chemistry",
        "Dopamine sensitivity plays a key role in extroversion.",
    ),
    (
        "👶",
        "Childhood Environment",
        "Upbringing, parenting, and education shape behavior.",
    ),
    (
        "🌍",
        "Culture &amp; Society",
        "Different cultures encourage different traits.",
    ),
    (
        "💼",
        "Life Experiences",
        "Trauma, success, and failures can shift personality.",
    ),
];

pub const HOME_HIGHLIGHTS: [&str; 3] = [
    "Learn the difference between personality types",
    "Understand what affects them",
    "Test yourself using a real trained ML model",
];

//! 页面渲染
//!
//! 每个页面都是完整的 HTML 文档：侧边栏导航 + 当前目标的内容 + 页脚。
//! 渲染是输入的纯函数，同一目标重复渲染得到完全相同的内容。

use crate::common::escape_html;
use crate::prediction::features::{SELECTORS, SLIDERS};
use crate::prediction::{FeatureRecord, Prediction, YesNo};

use super::content::{
    EXTROVERT_TRAITS, FACTORS, HOME_HIGHLIGHTS, INTROVERT_TRAITS, KEY_DIFFERENCES, Section,
};

/// 预测页的提交结果
#[derive(Debug, Clone)]
pub enum Outcome {
    Predicted(Prediction),
    Failed(String),
}

/// 渲染上下文
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub page_title: &'a str,
    /// 预测表单当前取值
    pub form: FeatureRecord,
    pub outcome: Option<Outcome>,
}

impl<'a> PageContext<'a> {
    pub fn new(page_title: &'a str) -> Self {
        Self {
            page_title,
            form: FeatureRecord::default(),
            outcome: None,
        }
    }

    pub fn with_form(mut self, form: FeatureRecord) -> Self {
        self.form = form;
        self
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }
}

/// 渲染指定导航目标的完整页面
pub fn render_section(section: Section, ctx: &PageContext<'_>) -> String {
    let body = match section {
        Section::Home => render_home(),
        Section::Types => render_types(),
        Section::Factors => render_factors(),
        Section::Predictor => render_predictor(ctx),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🧠</text></svg>">
    <link rel="stylesheet" href="/assets/style.css">
</head>
<body>
    <div class="layout">
        {sidebar}
        <main class="content">
            <h1>{heading}</h1>
            {body}
            {footer}
        </main>
    </div>
</body>
</html>
"#,
        title = escape_html(ctx.page_title),
        sidebar = render_sidebar(section, ctx.page_title),
        heading = section.title(),
        body = body,
        footer = render_footer(),
    )
}

fn render_sidebar(active: Section, page_title: &str) -> String {
    let items: String = Section::ALL
        .iter()
        .map(|section| {
            let (class, marker) = if *section == active {
                ("nav-item active", "◉")
            } else {
                ("nav-item", "○")
            };
            format!(
                r#"<li><a class="{class}" href="/?section={slug}"><span class="radio">{marker}</span> {label}</a></li>"#,
                slug = section.slug(),
                label = section.label(),
            )
        })
        .collect();

    format!(
        r#"<nav class="sidebar">
            <h2>🌐 {title}</h2>
            <p class="nav-caption">Navigation</p>
            <ul>{items}</ul>
        </nav>"#,
        title = escape_html(page_title),
    )
}

fn render_footer() -> &'static str {
    r#"<hr>
            <footer><strong>SocialLens – AI Powered Personality Detection</strong> 🚀</footer>"#
}

fn render_home() -> String {
    let highlights: String = HOME_HIGHLIGHTS
        .iter()
        .map(|item| format!("<li>🔹 {}</li>", item))
        .collect();

    format!(
        r#"<p><strong>SocialLens</strong> is a smart personality analysis system that helps you understand whether you lean more toward being an <strong>introvert</strong> or an <strong>extrovert</strong> using artificial intelligence.</p>
            <ul class="plain">{highlights}</ul>
            <hr>
            <h3>🎯 Project Goal</h3>
            <p>To combine <strong>data science, machine learning, and psychology</strong> into an interactive platform that helps users understand themselves better.</p>"#
    )
}

fn bullet_list(items: &[&str]) -> String {
    let items: String = items.iter().map(|item| format!("<li>{}</li>", item)).collect();
    format!("<ul>{}</ul>", items)
}

fn render_types() -> String {
    let rows: String = KEY_DIFFERENCES
        .iter()
        .enumerate()
        .map(|(i, (introvert, extrovert))| {
            format!(
                "<tr><th>{}</th><td>{}</td><td>{}</td></tr>",
                i, introvert, extrovert
            )
        })
        .collect();

    format!(
        r#"<div class="columns">
                <section><h2>🔵 Introvert</h2>{introvert}</section>
                <section><h2>🟠 Extrovert</h2>{extrovert}</section>
            </div>
            <hr>
            <h2>✅ Key Differences</h2>
            <table>
                <thead><tr><th></th><th>Introvert</th><th>Extrovert</th></tr></thead>
                <tbody>{rows}</tbody>
            </table>"#,
        introvert = bullet_list(&INTROVERT_TRAITS),
        extrovert = bullet_list(&EXTROVERT_TRAITS),
    )
}

fn render_factors() -> String {
    FACTORS
        .iter()
        .enumerate()
        .map(|(i, (icon, title, text))| {
            format!(
                "<h3>{icon} {n}. {title}</h3>\n            <p>{text}</p>\n            ",
                n = i + 1
            )
        })
        .collect()
}

fn render_predictor(ctx: &PageContext<'_>) -> String {
    let sliders: String = SLIDERS
        .iter()
        .zip(ctx.form.numeric_values())
        .map(|(spec, value)| {
            format!(
                r#"<label for="{field}">{label}</label>
                <div class="slider">
                    <input type="range" id="{field}" name="{field}" min="{min}" max="{max}" step="1" value="{value}" oninput="this.nextElementSibling.value = this.value">
                    <output>{value}</output>
                </div>
                "#,
                field = spec.field,
                label = spec.label,
                min = spec.min,
                max = spec.max,
            )
        })
        .collect();

    let selectors: String = SELECTORS
        .iter()
        .zip(ctx.form.selector_values())
        .map(|((field, label), current)| {
            let options: String = YesNo::ALL
                .iter()
                .map(|option| {
                    let selected = if *option == current { " selected" } else { "" };
                    format!(
                        r#"<option value="{v}"{selected}>{v}</option>"#,
                        v = option.as_str()
                    )
                })
                .collect();
            format!(
                r#"<label for="{field}">{label}</label>
                <select id="{field}" name="{field}">{options}</select>
                "#
            )
        })
        .collect();

    let outcome = match &ctx.outcome {
        None => String::new(),
        Some(Outcome::Predicted(prediction)) => {
            let personality = prediction.personality;
            format!(
                r#"<hr>
            <div class="alert success">{} You are predicted to be an <strong>{}</strong></div>"#,
                personality.emoji(),
                personality.headline()
            )
        }
        Some(Outcome::Failed(message)) => format!(
            r#"<hr>
            <div class="alert error">⚠️ {}</div>"#,
            escape_html(message)
        ),
    };

    format!(
        r#"<p>Enter your data and let <strong>SocialLens AI</strong> predict your personality type.</p>
            <h2>📥 User Input</h2>
            <form method="post" action="/predict" class="predictor">
                {sliders}{selectors}<button type="submit">🔍 Predict Personality</button>
            </form>
            {outcome}"#
    )
}

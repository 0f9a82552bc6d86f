//! 页面模块
//!
//! 导航目标、静态内容与 HTML 渲染

pub mod content;
pub mod render;

pub use content::Section;
pub use render::{Outcome, PageContext, render_section};

//! 应用共享状态与中间件

use std::sync::Arc;

use crate::classifier::Classifier;

/// 应用共享状态
///
/// 模型在启动时加载一次，之后只读共享，无需加锁
#[derive(Clone)]
pub struct AppState {
    /// 预训练分类器
    pub classifier: Arc<dyn Classifier>,
    /// 页面标题
    pub page_title: Arc<str>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(classifier: Arc<dyn Classifier>, page_title: impl Into<Arc<str>>) -> Self {
        Self {
            classifier,
            page_title: page_title.into(),
        }
    }
}

/// CORS 中间件层
///
/// 允许任何来源访问 JSON API
pub fn cors_layer() -> tower_http::cors::CorsLayer {
    use tower_http::cors::{Any, CorsLayer};

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

//! 路由配置

use axum::{
    Router,
    routing::{get, post},
};

use super::assets::serve_asset;
use super::handlers::{health, index, model_info, not_found, predict_api, predict_form};
use super::middleware::{AppState, cors_layer};

/// 创建应用路由
///
/// # 端点
/// - `GET /?section=<home|types|factors|predictor>` - 渲染导航目标
/// - `POST /predict` - 表单预测，返回预测页
/// - `POST /api/predict` - JSON 预测
/// - `GET /api/model` - 模型元数据
/// - `GET /health` - 健康检查
/// - `GET /assets/{*path}` - 内嵌静态文件
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict_form))
        .route("/api/predict", post(predict_api))
        .route("/api/model", get(model_info))
        .route("/health", get(health))
        .route("/assets/{*path}", get(serve_asset))
        .fallback(not_found)
        .layer(cors_layer())
        .with_state(state)
}

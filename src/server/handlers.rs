//! HTTP 处理器

use std::time::Instant;

use axum::{
    Form, Json,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use uuid::Uuid;

use crate::pages::{Outcome, PageContext, Section, render_section};
use crate::prediction::{FeatureRecord, PredictError, Prediction, predict_one};

use super::middleware::AppState;
use super::types::{ErrorResponse, HealthResponse, PredictResponse, SectionQuery};

/// 调用模型并记录日志
fn run_prediction(state: &AppState, record: &FeatureRecord) -> (Uuid, Result<Prediction, PredictError>) {
    let request_id = Uuid::new_v4();
    let started = Instant::now();
    let result = predict_one(state.classifier.as_ref(), record);
    let elapsed_us = started.elapsed().as_micros() as u64;

    match &result {
        Ok(prediction) => tracing::info!(
            request_id = %request_id,
            label = %prediction.label,
            personality = ?prediction.personality,
            elapsed_us,
            "预测完成"
        ),
        Err(e) if matches!(e, PredictError::OutOfRange { .. }) => {
            tracing::warn!(request_id = %request_id, "拒绝预测请求: {}", e)
        }
        Err(e) => tracing::error!(request_id = %request_id, "预测失败: {}", e),
    }

    (request_id, result)
}

/// GET /
/// 按 `section` 参数渲染导航目标
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<SectionQuery>,
) -> Html<String> {
    let section = Section::from_slug(query.section.as_deref());
    Html(render_section(section, &PageContext::new(&state.page_title)))
}

/// POST /predict
/// 表单提交，重新渲染预测页并附带结果
pub async fn predict_form(
    State(state): State<AppState>,
    Form(record): Form<FeatureRecord>,
) -> Response {
    let ctx = PageContext::new(&state.page_title).with_form(record);

    match run_prediction(&state, &record) {
        (_, Ok(prediction)) => Html(render_section(
            Section::Predictor,
            &ctx.with_outcome(Outcome::Predicted(prediction)),
        ))
        .into_response(),
        (_, Err(e)) => {
            let status = e.status_code();
            let page = render_section(
                Section::Predictor,
                &ctx.with_outcome(Outcome::Failed(e.to_string())),
            );
            (status, Html(page)).into_response()
        }
    }
}

/// POST /api/predict
pub async fn predict_api(
    State(state): State<AppState>,
    Json(record): Json<FeatureRecord>,
) -> Response {
    match run_prediction(&state, &record) {
        (request_id, Ok(prediction)) => Json(PredictResponse {
            request_id: request_id.to_string(),
            message: prediction.personality.message(),
            label: prediction.label,
            personality: prediction.personality,
            predicted_at: chrono::Utc::now().to_rfc3339(),
        })
        .into_response(),
        (_, Err(e)) => (e.status_code(), Json(e.into_response())).into_response(),
    }
}

/// GET /api/model
/// 获取已加载模型的元数据
pub async fn model_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.classifier.info().clone())
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// 未匹配的路由
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(format!("未找到: {}", uri.path()))),
    )
}

//! HTTP 请求/响应类型

use serde::{Deserialize, Serialize};

use crate::prediction::Personality;

/// GET / 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct SectionQuery {
    pub section: Option<String>,
}

/// POST /api/predict 响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub request_id: String,
    /// 模型返回的原始标签
    pub label: String,
    pub personality: Personality,
    pub message: String,
    /// 预测时间（RFC3339 格式）
    pub predicted_at: String,
}

/// GET /health 响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                error_type: error_type.into(),
                message: message.into(),
            },
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }
}

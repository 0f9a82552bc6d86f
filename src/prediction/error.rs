//! 预测错误类型

use std::fmt;

use axum::http::StatusCode;

use crate::server::types::ErrorResponse;

/// 预测请求错误
#[derive(Debug)]
pub enum PredictError {
    /// 数值字段超出滑块范围
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    /// 模型没有返回任何预测结果
    EmptyOutput,
    /// 模型推理失败
    Model(anyhow::Error),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{} 的取值 {} 超出范围 [{}, {}]", field, value, min, max),
            PredictError::EmptyOutput => write!(f, "模型未返回预测结果"),
            PredictError::Model(e) => write!(f, "模型推理失败: {:#}", e),
        }
    }
}

impl std::error::Error for PredictError {}

impl PredictError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            PredictError::OutOfRange { .. } => StatusCode::BAD_REQUEST,
            PredictError::EmptyOutput | PredictError::Model(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            PredictError::OutOfRange { .. } => "invalid_request_error",
            PredictError::EmptyOutput => "malformed_prediction",
            PredictError::Model(_) => "model_error",
        }
    }

    /// 转换为 JSON 错误响应体
    pub fn into_response(self) -> ErrorResponse {
        ErrorResponse::new(self.error_type(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let out_of_range = PredictError::OutOfRange {
            field: "friends",
            value: 51,
            min: 0,
            max: 50,
        };
        assert_eq!(out_of_range.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            PredictError::EmptyOutput.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            PredictError::Model(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_carries_type_and_message() {
        let response = PredictError::OutOfRange {
            field: "friends",
            value: 51,
            min: 0,
            max: 50,
        }
        .into_response();
        assert_eq!(response.error.error_type, "invalid_request_error");
        assert_eq!(response.error.message, "friends 的取值 51 超出范围 [0, 50]");
    }
}

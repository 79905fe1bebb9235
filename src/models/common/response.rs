//! 统一的 API 响应信封
//!
//! 所有端点（包括中间件与参数错误处理器产生的响应）都返回同一结构：
//! 业务码 `code`（见 [`ErrorCode`]）、给前端展示的 `message`、可选的
//! `data` 载荷与服务端时间戳。HTTP 状态码表达传输层语义，`code`
//! 表达业务层语义，两者各自独立。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    // data 为 None 时整个字段不出现在 JSON 中
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

// 无载荷的快捷构造。裸调用 `ApiResponse::error_empty(..)` 会推断到
// 这个 `()` 特化上
impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_carries_code_zero_and_data() {
        let response = ApiResponse::success(vec!["CS101_A".to_string()], "ok");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], 0);
        assert_eq!(json["data"][0], "CS101_A");
        assert_eq!(json["message"], "ok");
    }

    #[test]
    fn test_empty_error_envelope_omits_data_field() {
        let response = ApiResponse::error_empty(ErrorCode::FormNotFound, "no such form");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], ErrorCode::FormNotFound as i32);
        assert!(json.get("data").is_none());
    }
}

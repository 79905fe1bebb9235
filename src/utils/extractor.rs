//! 类型安全的路径参数提取器
//!
//! 路径参数解析失败时返回统一的 ApiResponse 400，而不是框架默认的纯文本。

use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};
use futures_util::future::{Ready, ready};
use std::str::FromStr;

use crate::models::escalations::entities::EscalationStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_form_name;

fn bad_request(code: ErrorCode, message: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(code, message));
    InternalError::from_response(message.to_string(), response).into()
}

fn first_path_param(req: &HttpRequest) -> Option<String> {
    req.match_info().iter().next().map(|(_, v)| v.to_string())
}

fn named_path_param(req: &HttpRequest, name: &str) -> Option<String> {
    req.match_info().get(name).map(|v| v.to_string())
}

/// 第一个路径参数解析为正整数 ID
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = first_path_param(req)
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(SafeIDI64)
            .ok_or_else(|| bad_request(ErrorCode::BadRequest, "ID must be a positive integer"));

        ready(result)
    }
}

/// 路径中的表单名，格式校验后提取
pub struct SafeFormName(pub String);

impl FromRequest for SafeFormName {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = named_path_param(req, "feedbackFormName").or_else(|| first_path_param(req));

        let result = match raw {
            Some(name) if validate_form_name(&name).is_ok() => Ok(SafeFormName(name)),
            _ => Err(bad_request(
                ErrorCode::FormNameInvalid,
                "Form name must match SUBJECTCODE_SECTION",
            )),
        };

        ready(result)
    }
}

/// 路径中的裁决状态，仅接受 accepted / rejected
pub struct SafeEscalationStatus(pub EscalationStatus);

impl FromRequest for SafeEscalationStatus {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = named_path_param(req, "status")
            .and_then(|raw| EscalationStatus::from_str(&raw).ok())
            .filter(|status| *status != EscalationStatus::Pending)
            .map(SafeEscalationStatus)
            .ok_or_else(|| {
                bad_request(
                    ErrorCode::EscalationStatusInvalid,
                    "Status must be 'accepted' or 'rejected'",
                )
            });

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_safe_id_accepts_positive_integer() {
        let req = TestRequest::default()
            .param("studentId", "42")
            .to_http_request();
        let id = SafeIDI64::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(id.0, 42);
    }

    #[actix_web::test]
    async fn test_safe_id_rejects_zero_and_garbage() {
        for raw in ["0", "-1", "abc"] {
            let req = TestRequest::default()
                .param("studentId", raw)
                .to_http_request();
            assert!(SafeIDI64::from_request(&req, &mut Payload::None)
                .await
                .is_err());
        }
    }

    #[actix_web::test]
    async fn test_safe_form_name_validates_format() {
        let req = TestRequest::default()
            .param("feedbackFormName", "CS101_A")
            .to_http_request();
        let name = SafeFormName::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(name.0, "CS101_A");

        let req = TestRequest::default()
            .param("feedbackFormName", "cs101-a")
            .to_http_request();
        assert!(SafeFormName::from_request(&req, &mut Payload::None)
            .await
            .is_err());
    }

    #[actix_web::test]
    async fn test_escalation_status_excludes_pending() {
        let req = TestRequest::default()
            .param("status", "accepted")
            .to_http_request();
        let status = SafeEscalationStatus::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(status.0, EscalationStatus::Accepted);

        for raw in ["pending", "approved", ""] {
            let req = TestRequest::default().param("status", raw).to_http_request();
            assert!(
                SafeEscalationStatus::from_request(&req, &mut Payload::None)
                    .await
                    .is_err()
            );
        }
    }
}

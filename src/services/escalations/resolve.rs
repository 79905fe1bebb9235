//! 升级请求裁决服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EscalationService;
use crate::models::escalations::entities::EscalationStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 管理员裁决升级请求
///
/// 只允许 pending -> accepted/rejected。并发裁决由条件更新兜底，
/// 先到者生效，后到者收到 409。
pub async fn resolve(
    service: &EscalationService,
    contact_id: i64,
    status: EscalationStatus,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if status == EscalationStatus::Pending {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EscalationStatusInvalid,
            "Target status must be accepted or rejected",
        )));
    }

    let existing = match storage.get_contact_by_id(contact_id).await {
        Ok(Some(contact)) => contact,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EscalationNotFound,
                format!("Escalation not found: {contact_id}"),
            )));
        }
        Err(e) => {
            error!("查询升级请求失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询失败: {e}"),
                )),
            );
        }
    };

    if existing.status != EscalationStatus::Pending {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::EscalationStatusInvalid,
            format!("Escalation already resolved as {}", existing.status),
        )));
    }

    match storage.resolve_contact(contact_id, status).await {
        Ok(Some(contact)) => {
            info!("升级请求 {} 已裁决为 {}", contact_id, contact.status);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(contact, "Escalation resolved successfully")))
        }
        // 检查与更新之间被并发裁决
        Ok(None) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::EscalationStatusInvalid,
            "Escalation already resolved",
        ))),
        Err(e) => {
            error!("裁决升级请求失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新失败: {e}"),
                )),
            )
        }
    }
}

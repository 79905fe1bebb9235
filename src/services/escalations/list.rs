//! 升级请求列表服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EscalationService;
use crate::models::escalations::entities::EscalationStatus;
use crate::models::escalations::requests::ContactListParams;
use crate::models::{ApiResponse, ErrorCode};

/// 管理员查看升级请求
///
/// 不带 status 参数时只返回待处理的请求。
pub async fn list_queries(
    service: &EscalationService,
    params: ContactListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let status = Some(params.status.unwrap_or(EscalationStatus::Pending));

    match storage.list_contacts(status).await {
        Ok(contacts) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            contacts,
            "Escalations retrieved successfully",
        ))),
        Err(e) => {
            error!("查询升级请求失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询失败: {e}"),
                )),
            )
        }
    }
}

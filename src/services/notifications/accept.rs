//! 通知已读服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NotificationService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 标记通知已读
///
/// 学生只能操作自己的通知。重复标记幂等返回成功。
pub async fn accept(
    service: &NotificationService,
    notification_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_auth_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let notification = match storage.get_notification_by_id(notification_id).await {
        Ok(Some(notification)) => notification,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotificationNotFound,
                format!("Notification not found: {notification_id}"),
            )));
        }
        Err(e) => {
            error!("查询通知失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询失败: {e}"),
                )),
            );
        }
    };

    if user.role == UserRole::Student && user.id != notification.student_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Students can only accept their own notifications",
        )));
    }

    match storage.accept_notification(notification_id).await {
        Ok(Some(notification)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            notification,
            "Notification accepted successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            format!("Notification not found: {notification_id}"),
        ))),
        Err(e) => {
            error!("标记通知失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新失败: {e}"),
                )),
            )
        }
    }
}

//! 升级请求创建服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EscalationService;
use crate::middlewares::RequireJWT;
use crate::models::escalations::requests::ContactAdminRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 教授把某条学生回答提交给管理员
///
/// 发起人取自认证主体，不信任请求体。理由不能为空。
pub async fn contact_admin(
    service: &EscalationService,
    body: ContactAdminRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_auth_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    if body.reason.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Reason must not be empty",
        )));
    }

    match storage.get_student_by_id(body.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                format!("Student not found: {}", body.student_id),
            )));
        }
        Err(e) => {
            error!("查询学生失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询失败: {e}"),
                )),
            );
        }
    }

    match storage.create_contact(user.id, body).await {
        Ok(contact) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(contact, "Escalation submitted successfully"))),
        Err(e) => {
            error!("创建升级请求失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("提交失败: {e}"),
                )),
            )
        }
    }
}

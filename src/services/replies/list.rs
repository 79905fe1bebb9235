//! 回复列表服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReplyService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 查询某学生收到的回复
///
/// 学生只能查自己。
pub async fn list_for_student(
    service: &ReplyService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_auth_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    if user.role == UserRole::Student && user.id != student_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Students can only view their own replies",
        )));
    }

    match storage.list_replies_by_student(student_id).await {
        Ok(replies) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(replies, "Replies retrieved successfully"))),
        Err(e) => {
            error!("查询回复失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询失败: {e}"),
                )),
            )
        }
    }
}

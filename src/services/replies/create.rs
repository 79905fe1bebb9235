//! 回复提交服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReplyService;
use crate::models::replies::requests::SubmitReplyRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 教授回复某名学生的单条回答
///
/// 目标学生必须存在，回复内容不能为空。
pub async fn submit_reply(
    service: &ReplyService,
    body: SubmitReplyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if body.reply.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Reply text must not be empty",
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

    match storage.create_reply(body).await {
        Ok(reply) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(reply, "Reply submitted successfully"))),
        Err(e) => {
            error!("创建回复失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("提交失败: {e}"),
                )),
            )
        }
    }
}

//! 表单更新服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FormService;
use crate::models::forms::requests::UpdateFeedbackFormRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_questions;

/// 更新表单的问题或时间窗口
///
/// name 不可变。时间窗口校验基于合并后的值，未提供的字段沿用现值。
pub async fn update_form(
    service: &FormService,
    name: &str,
    body: UpdateFeedbackFormRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let existing = match storage.get_form_by_name(name).await {
        Ok(Some(form)) => form,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FormNotFound,
                format!("Form not found: {name}"),
            )));
        }
        Err(e) => {
            error!("查询表单失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询失败: {e}"),
                )),
            );
        }
    };

    let merged_start = body.start_time.unwrap_or(existing.start_time);
    let merged_deadline = body.deadline.unwrap_or(existing.deadline);
    if merged_start >= merged_deadline {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FormWindowInvalid,
            "start_time must be earlier than deadline",
        )));
    }

    if let Some(questions) = &body.questions {
        if let Err(msg) = validate_questions(questions) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::QuestionInvalid, msg)));
        }
    }

    match storage
        .update_form(
            name,
            body.questions.as_deref(),
            body.start_time,
            body.deadline,
        )
        .await
    {
        Ok(Some(form)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(form, "Form updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FormNotFound,
            format!("Form not found: {name}"),
        ))),
        Err(e) => {
            error!("更新表单失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新失败: {e}"),
                )),
            )
        }
    }
}

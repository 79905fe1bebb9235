//! 反馈提交服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use tracing::error;

use super::ResponseService;
use crate::middlewares::RequireJWT;
use crate::models::responses::requests::SubmitFeedbackRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 提交反馈
///
/// 仅学生本人可提交，窗口由服务器按当前时刻判定。
/// 重复提交由唯一索引拦截，返回 409。
pub async fn submit_feedback(
    service: &ResponseService,
    body: SubmitFeedbackRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_auth_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    if user.role != UserRole::Student || user.id != body.student_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Students can only submit their own feedback",
        )));
    }

    let form = match storage.get_form_by_name(&body.name).await {
        Ok(Some(form)) => form,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FormNotFound,
                format!("Form not found: {}", body.name),
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

    if !form.is_open_at(Utc::now()) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::FormNotActive,
            format!("Form is not accepting submissions: {}", form.name),
        )));
    }

    if body.answers.len() != form.questions.len() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AnswerCountMismatch,
            format!(
                "Expected {} answers, got {}",
                form.questions.len(),
                body.answers.len()
            ),
        )));
    }

    match storage
        .submit_response(&form.name, body.student_id, &body.answers)
        .await
    {
        Ok(Some(response)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(response, "Feedback submitted successfully"))),
        Ok(None) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AlreadySubmitted,
            format!("Feedback already submitted for form: {}", form.name),
        ))),
        Err(e) => {
            error!("提交反馈失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("提交失败: {e}"),
                )),
            )
        }
    }
}

//! 表单创建服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::FormService;
use crate::models::forms::requests::CreateFeedbackFormRequest;
use crate::models::forms::responses::CreateFormResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_form_name, validate_questions};

/// 创建反馈表单
///
/// 校验通过后写入表单，并为全体学生各插入一条未读通知。
pub async fn create_form(
    service: &FormService,
    body: CreateFeedbackFormRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_form_name(&body.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FormNameInvalid, msg)));
    }

    if body.start_time >= body.deadline {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FormWindowInvalid,
            "start_time must be earlier than deadline",
        )));
    }

    if let Err(msg) = validate_questions(&body.questions) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::QuestionInvalid, msg)));
    }

    // 表单名唯一
    match storage.get_form_by_name(&body.name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::FormAlreadyExists,
                format!("Form already exists: {}", body.name),
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("查询表单失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询失败: {e}"),
                )),
            );
        }
    }

    let form = match storage
        .create_form(&body.name, &body.questions, body.start_time, body.deadline)
        .await
    {
        Ok(form) => form,
        Err(e) => {
            error!("创建表单失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建失败: {e}"),
                )),
            );
        }
    };

    // 通知扇出。失败不回滚表单，记录日志后按 0 返回
    let notified_students = match storage.list_student_ids().await {
        Ok(ids) => match storage.notify_students(&form.name, &ids).await {
            Ok(count) => count,
            Err(e) => {
                error!("通知扇出失败: {}", e);
                0
            }
        },
        Err(e) => {
            error!("查询学生列表失败: {}", e);
            0
        }
    };

    info!(
        "表单 {} 已创建，通知 {} 名学生",
        form.name, notified_students
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CreateFormResponse {
            form,
            notified_students,
        },
        "Form created successfully",
    )))
}

//! 提交状态查询服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ResponseService;
use crate::middlewares::RequireJWT;
use crate::models::responses::requests::SubmissionStatusParams;
use crate::models::responses::responses::SubmissionStatusResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 查询某学生对某表单是否已提交
///
/// 学生只能查自己。
pub async fn submission_status(
    service: &ResponseService,
    params: SubmissionStatusParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_auth_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    if user.role == UserRole::Student && user.id != params.student_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PermissionDenied,
            "Students can only check their own submission status",
        )));
    }

    match storage
        .get_response(&params.form_name, params.student_id)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubmissionStatusResponse {
                submitted: response.is_some(),
            },
            "Submission status retrieved successfully",
        ))),
        Err(e) => {
            error!("查询提交状态失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询失败: {e}"),
                )),
            )
        }
    }
}

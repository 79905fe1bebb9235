//! 回答聚合服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ResponseService;
use crate::models::responses::responses::{ResponseAggregate, StudentAnswers};
use crate::models::{ApiResponse, ErrorCode};

/// 按表单聚合全部学生回答
///
/// 表单已删除时仍可聚合遗留回答，空表单返回空列表。
pub async fn aggregate_responses(
    service: &ResponseService,
    form_name: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_responses_by_form(form_name).await {
        Ok(responses) => {
            let aggregate = ResponseAggregate {
                form_name: form_name.to_string(),
                responses: responses
                    .into_iter()
                    .map(|r| StudentAnswers {
                        student_id: r.student_id,
                        answers: r.answers,
                    })
                    .collect(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                aggregate,
                "Responses retrieved successfully",
            )))
        }
        Err(e) => {
            error!("聚合回答失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询失败: {e}"),
                )),
            )
        }
    }
}

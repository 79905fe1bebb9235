//! 表单详情服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use tracing::error;

use super::FormService;
use crate::models::forms::responses::FormWithState;
use crate::models::{ApiResponse, ErrorCode};

/// 按名取单个表单
///
/// 窗口外的表单同样可见，状态字段标明 scheduled/active/closed。
pub async fn get_form(
    service: &FormService,
    name: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_form_by_name(name).await {
        Ok(Some(form)) => {
            let state = form.state_at(Utc::now());
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                FormWithState { form, state },
                "Form retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FormNotFound,
            format!("Form not found: {name}"),
        ))),
        Err(e) => {
            error!("查询表单失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询失败: {e}"),
                )),
            )
        }
    }
}

//! 表单删除服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::FormService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除表单
///
/// 回答、通知、回复与升级请求按表单名引用，保留不动。
pub async fn delete_form(
    service: &FormService,
    name: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_form(name).await {
        Ok(true) => {
            info!("表单 {} 已删除", name);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::<()>::success_empty("Form deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FormNotFound,
            format!("Form not found: {name}"),
        ))),
        Err(e) => {
            error!("删除表单失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("删除失败: {e}"),
                )),
            )
        }
    }
}

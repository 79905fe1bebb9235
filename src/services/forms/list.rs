//! 表单列表服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use tracing::error;

use super::FormService;
use crate::models::forms::requests::{FormListParams, FormListQuery};
use crate::models::forms::responses::{FormListResponse, FormWithState};
use crate::models::{ApiResponse, ErrorCode};

/// 分页列出表单
///
/// 状态按当前时刻计算，不落库。
pub async fn list_forms(
    service: &FormService,
    params: FormListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = FormListQuery {
        page: params.pagination.page.max(1),
        size: params.pagination.size.clamp(1, 100),
        search: params
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    };

    match storage.list_forms(query).await {
        Ok((forms, pagination)) => {
            let now = Utc::now();
            let items: Vec<FormWithState> = forms
                .into_iter()
                .map(|form| {
                    let state = form.state_at(now);
                    FormWithState { form, state }
                })
                .collect();

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                FormListResponse { items, pagination },
                "Forms retrieved successfully",
            )))
        }
        Err(e) => {
            error!("查询表单列表失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询失败: {e}"),
                )),
            )
        }
    }
}

pub mod aggregate;
pub mod status;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::models::responses::requests::{SubmissionStatusParams, SubmitFeedbackRequest};
use crate::storage::Storage;

pub struct ResponseService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResponseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 学生提交反馈，窗口内一人一次
    pub async fn submit_feedback(
        &self,
        body: web::Json<SubmitFeedbackRequest>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_feedback(self, body.into_inner(), request).await
    }

    // 按表单聚合全部回答
    pub async fn aggregate_responses(
        &self,
        form_name: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        aggregate::aggregate_responses(self, form_name, request).await
    }

    // 查询某学生对某表单的提交状态
    pub async fn submission_status(
        &self,
        params: web::Query<SubmissionStatusParams>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::submission_status(self, params.into_inner(), request).await
    }
}

pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::models::replies::requests::SubmitReplyRequest;
use crate::storage::Storage;

pub struct ReplyService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReplyService {
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

    // 教授对单条回答的回复
    pub async fn submit_reply(
        &self,
        body: web::Json<SubmitReplyRequest>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::submit_reply(self, body.into_inner(), request).await
    }

    // 学生收到的回复列表
    pub async fn list_for_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_for_student(self, student_id, request).await
    }
}

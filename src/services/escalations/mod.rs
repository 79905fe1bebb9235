pub mod create;
pub mod list;
pub mod resolve;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::models::escalations::entities::EscalationStatus;
use crate::models::escalations::requests::{ContactAdminRequest, ContactListParams};
use crate::storage::Storage;

pub struct EscalationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EscalationService {
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

    // 教授把某条回答升级给管理员
    pub async fn contact_admin(
        &self,
        body: web::Json<ContactAdminRequest>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::contact_admin(self, body.into_inner(), request).await
    }

    // 管理员查看升级请求，缺省只看待处理
    pub async fn list_queries(
        &self,
        params: web::Query<ContactListParams>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_queries(self, params.into_inner(), request).await
    }

    // 管理员裁决，仅允许 pending -> accepted/rejected
    pub async fn resolve(
        &self,
        contact_id: i64,
        status: EscalationStatus,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        resolve::resolve(self, contact_id, status, request).await
    }
}

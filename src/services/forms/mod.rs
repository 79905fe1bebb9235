pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::models::forms::requests::{
    CreateFeedbackFormRequest, FormListParams, UpdateFeedbackFormRequest,
};
use crate::storage::Storage;

pub struct FormService {
    storage: Option<Arc<dyn Storage>>,
}

impl FormService {
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

    // 创建表单并向全体学生扇出通知
    pub async fn create_form(
        &self,
        body: web::Json<CreateFeedbackFormRequest>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_form(self, body.into_inner(), request).await
    }

    // 分页列出表单，附带计算状态
    pub async fn list_forms(
        &self,
        params: web::Query<FormListParams>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_forms(self, params.into_inner(), request).await
    }

    // 按名取单个表单，窗口内外均可见
    pub async fn get_form(
        &self,
        name: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::get_form(self, name, request).await
    }

    // 更新问题或时间窗口，name 不可变
    pub async fn update_form(
        &self,
        name: &str,
        body: web::Json<UpdateFeedbackFormRequest>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_form(self, name, body.into_inner(), request).await
    }

    // 删除表单，既有回答与通知保留
    pub async fn delete_form(
        &self,
        name: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_form(self, name, request).await
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::forms::requests::{
    CreateFeedbackFormRequest, FormListParams, UpdateFeedbackFormRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FormService;
use crate::utils::SafeFormName;

// 懒加载的全局 FormService 实例
static FORM_SERVICE: Lazy<FormService> = Lazy::new(FormService::new_lazy);

pub async fn create_form(
    req: HttpRequest,
    form_data: web::Json<CreateFeedbackFormRequest>,
) -> ActixResult<HttpResponse> {
    FORM_SERVICE.create_form(form_data, &req).await
}

pub async fn list_forms(
    req: HttpRequest,
    params: web::Query<FormListParams>,
) -> ActixResult<HttpResponse> {
    FORM_SERVICE.list_forms(params, &req).await
}

pub async fn get_form(req: HttpRequest, name: SafeFormName) -> ActixResult<HttpResponse> {
    FORM_SERVICE.get_form(&name.0, &req).await
}

pub async fn update_form(
    req: HttpRequest,
    name: SafeFormName,
    update_data: web::Json<UpdateFeedbackFormRequest>,
) -> ActixResult<HttpResponse> {
    FORM_SERVICE.update_form(&name.0, update_data, &req).await
}

pub async fn delete_form(req: HttpRequest, name: SafeFormName) -> ActixResult<HttpResponse> {
    FORM_SERVICE.delete_form(&name.0, &req).await
}

// 配置路由。资源注册在 main 的 /api/v1 scope 下，逐资源挂 JWT
pub fn configure_form_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/createFeedbackForm")
            .wrap(middlewares::RequireJWT)
            .route(
                web::post()
                    .to(create_form)
                    // 仅管理员可创建表单
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    )
    .service(
        // 任何已认证用户可浏览表单列表与详情
        web::resource("/getFeedbackForms")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(list_forms)),
    )
    .service(
        web::resource("/feedback/{feedbackFormName}")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(get_form)),
    )
    .service(
        web::resource("/updateFeedbackForm/{feedbackFormName}")
            .wrap(middlewares::RequireJWT)
            .route(
                web::put()
                    .to(update_form)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    )
    .service(
        web::resource("/deleteFeedbackForm/{feedbackFormName}")
            .wrap(middlewares::RequireJWT)
            .route(
                web::delete()
                    .to(delete_form)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    );
}

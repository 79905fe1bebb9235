use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::escalations::requests::{ContactAdminRequest, ContactListParams};
use crate::models::users::entities::UserRole;
use crate::services::EscalationService;
use crate::utils::{SafeEscalationStatus, SafeIDI64};

// 懒加载的全局 EscalationService 实例
static ESCALATION_SERVICE: Lazy<EscalationService> = Lazy::new(EscalationService::new_lazy);

pub async fn contact_admin(
    req: HttpRequest,
    body: web::Json<ContactAdminRequest>,
) -> ActixResult<HttpResponse> {
    ESCALATION_SERVICE.contact_admin(body, &req).await
}

pub async fn professor_queries(
    req: HttpRequest,
    params: web::Query<ContactListParams>,
) -> ActixResult<HttpResponse> {
    ESCALATION_SERVICE.list_queries(params, &req).await
}

pub async fn resolve_query(
    req: HttpRequest,
    request_id: SafeIDI64,
    status: SafeEscalationStatus,
) -> ActixResult<HttpResponse> {
    ESCALATION_SERVICE.resolve(request_id.0, status.0, &req).await
}

// 配置路由。资源注册在 main 的 /api/v1 scope 下，逐资源挂 JWT
pub fn configure_escalation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contactAdmin")
            .wrap(middlewares::RequireJWT)
            .route(
                web::post()
                    .to(contact_admin)
                    // 教授发起升级请求
                    .wrap(middlewares::RequireRole::new_any(
                        UserRole::professor_roles(),
                    )),
            ),
    )
    .service(
        web::resource("/professorQueries")
            .wrap(middlewares::RequireJWT)
            .route(
                web::get()
                    .to(professor_queries)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    )
    .service(
        web::resource("/professorQueries/{requestId}/{status}")
            .wrap(middlewares::RequireJWT)
            .route(
                web::put()
                    .to(resolve_query)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    );
}

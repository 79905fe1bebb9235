use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::UserService;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn register_students(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    USER_SERVICE.import_students(payload, &req).await
}

pub async fn register_professors(
    req: HttpRequest,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.import_professors(payload, &req).await
}

// 配置路由。资源注册在 main 的 /api/v1 scope 下，逐资源挂 JWT
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/registerUser")
            .wrap(middlewares::RequireJWT)
            .route(
                web::post()
                    .to(register_students)
                    // 仅管理员可批量导入学生
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RateLimit::import()),
            ),
    )
    .service(
        web::resource("/registerProfessors")
            .wrap(middlewares::RequireJWT)
            .route(
                web::post()
                    .to(register_professors)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RateLimit::import()),
            ),
    );
}

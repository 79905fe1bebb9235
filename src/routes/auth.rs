use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::LoginRequest;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    user_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(user_data.into_inner(), &req).await
}

pub async fn refresh_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&request).await
}

pub async fn logout(_request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout().await
}

pub async fn profile(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.profile(&request).await
}

// 配置路由。所有模块共享 main 中唯一的 /api/v1 scope，
// 这里只注册相对路径的资源
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .route(web::post().to(login).wrap(middlewares::RateLimit::login())),
    )
    .service(
        web::resource("/auth/refresh").route(
            web::post()
                .to(refresh_token)
                .wrap(middlewares::RateLimit::refresh_token()),
        ),
    )
    .service(web::resource("/logout").route(web::post().to(logout)))
    .service(
        web::resource("/profile")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(profile)),
    );
}

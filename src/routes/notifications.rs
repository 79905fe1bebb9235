use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::NotificationService;
use crate::utils::SafeIDI64;

// 懒加载的全局 NotificationService 实例
static NOTIFICATION_SERVICE: Lazy<NotificationService> = Lazy::new(NotificationService::new_lazy);

pub async fn get_notifications(
    req: HttpRequest,
    student_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.list_for_student(student_id.0, &req).await
}

pub async fn accept_notification(
    req: HttpRequest,
    notification_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.accept(notification_id.0, &req).await
}

// 配置路由。资源注册在 main 的 /api/v1 scope 下，逐资源挂 JWT
pub fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // 归属校验在服务层
        web::resource("/getNotifications/{studentId}")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(get_notifications)),
    )
    .service(
        web::resource("/acceptNotification/{id}")
            .wrap(middlewares::RequireJWT)
            .route(web::put().to(accept_notification)),
    );
}

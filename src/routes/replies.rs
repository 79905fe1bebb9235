use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::replies::requests::SubmitReplyRequest;
use crate::models::users::entities::UserRole;
use crate::services::ReplyService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ReplyService 实例
static REPLY_SERVICE: Lazy<ReplyService> = Lazy::new(ReplyService::new_lazy);

pub async fn submit_reply(
    req: HttpRequest,
    body: web::Json<SubmitReplyRequest>,
) -> ActixResult<HttpResponse> {
    REPLY_SERVICE.submit_reply(body, &req).await
}

pub async fn get_replies(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REPLY_SERVICE.list_for_student(student_id.0, &req).await
}

// 配置路由。资源注册在 main 的 /api/v1 scope 下，逐资源挂 JWT
pub fn configure_reply_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/submitReply")
            .wrap(middlewares::RequireJWT)
            .route(
                web::post()
                    .to(submit_reply)
                    // 教授与管理员可回复
                    .wrap(middlewares::RequireRole::new_any(
                        UserRole::professor_roles(),
                    )),
            ),
    )
    .service(
        // 学生查自己的回复，归属校验在服务层
        web::resource("/getReply/{studentId}")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(get_replies)),
    );
}

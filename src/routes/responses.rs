use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::responses::requests::{SubmissionStatusParams, SubmitFeedbackRequest};
use crate::models::users::entities::UserRole;
use crate::services::ResponseService;
use crate::utils::SafeFormName;

// 懒加载的全局 ResponseService 实例
static RESPONSE_SERVICE: Lazy<ResponseService> = Lazy::new(ResponseService::new_lazy);

pub async fn submit_feedback(
    req: HttpRequest,
    body: web::Json<SubmitFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    RESPONSE_SERVICE.submit_feedback(body, &req).await
}

pub async fn get_feedback_responses(
    req: HttpRequest,
    name: SafeFormName,
) -> ActixResult<HttpResponse> {
    RESPONSE_SERVICE.aggregate_responses(&name.0, &req).await
}

pub async fn check_submission_status(
    req: HttpRequest,
    params: web::Query<SubmissionStatusParams>,
) -> ActixResult<HttpResponse> {
    RESPONSE_SERVICE.submission_status(params, &req).await
}

// 配置路由。资源注册在 main 的 /api/v1 scope 下，逐资源挂 JWT
pub fn configure_response_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/submitFeedback")
            .wrap(middlewares::RequireJWT)
            .route(
                web::post()
                    .to(submit_feedback)
                    // 仅学生本人可提交，本人校验在服务层
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
            ),
    )
    .service(
        web::resource("/getfeedbackResponses/{feedbackFormName}")
            .wrap(middlewares::RequireJWT)
            .route(
                web::get()
                    .to(get_feedback_responses)
                    // 教授与管理员可查看聚合结果
                    .wrap(middlewares::RequireRole::new_any(
                        UserRole::professor_roles(),
                    )),
            ),
    )
    .service(
        web::resource("/checkSubmissionStatus")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(check_submission_status)),
    );
}

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::SubjectService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SubjectService 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn add_subjects(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.import_subjects(payload, &req).await
}

pub async fn assign_subjects(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.assign_subjects(payload, &req).await
}

pub async fn get_subjects(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_for_student(student_id.0, &req).await
}

// 配置路由。资源注册在 main 的 /api/v1 scope 下，逐资源挂 JWT
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/addSubjects")
            .wrap(middlewares::RequireJWT)
            .route(
                web::post()
                    .to(add_subjects)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RateLimit::import()),
            ),
    )
    .service(
        web::resource("/assignSubjects")
            .wrap(middlewares::RequireJWT)
            .route(
                web::post()
                    .to(assign_subjects)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RateLimit::import()),
            ),
    )
    .service(
        // 学生查自己的科目，管理员可查任意学生，归属在服务层校验
        web::resource("/getSubjects/{studentId}")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(get_subjects)),
    );
}

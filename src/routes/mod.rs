use actix_web::web;

pub mod auth;

pub mod users;

pub mod subjects;

pub mod forms;

pub mod responses;

pub mod notifications;

pub mod replies;

pub mod escalations;

pub mod system;

pub use auth::configure_auth_routes;
pub use escalations::configure_escalation_routes;
pub use forms::configure_form_routes;
pub use notifications::configure_notification_routes;
pub use replies::configure_reply_routes;
pub use responses::configure_response_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;

/// 组装唯一的 /api/v1 scope
///
/// actix 的路由按前缀匹配且不回溯：同前缀的多个 scope 只有第一个
/// 会被命中，后注册的全部不可达。因此所有模块共享这一个 scope，
/// 各模块只注册相对路径的资源。
pub fn api_v1_scope() -> actix_web::Scope {
    web::scope("/api/v1")
        .configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_subject_routes)
        .configure(configure_form_routes)
        .configure(configure_response_routes)
        .configure(configure_notification_routes)
        .configure(configure_reply_routes)
        .configure(configure_escalation_routes)
        .configure(configure_system_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppStartTime;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    // 每个模块至少一条路由必须可达。无凭据时 401 说明命中了
    // JWT 保护的资源，404 则说明注册丢失
    #[actix_web::test]
    async fn test_routes_from_every_module_are_reachable() {
        let app = test::init_service(App::new().service(api_v1_scope())).await;

        let protected = [
            test::TestRequest::post().uri("/api/v1/registerUser"),
            test::TestRequest::post().uri("/api/v1/registerProfessors"),
            test::TestRequest::post().uri("/api/v1/addSubjects"),
            test::TestRequest::post().uri("/api/v1/assignSubjects"),
            test::TestRequest::get().uri("/api/v1/getSubjects/1"),
            test::TestRequest::post().uri("/api/v1/createFeedbackForm"),
            test::TestRequest::get().uri("/api/v1/getFeedbackForms"),
            test::TestRequest::get().uri("/api/v1/feedback/CS101_A"),
            test::TestRequest::put().uri("/api/v1/updateFeedbackForm/CS101_A"),
            test::TestRequest::delete().uri("/api/v1/deleteFeedbackForm/CS101_A"),
            test::TestRequest::post().uri("/api/v1/submitFeedback"),
            test::TestRequest::get().uri("/api/v1/getfeedbackResponses/CS101_A"),
            test::TestRequest::get().uri("/api/v1/checkSubmissionStatus"),
            test::TestRequest::get().uri("/api/v1/getNotifications/1"),
            test::TestRequest::put().uri("/api/v1/acceptNotification/1"),
            test::TestRequest::post().uri("/api/v1/submitReply"),
            test::TestRequest::get().uri("/api/v1/getReply/1"),
            test::TestRequest::post().uri("/api/v1/contactAdmin"),
            test::TestRequest::get().uri("/api/v1/professorQueries"),
            test::TestRequest::put().uri("/api/v1/professorQueries/1/accepted"),
        ];

        for req in protected {
            let req = req.to_request();
            let path = req.path().to_string();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{path}");
        }
    }

    // 认证模块的开放端点也必须可达：缺请求体是 400，而不是 404
    #[actix_web::test]
    async fn test_login_route_is_reachable_without_auth() {
        let app = test::init_service(App::new().service(api_v1_scope())).await;

        let req = test::TestRequest::post().uri("/api/v1/login").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_system_status_is_public() {
        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .service(api_v1_scope()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/system/status")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}

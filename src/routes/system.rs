use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use ts_rs::TS;

use crate::config::AppConfig;
use crate::models::{ApiResponse, AppStartTime};

/// 运行状态响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct StatusResponse {
    pub version: String,
    pub environment: String,
    pub uptime_seconds: i64,
}

pub async fn get_status(start_time: web::Data<AppStartTime>) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let uptime = chrono::Utc::now() - start_time.start_datetime;

    let response = StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_seconds: uptime.num_seconds(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Status retrieved successfully",
    )))
}

// 配置路由。资源注册在 main 的 /api/v1 scope 下，状态端点无需认证
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/system/status").route(web::get().to(get_status)));
}

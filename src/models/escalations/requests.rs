use serde::Deserialize;
use ts_rs::TS;

use crate::models::escalations::entities::EscalationStatus;

/// 升级请求（contactAdmin）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/escalation.ts")]
pub struct ContactAdminRequest {
    pub student_id: i64,
    pub form_name: String,
    pub question: String,
    pub answer: String,
    pub reason: String,
}

/// 升级请求列表过滤参数。缺省只看待处理
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/escalation.ts")]
pub struct ContactListParams {
    pub status: Option<EscalationStatus>,
}

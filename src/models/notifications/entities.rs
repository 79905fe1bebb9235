use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 表单发布通知：记录某份表单已向某名学生公告
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub student_id: i64,
    pub form_name: String,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
}

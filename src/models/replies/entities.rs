use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 教授对某名学生单条回答的回复，作为学生侧通知展示
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/reply.ts")]
pub struct Reply {
    pub id: i64,
    pub student_id: i64,
    pub form_name: String,
    pub question: String,
    pub answer: String,
    pub reply: String,
    pub created_at: DateTime<Utc>,
}

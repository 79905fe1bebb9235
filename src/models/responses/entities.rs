use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 一名学生对一份表单的全部回答
///
/// answers 的下标与表单 questions 的下标一一对应。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/response.ts")]
pub struct FeedbackResponse {
    pub id: i64,
    pub form_name: String,
    pub student_id: i64,
    pub answers: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

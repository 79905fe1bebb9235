use serde::Deserialize;
use ts_rs::TS;

/// 提交回复请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/reply.ts")]
pub struct SubmitReplyRequest {
    pub student_id: i64,
    pub form_name: String,
    pub question: String,
    pub answer: String,
    pub reply: String,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 聚合中的单个学生回答条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/response.ts")]
pub struct StudentAnswers {
    pub student_id: i64,
    pub answers: Vec<String>,
}

/// 一份表单的回答聚合：按表单名收集所有学生的回答数组
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/response.ts")]
pub struct ResponseAggregate {
    pub form_name: String,
    pub responses: Vec<StudentAnswers>,
}

/// 提交状态响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/response.ts")]
pub struct SubmissionStatusResponse {
    pub submitted: bool,
}

use serde::Deserialize;
use ts_rs::TS;

/// 提交反馈请求。answers 下标与表单 questions 下标一一对应
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/response.ts")]
pub struct SubmitFeedbackRequest {
    pub name: String,
    pub student_id: i64,
    pub answers: Vec<String>,
}

/// 提交状态查询参数。旧客户端以 formId 传表单名
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/response.ts")]
pub struct SubmissionStatusParams {
    #[serde(rename = "studentId")]
    pub student_id: i64,
    #[serde(rename = "formId", alias = "formName")]
    pub form_name: String,
}

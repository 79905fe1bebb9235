use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::PaginatedResponse;
use crate::models::forms::entities::{FeedbackForm, FormState};

/// 带计算状态的表单视图
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct FormWithState {
    #[serde(flatten)]
    #[ts(flatten)]
    pub form: FeedbackForm,
    pub state: FormState,
}

/// 表单列表响应
pub type FormListResponse = PaginatedResponse<FormWithState>;

/// 创建表单响应：表单本体 + 通知扇出结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct CreateFormResponse {
    pub form: FeedbackForm,
    pub notified_students: u64,
}

use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::models::forms::entities::Question;

/// 创建反馈表单请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct CreateFeedbackFormRequest {
    pub name: String,
    pub questions: Vec<Question>,
    pub start_time: DateTime<Utc>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub deadline: DateTime<Utc>,
}

/// 更新反馈表单请求（name 不可变，路径指定）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct UpdateFeedbackFormRequest {
    pub questions: Option<Vec<Question>>,
    pub start_time: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
}

/// 表单列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct FormListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct FormListQuery {
    pub page: i64,
    pub size: i64,
    pub search: Option<String>,
}

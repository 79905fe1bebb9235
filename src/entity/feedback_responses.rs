//! 反馈回答实体
//!
//! form_name 为字符串引用而非外键，表单删除后回答仍保留。
//! answers 列存储 JSON 序列化的答案数组，下标与表单问题对应。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback_responses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub form_name: String,
    pub student_id: i64,
    #[sea_orm(column_type = "Text")]
    pub answers: String,
    pub submitted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_response(self) -> crate::models::responses::entities::FeedbackResponse {
        use chrono::{DateTime, Utc};

        crate::models::responses::entities::FeedbackResponse {
            id: self.id,
            form_name: self.form_name,
            student_id: self.student_id,
            answers: serde_json::from_str(&self.answers).unwrap_or_default(),
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0)
                .unwrap_or_default(),
        }
    }
}

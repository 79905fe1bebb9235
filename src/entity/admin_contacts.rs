//! 升级请求实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_contacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub professor_id: i64,
    pub student_id: i64,
    pub form_name: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_contact(self) -> crate::models::escalations::entities::AdminContact {
        use crate::models::escalations::entities::EscalationStatus;
        use chrono::{DateTime, Utc};

        crate::models::escalations::entities::AdminContact {
            id: self.id,
            professor_id: self.professor_id,
            student_id: self.student_id,
            form_name: self.form_name,
            question: self.question,
            answer: self.answer,
            reason: self.reason,
            status: self
                .status
                .parse::<EscalationStatus>()
                .unwrap_or(EscalationStatus::Pending),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

//! 科目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub subject_code: String,
    pub subject_name: String,
    pub semester: String,
    pub course: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_subjects::Entity")]
    StudentSubjects,
    #[sea_orm(has_many = "super::professor_subjects::Entity")]
    ProfessorSubjects,
}

impl Related<super::student_subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentSubjects.def()
    }
}

impl Related<super::professor_subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfessorSubjects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_subject(self) -> crate::models::subjects::entities::Subject {
        crate::models::subjects::entities::Subject {
            id: self.id,
            subject_code: self.subject_code,
            subject_name: self.subject_name,
            semester: self.semester,
            course: self.course,
        }
    }
}

use super::SeaOrmStorage;
use crate::entity::admins::{
    ActiveModel as AdminActiveModel, Column as AdminColumn, Entity as Admins,
};
use crate::entity::professors::{
    ActiveModel as ProfessorActiveModel, Column as ProfessorColumn, Entity as Professors,
};
use crate::entity::students::{
    ActiveModel as StudentActiveModel, Column as StudentColumn, Entity as Students,
};
use crate::errors::{FeedbackSysError, Result};
use crate::models::users::{
    entities::{Admin, Professor, Student},
    requests::{NewAdmin, NewProfessor, NewStudent},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建管理员
    pub async fn create_admin_impl(&self, admin: NewAdmin) -> Result<Admin> {
        let now = chrono::Utc::now().timestamp();

        let model = AdminActiveModel {
            username: Set(admin.username),
            password_hash: Set(admin.password_hash),
            name: Set(admin.name),
            address: Set(admin.address),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("创建管理员失败: {e}")))?;

        Ok(result.into_admin())
    }

    /// 统计管理员数量
    pub async fn count_admins_impl(&self) -> Result<u64> {
        let count = Admins::find()
            .count(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("统计管理员失败: {e}")))?;

        Ok(count)
    }

    /// 通过用户名获取管理员
    pub async fn get_admin_by_username_impl(&self, username: &str) -> Result<Option<Admin>> {
        let result = Admins::find()
            .filter(AdminColumn::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 通过用户名获取教授
    pub async fn get_professor_by_username_impl(
        &self,
        username: &str,
    ) -> Result<Option<Professor>> {
        let result = Professors::find()
            .filter(ProfessorColumn::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询教授失败: {e}")))?;

        Ok(result.map(|m| m.into_professor()))
    }

    /// 通过用户名获取学生
    pub async fn get_student_by_username_impl(&self, username: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(StudentColumn::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过 ID 获取管理员
    pub async fn get_admin_by_id_impl(&self, id: i64) -> Result<Option<Admin>> {
        let result = Admins::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 通过 ID 获取教授
    pub async fn get_professor_by_id_impl(&self, id: i64) -> Result<Option<Professor>> {
        let result = Professors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询教授失败: {e}")))?;

        Ok(result.map(|m| m.into_professor()))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 批量插入学生，重复用户名跳过
    pub async fn insert_students_impl(&self, students: Vec<NewStudent>) -> Result<u64> {
        if students.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let models: Vec<StudentActiveModel> = students
            .into_iter()
            .map(|s| StudentActiveModel {
                username: Set(s.username),
                password_hash: Set(s.password_hash),
                name: Set(s.name),
                course: Set(s.course),
                semester: Set(s.semester),
                section: Set(s.section),
                address: Set(s.address),
                created_at: Set(now),
                ..Default::default()
            })
            .collect();

        let inserted = Students::insert_many(models)
            .on_conflict(
                OnConflict::column(StudentColumn::Username)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("批量插入学生失败: {e}")))?;

        Ok(inserted)
    }

    /// 批量插入教授，重复用户名跳过
    pub async fn insert_professors_impl(&self, professors: Vec<NewProfessor>) -> Result<u64> {
        if professors.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let models: Vec<ProfessorActiveModel> = professors
            .into_iter()
            .map(|p| ProfessorActiveModel {
                username: Set(p.username),
                password_hash: Set(p.password_hash),
                name: Set(p.name),
                address: Set(p.address),
                created_at: Set(now),
                ..Default::default()
            })
            .collect();

        let inserted = Professors::insert_many(models)
            .on_conflict(
                OnConflict::column(ProfessorColumn::Username)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("批量插入教授失败: {e}")))?;

        Ok(inserted)
    }

    /// 全体学生 ID
    pub async fn list_student_ids_impl(&self) -> Result<Vec<i64>> {
        let ids: Vec<i64> = Students::find()
            .select_only()
            .column(StudentColumn::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(ids)
    }
}

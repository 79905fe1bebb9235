use super::SeaOrmStorage;
use crate::entity::professor_subjects::{
    ActiveModel as ProfessorSubjectActiveModel, Column as ProfessorSubjectColumn,
    Entity as ProfessorSubjects,
};
use crate::entity::student_subjects::{
    ActiveModel as StudentSubjectActiveModel, Column as StudentSubjectColumn,
    Entity as StudentSubjects,
};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::entity::subjects::{
    ActiveModel as SubjectActiveModel, Column as SubjectColumn, Entity as Subjects,
};
use crate::errors::{FeedbackSysError, Result};
use crate::models::subjects::{entities::Subject, requests::NewSubject};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 批量插入科目，重复代码跳过
    pub async fn insert_subjects_impl(&self, subjects: Vec<NewSubject>) -> Result<u64> {
        if subjects.is_empty() {
            return Ok(0);
        }

        let models: Vec<SubjectActiveModel> = subjects
            .into_iter()
            .map(|s| SubjectActiveModel {
                subject_code: Set(s.subject_code),
                subject_name: Set(s.subject_name),
                semester: Set(s.semester),
                course: Set(s.course),
                ..Default::default()
            })
            .collect();

        let inserted = Subjects::insert_many(models)
            .on_conflict(
                OnConflict::column(SubjectColumn::SubjectCode)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("批量插入科目失败: {e}")))?;

        Ok(inserted)
    }

    /// 通过代码获取科目
    pub async fn get_subject_by_code_impl(&self, code: &str) -> Result<Option<Subject>> {
        let result = Subjects::find()
            .filter(SubjectColumn::SubjectCode.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 按课程+学期全量重建学生-科目关联
    ///
    /// 导入学生或科目后调用。单事务内先清空再按匹配关系批量插入，
    /// 返回重建后的关联数。
    pub async fn resync_student_subjects_impl(&self) -> Result<u64> {
        let txn = self.db.begin().await.map_err(|e| {
            FeedbackSysError::database_operation(format!("开启事务失败: {e}"))
        })?;

        StudentSubjects::delete_many()
            .exec(&txn)
            .await
            .map_err(|e| {
                FeedbackSysError::database_operation(format!("清空学生科目关联失败: {e}"))
            })?;

        let students: Vec<(i64, String, String)> = Students::find()
            .select_only()
            .column(StudentColumn::Id)
            .column(StudentColumn::Course)
            .column(StudentColumn::Semester)
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询学生失败: {e}")))?;

        let subjects: Vec<(i64, String, String)> = Subjects::find()
            .select_only()
            .column(SubjectColumn::Id)
            .column(SubjectColumn::Course)
            .column(SubjectColumn::Semester)
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| FeedbackSysError::database_operation(format!("查询科目失败: {e}")))?;

        let links: Vec<StudentSubjectActiveModel> = students
            .iter()
            .flat_map(|(student_id, course, semester)| {
                subjects
                    .iter()
                    .filter(move |(_, s_course, s_semester)| {
                        s_course == course && s_semester == semester
                    })
                    .map(|(subject_id, _, _)| StudentSubjectActiveModel {
                        student_id: Set(*student_id),
                        subject_id: Set(*subject_id),
                        ..Default::default()
                    })
            })
            .collect();

        let total = links.len() as u64;

        // 分批插入，避免超出数据库的绑定参数上限
        for chunk in links.chunks(500) {
            StudentSubjects::insert_many(chunk.to_vec())
                .exec_without_returning(&txn)
                .await
                .map_err(|e| {
                    FeedbackSysError::database_operation(format!("重建学生科目关联失败: {e}"))
                })?;
        }

        txn.commit().await.map_err(|e| {
            FeedbackSysError::database_operation(format!("提交事务失败: {e}"))
        })?;

        Ok(total)
    }

    /// 学生的科目列表
    pub async fn list_subjects_for_student_impl(&self, student_id: i64) -> Result<Vec<Subject>> {
        let rows = StudentSubjects::find()
            .filter(StudentSubjectColumn::StudentId.eq(student_id))
            .find_also_related(Subjects)
            .all(&self.db)
            .await
            .map_err(|e| {
                FeedbackSysError::database_operation(format!("查询学生科目失败: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, subject)| subject.map(|s| s.into_subject()))
            .collect())
    }

    /// 教授科目分配，重复分配跳过
    pub async fn assign_professor_subjects_impl(
        &self,
        professor_id: i64,
        pairs: Vec<(i64, String)>,
    ) -> Result<u64> {
        if pairs.is_empty() {
            return Ok(0);
        }

        let models: Vec<ProfessorSubjectActiveModel> = pairs
            .into_iter()
            .map(|(subject_id, section)| ProfessorSubjectActiveModel {
                professor_id: Set(professor_id),
                subject_id: Set(subject_id),
                section: Set(section),
                ..Default::default()
            })
            .collect();

        let inserted = ProfessorSubjects::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    ProfessorSubjectColumn::ProfessorId,
                    ProfessorSubjectColumn::SubjectId,
                    ProfessorSubjectColumn::Section,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                FeedbackSysError::database_operation(format!("插入教授科目分配失败: {e}"))
            })?;

        Ok(inserted)
    }
}

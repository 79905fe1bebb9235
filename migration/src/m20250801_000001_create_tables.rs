use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 管理员表
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Admins::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admins::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Admins::Name).string().not_null())
                    .col(ColumnDef::new(Admins::Address).string().null())
                    .col(ColumnDef::new(Admins::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 教授表
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Professors::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Professors::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Professors::Name).string().not_null())
                    .col(ColumnDef::new(Professors::Address).string().null())
                    .col(
                        ColumnDef::new(Professors::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Course).string().not_null())
                    .col(ColumnDef::new(Students::Semester).string().not_null())
                    .col(ColumnDef::new(Students::Section).string().not_null())
                    .col(ColumnDef::new(Students::Address).string().null())
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subjects::SubjectCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::SubjectName).string().not_null())
                    .col(ColumnDef::new(Subjects::Semester).string().not_null())
                    .col(ColumnDef::new(Subjects::Course).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 学生-科目关联表（按课程+学期批量重建）
        manager
            .create_table(
                Table::create()
                    .table(StudentSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentSubjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentSubjects::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentSubjects::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentSubjects::Table, StudentSubjects::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentSubjects::Table, StudentSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 教授-科目分配表
        manager
            .create_table(
                Table::create()
                    .table(ProfessorSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfessorSubjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProfessorSubjects::ProfessorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorSubjects::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorSubjects::Section)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProfessorSubjects::Table, ProfessorSubjects::ProfessorId)
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProfessorSubjects::Table, ProfessorSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 反馈表单表（问题存为 JSON）
        manager
            .create_table(
                Table::create()
                    .table(FeedbackForms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeedbackForms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeedbackForms::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(FeedbackForms::Questions).text().not_null())
                    .col(
                        ColumnDef::new(FeedbackForms::StartTime)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackForms::Deadline)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackForms::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackForms::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 反馈回答表。按表单名而非外键引用：删除表单不级联删除已有回答
        manager
            .create_table(
                Table::create()
                    .table(FeedbackResponses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeedbackResponses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeedbackResponses::FormName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackResponses::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackResponses::Answers)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackResponses::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 学生通知表
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Notifications::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::FormName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::Accepted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 教授回复表
        manager
            .create_table(
                Table::create()
                    .table(Replies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Replies::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Replies::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Replies::FormName).string().not_null())
                    .col(ColumnDef::new(Replies::Question).text().not_null())
                    .col(ColumnDef::new(Replies::Answer).text().not_null())
                    .col(ColumnDef::new(Replies::Reply).text().not_null())
                    .col(ColumnDef::new(Replies::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 教授-管理员升级请求表
        manager
            .create_table(
                Table::create()
                    .table(AdminContacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminContacts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AdminContacts::ProfessorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdminContacts::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdminContacts::FormName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdminContacts::Question).text().not_null())
                    .col(ColumnDef::new(AdminContacts::Answer).text().not_null())
                    .col(ColumnDef::new(AdminContacts::Reason).text().not_null())
                    .col(ColumnDef::new(AdminContacts::Status).string().not_null())
                    .col(
                        ColumnDef::new(AdminContacts::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AdminContacts::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subjects_course_semester")
                    .table(Subjects::Table)
                    .col(Subjects::Course)
                    .col(Subjects::Semester)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_student_subjects")
                    .table(StudentSubjects::Table)
                    .col(StudentSubjects::StudentId)
                    .col(StudentSubjects::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_professor_subjects")
                    .table(ProfessorSubjects::Table)
                    .col(ProfessorSubjects::ProfessorId)
                    .col(ProfessorSubjects::SubjectId)
                    .col(ProfessorSubjects::Section)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 同一表单每个学生至多一份回答
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_feedback_responses_form_student")
                    .table(FeedbackResponses::Table)
                    .col(FeedbackResponses::FormName)
                    .col(FeedbackResponses::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 同一表单每个学生至多一条通知
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_notifications_student_form")
                    .table(Notifications::Table)
                    .col(Notifications::StudentId)
                    .col(Notifications::FormName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_replies_student_id")
                    .table(Replies::Table)
                    .col(Replies::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_admin_contacts_status")
                    .table(AdminContacts::Table)
                    .col(AdminContacts::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(AdminContacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Replies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeedbackResponses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeedbackForms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProfessorSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Admins {
    Table,
    Id,
    Username,
    PasswordHash,
    Name,
    Address,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Professors {
    Table,
    Id,
    Username,
    PasswordHash,
    Name,
    Address,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    Username,
    PasswordHash,
    Name,
    Course,
    Semester,
    Section,
    Address,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
    SubjectCode,
    SubjectName,
    Semester,
    Course,
}

#[derive(DeriveIden)]
enum StudentSubjects {
    Table,
    Id,
    StudentId,
    SubjectId,
}

#[derive(DeriveIden)]
enum ProfessorSubjects {
    Table,
    Id,
    ProfessorId,
    SubjectId,
    Section,
}

#[derive(DeriveIden)]
enum FeedbackForms {
    Table,
    Id,
    Name,
    Questions,
    StartTime,
    Deadline,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FeedbackResponses {
    Table,
    Id,
    FormName,
    StudentId,
    Answers,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    StudentId,
    FormName,
    Accepted,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Replies {
    Table,
    Id,
    StudentId,
    FormName,
    Question,
    Answer,
    Reply,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AdminContacts {
    Table,
    Id,
    ProfessorId,
    StudentId,
    FormName,
    Question,
    Answer,
    Reason,
    Status,
    CreatedAt,
    UpdatedAt,
}

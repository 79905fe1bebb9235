//! 预导入模块，方便使用

pub use super::admin_contacts::{
    ActiveModel as AdminContactActiveModel, Entity as AdminContacts, Model as AdminContactModel,
};
pub use super::admins::{ActiveModel as AdminActiveModel, Entity as Admins, Model as AdminModel};
pub use super::feedback_forms::{
    ActiveModel as FeedbackFormActiveModel, Entity as FeedbackForms, Model as FeedbackFormModel,
};
pub use super::feedback_responses::{
    ActiveModel as FeedbackResponseActiveModel, Entity as FeedbackResponses,
    Model as FeedbackResponseModel,
};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::professor_subjects::{
    ActiveModel as ProfessorSubjectActiveModel, Entity as ProfessorSubjects,
    Model as ProfessorSubjectModel,
};
pub use super::professors::{
    ActiveModel as ProfessorActiveModel, Entity as Professors, Model as ProfessorModel,
};
pub use super::replies::{ActiveModel as ReplyActiveModel, Entity as Replies, Model as ReplyModel};
pub use super::student_subjects::{
    ActiveModel as StudentSubjectActiveModel, Entity as StudentSubjects,
    Model as StudentSubjectModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};

use crate::models::users::entities::UserRole;

/// 新学生记录（CSV 导入行校验通过后的产物，密码已完成散列）
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub course: String,
    pub semester: String,
    pub section: String,
    pub address: Option<String>,
}

/// 新教授记录
#[derive(Debug, Clone)]
pub struct NewProfessor {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub address: Option<String>,
}

/// 新管理员记录（启动播种使用）
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub address: Option<String>,
}

/// CSV 行声明的用户类型，必须与导入端点匹配
pub fn expected_role_matches(declared: &str, expected: UserRole) -> bool {
    declared.trim().eq_ignore_ascii_case(&expected.to_string())
}

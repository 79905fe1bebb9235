/// 新科目记录（CSV 导入行校验通过后的产物）
#[derive(Debug, Clone)]
pub struct NewSubject {
    pub subject_code: String,
    pub subject_name: String,
    pub semester: String,
    pub course: String,
}

/// 教授分配行：一个科目代码与一个班级的组合
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPair {
    pub subject_code: String,
    pub section: String,
}

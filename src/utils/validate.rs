use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::forms::entities::{Question, QuestionType};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

// 表单名：科目代码_班级，均为大写字母或数字
static FORM_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]+_[A-Z0-9]+$").expect("Invalid form name regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

/// 校验表单名格式
pub fn validate_form_name(name: &str) -> Result<(), &'static str> {
    if !FORM_NAME_RE.is_match(name) {
        return Err("Form name must match SUBJECTCODE_SECTION (uppercase letters and digits)");
    }
    Ok(())
}

/// 校验问题列表
///
/// multiple 类型需要至少两个去除空白后非空的选项，其余类型不得带选项要求。
pub fn validate_questions(questions: &[Question]) -> Result<(), String> {
    if questions.is_empty() {
        return Err("Form must contain at least one question".to_string());
    }

    for (index, question) in questions.iter().enumerate() {
        if question.description.trim().is_empty() {
            return Err(format!("Question {} has an empty description", index + 1));
        }

        if question.question_type == QuestionType::Multiple {
            let valid_options = question
                .options
                .iter()
                .filter(|o| !o.trim().is_empty())
                .count();
            if valid_options < 2 {
                return Err(format!(
                    "Question {} is multiple-choice and needs at least 2 non-blank options",
                    index + 1
                ));
            }
        }
    }

    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(question_type: QuestionType, options: &[&str]) -> Question {
        Question {
            question_type,
            description: "How was the course?".to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_valid_form_names() {
        assert!(validate_form_name("CS101_A").is_ok());
        assert!(validate_form_name("MATH204_B2").is_ok());
        assert!(validate_form_name("101_2").is_ok());
    }

    #[test]
    fn test_invalid_form_names() {
        assert!(validate_form_name("cs101_A").is_err());
        assert!(validate_form_name("CS101").is_err());
        assert!(validate_form_name("CS101_A_B").is_err());
        assert!(validate_form_name("CS101_").is_err());
        assert!(validate_form_name("_A").is_err());
        assert!(validate_form_name("CS 101_A").is_err());
    }

    #[test]
    fn test_multiple_question_requires_two_options() {
        assert!(validate_questions(&[question(QuestionType::Multiple, &["Good", "Bad"])]).is_ok());
        assert!(validate_questions(&[question(QuestionType::Multiple, &["Good"])]).is_err());
        // 空白选项不计数
        assert!(
            validate_questions(&[question(QuestionType::Multiple, &["Good", "  "])]).is_err()
        );
    }

    #[test]
    fn test_non_multiple_questions_need_no_options() {
        assert!(validate_questions(&[question(QuestionType::Text, &[])]).is_ok());
        assert!(validate_questions(&[question(QuestionType::Rating, &[])]).is_ok());
        assert!(validate_questions(&[question(QuestionType::YesNo, &[])]).is_ok());
    }

    #[test]
    fn test_empty_question_list_rejected() {
        assert!(validate_questions(&[]).is_err());
    }

    #[test]
    fn test_blank_description_rejected() {
        let mut q = question(QuestionType::Text, &[]);
        q.description = "   ".to_string();
        assert!(validate_questions(&[q]).is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("stu_2026").is_ok());
        assert!(validate_username("abc").is_err());
        assert!(validate_username("has space1").is_err());
    }
}

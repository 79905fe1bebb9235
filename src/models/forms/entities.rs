use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 问题类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub enum QuestionType {
    #[serde(rename = "text")]
    Text, // 自由文本
    #[serde(rename = "yesNo")]
    YesNo, // 是/否
    #[serde(rename = "rating")]
    Rating, // 评分
    #[serde(rename = "multiple")]
    Multiple, // 多选项单选，需要至少两个选项
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "text" => Ok(QuestionType::Text),
            "yesNo" => Ok(QuestionType::YesNo),
            "rating" => Ok(QuestionType::Rating),
            "multiple" => Ok(QuestionType::Multiple),
            _ => Err(serde::de::Error::custom(format!(
                "无效的问题类型: '{s}'. 支持: text, yesNo, rating, multiple"
            ))),
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QuestionType::Text => "text",
            QuestionType::YesNo => "yesNo",
            QuestionType::Rating => "rating",
            QuestionType::Multiple => "multiple",
        };
        write!(f, "{s}")
    }
}

// 表单问题。options 仅对 multiple 类型有意义
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct Question {
    pub question_type: QuestionType,
    pub description: String,
    #[serde(default)]
    pub options: Vec<String>,
}

// 表单状态，由时间窗口实时计算而非存储
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub enum FormState {
    Scheduled, // now < start_time
    Active,    // start_time <= now <= deadline
    Closed,    // now > deadline
}

// 反馈表单。name 形如 SUBJECTCODE_SECTION，创建后不可变
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct FeedbackForm {
    pub id: i64,
    pub name: String,
    pub questions: Vec<Question>,
    pub start_time: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FeedbackForm {
    /// 计算表单在给定时刻的状态
    pub fn state_at(&self, now: DateTime<Utc>) -> FormState {
        if now < self.start_time {
            FormState::Scheduled
        } else if now > self.deadline {
            FormState::Closed
        } else {
            FormState::Active
        }
    }

    /// 提交窗口检查（服务器侧权威判定）
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.state_at(now) == FormState::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn form(start_offset: i64, deadline_offset: i64) -> (FeedbackForm, DateTime<Utc>) {
        let now = Utc::now();
        let form = FeedbackForm {
            id: 1,
            name: "CS101_A".to_string(),
            questions: vec![],
            start_time: now + Duration::minutes(start_offset),
            deadline: now + Duration::minutes(deadline_offset),
            created_at: now,
            updated_at: now,
        };
        (form, now)
    }

    #[test]
    fn test_scheduled_before_window() {
        let (form, now) = form(60, 120);
        assert_eq!(form.state_at(now), FormState::Scheduled);
        assert!(!form.is_open_at(now));
    }

    #[test]
    fn test_active_inside_window() {
        let (form, now) = form(-30, 30);
        assert_eq!(form.state_at(now), FormState::Active);
        assert!(form.is_open_at(now));
    }

    #[test]
    fn test_closed_after_deadline() {
        let (form, now) = form(-120, -60);
        assert_eq!(form.state_at(now), FormState::Closed);
        assert!(!form.is_open_at(now));
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let (form, _) = form(0, 60);
        assert_eq!(form.state_at(form.start_time), FormState::Active);
        assert_eq!(form.state_at(form.deadline), FormState::Active);
    }

    #[test]
    fn test_question_type_wire_names() {
        let q: Question =
            serde_json::from_str(r#"{"questionType":"yesNo","description":"ok?"}"#).unwrap();
        assert_eq!(q.question_type, QuestionType::YesNo);
        assert!(q.options.is_empty());
        assert!(serde_json::from_str::<Question>(
            r#"{"questionType":"checkbox","description":"?"}"#
        )
        .is_err());
    }
}

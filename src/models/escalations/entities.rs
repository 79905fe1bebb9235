use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 升级请求状态。只允许 pending -> accepted / pending -> rejected
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/escalation.ts")]
pub enum EscalationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl<'de> Deserialize<'de> for EscalationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!(
                "无效的状态: '{s}'. 支持: pending, accepted, rejected"
            )))
    }
}

impl std::fmt::Display for EscalationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EscalationStatus::Pending => "pending",
            EscalationStatus::Accepted => "accepted",
            EscalationStatus::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for EscalationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(EscalationStatus::Pending),
            "accepted" => Ok(EscalationStatus::Accepted),
            "rejected" => Ok(EscalationStatus::Rejected),
            _ => Err(format!("Invalid escalation status: {s}")),
        }
    }
}

/// 教授发起的升级请求：请求管理员披露某条回答背后的学生身份
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/escalation.ts")]
pub struct AdminContact {
    pub id: i64,
    pub professor_id: i64,
    pub student_id: i64,
    pub form_name: String,
    pub question: String,
    pub answer: String,
    pub reason: String,
    pub status: EscalationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            EscalationStatus::Pending,
            EscalationStatus::Accepted,
            EscalationStatus::Rejected,
        ] {
            assert_eq!(
                EscalationStatus::from_str(&status.to_string()).unwrap(),
                status
            );
        }
    }

    #[test]
    fn test_status_rejects_arbitrary_strings() {
        assert!(EscalationStatus::from_str("done").is_err());
        assert!(EscalationStatus::from_str("ACCEPTED").is_err());
    }
}

//! Request and response bodies for the HTTP API.
//!
//! Requests derive `Validate` and are extracted through
//! [`ValidatedJson`](crate::extract::ValidatedJson), so a missing field,
//! a wrong type and a failed rule all become a 400 before any handler runs.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::models::daily_log::ProblemCategory;
use crate::services::risk::RiskLevel;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Auth
// ============================================================================

/// POST /register
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /login. Empty fields are not rejected here; they fail as invalid
/// credentials.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: i64,
}

// ============================================================================
// Daily logs
// ============================================================================

/// POST /add_log
#[derive(Debug, Deserialize, Validate)]
pub struct AddLogRequest {
    pub user_id: i64,

    /// Calendar date as YYYY-MM-DD
    pub date: String,

    pub mood: i32,

    #[validate(range(min = 0.0, message = "sleep_hours must not be negative"))]
    pub sleep_hours: f64,

    #[validate(range(min = 0.0, message = "study_hours must not be negative"))]
    pub study_hours: f64,

    #[validate(range(min = 0.0, message = "phone_hours must not be negative"))]
    pub phone_hours: f64,

    pub problem_text: String,
}

impl AddLogRequest {
    pub fn parsed_date(&self) -> Result<NaiveDate, AppError> {
        let invalid = || {
            AppError::Validation(format!(
                "date must be in YYYY-MM-DD format, got {:?}",
                self.date
            ))
        };

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| invalid())?;

        // Dates are stored as text and compared lexically, which only
        // matches calendar order for four-digit years.
        if !(0..=9999).contains(&date.year()) {
            return Err(invalid());
        }
        Ok(date)
    }
}

#[derive(Debug, Serialize)]
pub struct AddLogResponse {
    pub message: String,
    pub problem_type: ProblemCategory,
    pub severity_score: i32,
}

// ============================================================================
// Dashboard
// ============================================================================

/// GET /dashboard/{user_id}
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub risk_level: RiskLevel,
    /// Number of logs per category in the window; absent categories are omitted
    pub problem_summary: BTreeMap<ProblemCategory, usize>,
    pub total_logs: usize,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_log_json(date: &str, sleep: f64) -> String {
        format!(
            r#"{{"user_id":1,"date":"{}","mood":4,"sleep_hours":{},"study_hours":2,"phone_hours":3,"problem_text":"ok"}}"#,
            date, sleep
        )
    }

    #[test]
    fn test_add_log_request_deserializes() {
        let req: AddLogRequest = serde_json::from_str(&add_log_json("2026-04-01", 7.5)).unwrap();
        assert_eq!(req.user_id, 1);
        assert_eq!(req.sleep_hours, 7.5);
        assert!(req.validate().is_ok());
        assert_eq!(
            req.parsed_date().unwrap(),
            NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_add_log_missing_field_fails() {
        let json = r#"{"user_id":1,"date":"2026-04-01","mood":4}"#;
        assert!(serde_json::from_str::<AddLogRequest>(json).is_err());
    }

    #[test]
    fn test_add_log_negative_hours_invalid() {
        let req: AddLogRequest = serde_json::from_str(&add_log_json("2026-04-01", -1.0)).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_add_log_bad_date() {
        for bad in [
            "01-04-2026",
            "2026-13-01",
            "2026/04/01",
            "",
            "+10000-01-01",
            "-0001-01-01",
        ] {
            let req: AddLogRequest = serde_json::from_str(&add_log_json(bad, 7.0)).unwrap();
            assert!(
                matches!(req.parsed_date(), Err(AppError::Validation(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_add_log_four_digit_year_bounds() {
        for (raw, year) in [("0999-01-01", 999), ("9999-12-31", 9999)] {
            let req: AddLogRequest = serde_json::from_str(&add_log_json(raw, 7.0)).unwrap();
            assert_eq!(req.parsed_date().unwrap().year(), year);
        }
    }

    #[test]
    fn test_register_request_validation() {
        let ok: RegisterRequest =
            serde_json::from_str(r#"{"name":"Mia","email":"mia@example.com","password":"pw"}"#)
                .unwrap();
        assert!(ok.validate().is_ok());

        let bad_email: RegisterRequest =
            serde_json::from_str(r#"{"name":"Mia","email":"not-an-email","password":"pw"}"#)
                .unwrap();
        assert!(bad_email.validate().is_err());

        let empty_name: RegisterRequest =
            serde_json::from_str(r#"{"name":"","email":"mia@example.com","password":"pw"}"#)
                .unwrap();
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_dashboard_summary_serializes_as_object() {
        let mut summary = BTreeMap::new();
        summary.insert(ProblemCategory::Stress, 2);
        summary.insert(ProblemCategory::General, 1);
        let resp = DashboardResponse {
            risk_level: RiskLevel::Low,
            problem_summary: summary,
            total_logs: 3,
            suggestions: vec!["Good job! Maintain your current routine.".into()],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["risk_level"], "Low");
        assert_eq!(json["problem_summary"]["Stress"], 2);
        assert_eq!(json["problem_summary"]["General"], 1);
        assert_eq!(json["total_logs"], 3);
    }
}

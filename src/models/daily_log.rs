use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Problem category derived from a log's free text when it is written.
/// Stored and serialized by variant name ("Stress", "Health", ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, sqlx::Type,
)]
pub enum ProblemCategory {
    Stress,
    Health,
    Study,
    Distraction,
    General,
}

impl ProblemCategory {
    /// Severity score assigned to every log of this category.
    pub fn severity(self) -> i32 {
        match self {
            Self::Stress => 7,
            Self::Health | Self::Study => 6,
            Self::Distraction => 5,
            Self::General => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stress => "Stress",
            Self::Health => "Health",
            Self::Study => "Study",
            Self::Distraction => "Distraction",
            Self::General => "General",
        }
    }
}

impl std::fmt::Display for ProblemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyLog {
    pub id: i64,
    pub user_id: i64,
    #[sqlx(rename = "log_date")]
    pub date: NaiveDate,
    pub mood: i32,
    pub sleep_hours: f64,
    pub study_hours: f64,
    pub phone_hours: f64,
    pub problem_text: String,
    pub problem_type: ProblemCategory,
    pub severity_score: i32,
    pub created_at: DateTime<Utc>,
}

/// A validated submission with its category and severity already derived.
#[derive(Debug, Clone)]
pub struct NewDailyLog {
    pub user_id: i64,
    pub date: NaiveDate,
    pub mood: i32,
    pub sleep_hours: f64,
    pub study_hours: f64,
    pub phone_hours: f64,
    pub problem_text: String,
    pub problem_type: ProblemCategory,
    pub severity_score: i32,
}

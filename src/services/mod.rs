//! Rule-based analysis over daily logs: text classification at write time,
//! and risk level plus suggestions over a trailing window at read time.

use crate::models::daily_log::{DailyLog, ProblemCategory};

pub mod classifier;
pub mod risk;
pub mod suggestions;

/// Averages and counts shared by the risk and suggestion rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    pub avg_sleep: f64,
    pub avg_study: f64,
    pub avg_phone: f64,
    pub stress_count: usize,
}

impl WindowStats {
    /// `None` for an empty window; the rules treat that case separately.
    pub fn from_logs(logs: &[DailyLog]) -> Option<Self> {
        if logs.is_empty() {
            return None;
        }

        let n = logs.len() as f64;
        let avg = |hours: fn(&DailyLog) -> f64| logs.iter().map(hours).sum::<f64>() / n;

        Some(Self {
            avg_sleep: avg(|l| l.sleep_hours),
            avg_study: avg(|l| l.study_hours),
            avg_phone: avg(|l| l.phone_hours),
            stress_count: logs
                .iter()
                .filter(|l| l.problem_type == ProblemCategory::Stress)
                .count(),
        })
    }

    pub fn low_sleep(&self) -> bool {
        self.avg_sleep < 5.0
    }

    pub fn high_phone(&self) -> bool {
        self.avg_phone > 5.0
    }

    pub fn low_study(&self) -> bool {
        self.avg_study < 2.0
    }

    pub fn frequent_stress(&self) -> bool {
        self.stress_count >= 3
    }
}

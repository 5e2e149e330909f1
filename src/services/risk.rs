use serde::Serialize;

use super::WindowStats;
use crate::models::daily_log::DailyLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Risk level for a window of logs. Rules are checked in order and the first
/// match wins: short sleep with frequent stress is High, heavy phone use with
/// little study is Medium, anything else (including no logs) is Low.
pub fn evaluate_risk(logs: &[DailyLog]) -> RiskLevel {
    match WindowStats::from_logs(logs) {
        None => RiskLevel::Low,
        Some(stats) => risk_from_stats(&stats),
    }
}

fn risk_from_stats(stats: &WindowStats) -> RiskLevel {
    if stats.low_sleep() && stats.frequent_stress() {
        RiskLevel::High
    } else if stats.high_phone() && stats.low_study() {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

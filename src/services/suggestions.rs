use super::WindowStats;
use crate::models::daily_log::DailyLog;

pub const NO_DATA: &str = "No data available. Start adding daily logs.";
pub const SLEEP_ADVICE: &str = "You are sleeping less. Try to get at least 7 hours of sleep.";
pub const PHONE_ADVICE: &str =
    "Your phone usage is high. Reduce screen time and focus on studies.";
pub const STUDY_ADVICE: &str =
    "Your study time is low. Try using Pomodoro technique or fixed study schedule.";
pub const STRESS_ADVICE: &str =
    "You seem stressed frequently. Take breaks, do light exercise, and relax.";
pub const KEEP_GOING: &str = "Good job! Maintain your current routine.";

/// Advice for a window of logs. Each rule contributes independently, in a
/// fixed order (sleep, phone, study, stress). The result is never empty.
pub fn generate_suggestions(logs: &[DailyLog]) -> Vec<String> {
    let Some(stats) = WindowStats::from_logs(logs) else {
        return vec![NO_DATA.to_string()];
    };

    let rules: [(bool, &str); 4] = [
        (stats.low_sleep(), SLEEP_ADVICE),
        (stats.high_phone(), PHONE_ADVICE),
        (stats.low_study(), STUDY_ADVICE),
        (stats.frequent_stress(), STRESS_ADVICE),
    ];

    let suggestions: Vec<String> = rules
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, advice)| advice.to_string())
        .collect();

    if suggestions.is_empty() {
        vec![KEEP_GOING.to_string()]
    } else {
        suggestions
    }
}

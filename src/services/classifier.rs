use crate::models::daily_log::ProblemCategory;

/// Keyword groups in priority order. The first group with any keyword
/// contained in the text decides the category.
const KEYWORD_GROUPS: [(ProblemCategory, &[&str]); 4] = [
    (
        ProblemCategory::Stress,
        &["stress", "tension", "anxiety", "pressure", "worry"],
    ),
    (
        ProblemCategory::Health,
        &["sleep", "headache", "pain", "tired", "sick"],
    ),
    (
        ProblemCategory::Study,
        &["exam", "study", "test", "assignment", "syllabus"],
    ),
    (
        ProblemCategory::Distraction,
        &["phone", "reel", "instagram", "youtube", "game"],
    ),
];

/// Classify free text into a category and its severity score.
///
/// Matching is case-insensitive substring containment, so "tiredness"
/// matches "tired". Text matching no group is `General`.
pub fn classify(text: &str) -> (ProblemCategory, i32) {
    let text = text.to_lowercase();

    let category = KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(ProblemCategory::General);

    (category, category.severity())
}

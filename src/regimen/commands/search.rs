use crate::commands::CmdResult;
use crate::model::{Exercise, Regimen};

/// Trims and lowercases a raw search term.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when any field value contains `term`, ignoring case on the stored side.
/// `term` is expected to be normalized already.
pub fn matches(exercise: &Exercise, term: &str) -> bool {
    exercise
        .fields()
        .any(|(_, value)| value.to_lowercase().contains(term))
}

pub fn run(regimen: &Regimen, term: &str) -> CmdResult {
    let term = normalize_term(term);
    let listed = regimen
        .iter()
        .filter(|exercise| matches(exercise, &term))
        .cloned()
        .collect();

    CmdResult::default()
        .with_listed_exercises(listed)
        .with_search_term(term)
}

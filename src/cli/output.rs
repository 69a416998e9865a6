//! Output formatting utilities

use crate::application::LoadOutcome;

/// Format workout summaries as a numbered list, starting at 1
pub fn format_workout_list(summaries: &[String]) -> String {
    if summaries.is_empty() {
        return "No workouts recorded".to_string();
    }

    let width = summaries.len().to_string().len();
    let mut output = String::new();
    for (idx, summary) in summaries.iter().enumerate() {
        output.push_str(&format!("{:>width$}. {}\n", idx + 1, summary, width = width));
    }
    output
}

/// Describe how the snapshot was restored, if worth telling the user
pub fn format_load_outcome(outcome: &LoadOutcome) -> Option<String> {
    match outcome {
        LoadOutcome::Fresh => None,
        LoadOutcome::Restored(count) => Some(format!("Restored {} workout(s)", count)),
        LoadOutcome::Discarded(reason) => Some(format!(
            "Warning: could not read saved workouts, starting empty ({})",
            reason
        )),
    }
}

//! Workout record definition

use serde::{Deserialize, Serialize};
use std::fmt;

/// One logged exercise session.
///
/// A record has no identity of its own; it is addressed by its position in
/// the owning log. The serialized field names are the snapshot format and
/// must match exactly on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkoutRecord {
    /// Expected as YYYY-MM-DD, not checked against the calendar
    pub date: String,
    pub exercise_type: String,
    pub duration_minutes: u32,
    pub calories_burned: u32,
}

impl WorkoutRecord {
    pub fn new(
        date: impl Into<String>,
        exercise_type: impl Into<String>,
        duration_minutes: u32,
        calories_burned: u32,
    ) -> Self {
        WorkoutRecord {
            date: date.into(),
            exercise_type: exercise_type.into(),
            duration_minutes,
            calories_burned,
        }
    }
}

impl fmt::Display for WorkoutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} min, {} cal",
            self.date, self.exercise_type, self.duration_minutes, self.calories_burned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_format() {
        let record = WorkoutRecord::new("2024-01-01", "Running", 30, 300);
        assert_eq!(record.to_string(), "2024-01-01: Running - 30 min, 300 cal");
    }

    #[test]
    fn test_serialized_field_names() {
        let record = WorkoutRecord::new("2024-01-01", "Running", 30, 300);
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 4);
        assert_eq!(obj["date"], "2024-01-01");
        assert_eq!(obj["exercise_type"], "Running");
        assert_eq!(obj["duration_minutes"], 30);
        assert_eq!(obj["calories_burned"], 300);
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let json = r#"{"calories_burned":300,"duration_minutes":30,"exercise_type":"Running","date":"2024-01-01"}"#;
        let record: WorkoutRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, WorkoutRecord::new("2024-01-01", "Running", 30, 300));
    }

    #[test]
    fn test_extra_field_rejected() {
        let json = r#"{"date":"2024-01-01","exercise_type":"Running","duration_minutes":30,"calories_burned":300,"notes":"easy"}"#;
        assert!(serde_json::from_str::<WorkoutRecord>(json).is_err());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let json = r#"{"date":"2024-01-01","exercise_type":"Running","duration_minutes":-5,"calories_burned":300}"#;
        assert!(serde_json::from_str::<WorkoutRecord>(json).is_err());
    }
}

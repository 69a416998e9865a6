//! Error types for fitlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fitlog
#[derive(Debug, Error)]
pub enum FitlogError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("No workout at position {position} (log has {len} entries)")]
    OutOfRange { position: usize, len: usize },

    #[error("Malformed workout snapshot: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No profile created")]
    NoProfile,

    #[error("A profile is already active")]
    ProfileExists,

    #[error("Not a fitlog directory: {0}")]
    NotWorkspace(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FitlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FitlogError::NotWorkspace(_) | FitlogError::NoProfile => 2,
            FitlogError::Validation(_) => 3,
            FitlogError::OutOfRange { .. } => 4,
            FitlogError::Format(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FitlogError::NotWorkspace(path) => {
                format!(
                    "Not a fitlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'fitlog init --name <NAME> --age <AGE> --weight <KG>' to create a profile\n\
                    • Navigate to an existing fitlog directory\n\
                    • Set FITLOG_ROOT environment variable to your workout log path",
                    path.display()
                )
            }
            FitlogError::Validation(msg) => {
                format!(
                    "Invalid input: {}\n\n\
                    Expected values:\n\
                    • Date: YYYY-MM-DD (e.g., 2024-01-01)\n\
                    • Duration and calories: whole numbers (e.g., 30)\n\
                    • Age: a positive whole number, weight: a positive number in kg",
                    msg
                )
            }
            FitlogError::OutOfRange { len, .. } => {
                if *len == 0 {
                    "No workouts recorded yet\n\n\
                    Add one first: fitlog add --date 2024-01-01 --type Running --duration 30 --calories 300"
                        .to_string()
                } else {
                    format!(
                        "{}\n\n\
                        Use 'fitlog list' to see valid positions (1 to {})",
                        self, len
                    )
                }
            }
            FitlogError::Io(e) => format!("Could not save or load workouts: {}", e),
            _ => self.to_string(),
        }
    }
}

/// Result type using FitlogError
pub type Result<T> = std::result::Result<T, FitlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_workspace_suggestion() {
        let err = FitlogError::NotWorkspace(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("fitlog init"));
        assert!(msg.contains("FITLOG_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_validation_lists_expected_values() {
        let err = FitlogError::Validation("Duration (minutes) must be a whole number".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Duration (minutes)"));
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_out_of_range_points_to_list() {
        let err = FitlogError::OutOfRange {
            position: 5,
            len: 1,
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("fitlog list"));
        assert!(msg.contains("1 to 1"));
    }

    #[test]
    fn test_out_of_range_on_empty_log() {
        let err = FitlogError::OutOfRange {
            position: 0,
            len: 0,
        };
        assert!(err.display_with_suggestions().contains("fitlog add"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(FitlogError::Validation(String::new()).exit_code(), 3);
        assert_eq!(
            FitlogError::OutOfRange {
                position: 1,
                len: 0
            }
            .exit_code(),
            4
        );
        assert_eq!(FitlogError::Format(String::new()).exit_code(), 5);
        assert_eq!(FitlogError::Config(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = FitlogError::Config("bad snapshot path".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad snapshot path");
    }
}

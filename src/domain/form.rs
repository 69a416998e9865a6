//! Input forms for profiles and workouts
//!
//! Each form is described by a static field table: the label shown to the
//! user, the rule its raw string must satisfy, and the slot it fills in the
//! resulting value. Validation walks the table in order and reports the first
//! field that fails.

use crate::domain::{Profile, WorkoutRecord};
use crate::error::{FitlogError, Result};

/// Validation rule applied to a raw field string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Any non-empty string
    NonEmpty,
    /// One or more ASCII digits
    WholeNumber,
    /// One or more ASCII digits, value greater than zero
    PositiveWholeNumber,
    /// Digits with at most one decimal point, value greater than zero
    PositiveDecimal,
}

impl FieldRule {
    /// Check `value` against this rule, naming `label` in the error
    pub fn check(&self, label: &str, value: &str) -> Result<()> {
        let ok = match self {
            FieldRule::NonEmpty => !value.is_empty(),
            FieldRule::WholeNumber => is_digits(value),
            FieldRule::PositiveWholeNumber => {
                is_digits(value) && value.bytes().any(|b| b != b'0')
            }
            FieldRule::PositiveDecimal => {
                is_digits(&value.replacen('.', "", 1))
                    && value
                        .parse::<f64>()
                        .map(|w| w.is_finite() && w > 0.0)
                        .unwrap_or(false)
            }
        };

        if ok {
            Ok(())
        } else {
            Err(FitlogError::Validation(format!(
                "{} {}",
                label,
                self.describe()
            )))
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            FieldRule::NonEmpty => "must not be empty",
            FieldRule::WholeNumber => "must be a whole number",
            FieldRule::PositiveWholeNumber => "must be a positive whole number",
            FieldRule::PositiveDecimal => "must be a positive number",
        }
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// A single entry in a form's field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField<S> {
    pub label: &'static str,
    pub rule: FieldRule,
    pub slot: S,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSlot {
    Name,
    Age,
    Weight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutSlot {
    Date,
    ExerciseType,
    Duration,
    Calories,
}

pub const PROFILE_FIELDS: [FormField<ProfileSlot>; 3] = [
    FormField {
        label: "Name",
        rule: FieldRule::NonEmpty,
        slot: ProfileSlot::Name,
    },
    FormField {
        label: "Age",
        rule: FieldRule::PositiveWholeNumber,
        slot: ProfileSlot::Age,
    },
    FormField {
        label: "Weight (kg)",
        rule: FieldRule::PositiveDecimal,
        slot: ProfileSlot::Weight,
    },
];

pub const WORKOUT_FIELDS: [FormField<WorkoutSlot>; 4] = [
    FormField {
        label: "Date (YYYY-MM-DD)",
        rule: FieldRule::NonEmpty,
        slot: WorkoutSlot::Date,
    },
    FormField {
        label: "Exercise Type",
        rule: FieldRule::NonEmpty,
        slot: WorkoutSlot::ExerciseType,
    },
    FormField {
        label: "Duration (minutes)",
        rule: FieldRule::WholeNumber,
        slot: WorkoutSlot::Duration,
    },
    FormField {
        label: "Calories Burned",
        rule: FieldRule::WholeNumber,
        slot: WorkoutSlot::Calories,
    },
];

/// Look up the label for a slot in a field table
fn label_of<S: PartialEq + Copy>(fields: &[FormField<S>], slot: S) -> &'static str {
    fields
        .iter()
        .find(|f| f.slot == slot)
        .map(|f| f.label)
        .unwrap_or("Field")
}

fn parse_u32(label: &str, value: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| FitlogError::Validation(format!("{} is too large", label)))
}

/// Raw profile form input, as collected from the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub weight: String,
}

impl ProfileForm {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        ProfileForm {
            name: name.into(),
            age: age.into(),
            weight: weight.into(),
        }
    }

    pub fn value(&self, slot: ProfileSlot) -> &str {
        match slot {
            ProfileSlot::Name => &self.name,
            ProfileSlot::Age => &self.age,
            ProfileSlot::Weight => &self.weight,
        }
    }

    /// Validate every field and build the profile
    pub fn validate(&self) -> Result<Profile> {
        for field in &PROFILE_FIELDS {
            field.rule.check(field.label, self.value(field.slot))?;
        }

        let age = parse_u32(label_of(&PROFILE_FIELDS, ProfileSlot::Age), &self.age)?;
        let weight_kg: f64 = self.weight.parse().map_err(|_| {
            FitlogError::Validation(format!(
                "{} must be a positive number",
                label_of(&PROFILE_FIELDS, ProfileSlot::Weight)
            ))
        })?;

        Ok(Profile::new(self.name.clone(), age, weight_kg))
    }
}

/// Raw workout form input, as collected from the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutForm {
    pub date: String,
    pub exercise_type: String,
    pub duration: String,
    pub calories: String,
}

impl WorkoutForm {
    pub fn new(
        date: impl Into<String>,
        exercise_type: impl Into<String>,
        duration: impl Into<String>,
        calories: impl Into<String>,
    ) -> Self {
        WorkoutForm {
            date: date.into(),
            exercise_type: exercise_type.into(),
            duration: duration.into(),
            calories: calories.into(),
        }
    }

    /// Pre-fill a form from an existing record, for editing
    pub fn from_record(record: &WorkoutRecord) -> Self {
        WorkoutForm {
            date: record.date.clone(),
            exercise_type: record.exercise_type.clone(),
            duration: record.duration_minutes.to_string(),
            calories: record.calories_burned.to_string(),
        }
    }

    pub fn value(&self, slot: WorkoutSlot) -> &str {
        match slot {
            WorkoutSlot::Date => &self.date,
            WorkoutSlot::ExerciseType => &self.exercise_type,
            WorkoutSlot::Duration => &self.duration,
            WorkoutSlot::Calories => &self.calories,
        }
    }

    pub fn set(&mut self, slot: WorkoutSlot, value: impl Into<String>) {
        let value = value.into();
        match slot {
            WorkoutSlot::Date => self.date = value,
            WorkoutSlot::ExerciseType => self.exercise_type = value,
            WorkoutSlot::Duration => self.duration = value,
            WorkoutSlot::Calories => self.calories = value,
        }
    }

    /// Validate every field and build the record
    pub fn validate(&self) -> Result<WorkoutRecord> {
        for field in &WORKOUT_FIELDS {
            field.rule.check(field.label, self.value(field.slot))?;
        }

        let duration = parse_u32(
            label_of(&WORKOUT_FIELDS, WorkoutSlot::Duration),
            &self.duration,
        )?;
        let calories = parse_u32(
            label_of(&WORKOUT_FIELDS, WorkoutSlot::Calories),
            &self.calories,
        )?;

        Ok(WorkoutRecord::new(
            self.date.clone(),
            self.exercise_type.clone(),
            duration,
            calories,
        ))
    }
}

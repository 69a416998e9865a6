//! Domain layer - Records, profiles and their input forms

pub mod form;
pub mod profile;
pub mod workout;

pub use form::{FieldRule, FormField, ProfileForm, WorkoutForm, PROFILE_FIELDS, WORKOUT_FIELDS};
pub use profile::Profile;
pub use workout::WorkoutRecord;

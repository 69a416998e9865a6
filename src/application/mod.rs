//! Application layer - Use cases and orchestration

pub mod init;
pub mod session;
pub mod workouts;

pub use session::{LoadOutcome, ProfileSession};
pub use workouts::WorkoutService;

//! fitlog - Personal workout log
//!
//! Records workout sessions (date, exercise type, duration, calories) for a
//! single profile and keeps them in a JSON snapshot that is fully rewritten
//! on every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FitlogError;

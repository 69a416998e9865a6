//! User profile definition

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single user's identity.
///
/// The profile's workout records are owned by the session's record store,
/// not stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: u32, weight_kg: f64) -> Self {
        Profile {
            name: name.into(),
            age,
            weight_kg,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} years, {} kg)", self.name, self.age, self.weight_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let profile = Profile::new("Ada", 36, 61.5);
        assert_eq!(profile.to_string(), "Ada (36 years, 61.5 kg)");
    }
}

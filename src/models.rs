// src/models.rs
use std::time::Duration;
use serde::Serialize;

/// A stored login/password pair. `login` is the primary key of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub login: String,
    pub password: String,
}

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationConstraints {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl GenerationConstraints {
    pub fn new(length: usize, include_uppercase: bool, include_digits: bool, include_special: bool) -> Self {
        Self {
            length,
            include_uppercase,
            include_digits,
            include_special,
        }
    }

    /// Minimum length able to hold one lowercase character plus one of every enabled category.
    pub fn required_length(&self) -> usize {
        1 + self.include_uppercase as usize
            + self.include_digits as usize
            + self.include_special as usize
    }
}

impl Default for GenerationConstraints {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_digits: true,
            include_special: true,
        }
    }
}

/// Output of a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    password: String,
    elapsed: Duration,
}

impl GenerationResult {
    pub fn new(password: String, elapsed: Duration) -> Self {
        Self { password, elapsed }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }

    pub fn into_password(self) -> String {
        self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_length_counts_lowercase_and_enabled_categories() {
        assert_eq!(GenerationConstraints::new(8, false, false, false).required_length(), 1);
        assert_eq!(GenerationConstraints::new(8, true, false, false).required_length(), 2);
        assert_eq!(GenerationConstraints::new(8, true, true, true).required_length(), 4);
    }

    #[test]
    fn result_exposes_nanosecond_timing() {
        let result = GenerationResult::new("abc".to_string(), Duration::from_micros(3));
        assert_eq!(result.password(), "abc");
        assert_eq!(result.elapsed_nanos(), 3_000);
    }
}

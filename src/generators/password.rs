// src/generators/password.rs
use std::time::Instant;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

use super::charset;
use crate::models::{GenerationConstraints, GenerationResult};

/// Upper bound on requested length; anything above is rejected before allocating.
pub const MAX_PASSWORD_LENGTH: usize = 10_000_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be at least 1.")]
    InvalidLength,

    #[error("Password length must be at least {required}.")]
    InsufficientLength { required: usize },

    #[error("Password length is too large (maximum {max}).")]
    LengthTooLarge { max: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Random password generator over an injectable cryptographically secure source.
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn validate(constraints: &GenerationConstraints) -> Result<()> {
        if constraints.length < 1 {
            return Err(GeneratorError::InvalidLength);
        }
        if constraints.length > MAX_PASSWORD_LENGTH {
            return Err(GeneratorError::LengthTooLarge { max: MAX_PASSWORD_LENGTH });
        }
        let required = constraints.required_length();
        if constraints.length < required {
            return Err(GeneratorError::InsufficientLength { required });
        }
        Ok(())
    }

    /// Generates a password satisfying `constraints`.
    ///
    /// One character of every enabled optional category is drawn first, the
    /// rest is filled from the combined charset, and the whole buffer is
    /// shuffled. The reported time covers construction and shuffle only.
    pub fn generate(&mut self, constraints: &GenerationConstraints) -> Result<GenerationResult> {
        log::info!(
            "Generating password: length={}, uppercase={}, digits={}, special={}",
            constraints.length,
            constraints.include_uppercase,
            constraints.include_digits,
            constraints.include_special
        );

        if let Err(e) = Self::validate(constraints) {
            log::error!("Rejected generation request: {}", e);
            return Err(e);
        }

        let started = Instant::now();

        let mut buffer: Vec<char> = Vec::with_capacity(constraints.length);
        for category in charset::optional_categories(constraints) {
            buffer.push(self.pick(category.alphabet()));
        }

        let combined = charset::combined_charset(constraints);
        while buffer.len() < constraints.length {
            buffer.push(self.pick(&combined));
        }

        buffer.shuffle(&mut self.rng);
        let password: String = buffer.into_iter().collect();

        let elapsed = started.elapsed();
        log::info!("Password generated in {} ns", elapsed.as_nanos());

        Ok(GenerationResult::new(password, elapsed))
    }

    // Callers only pass non-empty alphabets.
    fn pick(&mut self, alphabet: &[char]) -> char {
        alphabet[self.rng.gen_range(0..alphabet.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::Category;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> PasswordGenerator<ChaCha20Rng> {
        PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    fn has(password: &str, category: Category) -> bool {
        password.chars().any(|c| category.contains(c))
    }

    #[test]
    fn password_has_requested_length_in_characters() {
        let mut generator = seeded(1);
        for length in [4, 12, 64, 1000] {
            let constraints = GenerationConstraints::new(length, true, true, true);
            let result = generator.generate(&constraints).unwrap();
            assert_eq!(result.password().chars().count(), constraints.length);
        }
    }

    #[test]
    fn single_character_password_is_lowercase() {
        let mut generator = seeded(9);
        let result = generator
            .generate(&GenerationConstraints::new(1, false, false, false))
            .unwrap();
        assert_eq!(result.password().chars().count(), 1);
        assert!(has(result.password(), Category::Lowercase));
    }

    #[test]
    fn every_enabled_category_is_present() {
        let mut generator = seeded(2);
        for _ in 0..200 {
            let result = generator
                .generate(&GenerationConstraints::new(4, true, true, true))
                .unwrap();
            let password = result.password();
            assert!(has(password, Category::Uppercase), "{}", password);
            assert!(has(password, Category::Digit), "{}", password);
            assert!(has(password, Category::Special), "{}", password);
        }
    }

    #[test]
    fn categories_are_guaranteed_independently() {
        let mut generator = seeded(3);
        for _ in 0..100 {
            let upper = generator.generate(&GenerationConstraints::new(2, true, false, false)).unwrap();
            assert!(has(upper.password(), Category::Uppercase));

            let digits = generator.generate(&GenerationConstraints::new(2, false, true, false)).unwrap();
            assert!(has(digits.password(), Category::Digit));

            let special = generator.generate(&GenerationConstraints::new(2, false, false, true)).unwrap();
            assert!(has(special.password(), Category::Special));
        }
    }

    #[test]
    fn disabled_categories_never_appear() {
        let mut generator = seeded(4);
        let result = generator
            .generate(&GenerationConstraints::new(500, false, false, false))
            .unwrap();
        assert!(result
            .password()
            .chars()
            .all(|c| Category::Lowercase.contains(c)));
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut generator = seeded(5);
        let err = generator
            .generate(&GenerationConstraints::new(0, true, true, true))
            .unwrap_err();
        assert_eq!(err, GeneratorError::InvalidLength);
        assert_eq!(err.to_string(), "Password length must be at least 1.");
    }

    #[test]
    fn length_below_category_count_is_rejected() {
        let mut generator = seeded(6);
        let err = generator
            .generate(&GenerationConstraints::new(2, true, true, true))
            .unwrap_err();
        assert_eq!(err, GeneratorError::InsufficientLength { required: 4 });
        assert_eq!(err.to_string(), "Password length must be at least 4.");
    }

    #[test]
    fn oversized_length_is_rejected() {
        let mut generator = seeded(7);
        let err = generator
            .generate(&GenerationConstraints::new(MAX_PASSWORD_LENGTH + 1, false, false, false))
            .unwrap_err();
        assert_eq!(err, GeneratorError::LengthTooLarge { max: MAX_PASSWORD_LENGTH });
    }

    #[test]
    fn successive_passwords_differ() {
        let mut generator = PasswordGenerator::new();
        let constraints = GenerationConstraints::new(16, true, true, true);
        let passwords: HashSet<String> = (0..100)
            .map(|_| generator.generate(&constraints).unwrap().into_password())
            .collect();
        assert_eq!(passwords.len(), 100);
    }

    #[test]
    fn same_seed_reproduces_password() {
        let constraints = GenerationConstraints::new(20, true, true, true);
        let a = seeded(42).generate(&constraints).unwrap();
        let b = seeded(42).generate(&constraints).unwrap();
        assert_eq!(a.password(), b.password());
    }

    #[test]
    fn guaranteed_characters_are_not_pinned_to_the_front() {
        let mut generator = seeded(8);
        let constraints = GenerationConstraints::new(8, false, true, false);
        let digit_first = (0..300)
            .filter(|_| {
                let result = generator.generate(&constraints).unwrap();
                let first = result.password().chars().next().unwrap();
                Category::Digit.contains(first)
            })
            .count();
        assert!(digit_first < 300);
    }
}

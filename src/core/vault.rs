// src/core/vault.rs
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

use crate::db::{CredentialStore, DbError};
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{Credential, GenerationConstraints, GenerationResult};

#[derive(Debug, Error)]
pub enum VaultError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error("Login must not be empty.")]
    EmptyLogin,

    #[error("Password must not be empty.")]
    EmptyPassword,

    #[error("Generate a password before saving it.")]
    NothingGenerated,
}

impl VaultError {
    /// Whether the user can fix this by changing their input.
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, VaultError::Database(DbError::Unavailable(_)))
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;

/// Ties a password generator to a credential store and remembers the most
/// recent generation, so it can be saved or its timing reported later.
pub struct Vault<S, R = OsRng> {
    store: S,
    generator: PasswordGenerator<R>,
    last: Option<GenerationResult>,
}

impl<S: CredentialStore> Vault<S, OsRng> {
    pub fn new(store: S) -> Self {
        Self::with_generator(store, PasswordGenerator::new())
    }
}

impl<S: CredentialStore, R: RngCore + CryptoRng> Vault<S, R> {
    pub fn with_generator(store: S, generator: PasswordGenerator<R>) -> Self {
        Self {
            store,
            generator,
            last: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn generate(&mut self, constraints: &GenerationConstraints) -> Result<&GenerationResult> {
        let result = self.generator.generate(constraints)?;
        let result: &GenerationResult = self.last.insert(result);
        Ok(result)
    }

    pub fn last_generated(&self) -> Option<&GenerationResult> {
        self.last.as_ref()
    }

    pub fn find_password_by_login(&self, login: &str) -> Result<Option<String>> {
        check_login(login)?;
        Ok(self.store.find_password_by_login(login)?)
    }

    /// Stores `password` under `login`, refusing logins that are already taken.
    pub fn save_password(&self, login: &str, password: &str) -> Result<Credential> {
        check_login(login)?;
        if password.is_empty() {
            return Err(VaultError::EmptyPassword);
        }

        if self.store.find_password_by_login(login)?.is_some() {
            log::warn!("Login '{}' is already in use", login);
            return Err(DbError::DuplicateLogin(login.to_string()).into());
        }

        self.store.insert(login, password)?;
        Ok(Credential {
            login: login.to_string(),
            password: password.to_string(),
        })
    }

    /// Stores the most recently generated password under `login`.
    pub fn save_last_generated(&self, login: &str) -> Result<Credential> {
        let password = self
            .last
            .as_ref()
            .map(GenerationResult::password)
            .ok_or(VaultError::NothingGenerated)?;
        self.save_password(login, password)
    }
}

// Blank logins are refused; anything else reaches the store exactly as typed.
fn check_login(login: &str) -> Result<()> {
    if login.trim().is_empty() {
        log::warn!("Empty login supplied");
        return Err(VaultError::EmptyLogin);
    }
    Ok(())
}

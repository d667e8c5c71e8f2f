// src/db/mod.rs
use std::path::Path;
use thiserror::Error;

pub mod sqlite;

pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Login already exists: {0}")]
    DuplicateLogin(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for DbError {
    fn from(error: std::io::Error) -> Self {
        DbError::Unavailable(error.to_string())
    }
}

/// Persistence contract for login/password pairs.
///
/// Every call is synchronous and self-contained. A caller composing
/// `find_password_by_login` and `insert` gets no atomicity between the two;
/// the backing store's primary key is what rejects a racing duplicate.
pub trait CredentialStore {
    /// Ensure the schema exists. Safe to call on every start.
    fn initialize(&self) -> Result<(), DbError>;

    /// Exact-match lookup.
    fn find_password_by_login(&self, login: &str) -> Result<Option<String>, DbError>;

    /// Insert a new row, failing with `DuplicateLogin` on a key conflict.
    fn insert(&self, login: &str, password: &str) -> Result<(), DbError>;
}

impl<S: CredentialStore + ?Sized> CredentialStore for &S {
    fn initialize(&self) -> Result<(), DbError> {
        (**self).initialize()
    }

    fn find_password_by_login(&self, login: &str) -> Result<Option<String>, DbError> {
        (**self).find_password_by_login(login)
    }

    fn insert(&self, login: &str, password: &str) -> Result<(), DbError> {
        (**self).insert(login, password)
    }
}

// Open the SQLite store at `path` and make sure its schema exists.
// A failed schema step is only logged: later operations report their own errors.
pub fn init_store(path: impl AsRef<Path>) -> SqliteStore {
    let store = SqliteStore::new(path);
    if let Err(e) = store.initialize() {
        log::warn!("Failed to initialize credential table: {}", e);
    }
    store
}

//! Password generation under composition constraints, with generated
//! passwords kept by login in a local SQLite file.

pub mod cli;
pub mod core;
pub mod db;
pub mod generators;
pub mod models;
pub mod utils;

pub use crate::core::vault::{Vault, VaultError};
pub use crate::db::{CredentialStore, DbError, SqliteStore};
pub use crate::generators::{GeneratorError, PasswordGenerator};
pub use crate::models::{Credential, GenerationConstraints, GenerationResult};

// src/db/sqlite.rs
use std::path::{Path, PathBuf};

use rusqlite::{Connection, ErrorCode, OptionalExtension};

use super::{CredentialStore, DbError};

/// SQLite-backed store. A connection is opened for each operation and
/// dropped when it returns, on success and failure alike.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, DbError> {
        // Create the database directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Connection::open(&self.path).map_err(|e| {
            DbError::Unavailable(format!("cannot open {}: {}", self.path.display(), e))
        })
    }
}

fn map_insert_error(login: &str, error: rusqlite::Error) -> DbError {
    match error {
        rusqlite::Error::SqliteFailure(ref err, _) if err.code == ErrorCode::ConstraintViolation => {
            DbError::DuplicateLogin(login.to_string())
        }
        other => DbError::Unavailable(other.to_string()),
    }
}

impl CredentialStore for SqliteStore {
    fn initialize(&self) -> Result<(), DbError> {
        let conn = self.connect()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                login TEXT PRIMARY KEY NOT NULL,
                password TEXT NOT NULL
            );
            "#,
            [],
        )
        .map_err(|e| DbError::Unavailable(e.to_string()))?;

        log::info!("Credential table ready at: {}", self.path.display());
        Ok(())
    }

    fn find_password_by_login(&self, login: &str) -> Result<Option<String>, DbError> {
        log::info!("Looking up password for login: {}", login);
        let conn = self.connect()?;

        let password = conn
            .query_row(
                "SELECT password FROM users WHERE login = ?1",
                [login],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|e| {
                log::error!("Password lookup failed for {}: {}", login, e);
                DbError::Unavailable(e.to_string())
            })?;

        if password.is_none() {
            log::warn!("No password stored for login: {}", login);
        }

        Ok(password)
    }

    fn insert(&self, login: &str, password: &str) -> Result<(), DbError> {
        log::info!("Storing password for login: {}", login);
        let conn = self.connect()?;

        conn.execute(
            "INSERT INTO users (login, password) VALUES (?1, ?2)",
            [login, password],
        )
        .map_err(|e| {
            log::error!("Failed to store password for {}: {}", login, e);
            map_insert_error(login, e)
        })?;

        log::info!("Stored password for login: {}", login);
        Ok(())
    }
}

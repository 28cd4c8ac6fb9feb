//! SQLite-backed profile store.

use super::{ProfileStore, GROUP_NAME};
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Profile configuration stored in SQLite.
///
/// # Schema
/// ```sql
/// CREATE TABLE profile_config (
///     profile TEXT NOT NULL,
///     group_name TEXT NOT NULL,
///     key TEXT NOT NULL,
///     value TEXT NOT NULL,
///     updated_at TEXT NOT NULL,   -- ISO 8601 timestamp
///     UNIQUE(profile, group_name, key)
/// );
/// ```
///
/// One database can hold several profiles; each store instance only sees the rows of
/// its own profile within the `slayer` group.
pub struct SqliteProfileStore {
    conn: Mutex<Connection>,
    profile: String,
}

impl SqliteProfileStore {
    /// Creates or opens the store at `db_path` for `profile`.
    pub fn open<P: AsRef<Path>>(db_path: P, profile: &str) -> Result<Self> {
        let conn = Connection::open(db_path).context("Failed to open profile database")?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS profile_config (
                profile TEXT NOT NULL,
                group_name TEXT NOT NULL,
                key TEXT NOT NULL,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE(profile, group_name, key)
            )
            "#,
            [],
        )
        .context("Failed to create profile_config table")?;

        Ok(Self {
            conn: Mutex::new(conn),
            profile: profile.to_string(),
        })
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("Profile database lock poisoned"))
    }
}

impl ProfileStore for SqliteProfileStore {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn()?
            .execute(
                r#"
                INSERT INTO profile_config (profile, group_name, key, value, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT(profile, group_name, key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![self.profile, GROUP_NAME, key, value, now],
            )
            .with_context(|| format!("Failed to store '{}'", key))?;
        Ok(())
    }

    fn unset(&self, key: &str) -> Result<()> {
        self.conn()?
            .execute(
                "DELETE FROM profile_config WHERE profile = ?1 AND group_name = ?2 AND key = ?3",
                params![self.profile, GROUP_NAME, key],
            )
            .with_context(|| format!("Failed to unset '{}'", key))?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn()?
            .query_row(
                "SELECT value FROM profile_config WHERE profile = ?1 AND group_name = ?2 AND key = ?3",
                params![self.profile, GROUP_NAME, key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read '{}'", key))
    }
}

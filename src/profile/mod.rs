//! Per-profile persistence of the current task.
//!
//! The tracker writes every task field through [`ProfileStore`] so a task survives
//! restarts and relogs. Two stores are provided:
//!
//! - [`MemoryProfileStore`]: process-local, used by tests and embedders that keep
//!   their own persistence
//! - [`SqliteProfileStore`]: SQLite-backed, scoped by profile and config group
//!
//! ```no_run
//! use slayer::profile::{ProfileStore, SqliteProfileStore, AMOUNT_KEY};
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = SqliteProfileStore::open("slayer.db", "main-account")?;
//! store.set(AMOUNT_KEY, "42")?;
//! assert_eq!(store.get_int(AMOUNT_KEY)?, Some(42));
//! # Ok(())
//! # }
//! ```

mod memory;
mod sqlite;

pub use memory::MemoryProfileStore;
pub use sqlite::SqliteProfileStore;

use anyhow::{Context, Result};

/// Config group all task keys live under
pub const GROUP_NAME: &str = "slayer";

pub const AMOUNT_KEY: &str = "amount";
pub const INIT_AMOUNT_KEY: &str = "initialAmount";
pub const TASK_NAME_KEY: &str = "taskName";
pub const TASK_LOC_KEY: &str = "taskLocation";
pub const POINTS_KEY: &str = "points";
pub const STREAK_KEY: &str = "streak";

/// Key-value store scoped to one player profile.
pub trait ProfileStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn unset(&self, key: &str) -> Result<()>;

    /// Raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Value under `key` parsed as an integer
    fn get_int(&self, key: &str) -> Result<Option<i32>> {
        match self.get(key)? {
            Some(raw) => {
                let value = raw
                    .trim()
                    .parse::<i32>()
                    .with_context(|| format!("Stored value for '{}' is not an integer", key))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

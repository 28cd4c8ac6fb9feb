//! Shared task directory (`!task` chat command).
//!
//! Players publish their current task to an external directory service keyed by
//! player name; anyone typing `!task` in chat gets the sender's task substituted
//! into the message.
//!
//! ```text
//!  chat "!task" ──► TaskCommand::lookup ──► DirectoryService::get_task
//!                         │                         │
//!                         ◄── validate_record ◄─────┘
//!                         │
//!                         └─► "Slayer Task: Rats (Slayer Tower): 5/20 killed"
//!
//!  chat input ───► TaskCommand::submit ──► spawned DirectoryService::submit_task
//!                                                  └─► resume() exactly once
//! ```

mod client;
mod command;
mod validation;


pub use client::HttpDirectoryClient;
pub use command::{
    format_reply, format_task_summary, resolve_player, SharedTaskLocations, TaskCommand,
    TASK_COMMAND_STRING,
};
pub use validation::{validate_record, ValidationError, TASK_STRING_MAX_LENGTH};

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

/// Task record as exchanged with the directory service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub task: String,

    /// Empty when the task has no location
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,

    pub amount: i32,

    pub initial_amount: i32,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Remote store of shared tasks.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Fetch the task last submitted by `player`
    async fn get_task(&self, player: &str) -> Result<TaskRecord>;

    /// Publish `player`'s current task
    async fn submit_task(
        &self,
        player: &str,
        task: &str,
        amount: u32,
        initial_amount: u32,
        location: Option<&str>,
    ) -> Result<()>;
}

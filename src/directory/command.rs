use super::{validate_record, DirectoryService, TaskRecord};
use crate::event::ChatKind;
use crate::state::Assignment;
use crate::text;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Chat command that triggers a lookup
pub const TASK_COMMAND_STRING: &str = "!task";

/// Valid task locations, shared with off-thread lookups; `None` until loaded
pub type SharedTaskLocations = Arc<RwLock<Option<Vec<String>>>>;

/// Handler for the `!task` chat command.
///
/// Lookups run on the caller's task and may wait on the network, so the event
/// thread should spawn them. Submissions are spawned here and never block.
pub struct TaskCommand {
    directory: Arc<dyn DirectoryService>,
    locations: SharedTaskLocations,
    enabled: bool,
}

impl TaskCommand {
    pub fn new(directory: Arc<dyn DirectoryService>, enabled: bool) -> Self {
        Self {
            directory,
            locations: Arc::new(RwLock::new(None)),
            enabled,
        }
    }

    /// Replace the valid location list (`None` on shutdown)
    pub fn set_locations(&self, locations: Option<Vec<String>>) {
        *self
            .locations
            .write()
            .unwrap_or_else(PoisonError::into_inner) = locations;
    }

    pub fn locations(&self) -> SharedTaskLocations {
        self.locations.clone()
    }

    /// Whether a chat line invokes the command
    pub fn is_command(message: &str) -> bool {
        let message = text::remove_tags(message);
        let mut words = message.split_whitespace();
        words
            .next()
            .map_or(false, |w| w.eq_ignore_ascii_case(TASK_COMMAND_STRING))
    }

    /// Look up the sender's task and build the replacement chat text.
    ///
    /// Returns `None` when the command is disabled, the directory is unreachable, or
    /// the record fails validation; the original message is then left untouched.
    pub async fn lookup(&self, kind: ChatKind, sender: &str, local_player: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let player = resolve_player(kind, sender, local_player);

        let record = match self.directory.get_task(&player).await {
            Ok(record) => record,
            Err(e) => {
                debug!(player = %player, error = %e, "Unable to lookup slayer task");
                return None;
            }
        };

        let locations = self
            .locations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Err(e) = validate_record(&record, locations.as_deref()) {
            debug!(error = %e, ?record, "Validation failed for task name or location");
            return None;
        }

        Some(format_reply(&record))
    }

    /// Publish the current assignment in the background.
    ///
    /// Returns `None` without calling `resume` when there is no task; the caller
    /// resumes its input itself. Otherwise `resume` runs exactly once after the
    /// submission finishes, whether it succeeded or not. Must be called within a
    /// Tokio runtime.
    pub fn submit<F>(
        &self,
        player_name: &str,
        assignment: &Assignment,
        resume: F,
    ) -> Option<JoinHandle<()>>
    where
        F: FnOnce() + Send + 'static,
    {
        if assignment.name.is_empty() {
            return None;
        }

        let directory = self.directory.clone();
        let player = player_name.to_string();
        let task = text::capitalize(&assignment.name);
        let amount = assignment.remaining;
        let initial = assignment.initial;
        let location = assignment.location.clone();

        // owned by the future from the start, so a task dropped unpolled still resumes
        let guard = ResumeGuard(Some(resume));

        Some(tokio::spawn(async move {
            let _resume = guard;

            if let Err(e) = directory
                .submit_task(&player, &task, amount, initial, location.as_deref())
                .await
            {
                warn!(player = %player, error = %e, "Unable to submit slayer task");
            }
        }))
    }
}

/// Calls the wrapped continuation when dropped, including on panic or abort
struct ResumeGuard<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> Drop for ResumeGuard<F> {
    fn drop(&mut self) {
        if let Some(resume) = self.0.take() {
            resume();
        }
    }
}

/// Player whose task a chat line asks for.
///
/// Outgoing private messages are sent by the local player; everything else by the
/// (tag-stripped) sender.
pub fn resolve_player(kind: ChatKind, sender: &str, local_player: &str) -> String {
    if kind == ChatKind::PrivateChatOut {
        local_player.to_string()
    } else {
        text::normalize_spaces(&text::remove_tags(sender))
    }
}

/// `Task (Location): progress` for a validated record
pub fn format_task_summary(record: &TaskRecord) -> String {
    // amounts come from the remote service unbounded
    let killed = i64::from(record.initial_amount) - i64::from(record.amount);

    let mut summary = record.task.clone();
    if !record.location.is_empty() {
        summary.push_str(&format!(" ({})", record.location));
    }
    summary.push_str(": ");
    if killed < 0 {
        summary.push_str(&format!("{} left", record.amount));
    } else {
        summary.push_str(&format!("{}/{} killed", killed, record.initial_amount));
    }
    summary
}

/// Chat text replacing the `!task` message
pub fn format_reply(record: &TaskRecord) -> String {
    format!(
        "<colNORMAL>Slayer Task: <colHIGHLIGHT>{}",
        format_task_summary(record)
    )
}

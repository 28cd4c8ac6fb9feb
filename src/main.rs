use anyhow::{anyhow, Context, Result};
use slayer::config::{load_config, SlayerConfig};
use slayer::directory::{HttpDirectoryClient, TaskCommand};
use slayer::event::SlayerEvent;
use slayer::profile::SqliteProfileStore;
use slayer::resolver::NameResolver;
use slayer::state::TaskTracker;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

/// Parse one input line: a single event object or an array delivered as one batch
fn parse_line(line: &str) -> Result<Vec<SlayerEvent>> {
    if line.starts_with('[') {
        serde_json::from_str(line).context("Invalid event batch")
    } else {
        Ok(vec![serde_json::from_str(line).context("Invalid event")?])
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slayer=info".into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)
            .map_err(|e| anyhow!("Failed to load config '{}': {}", path, e))?,
        None => SlayerConfig::default(),
    };

    info!("Slayer tracker starting...");

    let store = Arc::new(
        SqliteProfileStore::open(&config.profile.database, &config.profile.profile)
            .context("Failed to open profile store")?,
    );
    let resolver = Arc::new(config.tables.clone());
    let mut tracker = TaskTracker::new(config.tracker.clone(), store, resolver.clone());

    let directory = Arc::new(HttpDirectoryClient::new(&config.directory)?);
    let command = Arc::new(TaskCommand::new(directory, config.directory.task_command));
    command.set_locations(Some(resolver.locations()));

    // Stand-in for the overlay and infobox collaborators
    let mut signals = tracker.subscribe();
    tokio::spawn(async move {
        loop {
            match signals.recv().await {
                Ok(signal) => info!(signal = ?signal, "Tracker signal"),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped = skipped, "Signal logger lagged")
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    tracker.start_up(false);

    let mut local_player = String::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let events = match parse_line(line) {
            Ok(events) => events,
            Err(e) => {
                warn!(error = %e, "Failed to parse event, skipping");
                continue;
            }
        };

        for event in &events {
            match event {
                SlayerEvent::GameStateChanged {
                    player: Some(name), ..
                } => local_player = name.clone(),
                SlayerEvent::ChatMessage {
                    kind,
                    sender,
                    message,
                } if TaskCommand::is_command(message) => {
                    // Lookups wait on the network; keep them off the event loop
                    let command = command.clone();
                    let (kind, sender, me) = (*kind, sender.clone(), local_player.clone());
                    tokio::spawn(async move {
                        if let Some(reply) = command.lookup(kind, &sender, &me).await {
                            info!(player = %sender, reply = %reply, "Task lookup");
                        }
                    });
                }
                SlayerEvent::ChatInput { value } if TaskCommand::is_command(value) => {
                    // var changes earlier on this line must land before the snapshot
                    let submitted =
                        command.submit(&local_player, tracker.settled_assignment(), || {
                            debug!("Chat input resumed");
                        });
                    if submitted.is_none() {
                        debug!("No task to submit, resuming chat input");
                    }
                }
                _ => {}
            }

            tracker.process_event(event);
        }

        tracker.flush();
    }

    tracker.shut_down();
    command.set_locations(None);
    info!("Event stream ended");

    Ok(())
}

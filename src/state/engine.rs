use crate::catalog::{self, ENCHANTED_GEM};
use crate::config::TrackerConfig;
use crate::event::{ChatKind, GameState, SlayerEvent, TaskVar};
use crate::matcher::{Npc, NpcId, RuleSet};
use crate::profile::{
    ProfileStore, AMOUNT_KEY, INIT_AMOUNT_KEY, POINTS_KEY, STREAK_KEY, TASK_LOC_KEY,
    TASK_NAME_KEY,
};
use crate::resolver::{self, NameResolver};
use crate::state::assignment::{Assignment, CounterInfo, Highlight, TrackerSignal};
use crate::text;
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

pub const SUPERIOR_MESSAGE: &str = "A superior foe has appeared...";

/// Amount used by the developer `task` command
const DEV_TASK_AMOUNT: u32 = 42;

/// Raw values of the task vars as last reported
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskVars {
    pub task_size: i32,
    pub task_creature: i32,
    pub task_location: i32,
    pub task_boss: i32,
    pub points: i32,
    pub streak: i32,
}

/// Task tracker owns the current assignment and the tracked NPC set.
///
/// All mutation goes through the `on_*` handlers (or [`TaskTracker::process_event`]),
/// which must be called from a single event thread.
pub struct TaskTracker {
    config: TrackerConfig,

    store: Arc<dyn ProfileStore>,
    resolver: Arc<dyn NameResolver>,

    assignment: Assignment,
    vars: TaskVars,

    /// Rules compiled from the current assignment
    rules: RuleSet,

    /// Live NPCs by index
    npcs: HashMap<NpcId, Npc>,

    /// Live NPCs matching `rules`
    targets: HashSet<NpcId>,

    counter: Option<CounterInfo>,
    info_timer: Option<DateTime<Utc>>,

    /// Set on login/hop; the next reconciliation resumes instead of diffing
    pending_sync: bool,

    /// A task var changed since the last reconciliation
    update_requested: bool,

    signal_tx: broadcast::Sender<TrackerSignal>,
}

impl TaskTracker {
    pub fn new(
        config: TrackerConfig,
        store: Arc<dyn ProfileStore>,
        resolver: Arc<dyn NameResolver>,
    ) -> Self {
        let (signal_tx, _) = broadcast::channel(256);

        Self {
            config,
            store,
            resolver,
            assignment: Assignment::default(),
            vars: TaskVars::default(),
            rules: RuleSet::default(),
            npcs: HashMap::new(),
            targets: HashSet::new(),
            counter: None,
            info_timer: None,
            pending_sync: false,
            update_requested: false,
            signal_tx,
        }
    }

    /// Subscribe to presentation signals
    pub fn subscribe(&self) -> broadcast::Receiver<TrackerSignal> {
        self.signal_tx.subscribe()
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Current assignment after applying any pending var changes
    pub fn settled_assignment(&mut self) -> &Assignment {
        self.flush();
        &self.assignment
    }

    pub fn vars(&self) -> TaskVars {
        self.vars
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn targets(&self) -> &HashSet<NpcId> {
        &self.targets
    }

    pub fn is_target(&self, npc: NpcId) -> bool {
        self.targets.contains(&npc)
    }

    pub fn counter(&self) -> Option<&CounterInfo> {
        self.counter.as_ref()
    }

    pub fn is_pending_sync(&self) -> bool {
        self.pending_sync
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Dispatch one event to its handler
    pub fn process_event(&mut self, event: &SlayerEvent) {
        match event {
            SlayerEvent::GameStateChanged { state, .. } => self.on_game_state_changed(*state),
            SlayerEvent::GameTick => self.on_game_tick(),
            SlayerEvent::VarChanged { var, value } => self.on_var_changed(*var, *value),
            SlayerEvent::NpcSpawned { npc } => self.on_npc_spawned(npc.clone()),
            SlayerEvent::NpcDespawned { id } => self.on_npc_despawned(*id),
            SlayerEvent::ChatMessage { kind, message, .. } => self.on_chat_message(*kind, message),
            SlayerEvent::CommandExecuted { command, args } => {
                self.on_command_executed(command, args)
            }
            // Chat input belongs to the directory command handler
            SlayerEvent::ChatInput { .. } => {}
        }
    }

    /// Process a batch of events delivered together, then reconcile once
    pub fn process_batch(&mut self, events: &[SlayerEvent]) {
        for event in events {
            self.process_event(event);
        }
        self.flush();
    }

    /// Run a pending reconciliation, if any task var changed
    pub fn flush(&mut self) {
        if self.update_requested {
            self.update_requested = false;
            self.update_task();
        }
    }

    /// Plugin enabled; when already logged in, resume the task from the current vars
    pub fn start_up(&mut self, logged_in: bool) {
        if logged_in {
            self.pending_sync = true;
            self.update_task();
        }
    }

    pub fn shut_down(&mut self) {
        self.remove_counter();
        self.rules = RuleSet::default();
        self.targets.clear();
        self.update_requested = false;
    }

    pub fn on_game_state_changed(&mut self, state: GameState) {
        if state.starts_session() {
            self.assignment.name.clear();
            self.assignment.remaining = 0;
            self.pending_sync = true;
            self.targets.clear();
            self.npcs.clear();
        }
    }

    pub fn on_game_tick(&mut self) {
        self.on_game_tick_at(Utc::now());
    }

    /// Tick handling with an explicit clock
    pub fn on_game_tick_at(&mut self, now: DateTime<Utc>) {
        self.flush();

        if let Some(started) = self.info_timer {
            let timeout = self.config.stat_timeout_minutes;
            if timeout != 0 && now - started >= Duration::minutes(i64::from(timeout)) {
                self.remove_counter();
                self.info_timer = None;
            }
        }

        self.pending_sync = false;
    }

    pub fn on_var_changed(&mut self, var: TaskVar, value: i32) {
        match var {
            TaskVar::TaskSize => self.vars.task_size = value,
            TaskVar::TaskCreature => self.vars.task_creature = value,
            TaskVar::TaskLocation => self.vars.task_location = value,
            TaskVar::TaskBoss => self.vars.task_boss = value,
            TaskVar::Points => {
                self.vars.points = value;
                self.persist(POINTS_KEY, Some(&value.to_string()));
                self.refresh_counter();
            }
            TaskVar::Streak => {
                self.vars.streak = value;
                self.persist(STREAK_KEY, Some(&value.to_string()));
                self.refresh_counter();
            }
        }

        if var.affects_task() {
            self.update_requested = true;
        }
    }

    pub fn on_npc_spawned(&mut self, npc: Npc) {
        if self.rules.matches(&npc) {
            self.targets.insert(npc.id);
        }
        self.npcs.insert(npc.id, npc);
    }

    pub fn on_npc_despawned(&mut self, id: NpcId) {
        self.npcs.remove(&id);
        self.targets.remove(&id);
    }

    pub fn on_chat_message(&mut self, kind: ChatKind, message: &str) {
        if kind != ChatKind::GameMessage && kind != ChatKind::Spam {
            return;
        }

        if text::remove_tags(message) == SUPERIOR_MESSAGE && self.config.show_superior_notification
        {
            self.emit(TrackerSignal::Notification {
                message: SUPERIOR_MESSAGE.to_string(),
            });
        }
    }

    pub fn on_command_executed(&mut self, command: &str, args: &[String]) {
        if !self.config.developer_mode || command != "task" {
            return;
        }

        if let Some(name) = args.first() {
            self.set_task(name, DEV_TASK_AMOUNT, DEV_TASK_AMOUNT);
            debug!("Set task to {}", name);
        }
    }

    /// Replace the tracker configuration
    pub fn apply_config(&mut self, config: TrackerConfig) {
        let infobox_changed = config.show_infobox != self.config.show_infobox;
        self.config = config;

        if infobox_changed {
            if self.config.show_infobox {
                self.add_counter();
            } else {
                self.remove_counter();
            }
        } else {
            self.emit_highlights();
        }
    }

    /// Highlight for a live NPC, if it is a target and highlighting is on
    pub fn highlight_for(&self, npc: NpcId) -> Option<Highlight> {
        if !self.config.highlights_enabled() || !self.targets.contains(&npc) {
            return None;
        }

        Some(Highlight {
            npc,
            color: self.config.target_color.clone(),
            hull: self.config.highlight_hull,
            tile: self.config.highlight_tile,
            outline: self.config.highlight_outline,
        })
    }

    /// Set a task directly, showing the counter
    pub fn set_task(&mut self, name: &str, amount: u32, initial: u32) {
        self.apply_task(name.to_string(), amount, initial, None, true);
    }

    /// Reconcile the assignment against the current task vars
    fn update_task(&mut self) {
        let amount = u32::try_from(self.vars.task_size).unwrap_or(0);

        if amount > 0 {
            let task_name = resolver::resolve_task_name(
                self.resolver.as_ref(),
                self.vars.task_creature,
                self.vars.task_boss,
            );
            let task_location =
                resolver::resolve_location(self.resolver.as_ref(), self.vars.task_location);

            if self.pending_sync {
                self.pending_sync = false;

                if task_name.is_empty() {
                    info!(amount = amount, "Resumed task has no name, clearing");
                    self.apply_task(String::new(), 0, 0, None, false);
                    return;
                }

                debug!(
                    "Sync slayer task: {}x {} at {:?}",
                    amount, task_name, task_location
                );

                // initial amount is not in a var, so it comes from the stored profile
                let initial = self
                    .read_int(INIT_AMOUNT_KEY)
                    .and_then(|v| u32::try_from(v).ok())
                    .unwrap_or(0);
                self.apply_task(task_name, amount, initial, task_location, false);

                self.persist(POINTS_KEY, Some(&self.vars.points.to_string()));
                self.persist(STREAK_KEY, Some(&self.vars.streak.to_string()));
            } else if task_name != self.assignment.name || task_location != self.assignment.location
            {
                debug!(
                    "Task change: {}x {} at {:?}",
                    amount, task_name, task_location
                );
                let carried = self.assignment.initial;
                self.apply_task(task_name, amount, carried, task_location, true);
            } else if amount != self.assignment.remaining {
                debug!("Amount change: {} -> {}", self.assignment.remaining, amount);

                self.assignment.remaining = amount;
                self.persist(AMOUNT_KEY, Some(&amount.to_string()));

                if self.config.show_infobox {
                    self.add_counter();
                    if let Some(counter) = self.counter.as_mut() {
                        counter.count = amount;
                    }
                    self.emit(TrackerSignal::CounterUpdated { count: amount });
                    self.info_timer = Some(Utc::now());
                }
            }
        } else if self.assignment.remaining > 0 {
            info!(task = %self.assignment.name, "Task complete");
            self.apply_task(String::new(), 0, 0, None, true);
        }
    }

    fn apply_task(
        &mut self,
        name: String,
        amount: u32,
        initial: u32,
        location: Option<String>,
        show_counter: bool,
    ) {
        self.assignment = Assignment {
            name,
            remaining: amount,
            initial: amount.max(initial),
            location,
        };
        self.save();
        self.remove_counter();

        if show_counter {
            self.info_timer = Some(Utc::now());
            self.add_counter();
        }

        self.rebuild_rules();
    }

    fn rebuild_rules(&mut self) {
        let entry = catalog::lookup(&self.assignment.name.to_lowercase());
        self.rules = RuleSet::compile(&self.assignment.name, entry);
        self.rebuild_targets();
        self.emit_highlights();
    }

    fn rebuild_targets(&mut self) {
        self.targets = self
            .npcs
            .values()
            .filter(|npc| self.rules.matches(npc))
            .map(|npc| npc.id)
            .collect();
    }

    fn emit_highlights(&self) {
        self.emit(TrackerSignal::HighlightsRebuilt {
            targets: self.targets.len(),
        });
    }

    fn add_counter(&mut self) {
        if !self.config.show_infobox || self.counter.is_some() || self.assignment.name.is_empty() {
            return;
        }

        let icon_id = catalog::lookup(&self.assignment.name.to_lowercase())
            .map(|entry| entry.icon_id)
            .unwrap_or(ENCHANTED_GEM);

        let counter = CounterInfo {
            task_name: text::capitalize(&self.assignment.name),
            icon_id,
            count: self.assignment.remaining,
            location: self.assignment.location.clone().filter(|l| !l.is_empty()),
            points: self.read_int(POINTS_KEY),
            streak: self.read_int(STREAK_KEY),
            initial: self.assignment.initial,
        };

        self.counter = Some(counter.clone());
        self.emit(TrackerSignal::CounterAdded { counter });
    }

    fn remove_counter(&mut self) {
        if self.counter.take().is_some() {
            self.emit(TrackerSignal::CounterRemoved);
        }
    }

    /// Points and streak live in the counter tooltip, so it is rebuilt when they change
    fn refresh_counter(&mut self) {
        if self.counter.is_some() {
            self.remove_counter();
            self.add_counter();
        }
    }

    fn save(&self) {
        let a = &self.assignment;
        self.persist(AMOUNT_KEY, Some(&a.remaining.to_string()));
        self.persist(INIT_AMOUNT_KEY, Some(&a.initial.to_string()));
        self.persist(TASK_NAME_KEY, Some(&a.name));
        self.persist(TASK_LOC_KEY, a.location.as_deref());
    }

    fn persist(&self, key: &str, value: Option<&str>) {
        let result = match value {
            Some(v) => self.store.set(key, v),
            None => self.store.unset(key),
        };
        if let Err(e) = result {
            warn!(key = %key, error = %e, "Failed to persist profile value");
        }
    }

    fn read_int(&self, key: &str) -> Option<i32> {
        match self.store.get_int(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read profile value");
                None
            }
        }
    }

    fn emit(&self, signal: TrackerSignal) {
        // No subscribers is fine
        let _ = self.signal_tx.send(signal);
    }
}

use crate::matcher::NpcId;
use serde::{Deserialize, Serialize};

/// Assignment is the player's current task.
///
/// Inactive when `remaining == 0`; in that state `name` is empty and both counts are 0
/// (except transiently between a relog and the first reconciliation).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Task name as reported by the game (e.g. "rats")
    pub name: String,

    /// Kills left
    pub remaining: u32,

    /// Kills at assignment time; never below `remaining` while active
    pub initial: u32,

    /// Assigned area, if the task is location-bound
    pub location: Option<String>,
}

impl Assignment {
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }
}

/// Contents of the task counter shown to the player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterInfo {
    /// Capitalised task name
    pub task_name: String,
    pub icon_id: i32,
    pub count: u32,
    pub location: Option<String>,
    pub points: Option<i32>,
    pub streak: Option<i32>,
    pub initial: u32,
}

/// How a tracked NPC should be drawn
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub npc: NpcId,
    pub color: String,
    pub hull: bool,
    pub tile: bool,
    pub outline: bool,
}

/// Presentation signal broadcast by the tracker
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackerSignal {
    CounterAdded { counter: CounterInfo },
    CounterRemoved,
    CounterUpdated { count: u32 },
    /// Tracked NPC set or highlight settings changed; overlays should redraw
    HighlightsRebuilt { targets: usize },
    Notification { message: String },
}

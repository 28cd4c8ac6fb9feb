use crate::matcher::{Npc, NpcId};
use serde::{Deserialize, Serialize};

/// SlayerEvent is one notification from the game client.
///
/// Events arrive on the client thread in delivery order; the tracker consumes them
/// one at a time. Serialized as a tagged JSON object, e.g.
/// `{"type": "var_changed", "var": "task_size", "value": 12}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlayerEvent {
    /// Session state transition (login, hop, logout)
    GameStateChanged {
        state: GameState,
        /// Local player name, when known
        #[serde(default, skip_serializing_if = "Option::is_none")]
        player: Option<String>,
    },

    /// Periodic server tick
    GameTick,

    /// A tracked player var changed
    VarChanged { var: TaskVar, value: i32 },

    NpcSpawned { npc: Npc },

    NpcDespawned { id: NpcId },

    /// Chat line received or sent
    ChatMessage {
        kind: ChatKind,
        #[serde(default)]
        sender: String,
        message: String,
    },

    /// Local player submitted chat input that is waiting on a command handler
    ChatInput { value: String },

    /// Developer `::command args...`
    CommandExecuted {
        command: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

/// Session states the tracker distinguishes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    LoginScreen,
    LoggingIn,
    LoggedIn,
    Hopping,
    ConnectionLost,
}

impl GameState {
    /// Transitions after which the next task vars describe a resumed session
    pub fn starts_session(self) -> bool {
        matches!(self, GameState::LoggingIn | GameState::Hopping)
    }
}

/// Player vars carrying task state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskVar {
    /// Remaining kill count
    TaskSize,
    /// Creature id of the task
    TaskCreature,
    /// Location id of the task, 0 for none
    TaskLocation,
    /// Boss id, meaningful when the creature id is the boss sentinel
    TaskBoss,
    Points,
    Streak,
}

impl TaskVar {
    /// Vars whose change requires the task to be reconciled
    pub fn affects_task(self) -> bool {
        matches!(
            self,
            TaskVar::TaskSize | TaskVar::TaskCreature | TaskVar::TaskLocation
        )
    }
}

/// Chat channel of a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatKind {
    GameMessage,
    Spam,
    PublicChat,
    PrivateChat,
    PrivateChatOut,
    FriendsChat,
    ClanChat,
}

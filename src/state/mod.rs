// Task state machine and tracked NPC set

mod assignment;
mod engine;

pub use assignment::{Assignment, CounterInfo, Highlight, TrackerSignal};
pub use engine::{TaskTracker, TaskVars, SUPERIOR_MESSAGE};

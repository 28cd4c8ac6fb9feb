// Assignment catalog: known task names, related target names and counter icons

mod data;

use std::collections::HashMap;
use std::sync::OnceLock;

/// Icon used for the counter when the task is not in the catalog
pub const ENCHANTED_GEM: i32 = 4155;

/// Static description of one assignable task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Lower-case task name as reported by the game (e.g. "rats")
    pub name: &'static str,

    /// Other NPC names that count towards the task, in declaration order
    pub target_names: &'static [&'static str],

    /// Item id shown on the task counter
    pub icon_id: i32,
}

fn index() -> &'static HashMap<&'static str, &'static CatalogEntry> {
    static INDEX: OnceLock<HashMap<&'static str, &'static CatalogEntry>> = OnceLock::new();
    INDEX.get_or_init(|| data::TASKS.iter().map(|t| (t.name, t)).collect())
}

/// Look up a task by its canonical (lower-case) name.
///
/// Matching is exact; callers holding a display-cased name lower-case it first.
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    index().get(name).copied()
}

/// All catalog entries in declaration order
pub fn entries() -> &'static [CatalogEntry] {
    data::TASKS
}

// Game enum lookups for task creature, boss and location ids

use serde::Deserialize;
use std::collections::HashMap;

/// Creature id that stands for "a boss"; the boss itself comes from a separate var
pub const BOSS_TASK_ID: i32 = 98;

/// Resolves the ids reported in task vars to display strings.
pub trait NameResolver: Send + Sync {
    fn creature_name(&self, creature_id: i32) -> Option<String>;

    fn boss_name(&self, boss_id: i32) -> Option<String>;

    fn location_name(&self, location_id: i32) -> Option<String>;

    /// Every assignable task location
    fn locations(&self) -> Vec<String>;
}

/// One `{ id, name }` row of an enum table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumRow {
    pub id: i32,
    pub name: String,
}

/// Enum tables loaded from configuration.
///
/// ```toml
/// [[tables.creatures]]
/// id = 2
/// name = "rats"
///
/// [[tables.locations]]
/// id = 5
/// name = "Slayer Tower"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawTables")]
pub struct EnumTables {
    creatures: HashMap<i32, String>,
    bosses: HashMap<i32, String>,
    locations: HashMap<i32, String>,
}

#[derive(Deserialize, Default)]
struct RawTables {
    #[serde(default)]
    creatures: Vec<EnumRow>,
    #[serde(default)]
    bosses: Vec<EnumRow>,
    #[serde(default)]
    locations: Vec<EnumRow>,
}

impl From<RawTables> for EnumTables {
    fn from(raw: RawTables) -> Self {
        fn index(rows: Vec<EnumRow>) -> HashMap<i32, String> {
            rows.into_iter().map(|r| (r.id, r.name)).collect()
        }
        Self {
            creatures: index(raw.creatures),
            bosses: index(raw.bosses),
            locations: index(raw.locations),
        }
    }
}

impl EnumTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creature(mut self, id: i32, name: &str) -> Self {
        self.creatures.insert(id, name.to_string());
        self
    }

    pub fn with_boss(mut self, id: i32, name: &str) -> Self {
        self.bosses.insert(id, name.to_string());
        self
    }

    pub fn with_location(mut self, id: i32, name: &str) -> Self {
        self.locations.insert(id, name.to_string());
        self
    }
}

impl NameResolver for EnumTables {
    fn creature_name(&self, creature_id: i32) -> Option<String> {
        self.creatures.get(&creature_id).cloned()
    }

    fn boss_name(&self, boss_id: i32) -> Option<String> {
        self.bosses.get(&boss_id).cloned()
    }

    fn location_name(&self, location_id: i32) -> Option<String> {
        self.locations.get(&location_id).cloned()
    }

    fn locations(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.locations.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter()
            .filter_map(|id| self.locations.get(&id).cloned())
            .collect()
    }
}

/// Resolve the task name for a creature id, routing the boss sentinel to the boss table.
pub fn resolve_task_name(resolver: &dyn NameResolver, creature_id: i32, boss_id: i32) -> String {
    let name = if creature_id == BOSS_TASK_ID {
        resolver.boss_name(boss_id)
    } else {
        resolver.creature_name(creature_id)
    };
    name.unwrap_or_default()
}

/// Resolve the task location; id 0 means "no location".
pub fn resolve_location(resolver: &dyn NameResolver, location_id: i32) -> Option<String> {
    if location_id > 0 {
        resolver.location_name(location_id)
    } else {
        None
    }
}

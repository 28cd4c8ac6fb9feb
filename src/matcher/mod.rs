// Target name rules and NPC classification

use crate::catalog::CatalogEntry;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[cfg(test)]
mod tests;

/// Menu action for NPCs that are fought
pub const ATTACK_ACTION: &str = "Attack";

/// Menu action for NPCs that are harvested instead of fought (zygomite fungi)
pub const PICK_ACTION: &str = "Pick";

/// Identity of a live NPC (the client's NPC index)
pub type NpcId = u32;

/// A live NPC as seen by the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,

    /// Display name of the transformed composition; `None` when unresolved
    #[serde(default)]
    pub name: Option<String>,

    /// Menu actions offered by the NPC
    #[serde(default)]
    pub actions: Vec<String>,
}

/// Case-insensitive whole-word match on one target name
#[derive(Debug, Clone)]
pub struct MatchRule {
    target: String,
    pattern: Regex,
}

impl MatchRule {
    /// Build a rule matching `target` bounded by whitespace or the ends of the name.
    pub fn new(target: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&format!(r"(?:\s|^){}(?:\s|$)", regex::escape(target)))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            target: target.to_string(),
            pattern,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

/// Compiled rules for the current assignment.
///
/// An empty set matches nothing.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<MatchRule>,
}

impl RuleSet {
    /// Compile rules for a task.
    ///
    /// Produces one rule per catalog target name plus one for the task name with a
    /// trailing plural "s" removed. Unknown tasks and empty names compile to an empty set.
    pub fn compile(task_name: &str, entry: Option<&CatalogEntry>) -> Self {
        let Some(entry) = entry else {
            return Self::default();
        };
        if task_name.is_empty() {
            return Self::default();
        }

        let singular = task_name.strip_suffix('s').unwrap_or(task_name);
        let rules = entry
            .target_names
            .iter()
            .copied()
            .chain(std::iter::once(singular))
            .filter_map(|target| match MatchRule::new(target) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    warn!(target = %target, error = %e, "Failed to compile target rule, skipping");
                    None
                }
            })
            .collect();

        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchRule> {
        self.rules.iter()
    }

    /// Decide whether an NPC counts towards the task.
    pub fn matches(&self, npc: &Npc) -> bool {
        matches(self, npc.name.as_deref(), &npc.actions)
    }
}

/// Classify an NPC against a rule set.
///
/// Requires a non-empty rule set, a resolvable name that satisfies at least one rule,
/// and an "Attack" or "Pick" action.
pub fn matches(rules: &RuleSet, display_name: Option<&str>, actions: &[String]) -> bool {
    if rules.is_empty() {
        return false;
    }

    let Some(name) = display_name else {
        return false;
    };

    let name = name.replace('\u{00A0}', " ").to_lowercase();
    let actionable = actions
        .iter()
        .any(|a| a == ATTACK_ACTION || a == PICK_ACTION);

    actionable && rules.iter().any(|rule| rule.is_match(&name))
}

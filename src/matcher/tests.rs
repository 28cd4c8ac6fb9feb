use super::*;
use crate::catalog;

fn attackable(name: &str) -> Npc {
    Npc {
        id: 1,
        name: Some(name.to_string()),
        actions: vec!["Attack".to_string(), "Examine".to_string()],
    }
}

fn rules_for(task: &str) -> RuleSet {
    RuleSet::compile(task, catalog::lookup(task))
}

#[test]
fn test_whole_word_match() {
    let rules = rules_for("rats");
    assert!(rules.matches(&attackable("Giant rat")));
    assert!(rules.matches(&attackable("Rat")));
    assert!(!rules.matches(&attackable("Ratcatcher")));
    assert!(!rules.matches(&attackable("Pirate")));
}

#[test]
fn test_catalog_target_names_compiled() {
    let rules = rules_for("birds");
    // seven alternates plus the singular task name
    assert_eq!(rules.len(), 8);
    assert!(rules.matches(&attackable("Chicken")));
    assert!(rules.matches(&attackable("Undead chicken")));
    assert!(rules.matches(&attackable("Bird")));
}

#[test]
fn test_case_insensitive_and_nbsp() {
    let rules = rules_for("aberrant spectres");
    assert!(rules.matches(&attackable("Aberrant\u{00A0}spectre")));
    assert!(rules.matches(&attackable("DEVIANT SPECTRE")));
}

#[test]
fn test_fail_closed_without_entry() {
    let rules = RuleSet::compile("made up task", None);
    assert!(rules.is_empty());
    for name in ["made up task", "Made up tas", "", "Giant rat"] {
        assert!(!rules.matches(&attackable(name)));
    }
}

#[test]
fn test_fail_closed_with_empty_name() {
    let rules = RuleSet::compile("", catalog::lookup("rats"));
    assert!(rules.is_empty());
    assert!(!rules.matches(&attackable("Giant rat")));
}

#[test]
fn test_requires_attack_or_pick_action() {
    let rules = rules_for("rats");
    let talk_only = Npc {
        id: 7,
        name: Some("Giant rat".to_string()),
        actions: vec!["Talk-to".to_string()],
    };
    assert!(!rules.matches(&talk_only));

    let zygomites = rules_for("mutated zygomites");
    let fungi = Npc {
        id: 8,
        name: Some("Fungi".to_string()),
        actions: vec!["Pick".to_string()],
    };
    assert!(zygomites.matches(&fungi));
}

#[test]
fn test_unresolved_name_never_matches() {
    let rules = rules_for("rats");
    let npc = Npc {
        id: 3,
        name: None,
        actions: vec!["Attack".to_string()],
    };
    assert!(!rules.matches(&npc));
}

#[test]
fn test_rule_escapes_target() {
    let rule = MatchRule::new("K'ril Tsutsaroth").unwrap();
    assert_eq!(rule.target(), "K'ril Tsutsaroth");
    assert!(rule.is_match("k'ril tsutsaroth"));

    let dotted = MatchRule::new("a.b").unwrap();
    assert!(!dotted.is_match("axb"));
}

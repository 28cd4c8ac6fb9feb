// Chat text helpers

use regex::Regex;
use std::sync::OnceLock;

const NBSP: char = '\u{00A0}';

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

/// Strip `<col=..>`, `<img=..>` and similar markup from a chat string.
///
/// An unclosed `<` is left as text.
pub fn remove_tags(text: &str) -> String {
    tag_pattern().replace_all(text, "").into_owned()
}

/// Replace non-breaking spaces with plain spaces.
pub fn normalize_spaces(text: &str) -> String {
    text.replace(NBSP, " ")
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_tags() {
        assert_eq!(remove_tags("<col=ff0000>Zezima</col>"), "Zezima");
        assert_eq!(remove_tags("<img=2>Iron Man"), "Iron Man");
        assert_eq!(remove_tags("plain"), "plain");
    }

    #[test]
    fn test_remove_tags_keeps_unclosed_bracket() {
        assert_eq!(remove_tags("a < b"), "a < b");
        assert_eq!(remove_tags("<col=ff0000>5 < 6"), "5 < 6");
        assert_eq!(remove_tags("x > y"), "x > y");
    }

    #[test]
    fn test_normalize_spaces() {
        assert_eq!(normalize_spaces("Giant\u{00A0}rat"), "Giant rat");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("rats"), "Rats");
        assert_eq!(capitalize("the Abyssal Sire"), "The Abyssal Sire");
        assert_eq!(capitalize(""), "");
    }
}

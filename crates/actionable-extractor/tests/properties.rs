//! Property tests for the rule-based extractor

use actionable_extractor::extract_action_items;
use proptest::prelude::*;
use std::collections::HashSet;

/// Plain words that never start with a listed verb or contain a marker
fn plain_phrase() -> impl Strategy<Value = String> {
    prop::collection::vec("(apple|river|blue|quiet|seven|paper)", 1..5)
        .prop_map(|words| words.join(" "))
}

fn bullet() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-".to_string()),
        Just("*".to_string()),
        Just("•".to_string()),
        (1u32..100).prop_map(|n| format!("{}.", n)),
    ]
}

fn keyword() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("todo:".to_string()),
        Just("TODO:".to_string()),
        Just("Action:".to_string()),
        Just("next:".to_string()),
    ]
}

proptest! {
    /// Property: whitespace-only input yields nothing
    #[test]
    fn test_whitespace_yields_nothing(text in "[ \t\r\n]*") {
        prop_assert!(extract_action_items(&text).is_empty());
    }

    /// Property: one item per bulleted line, in order, decoration stripped
    #[test]
    fn test_bulleted_lines_map_one_to_one(
        lines in prop::collection::vec((bullet(), any::<bool>(), plain_phrase()), 1..8)
    ) {
        let text = lines
            .iter()
            .enumerate()
            .map(|(idx, (bullet, checkbox, phrase))| {
                let checkbox = if *checkbox { "[ ] " } else { "" };
                format!("{} {}{} {}", bullet, checkbox, phrase, idx)
            })
            .collect::<Vec<_>>()
            .join("\n");

        let expected: Vec<String> = lines
            .iter()
            .enumerate()
            .map(|(idx, (_, _, phrase))| format!("{} {}", phrase, idx))
            .collect();

        prop_assert_eq!(extract_action_items(&text), expected);
    }

    /// Property: one item per keyword line, kept verbatim, in order
    #[test]
    fn test_keyword_lines_kept_verbatim(
        lines in prop::collection::vec((keyword(), plain_phrase()), 1..8)
    ) {
        let expected: Vec<String> = lines
            .iter()
            .enumerate()
            .map(|(idx, (keyword, phrase))| format!("{} {} {}", keyword, phrase, idx))
            .collect();
        let text = expected.join("\n");

        prop_assert_eq!(extract_action_items(&text), expected);
    }

    /// Property: unmarked text without imperative openers yields nothing
    #[test]
    fn test_plain_sentences_yield_nothing(
        sentences in prop::collection::vec(plain_phrase(), 1..6)
    ) {
        let text = sentences
            .iter()
            .map(|s| format!("{}.", s))
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert!(extract_action_items(&text).is_empty());
    }

    /// Property: results are non-empty and unique ignoring case
    #[test]
    fn test_results_unique_and_non_empty(text in "\\PC{0,200}") {
        let items = extract_action_items(&text);
        let mut seen = HashSet::new();
        for item in &items {
            prop_assert!(!item.trim().is_empty());
            prop_assert!(seen.insert(item.to_lowercase()), "duplicate item {:?}", item);
        }
    }

    /// Property: extraction is deterministic
    #[test]
    fn test_deterministic(text in "\\PC{0,200}") {
        prop_assert_eq!(extract_action_items(&text), extract_action_items(&text));
    }
}

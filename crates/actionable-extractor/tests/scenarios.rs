//! End-to-end behaviour of the rule-based extractor
//!
//! These tests exercise the public API only.

use actionable_extractor::{extract_action_items, ActionItemExtractor, ExtractorConfig};

#[test]
fn test_meeting_notes_with_mixed_markers() {
    let text = "- [ ] Set up database\n* implement API extract endpoint\n1. Write tests\nSome narrative sentence.";
    assert_eq!(
        extract_action_items(text),
        vec!["Set up database", "implement API extract endpoint", "Write tests"]
    );
}

#[test]
fn test_indented_notes_with_header() {
    let text = "
    Notes from meeting:
    - [ ] Set up database
    * implement API extract endpoint
    1. Write tests
    Some narrative sentence.
    ";
    assert_eq!(
        extract_action_items(text),
        vec!["Set up database", "implement API extract endpoint", "Write tests"]
    );
}

#[test]
fn test_keyword_prefix_is_kept() {
    assert_eq!(
        extract_action_items("TODO: Call the dentist"),
        vec!["TODO: Call the dentist"]
    );
}

#[test]
fn test_keyword_prefix_stripped_when_normalized() {
    let extractor = ActionItemExtractor::new(ExtractorConfig::normalized()).unwrap();
    let text = "TODO: Call the client\nAction: Review pull request\nNext: Update the roadmap";
    assert_eq!(
        extractor.extract(text),
        vec!["Call the client", "Review pull request", "Update the roadmap"]
    );
}

#[test]
fn test_narrative_without_imperative() {
    assert!(extract_action_items("We need to finish the report by Friday.").is_empty());
}

#[test]
fn test_imperative_sentences_fallback() {
    assert_eq!(
        extract_action_items("Add the missing index. Verify the migration ran."),
        vec!["Add the missing index.", "Verify the migration ran."]
    );
}

#[test]
fn test_fallback_keeps_whole_sentence() {
    assert_eq!(
        extract_action_items("Nice weather today. fix the flaky test!  Thanks"),
        vec!["fix the flaky test!"]
    );
}

#[test]
fn test_empty_and_whitespace_input() {
    for text in ["", " ", "\n\n", "\t \r\n "] {
        assert!(extract_action_items(text).is_empty(), "input {:?}", text);
    }
}

#[test]
fn test_duplicate_checkbox_and_plain_bullet() {
    let text = "- [ ] Buy milk\nnarrative line\n- buy milk";
    assert_eq!(extract_action_items(text), vec!["Buy milk"]);
}

#[test]
fn test_duplicates_across_marker_kinds() {
    let text = "- [ ] Buy groceries\n- buy groceries\nTODO: Buy groceries";
    // The keyword line keeps its prefix, so it is a distinct item
    assert_eq!(
        extract_action_items(text),
        vec!["Buy groceries", "TODO: Buy groceries"]
    );
}

#[test]
fn test_crlf_line_endings() {
    let text = "- first\r\n- second\r\n\r\n- third";
    assert_eq!(extract_action_items(text), vec!["first", "second", "third"]);
}

#[test]
fn test_bare_checkbox_line_yields_nothing() {
    assert!(extract_action_items("- [ ]").is_empty());
}

#[test]
fn test_bare_checkbox_suppresses_sentence_fallback() {
    assert!(extract_action_items("- [ ]\nAdd the missing index.").is_empty());
}

#[test]
fn test_bare_checkbox_keeps_other_marked_lines() {
    assert_eq!(
        extract_action_items("- [ ]\n- Write tests\nAdd the missing index."),
        vec!["Write tests"]
    );
}

#[test]
fn test_non_latin_notes() {
    assert_eq!(extract_action_items("- Купить молоко"), vec!["Купить молоко"]);
    assert!(extract_action_items("Купить молоко. Позвонить маме.").is_empty());
}

#[test]
fn test_custom_imperative_verbs() {
    let config = ExtractorConfig {
        imperative_verbs: vec!["schedule".to_string(), "send".to_string()],
        ..ExtractorConfig::default()
    };
    let extractor = ActionItemExtractor::new(config).unwrap();
    let text = "Schedule a team meeting next week. Add a test. Send the invoice to the client.";
    assert_eq!(
        extractor.extract(text),
        vec!["Schedule a team meeting next week.", "Send the invoice to the client."]
    );
}

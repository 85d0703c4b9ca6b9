use super::*;
use crate::kernel::services::ports::EditorConfig;
use crate::models::SemanticPosition;

fn pos(line: usize, col: usize) -> Option<SemanticPosition> {
    Some(SemanticPosition::new(line, col, col))
}

fn seeded(text: &str) -> EditorState {
    let mut state = EditorState::new(EditorConfig::default());
    let _ = state.dispatch_action(EditorAction::SetContent {
        text: text.to_string(),
    });
    state
}

#[test]
fn set_content_renders_without_compiling() {
    let mut state = EditorState::new(EditorConfig::default());
    let (changed, effects) = state.dispatch_action(EditorAction::SetContent {
        text: "abc".to_string(),
    });
    assert!(changed);
    assert!(effects.is_empty());
    assert_eq!(state.current().text, "abc");
}

#[test]
fn unchanged_source_is_ignored() {
    let mut state = seeded("abc");
    let (changed, effects) = state.dispatch_action(EditorAction::SourceChanged {
        text: "abc".to_string(),
        position: pos(0, 2),
    });
    assert!(!changed);
    assert!(effects.is_empty());
    assert_eq!(state.history().history().len(), 1);
}

#[test]
fn source_change_commits_and_compiles() {
    let mut state = seeded("abc");
    let (changed, effects) = state.dispatch_action(EditorAction::SourceChanged {
        text: "abcd".to_string(),
        position: pos(0, 4),
    });
    assert!(changed);
    assert_eq!(
        effects,
        vec![Effect::Compile {
            generation: 1,
            source: "abcd".to_string()
        }]
    );
    assert_eq!(state.current().position, pos(0, 4));
}

#[test]
fn paste_without_position_is_aborted() {
    let mut state = seeded("abc");
    let (changed, effects) = state.dispatch_action(EditorAction::Paste {
        text: "abc".to_string(),
        position: None,
        inserted: "x".to_string(),
    });
    assert!(!changed);
    assert!(effects.is_empty());
    assert_eq!(state.generation(), 0);
}

#[test]
fn paste_expands_tabs_before_inserting() {
    let mut state = seeded("ab");
    let (changed, _) = state.dispatch_action(EditorAction::Paste {
        text: "ab".to_string(),
        position: pos(0, 1),
        inserted: "\tx\r\ny".to_string(),
    });
    assert!(changed);
    let current = state.current();
    assert_eq!(current.text, "a    x\nyb");
    assert_eq!(current.position, pos(1, 1));
}

#[test]
fn tab_on_stale_line_changes_nothing() {
    let mut state = seeded("ab\ncd");
    let (changed, effects) = state.dispatch_action(EditorAction::InsertTab {
        text: "ab\ncd".to_string(),
        position: pos(99, 0),
    });
    assert!(!changed);
    assert!(effects.is_empty());
    assert_eq!(state.current().text, "ab\ncd");
}

#[test]
fn tab_uses_configured_width() {
    let mut state = EditorState::new(EditorConfig {
        tab_size: 2,
        ..EditorConfig::default()
    });
    let _ = state.dispatch_action(EditorAction::SetContent {
        text: "ab".to_string(),
    });
    let _ = state.dispatch_action(EditorAction::InsertTab {
        text: "ab".to_string(),
        position: pos(0, 1),
    });
    assert_eq!(state.current().text, "a  b");
    assert_eq!(state.current().position, pos(0, 3));
}

#[test]
fn undo_and_redo_replay_stored_entries() {
    let mut state = seeded("a");
    let _ = state.dispatch_action(EditorAction::SourceChanged {
        text: "ab".to_string(),
        position: pos(0, 2),
    });

    let (changed, effects) = state.dispatch_action(EditorAction::Undo);
    assert!(changed);
    assert_eq!(state.current(), SourceState::new("a", None));
    assert!(matches!(effects.as_slice(), [Effect::Compile { source, .. }] if source == "a"));

    let (changed, _) = state.dispatch_action(EditorAction::Redo);
    assert!(changed);
    assert_eq!(state.current(), SourceState::new("ab", pos(0, 2)));
}

#[test]
fn undo_at_first_entry_is_noop() {
    let mut state = seeded("a");
    let (changed, effects) = state.dispatch_action(EditorAction::Undo);
    assert!(!changed);
    assert!(effects.is_empty());

    let (changed, _) = state.dispatch_action(EditorAction::Redo);
    assert!(!changed);
}

#[test]
fn edit_after_undo_discards_redo_branch() {
    let mut state = seeded("a");
    for text in ["ab", "abc"] {
        let _ = state.dispatch_action(EditorAction::SourceChanged {
            text: text.to_string(),
            position: None,
        });
    }
    let _ = state.dispatch_action(EditorAction::Undo);
    let _ = state.dispatch_action(EditorAction::SourceChanged {
        text: "abX".to_string(),
        position: None,
    });
    let texts: Vec<&str> = state
        .history()
        .history()
        .iter()
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(texts, vec!["a", "ab", "abX"]);
    assert!(!state.history().can_redo());
}

#[test]
fn run_uses_current_text_and_new_generation() {
    let mut state = seeded("abc");
    let _ = state.dispatch_action(EditorAction::SourceChanged {
        text: "abcd".to_string(),
        position: None,
    });
    let (changed, effects) = state.dispatch_action(EditorAction::Run);
    assert!(!changed);
    assert_eq!(
        effects,
        vec![Effect::Run {
            generation: 2,
            source: "abcd".to_string()
        }]
    );
}

#[test]
fn compile_on_edit_can_be_disabled() {
    let mut state = EditorState::new(EditorConfig {
        compile_on_edit: false,
        ..EditorConfig::default()
    });
    let (changed, effects) = state.dispatch_action(EditorAction::SourceChanged {
        text: "x".to_string(),
        position: None,
    });
    assert!(changed);
    assert!(effects.is_empty());
}

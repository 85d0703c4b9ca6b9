use super::*;
use crate::ui::dom::{Document, NodeId};

fn editor(source: &str) -> (Document, SourceView<Document>) {
    let mut doc = Document::new();
    let body = doc.body();
    let input = doc.append_element(body, "div");
    let mut view = SourceView::new(input, EditorConfig::default());
    let effects = view.set_content(&mut doc, source);
    assert!(effects.is_empty());
    (doc, view)
}

fn place(doc: &mut Document, input: NodeId, line: usize, col: usize) {
    let text = extract_source(doc, input);
    let line_text = text.split('\n').nth(line).unwrap();
    restore(doc, input, Some(SemanticPosition::in_line(line, line_text, col)));
}

#[test]
fn set_content_renders_lines() {
    let (doc, view) = editor("a\nb");
    assert_eq!(doc.children(view.input()).len(), 2);
    assert_eq!(view.state().current().text, "a\nb");
}

#[test]
fn typing_commits_and_requests_compile() {
    let (mut doc, mut view) = editor("ab");
    let input = view.input();
    place(&mut doc, input, 0, 2);
    assert!(doc.type_text("c"));

    let effects = view.on_source_change(&mut doc);
    assert_eq!(
        effects,
        vec![Effect::Compile {
            generation: 1,
            source: "abc".to_string()
        }]
    );
    assert_eq!(extract_source(&doc, input), "abc");
    assert_eq!(capture(&doc, input), Some(SemanticPosition::new(0, 3, 3)));
}

#[test]
fn source_change_without_edit_is_ignored() {
    let (mut doc, mut view) = editor("ab");
    assert!(view.on_source_change(&mut doc).is_empty());
    assert_eq!(view.state().history().history().len(), 1);
}

#[test]
fn paste_inserts_lines_and_moves_cursor() {
    let (mut doc, mut view) = editor("ab\ncd");
    let input = view.input();
    place(&mut doc, input, 0, 1);

    let effects = view.on_paste(&mut doc, "X\nY");
    assert_eq!(effects.len(), 1);
    assert_eq!(extract_source(&doc, input), "aX\nYb\ncd");
    assert_eq!(capture(&doc, input), Some(SemanticPosition::new(1, 1, 1)));
}

#[test]
fn paste_without_cursor_does_nothing() {
    let (mut doc, mut view) = editor("ab");
    assert!(view.on_paste(&mut doc, "X").is_empty());
    assert_eq!(extract_source(&doc, view.input()), "ab");
}

#[test]
fn tab_key_is_handled() {
    let (mut doc, mut view) = editor("ab");
    let input = view.input();
    place(&mut doc, input, 0, 1);

    let (prevent, effects) = view.on_key_down(&mut doc, "Tab");
    view.on_key_up("Tab");
    assert!(prevent);
    assert_eq!(effects.len(), 1);
    assert_eq!(extract_source(&doc, input), "a    b");
    assert_eq!(capture(&doc, input), Some(SemanticPosition::new(0, 5, 5)));
}

#[test]
fn undo_restores_text_and_cursor() {
    let (mut doc, mut view) = editor("ab");
    let input = view.input();
    place(&mut doc, input, 0, 1);
    view.on_key_down(&mut doc, "Tab");
    view.on_key_up("Tab");
    place(&mut doc, input, 0, 6);
    view.on_paste(&mut doc, "!");
    assert_eq!(extract_source(&doc, input), "a    b!");

    view.on_key_down(&mut doc, "Control");
    let (prevent, _) = view.on_key_down(&mut doc, "z");
    view.on_key_up("z");
    assert!(prevent);
    assert_eq!(extract_source(&doc, input), "a    b");
    assert_eq!(capture(&doc, input), Some(SemanticPosition::new(0, 5, 5)));

    view.on_key_down(&mut doc, "Shift");
    view.on_key_down(&mut doc, "z");
    view.on_key_up("z");
    view.on_key_up("Shift");
    view.on_key_up("Control");
    assert_eq!(extract_source(&doc, input), "a    b!");
    assert_eq!(capture(&doc, input), Some(SemanticPosition::new(0, 7, 7)));
}

#[test]
fn shift_enter_runs_current_text() {
    let (mut doc, mut view) = editor("src");
    view.on_key_down(&mut doc, "Shift");
    let (prevent, effects) = view.on_key_down(&mut doc, "Enter");
    assert!(prevent);
    assert_eq!(
        effects,
        vec![Effect::Run {
            generation: 1,
            source: "src".to_string()
        }]
    );
}

#[test]
fn unbound_keys_pass_through() {
    let (mut doc, mut view) = editor("ab");
    let (prevent, effects) = view.on_key_down(&mut doc, "a");
    assert!(!prevent);
    assert!(effects.is_empty());
}

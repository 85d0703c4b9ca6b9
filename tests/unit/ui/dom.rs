use super::*;

fn line_with_text(doc: &mut Document, text: &str) -> (NodeId, NodeId) {
    let body = doc.body();
    let line = doc.append_element(body, "div");
    let leaf = doc.append_text(line, text);
    (line, leaf)
}

#[test]
fn elements_are_upper_case_and_carry_attributes() {
    let mut doc = Document::new();
    let body = doc.body();
    let div = doc.append_element(body, "div");
    doc.add_class(div, "code_container");
    doc.add_class(div, "code_container");
    doc.set_attribute(div, "contenteditable", "true");
    doc.set_attribute(div, "contenteditable", "false");

    assert_eq!(doc.tag(div), Some("DIV"));
    assert!(doc.has_class(div, "code_container"));
    assert_eq!(doc.attribute(div, "contenteditable"), Some("false"));
    assert_eq!(doc.find_by_class("code_container"), Some(div));
    assert_eq!(doc.parent(div), Some(body));
}

#[test]
fn type_text_inserts_at_utf16_offset() {
    let mut doc = Document::new();
    let (_, leaf) = line_with_text(&mut doc, "😀b");
    doc.set_selection(leaf, 2);

    assert!(doc.type_text("a"));
    assert_eq!(doc.kind(leaf), Some(NodeKind::Text("😀ab")));
    assert_eq!(doc.selection(), Some(HostSelection { node: leaf, offset: 3 }));
}

#[test]
fn type_text_replaces_break_placeholder() {
    let mut doc = Document::new();
    let body = doc.body();
    let line = doc.append_element(body, "div");
    let br = doc.append_element(line, "br");
    doc.set_selection(line, 0);

    assert!(doc.type_text("x"));
    assert!(!doc.contains(br));
    let children = doc.children(line).to_vec();
    assert_eq!(children.len(), 1);
    assert_eq!(doc.kind(children[0]), Some(NodeKind::Text("x")));
    assert_eq!(
        doc.selection(),
        Some(HostSelection {
            node: children[0],
            offset: 1
        })
    );
}

#[test]
fn type_text_without_selection_does_nothing() {
    let mut doc = Document::new();
    line_with_text(&mut doc, "a");
    assert!(!doc.type_text("x"));
}

#[test]
fn delete_backward_removes_whole_surrogate_pair() {
    let mut doc = Document::new();
    let (_, leaf) = line_with_text(&mut doc, "a😀");
    doc.set_selection(leaf, 3);

    assert!(doc.delete_backward());
    assert_eq!(doc.kind(leaf), Some(NodeKind::Text("a")));
    assert_eq!(doc.selection(), Some(HostSelection { node: leaf, offset: 1 }));
}

#[test]
fn clearing_children_moves_selection_to_parent() {
    let mut doc = Document::new();
    let (line, leaf) = line_with_text(&mut doc, "abc");
    doc.set_selection(leaf, 2);

    doc.clear_children(line);
    assert!(!doc.contains(leaf));
    assert!(doc.children(line).is_empty());
    assert_eq!(doc.selection(), Some(HostSelection { node: line, offset: 0 }));
}

#[test]
fn selection_outside_cleared_nodes_is_kept() {
    let mut doc = Document::new();
    let (first, _) = line_with_text(&mut doc, "a");
    let (_, other) = line_with_text(&mut doc, "b");
    doc.set_selection(other, 1);

    doc.clear_children(first);
    assert_eq!(doc.selection(), Some(HostSelection { node: other, offset: 1 }));
}

#[test]
fn find_by_class_requires_unique_match() {
    let mut doc = Document::new();
    let body = doc.body();
    let a = doc.append_element(body, "div");
    let b = doc.append_element(body, "div");
    doc.add_class(a, "line");
    doc.add_class(b, "line");
    assert_eq!(doc.find_by_class("line"), None);
    assert_eq!(doc.find_by_class("missing"), None);
}

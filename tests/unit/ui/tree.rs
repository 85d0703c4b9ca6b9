use super::*;
use crate::ui::dom::Document;

#[test]
fn text_content_flattens_formatting() {
    let mut doc = Document::new();
    let body = doc.body();
    let line = doc.append_element(body, "div");
    doc.append_text(line, "a ");
    let span = doc.append_element(line, "span");
    doc.append_text(span, "func");
    doc.append_text(line, " b");

    assert_eq!(text_content(&doc, line), "a func b");
    assert_eq!(leaves(&doc, line).len(), 3);
    assert!(is_element(&doc, span, "span"));
    assert!(!is_text(&doc, span));
}

#[test]
fn first_leaf_descends_into_first_child() {
    let mut doc = Document::new();
    let body = doc.body();
    let line = doc.append_element(body, "div");
    let span = doc.append_element(line, "span");
    let leaf = doc.append_text(span, "x");
    doc.append_text(line, "y");

    assert_eq!(first_leaf(&doc, line), leaf);
    assert_eq!(first_leaf(&doc, leaf), leaf);
}

#[test]
fn child_of_finds_direct_child_ancestor() {
    let mut doc = Document::new();
    let body = doc.body();
    let container = doc.append_element(body, "div");
    let line = doc.append_element(container, "div");
    let span = doc.append_element(line, "span");
    let leaf = doc.append_text(span, "x");

    assert_eq!(child_of(&doc, container, leaf), Some(line));
    assert_eq!(child_of(&doc, container, line), Some(line));
    assert_eq!(child_of(&doc, line, leaf), Some(span));
    assert_eq!(child_of(&doc, container, body), None);
    assert!(is_inclusive_ancestor(&doc, container, leaf));
    assert!(!is_inclusive_ancestor(&doc, leaf, container));
}

#[test]
fn preceding_siblings_in_order() {
    let mut doc = Document::new();
    let body = doc.body();
    let a = doc.append_element(body, "div");
    let b = doc.append_element(body, "div");
    let c = doc.append_element(body, "div");

    assert_eq!(preceding_siblings(&doc, c), &[a, b]);
    assert!(preceding_siblings(&doc, a).is_empty());
    assert!(preceding_siblings(&doc, body).is_empty());
}

use super::*;
use crate::kernel::services::ports::config::default_keyword_groups;

fn colored<'a>(line: &'a str, spans: &[HighlightSpan]) -> Vec<(&'a str, String)> {
    spans
        .iter()
        .map(|s| (&line[s.start..s.end], s.color.clone()))
        .collect()
}

#[test]
fn keywords_and_types_get_their_group_color() {
    let line = "func Add(x int64) int64 {";
    let spans = highlight_line(line, &default_keyword_groups());
    assert_eq!(
        colored(line, &spans),
        vec![
            ("func", "var(--language-keyword)".to_string()),
            ("int64", "var(--type-keyword)".to_string()),
            ("int64", "var(--type-keyword)".to_string()),
        ]
    );
}

#[test]
fn keywords_inside_identifiers_are_not_highlighted() {
    let line = "variable := uint32(returned)";
    assert!(highlight_line(line, &default_keyword_groups()).is_empty());
}

#[test]
fn spans_are_byte_ranges_after_multibyte_text() {
    let line = "é return";
    let spans = highlight_line(line, &default_keyword_groups());
    assert_eq!(spans.len(), 1);
    assert_eq!(&line[spans[0].start..spans[0].end], "return");
}

#[test]
fn no_groups_no_spans() {
    assert!(highlight_line("func main", &[]).is_empty());
}

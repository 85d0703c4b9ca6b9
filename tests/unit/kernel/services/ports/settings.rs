use super::*;

#[test]
fn empty_object_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").expect("deserialize Settings");
    let config = settings.editor_config();
    assert_eq!(config.tab_size, 4);
    assert!(config.compile_on_edit);
    assert_eq!(config.keyword_groups, default_keyword_groups());
}

#[test]
fn partial_editor_section_keeps_other_defaults() {
    let json = r#"{ "editor": { "tab_size": 2 } }"#;
    let settings: Settings = serde_json::from_str(json).expect("deserialize Settings");
    assert_eq!(settings.editor.tab_size, 2);
    assert!(settings.editor.compile_on_edit);
    assert_eq!(settings.editor.keywords.len(), 2);
}

#[test]
fn zero_tab_size_is_clamped() {
    let json = r#"{ "editor": { "tab_size": 0, "compile_on_edit": false } }"#;
    let settings: Settings = serde_json::from_str(json).expect("deserialize Settings");
    let config = settings.editor_config();
    assert_eq!(config.tab_size, 1);
    assert!(!config.compile_on_edit);
}

#[test]
fn custom_keywords_replace_defaults() {
    let json = r##"{ "editor": { "keywords": [ { "color": "#ff0000", "words": ["let"] } ] } }"##;
    let settings: Settings = serde_json::from_str(json).expect("deserialize Settings");
    let config = settings.editor_config();
    assert_eq!(config.keyword_groups, vec![KeywordGroup::new("#ff0000", &["let"])]);
}

use serde::{Deserialize, Serialize};

/// 一组使用同一颜色高亮的关键字
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub color: String,
    pub words: Vec<String>,
}

impl KeywordGroup {
    pub fn new(color: &str, words: &[&str]) -> Self {
        Self {
            color: color.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EditorConfig {
    pub tab_size: u8,
    pub keyword_groups: Vec<KeywordGroup>,
    /// 每次编辑后是否在后台编译
    pub compile_on_edit: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            keyword_groups: default_keyword_groups(),
            compile_on_edit: true,
        }
    }
}

impl EditorConfig {
    pub fn tab_spaces(&self) -> String {
        " ".repeat(self.tab_size as usize)
    }
}

pub fn default_keyword_groups() -> Vec<KeywordGroup> {
    vec![
        KeywordGroup::new(
            "var(--language-keyword)",
            &["var", "const", "return", "struct", "func", "package", "import"],
        ),
        KeywordGroup::new(
            "var(--type-keyword)",
            &[
                "bool", "string", "int32", "int64", "bfloat64", "float32", "float64",
            ],
        ),
    ]
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;

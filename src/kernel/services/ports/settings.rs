use serde::{Deserialize, Serialize};

use super::config::{default_keyword_groups, EditorConfig, KeywordGroup};

/// `setting.json` 的文件结构，缺失字段取默认值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default = "default_tab_size")]
    pub tab_size: u8,
    #[serde(default = "default_keyword_groups")]
    pub keywords: Vec<KeywordGroup>,
    #[serde(default = "default_true")]
    pub compile_on_edit: bool,
}

fn default_tab_size() -> u8 {
    4
}

fn default_true() -> bool {
    true
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            keywords: default_keyword_groups(),
            compile_on_edit: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor: EditorSettings::default(),
        }
    }
}

impl Settings {
    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            // 0 宽的 Tab 没有意义
            tab_size: self.editor.tab_size.max(1),
            keyword_groups: self.editor.keywords.clone(),
            compile_on_edit: self.editor.compile_on_edit,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;

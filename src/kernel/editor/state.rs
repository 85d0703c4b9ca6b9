use std::fmt;

use crate::kernel::services::ports::EditorConfig;
use crate::models::{History, SemanticPosition};

/// 历史中的一条记录：整份源码和当时的光标
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceState {
    pub text: String,
    pub position: Option<SemanticPosition>,
}

impl SourceState {
    pub fn new(text: impl Into<String>, position: Option<SemanticPosition>) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

impl fmt::Display for SourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{}:{}:{}", pos.line(), pos.column(), self.text),
            None => write!(f, "-1:-1:{}", self.text),
        }
    }
}

/// 只比较文本：单纯移动光标不产生历史记录
pub fn same_source(a: &SourceState, b: &SourceState) -> bool {
    a.text == b.text
}

pub struct EditorState {
    pub(super) history: History<SourceState>,
    pub(super) config: EditorConfig,
    /// 最近一次派发的后台任务编号
    pub(super) generation: u64,
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            history: History::new(same_source),
            config,
            generation: 0,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn current(&self) -> SourceState {
        self.history.current()
    }

    pub fn history(&self) -> &History<SourceState> {
        &self.history
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(super) fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/state.rs"]
mod tests;

//! 源码编辑区
//!
//! 每次状态转换：从渲染树取出文本 → 记录光标 → 交给 `EditorState` →
//! 需要时按历史当前项重绘并恢复光标。整个过程在一次回调内同步完成，
//! 编译等副作用以 `Effect` 返回给上层派发。

use crate::kernel::services::ports::{EditorConfig, HostTree};
use crate::kernel::{EditorAction, EditorState, Effect};
use crate::models::SemanticPosition;
use crate::ui::{capture, extract_source, render_source, restore, KeyCommand, Keys};

pub struct SourceView<T: HostTree> {
    input: T::Node,
    keys: Keys,
    state: EditorState,
}

impl<T: HostTree> SourceView<T> {
    pub fn new(input: T::Node, config: EditorConfig) -> Self {
        Self {
            input,
            keys: Keys::new(),
            state: EditorState::new(config),
        }
    }

    pub fn input(&self) -> T::Node {
        self.input
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn set_content(&mut self, tree: &mut T, source: &str) -> Vec<Effect> {
        self.update(
            tree,
            EditorAction::SetContent {
                text: source.to_string(),
            },
        )
    }

    /// 宿主原生输入之后调用
    pub fn on_source_change(&mut self, tree: &mut T) -> Vec<Effect> {
        let (text, position) = self.snapshot(tree);
        self.update(tree, EditorAction::SourceChanged { text, position })
    }

    pub fn on_paste(&mut self, tree: &mut T, inserted: &str) -> Vec<Effect> {
        let (text, position) = self.snapshot(tree);
        self.update(
            tree,
            EditorAction::Paste {
                text,
                position,
                inserted: inserted.to_string(),
            },
        )
    }

    pub fn on_run(&mut self, tree: &mut T) -> Vec<Effect> {
        self.update(tree, EditorAction::Run)
    }

    /// 返回 (是否阻止宿主默认行为, 副作用)
    pub fn on_key_down(&mut self, tree: &mut T, key: &str) -> (bool, Vec<Effect>) {
        self.keys.on_key_down(key);
        let handled = self.keys.command().map(|command| {
            tracing::debug!(?command, key, "key command");
            match command {
                KeyCommand::Run => self.update(tree, EditorAction::Run),
                KeyCommand::InsertTab => {
                    let (text, position) = self.snapshot(tree);
                    self.update(tree, EditorAction::InsertTab { text, position })
                }
                KeyCommand::Undo => self.update(tree, EditorAction::Undo),
                KeyCommand::Redo => self.update(tree, EditorAction::Redo),
            }
        });
        self.keys.after_key_down(key);
        match handled {
            Some(effects) => (true, effects),
            None => (false, Vec::new()),
        }
    }

    pub fn on_key_up(&mut self, key: &str) {
        self.keys.on_key_up(key);
    }

    fn snapshot(&self, tree: &T) -> (String, Option<SemanticPosition>) {
        (extract_source(tree, self.input), capture(tree, self.input))
    }

    fn update(&mut self, tree: &mut T, action: EditorAction) -> Vec<Effect> {
        let (changed, effects) = self.state.dispatch_action(action);
        if changed {
            let current = self.state.current();
            tracing::debug!(state = %current, "re-render source");
            render_source(tree, self.input, &current.text, self.state.config());
            restore(tree, self.input, current.position);
        }
        effects
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/code/source.rs"]
mod tests;

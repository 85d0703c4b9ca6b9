use crate::kernel::Effect;

use super::action::EditorAction;
use super::edit::{insert_at_cursor, insert_tab, normalize_pasted, Edit};
use super::state::{EditorState, SourceState};

impl EditorState {
    /// 返回 (是否需要按 `current()` 重绘, 需要派发的副作用)
    pub fn dispatch_action(&mut self, action: EditorAction) -> (bool, Vec<Effect>) {
        match action {
            EditorAction::SetContent { text } => self.set_content(text),
            EditorAction::SourceChanged { text, position } => {
                if self.history.current().text == text {
                    return (false, Vec::new());
                }
                self.commit(SourceState::new(text, position))
            }
            EditorAction::Paste {
                text,
                position,
                inserted,
            } => {
                let Some(position) = position else {
                    return (false, Vec::new());
                };
                let inserted = normalize_pasted(&inserted, &self.config.tab_spaces());
                let edit = insert_at_cursor(&text, position, &inserted);
                self.apply_edit(edit)
            }
            EditorAction::InsertTab { text, position } => {
                let Some(position) = position else {
                    return (false, Vec::new());
                };
                let edit = insert_tab(&text, position, self.config.tab_size as usize);
                self.apply_edit(edit)
            }
            EditorAction::Undo => {
                if !self.history.can_undo() {
                    return (false, Vec::new());
                }
                self.history.undo();
                self.replay()
            }
            EditorAction::Redo => {
                if !self.history.can_redo() {
                    return (false, Vec::new());
                }
                self.history.redo();
                self.replay()
            }
            EditorAction::Run => {
                let source = self.history.current().text;
                let generation = self.next_generation();
                tracing::debug!(generation, "run requested");
                (false, vec![Effect::Run { generation, source }])
            }
        }
    }

    fn set_content(&mut self, text: String) -> (bool, Vec<Effect>) {
        self.history.append(SourceState::new(text, None));
        tracing::trace!(history = %self.history, "content set");
        (true, Vec::new())
    }

    fn apply_edit(&mut self, edit: Option<Edit>) -> (bool, Vec<Effect>) {
        match edit {
            Some(Edit { text, position }) => self.commit(SourceState::new(text, Some(position))),
            None => {
                tracing::debug!("edit rejected: cursor outside the buffer");
                (false, Vec::new())
            }
        }
    }

    fn commit(&mut self, state: SourceState) -> (bool, Vec<Effect>) {
        let source = state.text.clone();
        self.history.append(state);
        tracing::trace!(history = %self.history, "source committed");
        (true, self.compile_effect(source))
    }

    /// 撤销/重做后原样重放历史记录
    fn replay(&mut self) -> (bool, Vec<Effect>) {
        let source = self.history.current().text;
        tracing::trace!(history = %self.history, "history moved");
        (true, self.compile_effect(source))
    }

    fn compile_effect(&mut self, source: String) -> Vec<Effect> {
        if !self.config.compile_on_edit {
            return Vec::new();
        }
        let generation = self.next_generation();
        vec![Effect::Compile { generation, source }]
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/reducer.rs"]
mod tests;

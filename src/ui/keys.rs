//! 按键和弦跟踪
//!
//! 记录当前按下的键（按宿主报告的 `key` 名，如 `"Shift"`、`"z"`）。
//! 部分宿主在 Meta 按住期间不会发送其他键的 keyup，所以 Meta 按下时，
//! 非修饰键在处理完 keydown 后立即视为松开。

use rustc_hash::FxHashSet;

/// 不做 keyup 模拟的键
const NO_EMULATION: [&str; 2] = ["Meta", "Shift"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Run,
    InsertTab,
    Undo,
    Redo,
}

#[derive(Debug, Default)]
pub struct Keys {
    downs: FxHashSet<String>,
}

impl Keys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key_down(&mut self, key: &str) {
        self.downs.insert(key.to_string());
    }

    pub fn on_key_up(&mut self, key: &str) {
        self.downs.remove(key);
    }

    /// keydown 处理完毕后调用
    pub fn after_key_down(&mut self, key: &str) {
        if self.on(&["Meta"]) && !NO_EMULATION.contains(&key) {
            self.on_key_up(key);
        }
    }

    /// 所有给定的键都处于按下状态
    pub fn on(&self, keys: &[&str]) -> bool {
        keys.iter().all(|key| self.downs.contains(*key))
    }

    /// 当前和弦对应的编辑命令
    pub fn command(&self) -> Option<KeyCommand> {
        if self.on(&["Shift", "Enter"]) {
            return Some(KeyCommand::Run);
        }
        if self.on(&["Tab"]) {
            return Some(KeyCommand::InsertTab);
        }
        if (self.on(&["Meta"]) || self.on(&["Control"])) && self.on(&["z"]) {
            return Some(if self.on(&["Shift"]) {
                KeyCommand::Redo
            } else {
                KeyCommand::Undo
            });
        }
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/keys.rs"]
mod tests;

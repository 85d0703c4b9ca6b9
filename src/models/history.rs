//! 线性编辑历史
//!
//! 与状态类型无关的时间线：记录若干状态和一个游标 `next`（已使用条目的个数，从 1 计）。
//! - Undo/Redo 只移动游标，不修改时间线
//! - Undo 之后再追加会截断游标之后的所有条目（分支丢弃）
//! - 追加与当前状态"相等"的值是空操作，相等由调用方提供的谓词决定

use std::fmt;

pub struct History<T> {
    timeline: Vec<T>,
    next: usize,
    cmp: fn(&T, &T) -> bool,
}

impl<T: Clone + Default> History<T> {
    pub fn new(cmp: fn(&T, &T) -> bool) -> Self {
        Self {
            timeline: Vec::new(),
            next: 0,
            cmp,
        }
    }

    pub fn append(&mut self, t: T) {
        if (self.cmp)(&self.current(), &t) {
            return;
        }
        self.timeline.truncate(self.next);
        self.timeline.push(t);
        self.next = self.timeline.len();
    }

    pub fn undo(&mut self) {
        if self.next <= 1 {
            return;
        }
        self.next -= 1;
    }

    pub fn redo(&mut self) {
        if self.next >= self.timeline.len() {
            return;
        }
        self.next += 1;
    }

    /// 当前状态；尚未追加任何状态时返回 `T::default()`
    pub fn current(&self) -> T {
        match self.next {
            0 => T::default(),
            n => self.timeline[n - 1].clone(),
        }
    }

    pub fn history(&self) -> &[T] {
        &self.timeline
    }

    pub fn can_undo(&self) -> bool {
        self.next > 1
    }

    pub fn can_redo(&self) -> bool {
        self.next < self.timeline.len()
    }
}

impl<T: PartialEq + Clone + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(|a, b| a == b)
    }
}

impl<T: fmt::Display> fmt::Display for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.timeline.iter().enumerate() {
            let marker = if i + 1 == self.next { "->" } else { "  " };
            writeln!(f, "{marker}{entry}")?;
        }
        write!(f, "next: {}", self.next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/history.rs"]
mod tests;

//! 语义光标位置
//!
//! 宿主的选区 API 以 UTF-16 码元计数，缓冲区的行列运算以码点（char）计数。
//! 两种列同时保存，并且只通过 `move_column_by` / `move_to_next_line` 一起移动，
//! 避免各自重新计算后产生漂移。

use std::fmt;

/// (行, 列) 位置，列同时以码点和 UTF-16 码元表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SemanticPosition {
    line: usize,
    char_col: usize,
    utf16_col: usize,
}

impl SemanticPosition {
    pub const fn new(line: usize, char_col: usize, utf16_col: usize) -> Self {
        Self {
            line,
            char_col,
            utf16_col,
        }
    }

    /// 由一行文本中的码点列构造，自动推导 UTF-16 列；列超出行长时截断到行尾
    pub fn in_line(line: usize, line_text: &str, char_col: usize) -> Self {
        let (chars, utf16_col) = line_text
            .chars()
            .take(char_col)
            .fold((0, 0), |(n, units), ch| (n + 1, units + ch.len_utf16()));
        Self::new(line, chars, utf16_col)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// 码点列
    pub fn column(&self) -> usize {
        self.char_col
    }

    /// UTF-16 码元列
    pub fn utf16_column(&self) -> usize {
        self.utf16_col
    }

    #[must_use]
    pub fn move_column_by(self, inserted: &str) -> Self {
        Self {
            line: self.line,
            char_col: self.char_col + inserted.chars().count(),
            utf16_col: self.utf16_col + utf16_len(inserted),
        }
    }

    #[must_use]
    pub fn move_to_next_line(self) -> Self {
        Self {
            line: self.line + 1,
            char_col: 0,
            utf16_col: 0,
        }
    }
}

impl fmt::Display for SemanticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line: {} col: {} (utf16 {})",
            self.line, self.char_col, self.utf16_col
        )
    }
}

pub fn utf16_len(s: &str) -> usize {
    s.chars().map(|ch| ch.len_utf16()).sum()
}

/// UTF-16 偏移转为字节偏移，超出时返回 `s.len()`
pub fn utf16_offset_to_byte(s: &str, offset: usize) -> usize {
    let mut units = 0usize;
    for (byte, ch) in s.char_indices() {
        let next = units + ch.len_utf16();
        if next > offset {
            return byte;
        }
        units = next;
    }
    s.len()
}

/// 将 `s` 的前 `units` 个 UTF-16 码元解码，返回得到的码点数。
///
/// 截断在代理对中间时，残缺的高位代理按一个码点计。
/// `units` 超出 `s` 的长度时返回 `None`。
pub fn chars_in_utf16_prefix(s: &str, units: usize) -> Option<usize> {
    let encoded: Vec<u16> = s.encode_utf16().collect();
    if units > encoded.len() {
        return None;
    }
    Some(char::decode_utf16(encoded[..units].iter().copied()).count())
}

#[cfg(test)]
#[path = "../../tests/unit/models/position.rs"]
mod tests;

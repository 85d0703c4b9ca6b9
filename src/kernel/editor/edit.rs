//! 缓冲区变换：纯函数，输入 (文本, 位置)，输出新的 (文本, 位置)
//!
//! 返回 `None` 表示没有变化，调用方既不重绘也不写入历史。

use crate::models::SemanticPosition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    pub position: SemanticPosition,
}

/// 在 `position` 处插入可能跨多行的 `inserted`，光标停在插入内容之后。
///
/// 目标行不存在时返回 `None`；列超出行尾时按行尾处理。
pub fn insert_at_cursor(text: &str, position: SemanticPosition, inserted: &str) -> Option<Edit> {
    let lines: Vec<&str> = text.split('\n').collect();
    let line = position.line();
    let target = *lines.get(line)?;

    let mut position = SemanticPosition::in_line(line, target, position.column());
    let split = target
        .char_indices()
        .nth(position.column())
        .map(|(byte, _)| byte)
        .unwrap_or(target.len());
    let (before, after) = target.split_at(split);

    let mut out: Vec<String> = Vec::with_capacity(lines.len() + inserted.matches('\n').count());
    out.extend(lines[..line].iter().map(|l| l.to_string()));

    let mut open = before.to_string();
    for fragment in inserted.split_inclusive('\n') {
        match fragment.strip_suffix('\n') {
            Some(content) => {
                open.push_str(content);
                out.push(std::mem::take(&mut open));
                position = position.move_to_next_line();
            }
            None => {
                open.push_str(fragment);
                position = position.move_column_by(fragment);
            }
        }
    }
    open.push_str(after);
    out.push(open);
    out.extend(lines[line + 1..].iter().map(|l| l.to_string()));

    Some(Edit {
        text: out.join("\n"),
        position,
    })
}

/// 在光标处插入 `width` 个空格
pub fn insert_tab(text: &str, position: SemanticPosition, width: usize) -> Option<Edit> {
    insert_at_cursor(text, position, &" ".repeat(width))
}

/// 粘贴内容规整：`\r\n` 换成 `\n`，Tab 展开成空格，与渲染结果保持一致
pub fn normalize_pasted(inserted: &str, tab: &str) -> String {
    inserted.replace("\r\n", "\n").replace('\t', tab)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/edit.rs"]
mod tests;

//! 源码 ↔ 行节点
//!
//! 每行渲染为一个 `div`；空行放一个 `<br>` 占位。空格换成 U+00A0 防止宿主折叠空白，
//! 提取文本时再换回普通空格。

use crate::kernel::editor::highlight_line;
use crate::kernel::services::ports::{EditorConfig, HostTree};

use super::tree::text_content;

const NBSP: char = '\u{a0}';

/// 清空容器并按行重建
pub fn render_source<T: HostTree>(
    tree: &mut T,
    container: T::Node,
    source: &str,
    config: &EditorConfig,
) {
    tree.clear_children(container);
    let tab = config.tab_spaces();
    for line in source.split('\n') {
        let line_node = tree.append_element(container, "div");
        if line.is_empty() {
            tree.append_element(line_node, "br");
            continue;
        }

        let mut cursor = 0;
        for span in highlight_line(line, &config.keyword_groups) {
            if span.start > cursor {
                tree.append_text(line_node, &display_text(&line[cursor..span.start], &tab));
            }
            let colored = tree.append_element(line_node, "span");
            tree.set_attribute(colored, "style", &format!("color:{};", span.color));
            tree.append_text(colored, &display_text(&line[span.start..span.end], &tab));
            cursor = span.end;
        }
        if cursor < line.len() {
            tree.append_text(line_node, &display_text(&line[cursor..], &tab));
        }
    }
}

/// 从渲染树中取回源码
pub fn extract_source<T: HostTree>(tree: &T, container: T::Node) -> String {
    let lines: Vec<String> = tree
        .children(container)
        .iter()
        .map(|&line| text_content(tree, line))
        .collect();
    lines.join("\n").replace(NBSP, " ")
}

fn display_text(s: &str, tab: &str) -> String {
    s.replace('\t', tab).replace(' ', "\u{a0}")
}

#[cfg(test)]
#[path = "../../tests/unit/ui/render.rs"]
mod tests;

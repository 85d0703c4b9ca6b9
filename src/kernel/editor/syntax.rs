//! 关键字高亮：无状态，按整词匹配
//!
//! 词边界使用 Unicode 分词规则，因此 `uint32` 中的 `int32`、`variable` 中的 `var` 不会被着色。

use unicode_segmentation::UnicodeSegmentation;

use crate::kernel::services::ports::KeywordGroup;

/// 行内一段需要着色的字节区间
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    /// 对应 `KeywordGroup::color`
    pub color: String,
}

pub fn highlight_line(line: &str, groups: &[KeywordGroup]) -> Vec<HighlightSpan> {
    line.split_word_bound_indices()
        .filter_map(|(start, word)| {
            let group = groups
                .iter()
                .find(|group| group.words.iter().any(|w| w == word))?;
            Some(HighlightSpan {
                start,
                end: start + word.len(),
                color: group.color.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/syntax.rs"]
mod tests;

use crate::kernel::services::ports::HostTree;

/// 输出面板：文本按行写成文本节点，行之间用 `<br>` 分隔
pub struct OutputView<T: HostTree> {
    container: T::Node,
    text: String,
    /// 已显示结果的任务编号，更早的结果到达时直接丢弃
    last_generation: Option<u64>,
}

impl<T: HostTree> OutputView<T> {
    pub fn new(container: T::Node) -> Self {
        Self {
            container,
            text: String::new(),
            last_generation: None,
        }
    }

    pub fn container(&self) -> T::Node {
        self.container
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last_generation(&self) -> Option<u64> {
        self.last_generation
    }

    /// 显示第 `generation` 个任务的结果；结果已过期时返回 `false`
    pub fn apply(&mut self, tree: &mut T, generation: u64, text: &str) -> bool {
        if let Some(last) = self.last_generation {
            if generation < last {
                tracing::debug!(generation, last, "stale output dropped");
                return false;
            }
        }
        self.last_generation = Some(generation);
        self.set(tree, text);
        true
    }

    fn set(&mut self, tree: &mut T, text: &str) {
        tree.clear_children(self.container);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                tree.append_element(self.container, "br");
            }
            if !line.is_empty() {
                tree.append_text(self.container, line);
            }
        }
        self.text = text.to_string();
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/code/output.rs"]
mod tests;

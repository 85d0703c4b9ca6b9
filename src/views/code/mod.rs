//! 课程代码面板：源码编辑区 + 运行按钮 + 输出面板
//!
//! 所有回调都在 UI 线程同步执行；编译和运行通过 `AsyncExecutor` 放到后台，
//! 结果以 `AppMessage` 回到本视图的通道，由 `pump` 写入输出面板。

mod output;
mod run;
mod source;

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use crate::kernel::services::adapters::{background_job, AppMessage};
use crate::kernel::services::ports::{
    AsyncExecutor, DiagnosticSink, EditorConfig, ExecutionBackend, HostTree,
};
use crate::kernel::Effect;
use crate::ui::protect;

pub use output::OutputView;
pub use run::{build_string, compile_report, flatten, indent, run_report};
pub use source::SourceView;

pub const CODE_CONTAINER_CLASS: &str = "code_container";
pub const SOURCE_INPUT_CLASS: &str = "code_source_textinput_container";
pub const CONTROLS_CLASS: &str = "code_source_controls_container";
pub const OUTPUT_CLASS: &str = "code_output_container";

type Job = Box<dyn FnOnce() -> String + Send>;

pub struct CodeView<T: HostTree> {
    container: T::Node,
    run_button: T::Node,
    source: SourceView<T>,
    output: OutputView<T>,

    backend: Arc<dyn ExecutionBackend>,
    executor: Arc<dyn AsyncExecutor>,
    sink: Arc<dyn DiagnosticSink>,
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,
}

impl<T: HostTree> CodeView<T> {
    /// 在 `parent` 下创建面板的节点结构
    pub fn new(
        tree: &mut T,
        parent: T::Node,
        config: EditorConfig,
        backend: Arc<dyn ExecutionBackend>,
        executor: Arc<dyn AsyncExecutor>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let container = tree.append_element(parent, "div");
        tree.add_class(container, CODE_CONTAINER_CLASS);

        let input = tree.append_element(container, "div");
        tree.add_class(input, SOURCE_INPUT_CLASS);
        tree.set_attribute(input, "contenteditable", "true");

        let controls = tree.append_element(container, "div");
        tree.add_class(controls, CONTROLS_CLASS);
        let run_button = tree.append_element(controls, "button");
        tree.append_text(run_button, "Run");

        let output = tree.append_element(container, "div");
        tree.add_class(output, OUTPUT_CLASS);

        let (tx, rx) = mpsc::channel();
        Self {
            container,
            run_button,
            source: SourceView::new(input, config),
            output: OutputView::new(output),
            backend,
            executor,
            sink,
            tx,
            rx,
        }
    }

    pub fn container(&self) -> T::Node {
        self.container
    }

    pub fn run_button(&self) -> T::Node {
        self.run_button
    }

    pub fn source(&self) -> &SourceView<T> {
        &self.source
    }

    pub fn output(&self) -> &OutputView<T> {
        &self.output
    }

    /// 载入课程代码：写入历史并渲染，不编译
    pub fn set_content(&mut self, tree: &mut T, source: &str) {
        let sink = Arc::clone(&self.sink);
        protect(sink.as_ref(), || {
            let effects = self.source.set_content(tree, source);
            self.dispatch(effects);
        });
    }

    pub fn on_source_change(&mut self, tree: &mut T) {
        let sink = Arc::clone(&self.sink);
        protect(sink.as_ref(), || {
            let effects = self.source.on_source_change(tree);
            self.dispatch(effects);
        });
    }

    pub fn on_paste(&mut self, tree: &mut T, text: &str) {
        let sink = Arc::clone(&self.sink);
        protect(sink.as_ref(), || {
            let effects = self.source.on_paste(tree, text);
            self.dispatch(effects);
        });
    }

    /// 返回是否应阻止宿主的默认行为
    pub fn on_key_down(&mut self, tree: &mut T, key: &str) -> bool {
        let sink = Arc::clone(&self.sink);
        protect(sink.as_ref(), || {
            let (prevent_default, effects) = self.source.on_key_down(tree, key);
            self.dispatch(effects);
            prevent_default
        })
        .unwrap_or(false)
    }

    pub fn on_key_up(&mut self, key: &str) {
        self.source.on_key_up(key);
    }

    /// 运行按钮
    pub fn on_run(&mut self, tree: &mut T) {
        let sink = Arc::clone(&self.sink);
        protect(sink.as_ref(), || {
            let effects = self.source.on_run(tree);
            self.dispatch(effects);
        });
    }

    /// 处理所有已到达的后台结果，返回写入输出面板的条数
    pub fn pump(&mut self, tree: &mut T) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.rx.try_recv() {
            if self.apply_message(tree, message) {
                applied += 1;
            }
        }
        applied
    }

    /// 最多等待 `timeout` 直到有一条结果到达，然后处理所有已到达的结果
    pub fn wait_output(&mut self, tree: &mut T, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(message) => {
                self.apply_message(tree, message);
                self.pump(tree);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn apply_message(&mut self, tree: &mut T, message: AppMessage) -> bool {
        match message {
            AppMessage::Output { generation, text } => self.output.apply(tree, generation, &text),
            AppMessage::Crash { generation, report } => {
                self.sink.report(report.clone());
                self.output.apply(tree, generation, &report)
            }
        }
    }

    fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            let backend = Arc::clone(&self.backend);
            let (generation, source, job): (u64, String, Job) = match effect {
                Effect::Compile { generation, source } => {
                    let src = source.clone();
                    (
                        generation,
                        source,
                        Box::new(move || compile_report(backend.as_ref(), &src)),
                    )
                }
                Effect::Run { generation, source } => {
                    let src = source.clone();
                    (
                        generation,
                        source,
                        Box::new(move || run_report(backend.as_ref(), &src)),
                    )
                }
            };
            tracing::debug!(generation, "dispatch background job");
            self.executor
                .spawn(background_job(generation, source, job, self.tx.clone()));
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/code/mod.rs"]
mod tests;

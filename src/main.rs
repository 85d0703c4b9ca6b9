//! 无界面驱动：载入一段课程代码，从标准输入逐行读取编辑命令并回放。
//!
//! 命令：
//! - `type <文本>`      在光标处原生输入（单行）
//! - `backspace`        删除光标前一个字符
//! - `paste <文本>`     粘贴，`\n` 与 `\t` 会被转义
//! - `tab` / `undo` / `redo`
//! - `move <行> <列>`   移动光标
//! - `run`              运行并等待输出
//! - `show`             打印源码、光标和输出
//! - `quit`

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use lesson_editor::kernel::services::adapters::{
    ensure_settings_file, load_settings, AsyncRuntime, DemoBackend, TracingSink,
};
use lesson_editor::kernel::services::ports::{EditorConfig, HostTree};
use lesson_editor::models::SemanticPosition;
use lesson_editor::ui::{capture, extract_source, restore, Document};
use lesson_editor::views::CodeView;

mod logging;

const SAMPLE: &str = "package main\n\nfunc Hello() string {\n\treturn \"hello\"\n}\n";
const RUN_TIMEOUT: Duration = Duration::from_secs(5);

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let config = load_config();
    let source = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let runtime = Arc::new(AsyncRuntime::new()?);
    let mut doc = Document::new();
    let body = doc.body();
    let mut code = CodeView::new(
        &mut doc,
        body,
        config,
        Arc::new(DemoBackend),
        runtime,
        Arc::new(TracingSink),
    );
    code.set_content(&mut doc, &source);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let (command, arg) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        let input = code.source().input();
        match command {
            "type" => {
                if doc.type_text(arg) {
                    code.on_source_change(&mut doc);
                }
            }
            "backspace" => {
                if doc.delete_backward() {
                    code.on_source_change(&mut doc);
                }
            }
            "paste" => code.on_paste(&mut doc, &unescape(arg)),
            "tab" => {
                code.on_key_down(&mut doc, "Tab");
                code.on_key_up("Tab");
            }
            "undo" | "redo" => {
                let chord: &[&str] = if command == "undo" {
                    &["Control", "z"]
                } else {
                    &["Control", "Shift", "z"]
                };
                for key in chord {
                    code.on_key_down(&mut doc, key);
                }
                for key in chord.iter().rev() {
                    code.on_key_up(key);
                }
            }
            "move" => {
                let mut nums = arg.split_whitespace().filter_map(|n| n.parse::<usize>().ok());
                let (Some(line), Some(col)) = (nums.next(), nums.next()) else {
                    writeln!(stdout, "usage: move <line> <col>")?;
                    continue;
                };
                let text = extract_source(&doc, input);
                let line_text = text.split('\n').nth(line).unwrap_or("");
                restore(
                    &mut doc,
                    input,
                    Some(SemanticPosition::in_line(line, line_text, col)),
                );
            }
            "run" => {
                code.on_run(&mut doc);
                if !code.wait_output(&mut doc, RUN_TIMEOUT) {
                    writeln!(stdout, "(no output after {:?})", RUN_TIMEOUT)?;
                }
            }
            "show" => show(&mut stdout, &code, &doc)?,
            "quit" => break,
            "" => {}
            other => writeln!(stdout, "unknown command: {}", other)?,
        }
        code.pump(&mut doc);
    }
    Ok(())
}

fn load_config() -> EditorConfig {
    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "cannot create settings file");
    }
    match load_settings() {
        Ok(settings) => settings.editor_config(),
        Err(e) => {
            tracing::warn!(error = %e, "using default settings");
            EditorConfig::default()
        }
    }
}

fn show(out: &mut impl Write, code: &CodeView<Document>, doc: &Document) -> io::Result<()> {
    let input = code.source().input();
    writeln!(out, "--- source")?;
    writeln!(out, "{}", extract_source(doc, input))?;
    match capture(doc, input) {
        Some(position) => writeln!(out, "--- cursor {}", position)?,
        None => writeln!(out, "--- no cursor")?,
    }
    writeln!(out, "--- output")?;
    writeln!(out, "{}", code.output().text())?;
    writeln!(out, "--- {} line node(s)", doc.children(input).len())?;
    out.flush()
}

fn unescape(s: &str) -> String {
    s.replace("\\n", "\n").replace("\\t", "\t")
}

//! 编译/运行结果的文本格式
//!
//! 运行时依次调用每个入口：先输出 `NAME:`，再输出缩进后的结果；
//! 上一个入口的返回值作为下一个入口的参数，某个入口失败后停止。

use crate::kernel::services::ports::{BackendError, EntryPoint, ExecutionBackend, Program, Value};

/// 只编译：成功时输出为空，失败时为 `ERROR: <原因>`
pub fn compile_report(backend: &dyn ExecutionBackend, source: &str) -> String {
    match backend.compile(source) {
        Ok(_) => String::new(),
        Err(e) => {
            tracing::debug!(error = %e, "compile failed");
            format!("ERROR: {}", e)
        }
    }
}

pub fn run_report(backend: &dyn ExecutionBackend, source: &str) -> String {
    let program = match backend.compile(source) {
        Ok(program) => program,
        Err(e) => return format!("ERROR: {}", e),
    };

    let mut out = String::new();
    let mut values = Vec::new();
    for entry in &program.entry_points {
        out.push_str(&entry.name);
        out.push_str(":\n");
        match call_entry(backend, &program, entry, &values) {
            Ok((returned, text)) => {
                out.push_str(&indent(&text));
                values = returned;
            }
            Err(e) => {
                tracing::debug!(entry = %entry.name, error = %e, "entry point failed");
                out.push_str(&indent(&e.to_string()));
                break;
            }
        }
    }
    out
}

fn call_entry(
    backend: &dyn ExecutionBackend,
    program: &Program,
    entry: &EntryPoint,
    args: &[Value],
) -> Result<(Vec<Value>, String), BackendError> {
    if args.len() < entry.arity {
        return Err(BackendError::NotEnoughArguments {
            name: entry.name.clone(),
            got: args.len(),
            want: entry.arity,
        });
    }
    let returned = backend.call(program, entry, &args[..entry.arity])?;
    let text = build_string(&returned);
    Ok((returned, text))
}

/// 把嵌套的序列展开成一维列表
pub fn flatten(values: &[Value]) -> Vec<Value> {
    let mut flat = Vec::with_capacity(values.len());
    for value in values {
        match value {
            Value::Seq(items) => flat.extend(flatten(items)),
            other => flat.push(other.clone()),
        }
    }
    flat
}

/// 单个值原样输出；多个值输出为 `i: value` 行
pub fn build_string(values: &[Value]) -> String {
    let flat = flatten(values);
    match flat.as_slice() {
        [] => String::new(),
        [single] => single.to_string(),
        many => many
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{}: {}\n", i, v))
            .collect(),
    }
}

/// 每行前加两个空格，并保证以换行结尾
pub fn indent(s: &str) -> String {
    let mut out: String = s
        .split_inclusive('\n')
        .map(|line| format!("  {}", line))
        .collect();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../../tests/unit/views/code/run.rs"]
mod tests;

//! 演示用执行后端
//!
//! 只理解课程代码的一个极小子集，足以在浏览器外跑通"编辑 → 编译 → 运行"：
//!
//! ```text
//! package main
//!
//! func Pair(x int64) (int64, int64) {
//!     return x, x + 1
//! }
//! ```
//!
//! - 顶层 `func` 声明中名字首字母大写的是入口，参数个数即 arity
//! - 函数体取第一条 `return`，逗号分隔的每一项求值为一个返回值
//! - 表达式支持整数、浮点、`true`/`false`、双引号字符串、`[a b c]` 序列、参数名，
//!   以及整数/浮点之间的 `+`
//! - `panic("msg")` 会真的 panic，用来演示崩溃诊断

use crate::kernel::services::ports::{BackendError, EntryPoint, ExecutionBackend, Program, Value};

#[derive(Debug, Default, Clone, Copy)]
pub struct DemoBackend;

struct FuncDecl<'a> {
    name: &'a str,
    params: Vec<&'a str>,
    body: Vec<&'a str>,
}

impl ExecutionBackend for DemoBackend {
    fn compile(&self, source: &str) -> Result<Program, BackendError> {
        let entry_points = parse_funcs(source)?
            .into_iter()
            .filter(|f| f.name.chars().next().is_some_and(char::is_uppercase))
            .map(|f| EntryPoint::new(f.name, f.params.len()))
            .collect();
        Ok(Program {
            entry_points,
            source: source.to_string(),
        })
    }

    fn call(
        &self,
        program: &Program,
        entry: &EntryPoint,
        args: &[Value],
    ) -> Result<Vec<Value>, BackendError> {
        let funcs = parse_funcs(&program.source)?;
        let func = funcs
            .iter()
            .find(|f| f.name == entry.name)
            .ok_or_else(|| BackendError::Runtime(format!("undefined: {}", entry.name)))?;

        let Some(ret) = func
            .body
            .iter()
            .find_map(|line| line.trim().strip_prefix("return"))
        else {
            return Ok(Vec::new());
        };
        split_top_level(ret.trim().trim_end_matches('}'), ',')
            .into_iter()
            .filter(|item| !item.trim().is_empty())
            .map(|item| eval(item.trim(), &func.params, args))
            .collect()
    }
}

fn parse_funcs(source: &str) -> Result<Vec<FuncDecl<'_>>, BackendError> {
    let mut funcs = Vec::new();
    let mut depth = 0usize;
    let mut current: Option<FuncDecl<'_>> = None;

    for (index, line) in source.split('\n').enumerate() {
        let trimmed = line.trim();
        if depth == 0 {
            if let Some(decl) = trimmed.strip_prefix("func ") {
                let mut func = parse_signature(decl, index + 1)?;
                if let Some((_, rest)) = decl.split_once('{') {
                    func.body.push(rest);
                }
                current = Some(func);
            }
        } else if let Some(func) = current.as_mut() {
            func.body.push(line);
        }

        for ch in trimmed.chars() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        BackendError::Compile(format!("{}: unexpected '}}'", index + 1))
                    })?;
                    if depth == 0 {
                        if let Some(func) = current.take() {
                            funcs.push(func);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    if depth != 0 {
        return Err(BackendError::Compile(
            "unexpected end of file: missing '}'".to_string(),
        ));
    }
    Ok(funcs)
}

fn parse_signature(decl: &str, line: usize) -> Result<FuncDecl<'_>, BackendError> {
    let open = decl
        .find('(')
        .ok_or_else(|| BackendError::Compile(format!("{}: expected '('", line)))?;
    let close = decl[open..]
        .find(')')
        .map(|i| open + i)
        .ok_or_else(|| BackendError::Compile(format!("{}: expected ')'", line)))?;

    let name = decl[..open].trim();
    if name.is_empty() {
        return Err(BackendError::Compile(format!("{}: missing function name", line)));
    }
    let params = decl[open + 1..close]
        .split(',')
        .filter_map(|param| param.split_whitespace().next())
        .collect();
    Ok(FuncDecl {
        name,
        params,
        body: Vec::new(),
    })
}

fn eval(expr: &str, params: &[&str], args: &[Value]) -> Result<Value, BackendError> {
    if let Some(msg) = expr.strip_prefix("panic(").and_then(|e| e.strip_suffix(')')) {
        panic!("{}", msg.trim().trim_matches('"'));
    }

    let terms = split_top_level(expr, '+');
    if terms.len() > 1 {
        let mut total = eval(terms[0].trim(), params, args)?;
        for term in &terms[1..] {
            total = add(total, eval(term.trim(), params, args)?)?;
        }
        return Ok(total);
    }

    if let Some(items) = expr.strip_prefix('[').and_then(|e| e.strip_suffix(']')) {
        return split_top_level(items, ' ')
            .into_iter()
            .filter(|item| !item.is_empty())
            .map(|item| eval(item, params, args))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Seq);
    }
    if let Some(s) = expr.strip_prefix('"').and_then(|e| e.strip_suffix('"')) {
        return Ok(Value::Str(s.to_string()));
    }
    match expr {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }
    if let Ok(v) = expr.parse::<i64>() {
        return Ok(Value::Int(v));
    }
    if let Ok(v) = expr.parse::<f64>() {
        return Ok(Value::Float(v));
    }
    params
        .iter()
        .position(|p| *p == expr)
        .and_then(|i| args.get(i).cloned())
        .ok_or_else(|| BackendError::Runtime(format!("undefined: {}", expr)))
}

fn add(a: Value, b: Value) -> Result<Value, BackendError> {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(b))),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
        (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
            Ok(Value::Float(a as f64 + b))
        }
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
        (a, b) => Err(BackendError::Runtime(format!(
            "invalid operation: {} + {}",
            a, b
        ))),
    }
}

/// 按 `sep` 切分，忽略字符串和方括号内部的分隔符
fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '[' | '(' if !in_string => depth += 1,
            ']' | ')' if !in_string => depth = depth.saturating_sub(1),
            c if c == sep && !in_string && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/demo_backend.rs"]
mod tests;

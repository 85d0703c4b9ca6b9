//! 执行后端契约：把源码编译成程序，再逐个调用程序的入口函数。

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub name: String,
    /// 参数个数
    pub arity: usize,
}

impl EntryPoint {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }
}

/// 编译产物：按声明顺序排列的导出入口
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub entry_points: Vec<EntryPoint>,
    /// 编译时的源码，后端调用入口时使用
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    Unavailable(String),
    Compile(String),
    Runtime(String),
    NotEnoughArguments {
        name: String,
        got: usize,
        want: usize,
    },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Unavailable(msg) => write!(f, "Cannot initialise backend: {}", msg),
            BackendError::Compile(msg) => write!(f, "{}", msg),
            BackendError::Runtime(msg) => write!(f, "{}", msg),
            BackendError::NotEnoughArguments { name, got, want } => write!(
                f,
                "not enough arguments to pass to {}: got {} but want {}",
                name, got, want
            ),
        }
    }
}

impl std::error::Error for BackendError {}

pub trait ExecutionBackend: Send + Sync {
    fn compile(&self, source: &str) -> Result<Program, BackendError>;

    /// `args` 的长度已经截断为 `entry.arity`
    fn call(
        &self,
        program: &Program,
        entry: &EntryPoint,
        args: &[Value],
    ) -> Result<Vec<Value>, BackendError>;
}

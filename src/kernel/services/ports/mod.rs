//! Service ports: traits + data contracts.

pub mod backend;
pub mod config;
pub mod diagnostics;
pub mod host;
pub mod runtime;
pub mod settings;

pub use backend::{BackendError, EntryPoint, ExecutionBackend, Program, Value};
pub use config::{EditorConfig, KeywordGroup};
pub use diagnostics::DiagnosticSink;
pub use host::{HostSelection, HostTree, NodeKind};
pub use runtime::{AsyncExecutor, BoxFuture};
pub use settings::{EditorSettings, Settings};

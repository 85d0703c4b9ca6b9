//! UI 回调的崩溃保护：panic 不越过事件处理边界，而是交给 `DiagnosticSink`

use std::backtrace::Backtrace;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::kernel::services::adapters::panic_message;
use crate::kernel::services::ports::DiagnosticSink;

pub fn protect<R>(sink: &dyn DiagnosticSink, f: impl FnOnce() -> R) -> Option<R> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            sink.report(format!(
                "UI crash: {}.\nPlease report the following stacktrace:\n{}\n",
                reason,
                Backtrace::force_capture()
            ));
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/protect.rs"]
mod tests;

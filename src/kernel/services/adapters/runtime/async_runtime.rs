use std::any::Any;
use std::backtrace::Backtrace;
use std::io;
use std::sync::mpsc::Sender;

use super::message::AppMessage;
use crate::kernel::services::ports::{AsyncExecutor, BoxFuture};

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
}

impl AsyncRuntime {
    pub fn new() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime })
    }

    pub fn tokio_handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }
}

impl AsyncExecutor for AsyncRuntime {
    fn spawn(&self, task: BoxFuture) {
        self.runtime.spawn(task);
    }
}

/// 把一次编译/运行包装成后台任务。
///
/// `job` 在阻塞线程池上执行；它的 panic 在这里被截获，
/// 连同源码和调用栈一起作为 `AppMessage::Crash` 发回。必须在 tokio 运行时中执行。
pub fn background_job<F>(
    generation: u64,
    source: String,
    job: F,
    tx: Sender<AppMessage>,
) -> BoxFuture
where
    F: FnOnce() -> String + Send + 'static,
{
    Box::pin(async move {
        let message = match tokio::task::spawn_blocking(job).await {
            Ok(text) => AppMessage::Output { generation, text },
            Err(e) if e.is_panic() => {
                let reason = panic_message(e.into_panic().as_ref());
                tracing::error!(generation, panic = %reason, "background task panicked");
                AppMessage::Crash {
                    generation,
                    report: format!(
                        "PANIC: please report everything below so that it can be fixed:\n{}\n{}\n{}",
                        source,
                        reason,
                        Backtrace::force_capture()
                    ),
                }
            }
            Err(e) => {
                tracing::warn!(generation, error = %e, "background task cancelled");
                return;
            }
        };
        let _ = tx.send(message);
    })
}

pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;

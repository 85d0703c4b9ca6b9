//! Async runtime adapter: executes compile/run effects and sends messages back to the UI layer.

mod async_runtime;
mod message;

pub use async_runtime::{background_job, panic_message, AsyncRuntime};
pub use message::AppMessage;

//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod demo_backend;
pub mod diagnostics;
pub mod runtime;
pub mod settings;

pub use demo_backend::DemoBackend;
pub use diagnostics::{ChannelSink, TracingSink};
pub use runtime::{background_job, panic_message, AppMessage, AsyncRuntime};
pub use settings::{
    ensure_log_dir, ensure_settings_file, ensure_settings_file_at, get_log_dir, get_settings_path,
    load_settings, load_settings_from, SettingsError,
};

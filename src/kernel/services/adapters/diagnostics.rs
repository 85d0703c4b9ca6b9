//! `DiagnosticSink` 的实现

use std::sync::mpsc::Sender;
use std::sync::Mutex;

use crate::kernel::services::ports::DiagnosticSink;

/// 写入日志
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, text: String) {
        tracing::error!(diagnostic = %text, "crash reported");
    }
}

/// 转发到通道，由宿主自行展示
pub struct ChannelSink {
    tx: Mutex<Sender<String>>,
}

impl ChannelSink {
    pub fn new(tx: Sender<String>) -> Self {
        Self { tx: Mutex::new(tx) }
    }
}

impl DiagnosticSink for ChannelSink {
    fn report(&self, text: String) {
        let Ok(tx) = self.tx.lock() else {
            return;
        };
        if tx.send(text).is_err() {
            tracing::warn!("diagnostic receiver dropped");
        }
    }
}

/// 后台任务发回 UI 线程的消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 编译或运行的输出，写入输出面板
    Output { generation: u64, text: String },
    /// 后台任务 panic，`report` 是给用户看的完整诊断
    Crash { generation: u64, report: String },
}

impl AppMessage {
    pub fn generation(&self) -> u64 {
        match self {
            AppMessage::Output { generation, .. } | AppMessage::Crash { generation, .. } => {
                *generation
            }
        }
    }
}

/// 交给后台执行的副作用。`generation` 单调递增，输出面板据此丢弃过期结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 编译源码，成功时清空输出，失败时显示错误
    Compile { generation: u64, source: String },
    /// 编译并依次调用所有入口
    Run { generation: u64, source: String },
}

impl Effect {
    pub fn generation(&self) -> u64 {
        match self {
            Effect::Compile { generation, .. } | Effect::Run { generation, .. } => *generation,
        }
    }
}

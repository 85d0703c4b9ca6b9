/// 诊断输出的去处：后台任务和 UI 回调中捕获到的崩溃信息都交给它
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, text: String);
}

use super::*;
use std::sync::mpsc;
use std::time::Duration;

#[test]
fn job_output_is_sent_back() {
    let runtime = AsyncRuntime::new().unwrap();
    let (tx, rx) = mpsc::channel();
    runtime.spawn(background_job(
        7,
        "src".to_string(),
        || "done".to_string(),
        tx,
    ));

    let message = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(
        message,
        AppMessage::Output {
            generation: 7,
            text: "done".to_string()
        }
    );
}

#[test]
fn job_panic_becomes_crash_report() {
    let runtime = AsyncRuntime::new().unwrap();
    let (tx, rx) = mpsc::channel();
    runtime.spawn(background_job(
        3,
        "func Main() {}".to_string(),
        || panic!("boom"),
        tx,
    ));

    let message = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(message.generation(), 3);
    let AppMessage::Crash { report, .. } = message else {
        panic!("expected crash, got {message:?}");
    };
    assert!(report.starts_with("PANIC: please report everything below so that it can be fixed:\n"));
    assert!(report.contains("func Main() {}"));
    assert!(report.contains("boom"));
}

#[test]
fn panic_message_reads_string_payloads() {
    let payload: Box<dyn Any + Send> = Box::new("static");
    assert_eq!(panic_message(payload.as_ref()), "static");
    let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
    assert_eq!(panic_message(payload.as_ref()), "owned");
    let payload: Box<dyn Any + Send> = Box::new(42);
    assert_eq!(panic_message(payload.as_ref()), "unknown panic");
}

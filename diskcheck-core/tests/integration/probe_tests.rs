//! Single-host probe tests

use std::sync::Arc;
use std::time::Duration;

use diskcheck_core::{
    COMMAND_TIMEOUT_SECS, CommandOutcome, DISK_USAGE_COMMAND, HostProbe, HostRecord, HostResult,
};

use super::support::{ScriptedRunner, TWO_DISKS};

fn probe_with(runner: &Arc<ScriptedRunner>) -> HostProbe {
    HostProbe::new(runner.clone())
}

#[tokio::test]
async fn test_success_flags_filesystems_over_threshold() {
    let runner = Arc::new(ScriptedRunner::new().ok("192.168.1.10", TWO_DISKS));
    let record = HostRecord::new("192.168.1.10").with_name("Test VM 1");

    let result = probe_with(&runner).probe(&record, 80).await;

    assert!(result.is_success());
    assert_eq!(result.name(), "Test VM 1");
    assert_eq!(result.host(), "192.168.1.10");
    let fs = result.filesystems();
    assert_eq!(fs.len(), 2);
    assert_eq!(fs[0].usage_percent, 47);
    assert!(!fs[0].exceeds_threshold);
    assert_eq!(fs[1].usage_percent, 89);
    assert!(fs[1].exceeds_threshold);
}

#[tokio::test]
async fn test_runner_receives_disk_command_and_default_timeout() {
    let runner = Arc::new(ScriptedRunner::new().ok("h1", ""));
    let _ = probe_with(&runner).probe(&HostRecord::new("h1"), 80).await;

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].command, DISK_USAGE_COMMAND);
    assert_eq!(calls[0].timeout, Duration::from_secs(COMMAND_TIMEOUT_SECS));
}

#[tokio::test]
async fn test_custom_timeout_is_forwarded() {
    let runner = Arc::new(ScriptedRunner::new().ok("h1", ""));
    let probe = probe_with(&runner).with_timeout(Duration::from_secs(5));
    let _ = probe.probe(&HostRecord::new("h1"), 80).await;
    assert_eq!(runner.calls()[0].timeout, Duration::from_secs(5));
}

#[tokio::test]
async fn test_name_falls_back_to_host() {
    let runner = Arc::new(ScriptedRunner::new().ok("10.0.0.7", TWO_DISKS));
    let result = probe_with(&runner)
        .probe(&HostRecord::new("10.0.0.7"), 80)
        .await;
    assert_eq!(result.name(), "10.0.0.7");
}

#[tokio::test]
async fn test_missing_host_never_reaches_runner() {
    let runner = Arc::new(ScriptedRunner::new());
    let record = HostRecord {
        host: None,
        ..HostRecord::new("unused")
    };

    let result = probe_with(&runner).probe(&record, 80).await;

    assert_eq!(
        result,
        HostResult::failure("Unknown", "N/A", "Missing required parameter: host")
    );
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_blank_host_keeps_configured_name() {
    let runner = Arc::new(ScriptedRunner::new());
    let record = HostRecord {
        host: Some(String::new()),
        ..HostRecord::new("unused").with_name("Orphan")
    };

    let result = probe_with(&runner).probe(&record, 80).await;

    assert_eq!(result.name(), "Orphan");
    assert_eq!(result.host(), "N/A");
    assert_eq!(
        result.error_message(),
        Some("Missing required parameter: host")
    );
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_non_zero_exit_uses_trimmed_stderr() {
    let runner = Arc::new(ScriptedRunner::new().on(
        "h1",
        CommandOutcome::NonZeroExit {
            stderr: "ssh: connect to host h1 port 22: Connection refused\n".into(),
        },
    ));
    let result = probe_with(&runner)
        .probe(&HostRecord::new("h1").with_name("web"), 80)
        .await;
    assert_eq!(
        result,
        HostResult::failure(
            "web",
            "h1",
            "ssh: connect to host h1 port 22: Connection refused"
        )
    );
}

#[tokio::test]
async fn test_non_zero_exit_without_stderr() {
    let runner = Arc::new(ScriptedRunner::new().on(
        "h1",
        CommandOutcome::NonZeroExit {
            stderr: "   ".into(),
        },
    ));
    let result = probe_with(&runner).probe(&HostRecord::new("h1"), 80).await;
    assert_eq!(result.error_message(), Some("Connection failed"));
}

#[tokio::test]
async fn test_timeout() {
    let runner = Arc::new(ScriptedRunner::new().on("h1", CommandOutcome::Timeout));
    let result = probe_with(&runner).probe(&HostRecord::new("h1"), 80).await;
    assert_eq!(result, HostResult::failure("h1", "h1", "Connection timeout"));
}

#[tokio::test]
async fn test_other_failure_message_is_kept() {
    let runner = Arc::new(ScriptedRunner::new().on(
        "h1",
        CommandOutcome::OtherFailure {
            message: "Failed to spawn ssh: No such file or directory".into(),
        },
    ));
    let result = probe_with(&runner).probe(&HostRecord::new("h1"), 80).await;
    assert_eq!(
        result.error_message(),
        Some("Failed to spawn ssh: No such file or directory")
    );
}

#[tokio::test]
async fn test_garbage_output_is_empty_success() {
    let runner = Arc::new(
        ScriptedRunner::new().ok("h1", "Filesystem Size Used\nnot a df line at all\n"),
    );
    let result = probe_with(&runner).probe(&HostRecord::new("h1"), 80).await;
    assert!(result.is_success());
    assert!(result.filesystems().is_empty());
}

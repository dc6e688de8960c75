//! Fleet check tests

use std::sync::Arc;

use diskcheck_core::fleet::{EXIT_FAILED, EXIT_HEALTHY, EXIT_WARNING};
use diskcheck_core::{CommandOutcome, FleetAggregator, FleetHealth, FleetSummary, HostRecord};

use super::support::{ScriptedRunner, TWO_DISKS};

const LOW_DISK: &str = "/dev/vda1 20G 4G 16G 20% /\n";

#[tokio::test]
async fn test_one_warning_host_and_one_timeout() {
    let runner = Arc::new(
        ScriptedRunner::new()
            .ok("10.0.0.1", TWO_DISKS)
            .on("10.0.0.2", CommandOutcome::Timeout),
    );
    let records = vec![
        HostRecord::new("10.0.0.1").with_name("A"),
        HostRecord::new("10.0.0.2").with_name("B"),
    ];

    let results = FleetAggregator::new(runner.clone())
        .check_all(&records, 80)
        .await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name(), "A");
    assert!(results[0].has_warnings());
    assert_eq!(results[1].name(), "B");
    assert_eq!(results[1].error_message(), Some("Connection timeout"));

    let summary = FleetAggregator::summarize(&results);
    assert_eq!(
        summary,
        FleetSummary {
            total: 2,
            warning_count: 1,
            error_count: 1,
        }
    );
    assert_eq!(summary.exit_code(), EXIT_FAILED);
}

#[tokio::test]
async fn test_hosts_probed_in_input_order() {
    let runner = Arc::new(
        ScriptedRunner::new()
            .ok("c", LOW_DISK)
            .ok("a", LOW_DISK)
            .ok("b", LOW_DISK),
    );
    let records = vec![
        HostRecord::new("c"),
        HostRecord::new("a"),
        HostRecord::new("b"),
    ];

    let results = FleetAggregator::new(runner.clone())
        .check_all(&records, 80)
        .await;

    assert_eq!(runner.called_hosts(), vec!["c", "a", "b"]);
    let hosts: Vec<_> = results.iter().map(|r| r.host()).collect();
    assert_eq!(hosts, vec!["c", "a", "b"]);
    assert_eq!(FleetAggregator::summarize(&results).exit_code(), EXIT_HEALTHY);
}

#[tokio::test]
async fn test_missing_host_in_the_middle() {
    let runner = Arc::new(ScriptedRunner::new().ok("first", LOW_DISK).ok("last", LOW_DISK));
    let records = vec![
        HostRecord::new("first"),
        HostRecord {
            host: None,
            ..HostRecord::new("unused").with_name("broken")
        },
        HostRecord::new("last"),
    ];

    let results = FleetAggregator::new(runner.clone())
        .check_all(&records, 80)
        .await;

    assert_eq!(results.len(), 3);
    assert!(results[0].is_success());
    assert_eq!(results[1].name(), "broken");
    assert_eq!(results[1].host(), "N/A");
    assert!(results[2].is_success());
    assert_eq!(runner.called_hosts(), vec!["first", "last"]);
    assert_eq!(
        FleetAggregator::summarize(&results).health(),
        FleetHealth::Failed
    );
}

#[tokio::test]
async fn test_warnings_only_exit_code() {
    let runner = Arc::new(ScriptedRunner::new().ok("a", TWO_DISKS).ok("b", LOW_DISK));
    let records = vec![HostRecord::new("a"), HostRecord::new("b")];

    let results = FleetAggregator::new(runner).check_all(&records, 80).await;
    let summary = FleetAggregator::summarize(&results);

    assert_eq!(summary.health(), FleetHealth::Warning);
    assert_eq!(summary.exit_code(), EXIT_WARNING);
    assert_eq!(summary.healthy_count(), 1);
}

#[tokio::test]
async fn test_threshold_changes_outcome() {
    let runner = Arc::new(ScriptedRunner::new().ok("a", TWO_DISKS));
    let records = vec![HostRecord::new("a")];
    let aggregator = FleetAggregator::new(runner);

    let strict = aggregator.check_all(&records, 40).await;
    assert_eq!(strict[0].warning_filesystems().len(), 2);

    let lenient = aggregator.check_all(&records, 90).await;
    assert!(!lenient[0].has_warnings());
    assert_eq!(FleetAggregator::summarize(&lenient).exit_code(), EXIT_HEALTHY);
}

#[tokio::test]
async fn test_empty_fleet() {
    let runner = Arc::new(ScriptedRunner::new());
    let results = FleetAggregator::new(runner.clone())
        .check_all(&[], 80)
        .await;
    assert!(results.is_empty());
    assert!(runner.calls().is_empty());
    assert_eq!(FleetAggregator::summarize(&results).exit_code(), EXIT_HEALTHY);
}

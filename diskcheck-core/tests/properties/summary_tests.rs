//! Property-based tests for fleet summaries

use diskcheck_core::{FilesystemEntry, FleetHealth, FleetSummary, HostResult};
use proptest::prelude::*;

fn filesystem_strategy() -> impl Strategy<Value = FilesystemEntry> {
    (0u8..=100, "/[a-z]{0,8}", any::<bool>()).prop_map(|(usage, mount, flagged)| {
        FilesystemEntry {
            device: "/dev/vda1".into(),
            size: "20G".into(),
            used: "10G".into(),
            available: "10G".into(),
            usage_percent: usage,
            mount_path: mount,
            exceeds_threshold: flagged,
        }
    })
}

fn host_result_strategy() -> impl Strategy<Value = HostResult> {
    prop_oneof![
        (
            "[a-z][a-z0-9-]{0,15}",
            prop::collection::vec(filesystem_strategy(), 0..6)
        )
            .prop_map(|(host, fs)| HostResult::success(host.clone(), host, fs)),
        ("[a-z][a-z0-9-]{0,15}", "[A-Za-z ]{1,40}")
            .prop_map(|(host, msg)| HostResult::failure(host.clone(), host, msg)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Counts match a direct classification of every result
    #[test]
    fn prop_counts_match_results(results in prop::collection::vec(host_result_strategy(), 0..30)) {
        let summary = FleetSummary::from_results(&results);

        let errors = results.iter().filter(|r| r.is_failure()).count();
        let warnings = results
            .iter()
            .filter(|r| r.filesystems().iter().any(|fs| fs.exceeds_threshold))
            .count();

        prop_assert_eq!(summary.total, results.len());
        prop_assert_eq!(summary.error_count, errors);
        prop_assert_eq!(summary.warning_count, warnings);
        prop_assert!(summary.warning_count + summary.error_count <= summary.total);
        prop_assert_eq!(
            summary.healthy_count(),
            summary.total - summary.warning_count - summary.error_count
        );
    }

    /// Exit code follows failure-over-warning precedence
    #[test]
    fn prop_exit_code_precedence(results in prop::collection::vec(host_result_strategy(), 0..30)) {
        let summary = FleetSummary::from_results(&results);
        let expected = if results.iter().any(HostResult::is_failure) {
            FleetHealth::Failed
        } else if results.iter().any(HostResult::has_warnings) {
            FleetHealth::Warning
        } else {
            FleetHealth::Healthy
        };

        prop_assert_eq!(summary.health(), expected);
        prop_assert_eq!(summary.exit_code(), expected.exit_code());
    }

    /// Reordering results never changes the summary
    #[test]
    fn prop_summary_ignores_order(results in prop::collection::vec(host_result_strategy(), 0..20)) {
        let mut reversed = results.clone();
        reversed.reverse();
        prop_assert_eq!(
            FleetSummary::from_results(&results),
            FleetSummary::from_results(&reversed)
        );
    }
}

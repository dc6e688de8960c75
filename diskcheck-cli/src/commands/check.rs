//! Fleet disk usage check command.

use std::path::Path;
use std::sync::Arc;

use diskcheck_core::{
    FleetAggregator, ReportFormat, ReportFormatter, SshCommandRunner, Threshold, load_inventory,
};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Parameters for the check command
pub struct CheckParams<'a> {
    pub config: &'a Path,
    pub threshold: i64,
    pub format: OutputFormat,
    pub ssh_program: &'a str,
}

/// Check command handler.
///
/// The threshold is validated before the inventory is read, and both before
/// any host is contacted. Returns the fleet exit code.
pub fn cmd_check(params: &CheckParams<'_>) -> Result<i32, CliError> {
    let threshold = Threshold::new(params.threshold)?;
    let format: ReportFormat = params.format.into();
    let records = load_inventory(params.config)?;
    tracing::info!(
        hosts = records.len(),
        %threshold,
        %format,
        config = %params.config.display(),
        "Inventory loaded"
    );

    let runner = Arc::new(SshCommandRunner::new().with_program(params.ssh_program));
    let aggregator = FleetAggregator::new(runner);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(format!("Failed to create async runtime: {e}")))?;
    let results = runtime.block_on(aggregator.check_all(&records, threshold.percent()));

    let report = ReportFormatter::render(format, &results)?;
    println!("{}", report.trim_end());

    let summary = FleetAggregator::summarize(&results);
    tracing::info!(health = %summary.health(), "{}", summary.summary_string());

    Ok(summary.exit_code())
}

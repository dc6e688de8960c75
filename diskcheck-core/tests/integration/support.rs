//! Scripted remote command runner for tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use diskcheck_core::{CommandOutcome, HostRecord, RemoteCommandRunner};

/// Runner that answers from a per-host script and records every call
#[derive(Default)]
pub struct ScriptedRunner {
    outcomes: HashMap<String, CommandOutcome>,
    calls: Mutex<Vec<Call>>,
}

/// One recorded runner invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub host: String,
    pub command: String,
    pub timeout: Duration,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, host: &str, outcome: CommandOutcome) -> Self {
        self.outcomes.insert(host.to_string(), outcome);
        self
    }

    pub fn ok(self, host: &str, stdout: &str) -> Self {
        self.on(
            host,
            CommandOutcome::Ok {
                stdout: stdout.to_string(),
            },
        )
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    pub fn called_hosts(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.host).collect()
    }
}

#[async_trait]
impl RemoteCommandRunner for ScriptedRunner {
    async fn run(&self, record: &HostRecord, command: &str, timeout: Duration) -> CommandOutcome {
        let host = record.address().unwrap_or_default().to_string();
        self.calls.lock().expect("calls lock poisoned").push(Call {
            host: host.clone(),
            command: command.to_string(),
            timeout,
        });
        self.outcomes
            .get(&host)
            .cloned()
            .unwrap_or_else(|| CommandOutcome::OtherFailure {
                message: format!("unscripted host {host}"),
            })
    }
}

/// Two-filesystem `df` output at 47% and 89%
pub const TWO_DISKS: &str = "/dev/sda1 100G 45G 50G 47% /\n/dev/sda2 50G 42G 5G 89% /var\n";

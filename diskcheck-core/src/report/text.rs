//! Text report generator.

use std::fmt::Write as _;

use crate::models::{FilesystemEntry, HostResult};

const WIDTH: usize = 80;

pub fn render(results: &[HostResult]) -> String {
    let mut out = String::new();
    let banner = "=".repeat(WIDTH);
    let rule = "-".repeat(WIDTH);

    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, "Disk Space Check Results");
    let _ = writeln!(out, "{banner}");

    for result in results {
        out.push('\n');
        let _ = writeln!(out, "Host: {} ({})", result.name(), result.host());
        let _ = writeln!(out, "{rule}");

        match result {
            HostResult::Failure { error_message, .. } => {
                let _ = writeln!(out, "  ✗ ERROR: {error_message}");
            }
            HostResult::Success { filesystems, .. } if filesystems.is_empty() => {
                let _ = writeln!(out, "  No block-device filesystems reported");
            }
            HostResult::Success { filesystems, .. } => {
                for fs in filesystems {
                    write_filesystem(&mut out, fs);
                }
            }
        }
    }

    out
}

fn write_filesystem(out: &mut String, fs: &FilesystemEntry) {
    let marker = if fs.exceeds_threshold {
        "⚠ WARNING"
    } else {
        "✓ OK"
    };
    let _ = writeln!(out, "  {marker} {}", fs.mount_path);
    let _ = writeln!(out, "    Device: {}", fs.device);
    let _ = writeln!(
        out,
        "    Size: {}, Used: {}, Available: {}",
        fs.size, fs.used, fs.available
    );
    let _ = writeln!(out, "    Usage: {}%", fs.usage_percent);
}

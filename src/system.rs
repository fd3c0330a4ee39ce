// System information shown by the "System Info" menu entry.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Snapshot of the values printed on the system information screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub version: String,
    pub platform: &'static str,
    pub arch: &'static str,
    pub cwd: PathBuf,
    /// Resident set size in whole megabytes, if the host exposes it.
    pub memory_mb: Option<u64>,
    pub uptime_secs: u64,
}

impl SystemInfo {
    /// Collect a snapshot. `uptime` is the time elapsed since the process
    /// started, measured by the caller.
    pub fn collect(cwd: &Path, uptime: Duration) -> Self {
        SystemInfo {
            version: format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            platform: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            cwd: cwd.to_path_buf(),
            memory_mb: resident_memory_bytes().map(bytes_to_rounded_mb),
            uptime_secs: uptime.as_secs_f64().round() as u64,
        }
    }

    /// The lines printed, in display order.
    pub fn lines(&self) -> Vec<String> {
        let memory = match self.memory_mb {
            Some(mb) => format!("{}MB", mb),
            None => "unavailable".to_string(),
        };
        vec![
            format!("Version: {}", self.version),
            format!("Platform: {}", self.platform),
            format!("Architecture: {}", self.arch),
            format!("Current directory: {}", self.cwd.display()),
            format!("Memory usage: {}", memory),
            format!("Uptime: {} seconds", self.uptime_secs),
        ]
    }
}

fn bytes_to_rounded_mb(bytes: u64) -> u64 {
    (bytes as f64 / 1024.0 / 1024.0).round() as u64
}

/// Physical memory (resident set) of this process, where the host
/// reports it.
fn resident_memory_bytes() -> Option<u64> {
    memory_stats::memory_stats().map(|m| m.physical_mem as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reported_on_supported_hosts() {
        let info = SystemInfo::collect(Path::new("."), Duration::ZERO);
        if cfg!(any(target_os = "linux", target_os = "macos", target_os = "windows")) {
            assert!(info.memory_mb.is_some());
            assert!(info.lines()[4].ends_with("MB"));
        }
    }

    #[test]
    fn test_mb_rounding() {
        assert_eq!(bytes_to_rounded_mb(1024 * 1024), 1);
        assert_eq!(bytes_to_rounded_mb(1024 * 1024 + 600 * 1024), 2);
        assert_eq!(bytes_to_rounded_mb(400 * 1024), 0);
    }

    #[test]
    fn test_lines_fixed_order() {
        let info = SystemInfo {
            version: "console-app v1.0.0".into(),
            platform: "linux",
            arch: "x86_64",
            cwd: PathBuf::from("/tmp/work"),
            memory_mb: Some(4),
            uptime_secs: 7,
        };
        assert_eq!(
            info.lines(),
            vec![
                "Version: console-app v1.0.0",
                "Platform: linux",
                "Architecture: x86_64",
                "Current directory: /tmp/work",
                "Memory usage: 4MB",
                "Uptime: 7 seconds",
            ]
        );
    }

    #[test]
    fn test_uptime_rounds_to_nearest_second() {
        let info = SystemInfo::collect(Path::new("."), Duration::from_millis(2600));
        assert_eq!(info.uptime_secs, 3);
        assert_eq!(info.platform, std::env::consts::OS);
    }

    #[test]
    fn test_missing_memory_reads_unavailable() {
        let mut info = SystemInfo::collect(Path::new("."), Duration::ZERO);
        info.memory_mb = None;
        assert_eq!(info.lines()[4], "Memory usage: unavailable");
    }
}

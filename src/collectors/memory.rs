//! Process memory accounting.
//!
//! On Linux the resident set size and its high-water mark come from
//! `/proc/self/status` (`VmRSS` / `VmHWM`). Elsewhere the current RSS comes
//! from sysinfo and the peak is the largest value sampled so far by this
//! process. Both read as zero only when neither source is available.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use sysinfo::{Pid, System};

/// Largest RSS seen through the sysinfo path.
static SAMPLED_PEAK: AtomicU64 = AtomicU64::new(0);

/// Current and peak resident memory in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    pub current: u64,
    pub peak: u64,
}

impl MemorySnapshot {
    /// Sample this process.
    pub fn capture() -> Self {
        match std::fs::read_to_string("/proc/self/status") {
            Ok(status) => Self::from_proc_status(&status),
            Err(_) => Self::from_sample(sample_rss(), &SAMPLED_PEAK),
        }
    }

    /// Build a snapshot from a single RSS sample, folding it into `peak_mark`.
    fn from_sample(current: Option<u64>, peak_mark: &AtomicU64) -> Self {
        let current = current.unwrap_or(0);
        let peak = peak_mark.fetch_max(current, Ordering::AcqRel).max(current);
        Self { current, peak }
    }

    /// Build a snapshot from the contents of a `/proc/<pid>/status` file.
    ///
    /// `peak` is clamped to at least `current`: the two fields are sampled
    /// from different kernel counters and must still read consistently.
    pub fn from_proc_status(status: &str) -> Self {
        let current = read_kib(status, "VmRSS:").unwrap_or(0);
        let peak = read_kib(status, "VmHWM:").unwrap_or(0);
        Self {
            current,
            peak: peak.max(current),
        }
    }
}

/// Resident memory of this process according to sysinfo.
fn sample_rss() -> Option<u64> {
    let pid = Pid::from_u32(std::process::id());
    let mut system = System::new();
    system.refresh_process(pid);
    system.process(pid).map(|process| process.memory())
}

/// Parse a `Key:   1234 kB` line into bytes.
fn read_kib(status: &str, key: &str) -> Option<u64> {
    let line = status.lines().find(|l| l.starts_with(key))?;
    let kib: u64 = line[key.len()..].split_whitespace().next()?.parse().ok()?;
    Some(kib * 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &str = "Name:\tlamp-diag\nVmPeak:\t  120000 kB\nVmHWM:\t    8192 kB\nVmRSS:\t    4096 kB\nThreads:\t4\n";

    #[test]
    fn test_parse_proc_status() {
        let snap = MemorySnapshot::from_proc_status(STATUS);
        assert_eq!(snap.current, 4096 * 1024);
        assert_eq!(snap.peak, 8192 * 1024);
    }

    #[test]
    fn test_peak_never_below_current() {
        let snap = MemorySnapshot::from_proc_status("VmHWM:\t 10 kB\nVmRSS:\t 20 kB\n");
        assert_eq!(snap.current, 20 * 1024);
        assert_eq!(snap.peak, 20 * 1024);
    }

    #[test]
    fn test_missing_fields_read_as_zero() {
        assert_eq!(MemorySnapshot::from_proc_status("Name:\tx\n"), MemorySnapshot::default());
    }

    #[test]
    fn test_sampled_peak_tracks_largest_sample() {
        let mark = AtomicU64::new(0);
        assert_eq!(
            MemorySnapshot::from_sample(Some(300), &mark),
            MemorySnapshot { current: 300, peak: 300 }
        );
        assert_eq!(
            MemorySnapshot::from_sample(Some(100), &mark),
            MemorySnapshot { current: 100, peak: 300 }
        );
        assert_eq!(
            MemorySnapshot::from_sample(None, &mark),
            MemorySnapshot { current: 0, peak: 300 }
        );
    }

    #[test]
    fn test_sysinfo_sample_available() {
        assert!(sample_rss().is_some_and(|rss| rss > 0));
    }

    #[test]
    fn test_capture_is_consistent() {
        let snap = MemorySnapshot::capture();
        assert!(snap.current <= snap.peak);
    }
}

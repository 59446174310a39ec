use std::fmt::Write as _;

use serde::Serialize;
use tracing::warn;

use crate::format::{format_bytes, format_load, format_uptime, truncate_unicode};
use crate::metrics::cpu::CpuTicks;
use crate::metrics::error::{MetricsError, Result};
use crate::metrics::fs_table::{FsEntry, FsTable};
use crate::metrics::process_table::{ProcessEntry, ProcessTable};
use crate::metrics::rank::rank_descending;
use crate::metrics::usage::UsageSnapshot;
use crate::system::sample::{HostSample, MountSample, ProcessSample};

const MOUNT_COLUMN_WIDTH: usize = 24;

/// The system overview screen as data.
#[derive(Debug, Serialize)]
pub struct OverviewReport {
    pub uptime_secs: u64,
    pub load_average: [f64; 3],
    pub process_count: usize,
    pub memory: Option<UsageSnapshot>,
    pub swap: Option<UsageSnapshot>,
    pub shared_bytes: Option<u64>,
    pub buffer_bytes: Option<u64>,
}

/// Per-process resident memory, ranked largest first.
#[derive(Debug, Serialize)]
pub struct ProcessReport {
    pub total_memory_bytes: u64,
    pub entries: Vec<ProcessEntry>,
    /// Samples dropped because the fixed-capacity table filled.
    pub dropped: usize,
}

/// Per-mount usage, ranked by used bytes, plus the root mount summary.
#[derive(Debug, Serialize)]
pub struct FsReport {
    pub entries: Vec<FsEntry>,
    pub root: Option<FsEntry>,
    /// Mounts skipped for degenerate counters.
    pub skipped: usize,
}

#[derive(Debug, Serialize)]
pub struct CpuReport {
    pub ticks: CpuTicks,
    pub usage_percent: f64,
}

pub fn build_overview(host: &HostSample) -> OverviewReport {
    let mem = &host.memory;
    let memory = match UsageSnapshot::from_total_free(mem.total_bytes, mem.free_bytes) {
        Ok(usage) => Some(usage),
        Err(err) => {
            warn!(%err, "memory counters are degenerate");
            None
        }
    };
    // A swapless host reports a zero total; that is "no swap", not an error.
    let swap = UsageSnapshot::from_total_free(mem.swap_total_bytes, mem.swap_free_bytes).ok();

    OverviewReport {
        uptime_secs: host.uptime_secs,
        load_average: host.load_average,
        process_count: host.process_count,
        memory,
        swap,
        shared_bytes: mem.shared_bytes,
        buffer_bytes: mem.buffer_bytes,
    }
}

/// Run one process sampling pass: collect into a fresh fixed-capacity
/// table, compute shares, rank. The table dies with the pass.
pub fn build_process_report(
    samples: &[ProcessSample],
    total_memory_bytes: u64,
    capacity: usize,
) -> ProcessReport {
    let mut table = ProcessTable::with_capacity(capacity);
    let mut dropped = 0usize;

    for sample in samples {
        match table.insert(sample.pid, sample.resident_bytes) {
            Ok(()) => {}
            Err(MetricsError::CapacityExceeded { capacity }) => {
                if dropped == 0 {
                    warn!(capacity, "process table full, reporting partial results");
                }
                dropped += 1;
            }
            Err(err) => {
                warn!(pid = sample.pid, %err, "skipping process sample");
                dropped += 1;
            }
        }
    }

    if let Err(err) = table.assign_shares(total_memory_bytes) {
        // Shares stay at 0.0; resident sizes are still worth reporting.
        warn!(%err, total_memory_bytes, "cannot compute memory shares");
    }

    ProcessReport {
        total_memory_bytes,
        entries: rank_descending(table.into_entries()),
        dropped,
    }
}

/// Run one filesystem sampling pass through the chained table.
pub fn build_fs_report(samples: &[MountSample], bucket_count: usize) -> FsReport {
    let mut table = FsTable::with_buckets(bucket_count);
    let mut skipped = 0usize;

    for sample in samples {
        match UsageSnapshot::from_total_free(sample.total_bytes, sample.free_bytes) {
            Ok(usage) => table.insert(FsEntry {
                mount_path: sample.path.clone(),
                usage,
            }),
            Err(err) => {
                warn!(path = %sample.path, %err, "skipping mount");
                skipped += 1;
            }
        }
    }

    let root = table.lookup("/").ok().cloned();

    FsReport {
        entries: rank_descending(table.into_entries()),
        root,
        skipped,
    }
}

pub fn build_cpu_report(ticks: CpuTicks) -> Result<CpuReport> {
    Ok(CpuReport {
        ticks,
        usage_percent: ticks.usage_percent()?,
    })
}

pub fn render_overview(report: &OverviewReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "System Information");
    let _ = writeln!(out, "==================");
    let _ = writeln!(out, "Uptime:         {}", format_uptime(report.uptime_secs));
    let _ = writeln!(
        out,
        "Load average:   {}",
        format_load(&report.load_average)
    );
    let _ = writeln!(out, "Processes:      {}", report.process_count);
    match &report.memory {
        Some(memory) => {
            let _ = writeln!(out, "Total RAM:      {}", format_bytes(memory.total_bytes));
            let _ = writeln!(out, "Free RAM:       {}", format_bytes(memory.free_bytes));
            let _ = writeln!(
                out,
                "Used RAM:       {} ({:.2}%)",
                format_bytes(memory.used_bytes),
                memory.used_percent
            );
        }
        None => {
            let _ = writeln!(out, "Total RAM:      unavailable");
        }
    }
    if let Some(shared) = report.shared_bytes {
        let _ = writeln!(out, "Shared RAM:     {}", format_bytes(shared));
    }
    if let Some(buffers) = report.buffer_bytes {
        let _ = writeln!(out, "Buffer RAM:     {}", format_bytes(buffers));
    }
    match &report.swap {
        Some(swap) => {
            let _ = writeln!(out, "Total swap:     {}", format_bytes(swap.total_bytes));
            let _ = writeln!(
                out,
                "Used swap:      {} ({:.2}%)",
                format_bytes(swap.used_bytes),
                swap.used_percent
            );
        }
        None => {
            let _ = writeln!(out, "Swap:           none");
        }
    }
    out
}

pub fn render_processes(report: &ProcessReport, top: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Process Memory");
    let _ = writeln!(out, "{}", "=".repeat(44));
    let _ = writeln!(out, "{:<10} {:>14} {:>10}", "PID", "Resident", "Share");
    let _ = writeln!(out, "{}", "-".repeat(44));

    let shown = if top == 0 {
        report.entries.len()
    } else {
        top.min(report.entries.len())
    };
    for entry in &report.entries[..shown] {
        let _ = writeln!(
            out,
            "{:<10} {:>14} {:>9.2}%",
            entry.pid,
            format_bytes(entry.resident_bytes),
            entry.share_percent
        );
    }
    if shown < report.entries.len() {
        let _ = writeln!(out, "... {} more", report.entries.len() - shown);
    }
    if report.dropped > 0 {
        let _ = writeln!(
            out,
            "({} processes did not fit in the table)",
            report.dropped
        );
    }
    out
}

pub fn render_filesystems(report: &FsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Disk Usage");
    let _ = writeln!(out, "{}", "=".repeat(70));
    let _ = writeln!(
        out,
        "{:<24} {:>12} {:>12} {:>12} {:>7}",
        "Mount", "Total", "Free", "Used", "Used%"
    );
    let _ = writeln!(out, "{}", "-".repeat(70));
    for entry in &report.entries {
        let _ = writeln!(
            out,
            "{:<24} {:>12} {:>12} {:>12} {:>6.2}%",
            truncate_unicode(&entry.mount_path, MOUNT_COLUMN_WIDTH),
            format_bytes(entry.usage.total_bytes),
            format_bytes(entry.usage.free_bytes),
            format_bytes(entry.usage.used_bytes),
            entry.usage.used_percent
        );
    }
    if let Some(root) = &report.root {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Root filesystem: {} used of {} ({:.2}%)",
            format_bytes(root.usage.used_bytes),
            format_bytes(root.usage.total_bytes),
            root.usage.used_percent
        );
    }
    if report.skipped > 0 {
        let _ = writeln!(out, "({} mounts skipped)", report.skipped);
    }
    out
}

pub fn render_cpu(report: &CpuReport) -> String {
    format!("CPU usage: {:.2}%\n", report.usage_percent)
}

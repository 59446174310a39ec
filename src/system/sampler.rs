use sysinfo::{Disks, ProcessRefreshKind, ProcessesToUpdate, System};
use tracing::debug;

use super::platform;
use super::sample::{HostSample, MemorySample, MountSample, ProcessSample};
use crate::metrics::cpu::CpuTicks;

/// Reads raw OS counters and hands them over as plain sample structs.
///
/// Every call refreshes before reading, so each sampling pass sees a fresh
/// snapshot; nothing is carried over between passes.
pub struct Sampler {
    sys: System,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler {
    pub fn new() -> Self {
        Sampler { sys: System::new() }
    }

    pub fn host(&mut self) -> HostSample {
        self.sys.refresh_memory();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );

        let extras = platform::memory_extras();
        let load = System::load_average();

        HostSample {
            memory: MemorySample {
                total_bytes: self.sys.total_memory(),
                free_bytes: self.sys.free_memory(),
                swap_total_bytes: self.sys.total_swap(),
                swap_free_bytes: self.sys.free_swap(),
                shared_bytes: extras.shared_bytes,
                buffer_bytes: extras.buffer_bytes,
            },
            process_count: self.sys.processes().len(),
            uptime_secs: System::uptime(),
            load_average: [load.one, load.five, load.fifteen],
        }
    }

    /// Total RAM in bytes, for share-of-memory computations.
    pub fn total_memory(&mut self) -> u64 {
        self.sys.refresh_memory();
        self.sys.total_memory()
    }

    pub fn processes(&mut self) -> Vec<ProcessSample> {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        let samples: Vec<ProcessSample> = self
            .sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessSample {
                pid: pid.as_u32(),
                resident_bytes: process.memory(),
            })
            .collect();
        debug!(count = samples.len(), "enumerated processes");
        samples
    }

    /// Mount points, enumeration capped at `max`. Mounts the OS reports
    /// without capacity counters are skipped, not fatal.
    pub fn mounts(&mut self, max: usize) -> Vec<MountSample> {
        let disks = Disks::new_with_refreshed_list();
        let mut samples = Vec::new();
        for disk in disks.list() {
            if samples.len() == max {
                debug!(max, "mount enumeration cap reached");
                break;
            }
            let path = disk.mount_point().to_string_lossy().to_string();
            let total = disk.total_space();
            if total == 0 {
                debug!(%path, "skipping mount with zero capacity");
                continue;
            }
            samples.push(MountSample {
                path,
                total_bytes: total,
                free_bytes: disk.available_space(),
            });
        }
        debug!(count = samples.len(), "enumerated mounts");
        samples
    }

    pub fn cpu_ticks(&self) -> Option<CpuTicks> {
        platform::cpu_ticks()
    }
}

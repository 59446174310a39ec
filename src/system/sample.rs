/// Memory and swap counters from one host snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemorySample {
    pub total_bytes: u64,
    pub free_bytes: u64,
    pub swap_total_bytes: u64,
    pub swap_free_bytes: u64,
    /// Shmem from /proc/meminfo; absent on platforms without it.
    pub shared_bytes: Option<u64>,
    /// Buffers from /proc/meminfo; absent on platforms without it.
    pub buffer_bytes: Option<u64>,
}

/// Everything the overview screen needs from one snapshot.
#[derive(Debug, Clone, Default)]
pub struct HostSample {
    pub memory: MemorySample,
    pub process_count: usize,
    pub uptime_secs: u64,
    pub load_average: [f64; 3],
}

/// One enumerable process's resident memory.
#[derive(Debug, Clone, Copy)]
pub struct ProcessSample {
    pub pid: u32,
    pub resident_bytes: u64,
}

/// One enumerable mount point's capacity counters.
#[derive(Debug, Clone)]
pub struct MountSample {
    pub path: String,
    pub total_bytes: u64,
    pub free_bytes: u64,
}

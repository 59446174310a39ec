use super::{MemoryExtras, PlatformExtensions};
use crate::metrics::cpu::CpuTicks;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn cpu_ticks() -> Option<CpuTicks> {
        let contents = std::fs::read_to_string("/proc/stat").ok()?;
        parse_cpu_line(&contents)
    }

    fn memory_extras() -> MemoryExtras {
        let contents = match std::fs::read_to_string("/proc/meminfo") {
            Ok(contents) => contents,
            Err(_) => return MemoryExtras::default(),
        };
        MemoryExtras {
            shared_bytes: parse_meminfo_field(&contents, "Shmem:"),
            buffer_bytes: parse_meminfo_field(&contents, "Buffers:"),
        }
    }
}

// First line is the aggregate: "cpu  user nice system idle iowait irq ...".
// Only the first four counters feed the usage formula.
fn parse_cpu_line(stat: &str) -> Option<CpuTicks> {
    let line = stat.lines().next()?;
    let mut fields = line.split_whitespace();
    if fields.next() != Some("cpu") {
        return None;
    }
    let mut next_tick = || fields.next()?.parse::<u64>().ok();
    Some(CpuTicks {
        user: next_tick()?,
        nice: next_tick()?,
        system: next_tick()?,
        idle: next_tick()?,
    })
}

// Values in /proc/meminfo are kB: "Shmem:           1234 kB".
fn parse_meminfo_field(meminfo: &str, field: &str) -> Option<u64> {
    for line in meminfo.lines() {
        if let Some(rest) = line.strip_prefix(field) {
            let kb: u64 = rest.trim().trim_end_matches(" kB").trim().parse().ok()?;
            return Some(kb * 1024);
        }
    }
    None
}

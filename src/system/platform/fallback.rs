use super::{MemoryExtras, PlatformExtensions};
use crate::metrics::cpu::CpuTicks;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn cpu_ticks() -> Option<CpuTicks> {
        None
    }

    fn memory_extras() -> MemoryExtras {
        MemoryExtras::default()
    }
}

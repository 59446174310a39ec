use crate::metrics::cpu::CpuTicks;

/// Counters only some platforms expose through text interfaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryExtras {
    pub shared_bytes: Option<u64>,
    pub buffer_bytes: Option<u64>,
}

pub trait PlatformExtensions {
    fn cpu_ticks() -> Option<CpuTicks>;
    fn memory_extras() -> MemoryExtras;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(not(target_os = "linux"))]
mod fallback;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(not(target_os = "linux"))]
use fallback as platform_impl;

pub fn cpu_ticks() -> Option<CpuTicks> {
    platform_impl::Platform::cpu_ticks()
}

pub fn memory_extras() -> MemoryExtras {
    platform_impl::Platform::memory_extras()
}

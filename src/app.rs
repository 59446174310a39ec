use color_eyre::Result;
use tracing::debug;

use crate::action::MenuAction;
use crate::config::Config;
use crate::report::{
    CpuReport, FsReport, OverviewReport, ProcessReport, build_cpu_report, build_fs_report,
    build_overview, build_process_report, render_cpu, render_filesystems, render_overview,
    render_processes,
};
use crate::system::sampler::Sampler;

pub struct App {
    pub running: bool,
    sampler: Sampler,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        App {
            running: true,
            sampler: Sampler::new(),
            config,
        }
    }

    pub fn dispatch(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::Overview => print!("\n{}", render_overview(&self.overview_report())),
            MenuAction::Filesystems => print!("\n{}", render_filesystems(&self.fs_report())),
            MenuAction::ProcessMemory => {
                let top = self.config.display.top_processes;
                print!("\n{}", render_processes(&self.process_report(), top));
            }
            MenuAction::Cpu => match self.cpu_report() {
                Some(report) => print!("\n{}", render_cpu(&report)),
                None => println!("\nCPU tick counters are not available on this platform."),
            },
            MenuAction::Quit => self.running = false,
            MenuAction::Invalid => println!("Invalid option. Please select again."),
        }
        Ok(())
    }

    /// Run a single section and emit it as text or JSON.
    pub fn run_once(&mut self, action: MenuAction, json: bool) -> Result<()> {
        if !json {
            return self.dispatch(action);
        }
        let rendered = match action {
            MenuAction::Overview => serde_json::to_string_pretty(&self.overview_report())?,
            MenuAction::Filesystems => serde_json::to_string_pretty(&self.fs_report())?,
            MenuAction::ProcessMemory => serde_json::to_string_pretty(&self.process_report())?,
            MenuAction::Cpu => match self.cpu_report() {
                Some(report) => serde_json::to_string_pretty(&report)?,
                None => "null".to_string(),
            },
            MenuAction::Quit | MenuAction::Invalid => return Ok(()),
        };
        println!("{rendered}");
        Ok(())
    }

    // Each of these runs one complete sampling pass; the tables built
    // inside the report builders never outlive the call.

    fn overview_report(&mut self) -> OverviewReport {
        build_overview(&self.sampler.host())
    }

    fn process_report(&mut self) -> ProcessReport {
        let total_memory = self.sampler.total_memory();
        let samples = self.sampler.processes();
        debug!(samples = samples.len(), "process pass");
        build_process_report(
            &samples,
            total_memory,
            self.config.general.process_table_capacity,
        )
    }

    fn fs_report(&mut self) -> FsReport {
        let samples = self.sampler.mounts(self.config.general.max_mounts);
        debug!(samples = samples.len(), "filesystem pass");
        build_fs_report(&samples, self.config.general.fs_bucket_count)
    }

    fn cpu_report(&mut self) -> Option<CpuReport> {
        let ticks = self.sampler.cpu_ticks()?;
        build_cpu_report(ticks).ok()
    }
}

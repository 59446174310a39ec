#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Overview,
    Filesystems,
    ProcessMemory,
    Cpu,
    Quit,
    Invalid,
}

impl MenuAction {
    /// Accepts the menu digits and the section names used by `--once`.
    pub fn parse(input: &str) -> MenuAction {
        match input.trim().to_lowercase().as_str() {
            "1" | "overview" | "system" => MenuAction::Overview,
            "2" | "disks" | "filesystems" => MenuAction::Filesystems,
            "3" | "memory" | "processes" => MenuAction::ProcessMemory,
            "4" | "cpu" => MenuAction::Cpu,
            "5" | "q" | "quit" | "exit" => MenuAction::Quit,
            _ => MenuAction::Invalid,
        }
    }
}

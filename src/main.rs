use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

use syslens::action::MenuAction;
use syslens::app::App;
use syslens::config::{Config, load_config, load_config_from_path};

#[derive(Parser)]
#[command(
    name = "syslens",
    about = "Host metrics inspector: system overview, CPU, process memory, and disk usage"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run a single section (overview, disks, memory, cpu, or a menu digit) and exit
    #[arg(long)]
    once: Option<String>,

    /// Emit one-shot output as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Override the mount enumeration cap
    #[arg(long)]
    max_mounts: Option<usize>,

    /// Override how many process rows are shown (0 = all)
    #[arg(long)]
    top: Option<usize>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);
    let mut app = App::new(config);

    if let Some(section) = &cli.once {
        let action = MenuAction::parse(section);
        if action == MenuAction::Invalid {
            return Err(eyre!(
                "unknown section `{section}` (expected overview, disks, memory, or cpu)"
            ));
        }
        return app.run_once(action, cli.json);
    }

    run_menu(&mut app)
}

fn run_menu(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();

    while app.running {
        print_menu();
        io::stdout().flush()?;

        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break; // EOF quits like option 5
        }
        app.dispatch(MenuAction::parse(&input))?;
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("=== syslens ===");
    println!("1. System overview");
    println!("2. Disk usage");
    println!("3. Process memory");
    println!("4. CPU usage");
    println!("5. Quit");
    print!("Select an option: ");
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(max_mounts) = cli.max_mounts {
        config.general.max_mounts = max_mounts;
    }
    if let Some(top) = cli.top {
        config.display.top_processes = top;
    }

    config
}

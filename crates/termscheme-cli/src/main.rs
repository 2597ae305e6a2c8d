mod cli;
mod commands;

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use termscheme::OsHost;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("termscheme: logging disabled: {e}");
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    match cli.command {
        Commands::Convert { input, to, name } => {
            commands::convert(&input, to, name.as_deref(), &mut stdout.lock())
        }
        Commands::Dynamic {
            dark,
            light,
            name,
            output,
        } => commands::dynamic(&dark, &light, &name, output.as_deref(), &mut stdout.lock()),
        Commands::Preview { input, osc } => commands::preview(&input, osc, &mut stdout.lock()),
        Commands::Apply { scheme, mode } => {
            let pair = commands::load_pair(&scheme)?;
            commands::apply(pair, mode, &OsHost::new(), stdout).map(|_| ())
        }
        Commands::Watch {
            scheme,
            interval_ms,
        } => {
            let pair = commands::load_pair(&scheme)?;
            commands::watch(
                pair,
                &OsHost::new(),
                Duration::from_millis(interval_ms),
                stdout,
                None,
            )
        }
        Commands::List => commands::list(&mut stdout.lock()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        let _ = std::io::stdout().flush();
        let red = console::Style::new().red().bold().for_stderr();
        eprintln!("{} {:#}", red.apply_to("error:"), err);
        std::process::exit(1);
    }
}

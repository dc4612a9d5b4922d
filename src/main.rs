use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rangeprune::cli::{Cli, Command, RangeArgs};
use rangeprune::config::Config;
use rangeprune::output;
use rangeprune::prompt::LinePrompt;
use rangeprune::{NumberRange, Pruner};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        debug!(error = ?e, "fatal");
        output::print_fatal(&e.to_string());
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let mut pruner = Pruner::new(LinePrompt::stdin());

    match cli.command {
        None => {
            let (base, range) = resolve(&config, &RangeArgs::default())?;
            info!(base = %base.display(), %range, "default run");
            pruner.preview_then_prune(&base, range)?;
        }
        Some(Command::Scan(args)) => {
            let (base, range) = resolve(&config, &args)?;
            pruner.prune(&base, range, true)?;
        }
        Some(Command::Clean(args)) => {
            let (base, range) = resolve(&config, &args)?;
            pruner.prune(&base, range, false)?;
        }
    }

    Ok(())
}

/// CLI flags win over the config file, which wins over defaults.
fn resolve(config: &Config, args: &RangeArgs) -> std::io::Result<(PathBuf, NumberRange)> {
    let base = match args.path.clone().or_else(|| config.general.base_dir.clone()) {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let range = NumberRange::new(
        args.start.unwrap_or(config.range.start),
        args.end.unwrap_or(config.range.end),
    );
    Ok((base, range))
}

use anyhow::Result;
use clap::Parser as _;

use dotlink::cli::{Cli, Command};
use dotlink::commands::{self, Environment};

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let env = Environment::resolve(&args.global)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stderr = std::io::stderr();
    let mut err = stderr.lock();

    match args.command {
        Command::Init(opts) => commands::init::run(&env, &opts, &mut out),
        Command::Scan(opts) => commands::scan::run(&env, &opts, &mut out),
        Command::Config(opts) => commands::config::run(&env, &opts, &mut out),
        Command::Show => commands::show::run(&env, &mut out),
        Command::Check(opts) => commands::check::run(&env, &opts, &mut out, &mut err),
        Command::Link(opts) => commands::link::run(&env, &opts, &mut out, &mut err),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "dotlink=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

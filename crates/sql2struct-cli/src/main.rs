mod cli;
mod commands;
mod config;
#[allow(unused_assignments)]
mod diagnostic;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(&cli.global);
    let output = output::OutputContext::from_global(&cli.global);

    let result = match cli.command {
        cli::Commands::Generate(args) => commands::generate::run(args, &cli.global, &output),
        cli::Commands::Inspect(args) => commands::inspect::run(args, &cli.global, &output),
        cli::Commands::Completions(args) => commands::completions::run(args),
    };

    match result {
        Ok(()) => std::process::exit(error::ExitCode::Success as i32),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`; `-q` keeps only errors.
fn init_tracing(global: &cli::GlobalOpts) {
    let filter = if global.quiet {
        EnvFilter::new("error")
    } else {
        let level = match global.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!global.no_color)
        .init();
}

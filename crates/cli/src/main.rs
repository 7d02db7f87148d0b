use clap::error::ErrorKind;
use clap::Parser;
use dns_reverse_domain::LoggingConfig;
use std::process::ExitCode;
use tracing::debug;

mod bootstrap;
mod cli;
mod commands;
mod di;

use cli::{Cli, Mode};

fn main() -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Errore: impossibile avviare il runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let code = runtime.block_on(run());
    // A getnameinfo call abandoned at its deadline must not hold up exit.
    runtime.shutdown_background();
    code
}

async fn run() -> ExitCode {
    let cli = match Cli::try_parse_from(cli::normalize_args(std::env::args())) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            cli::print_usage();
            return ExitCode::FAILURE;
        }
    };

    bootstrap::init_logging(&LoggingConfig::with_override(cli.log_level.as_deref()));

    let Some(mode) = cli.mode() else {
        cli::print_usage();
        return ExitCode::FAILURE;
    };

    debug!(mode = ?mode, "Starting dns-reverse v{}", env!("CARGO_PKG_VERSION"));

    let result = match &mode {
        Mode::Single { ip, dns_server } => commands::single::run(ip, dns_server.as_deref()).await,
        Mode::Batch {
            input,
            output,
            dns_server,
        } => commands::batch::run(input, output, dns_server.as_deref()).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

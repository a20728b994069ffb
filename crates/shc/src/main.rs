mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shc_api::ShcClient;

use crate::cli::{Cli, Command};
use crate::commands::Ctx;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    let ctx = Ctx {
        format: config::output_format(&cli.global, &cfg.defaults),
        quiet: cli.global.quiet,
    };

    match cli.command {
        // Config commands don't need a controller connection
        Command::Config(args) => {
            let active = config::active_profile_name(&cli.global, &cfg);
            let out = commands::config_cmd::handle(&args, &cfg, &active, ctx)?;
            output::print_output(&out, ctx.quiet);
            Ok(())
        }

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "shc", &mut std::io::stdout());
            Ok(())
        }

        // All other commands require a controller connection
        cmd => {
            let endpoint = config::resolve_endpoint(&cli.global, &cfg)?;
            tracing::debug!(
                address = %endpoint.address,
                port = endpoint.port,
                api_version = %endpoint.api_version,
                "resolved controller endpoint"
            );
            let client = ShcClient::new(endpoint)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &client, ctx).await
        }
    }
}

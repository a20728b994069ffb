//! Config subcommand handlers. None of these talk to the controller.

use shc_config::Config;

use crate::cli::{ConfigArgs, ConfigCommand, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::Ctx;

pub fn handle(args: &ConfigArgs, cfg: &Config, active: &str, ctx: Ctx) -> Result<String, CliError> {
    match args.command {
        ConfigCommand::Path => Ok(config::config_path().display().to_string()),

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => match ctx.format {
            OutputFormat::Table | OutputFormat::Plain => Ok(config::render_config(cfg)?),
            format => output::render_single(format, cfg, |_| String::new(), |_| String::new()),
        },

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            if cfg.profiles.is_empty() {
                if !ctx.quiet {
                    eprintln!(
                        "No profiles configured. Add one under [profiles.<name>] in {}",
                        config::config_path().display()
                    );
                }
                return Ok(String::new());
            }
            let lines: Vec<String> = cfg
                .profiles
                .iter()
                .map(|(name, p)| {
                    let marker = if name == active { " *" } else { "" };
                    format!("{name}{marker}\t{}", p.address)
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

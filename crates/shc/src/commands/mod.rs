//! Command dispatch: bridges CLI args -> controller calls -> output formatting.

pub mod config_cmd;
pub mod devices;
pub mod messages;
pub mod rooms;
pub mod scenarios;

use shc_api::SmartHome;

use crate::cli::{Command, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Resolved presentation settings for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct Ctx {
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch<S: SmartHome>(cmd: Command, home: &S, ctx: Ctx) -> Result<(), CliError> {
    let out = match cmd {
        Command::Devices(args) => devices::handle(home, args, ctx).await?,
        Command::Rooms(args) => rooms::handle(home, args, ctx).await?,
        Command::Scenarios(args) => scenarios::handle(home, args, ctx).await?,
        Command::Messages(args) => messages::handle(home, args, ctx).await?,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    };
    output::print_output(&out, ctx.quiet);
    Ok(())
}

/// `"-"` for values the controller left empty.
fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

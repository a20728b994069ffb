//! Message command handlers.

use shc_api::{Message, SmartHome};
use tabled::Tabled;

use crate::cli::{MessagesArgs, MessagesCommand};
use crate::error::CliError;
use crate::output;

use super::Ctx;

/// Longest details column before truncation.
const DETAILS_WIDTH: usize = 60;

#[derive(Tabled)]
struct MessageRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Details")]
    details: String,
}

impl From<&Message> for MessageRow {
    fn from(m: &Message) -> Self {
        Self {
            id: m.id.clone(),
            kind: m.message_type.clone(),
            details: summarize(&m.extra),
        }
    }
}

/// Compact `key=value` rendering of the fields the controller attached.
fn summarize(extra: &serde_json::Map<String, serde_json::Value>) -> String {
    let joined = extra
        .iter()
        .map(|(k, v)| match v {
            serde_json::Value::String(s) => format!("{k}={s}"),
            other => format!("{k}={other}"),
        })
        .collect::<Vec<_>>()
        .join(" ");

    if joined.chars().count() > DETAILS_WIDTH {
        let cut: String = joined.chars().take(DETAILS_WIDTH - 1).collect();
        format!("{cut}…")
    } else {
        joined
    }
}

pub async fn handle<S: SmartHome>(
    home: &S,
    args: MessagesArgs,
    ctx: Ctx,
) -> Result<String, CliError> {
    match args.command {
        MessagesCommand::List => {
            let messages = home
                .list_messages()
                .await
                .map_err(|e| CliError::from_api(e, "message", None))?;
            output::render_list(
                ctx.format,
                &messages,
                |m| MessageRow::from(m),
                |m| m.id.clone(),
            )
        }
    }
}

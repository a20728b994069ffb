//! Scenario command handlers.

use shc_api::{Scenario, SmartHome};
use tabled::Tabled;

use crate::cli::{ScenariosArgs, ScenariosCommand};
use crate::error::CliError;
use crate::output;

use super::{Ctx, or_dash};

#[derive(Tabled)]
struct ScenarioRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Actions")]
    actions: usize,
}

impl From<&Scenario> for ScenarioRow {
    fn from(s: &Scenario) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            actions: s.actions.len(),
        }
    }
}

fn detail(s: &Scenario) -> String {
    let mut lines = vec![
        format!("ID:      {}", s.id),
        format!("Name:    {}", or_dash(&s.name)),
        format!("Icon:    {}", or_dash(&s.icon_id)),
        format!("Actions: {}", s.actions.len()),
    ];
    // Actions are opaque; show them as the controller sent them.
    for (n, action) in s.actions.iter().enumerate() {
        lines.push(format!("  {}. {action}", n + 1));
    }
    lines.join("\n")
}

pub async fn handle<S: SmartHome>(
    home: &S,
    args: ScenariosArgs,
    ctx: Ctx,
) -> Result<String, CliError> {
    match args.command {
        ScenariosCommand::List => {
            let scenarios = home
                .list_scenarios()
                .await
                .map_err(|e| CliError::from_api(e, "scenario", None))?;
            output::render_list(
                ctx.format,
                &scenarios,
                |s| ScenarioRow::from(s),
                |s| s.id.clone(),
            )
        }

        ScenariosCommand::Get { id } => {
            let scenario = home
                .get_scenario(&id)
                .await
                .map_err(|e| CliError::from_api(e, "scenario", Some(&id)))?;
            output::render_single(ctx.format, &scenario, detail, |s| s.id.clone())
        }

        ScenariosCommand::Trigger { id } => {
            home.trigger_scenario(&id)
                .await
                .map_err(|e| CliError::from_api(e, "scenario", Some(&id)))?;
            if !ctx.quiet {
                eprintln!("Scenario '{id}' triggered");
            }
            Ok(String::new())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::commands::fake::{FakeHome, scenario};
    use crate::error::exit_code;

    fn home() -> FakeHome {
        FakeHome {
            scenarios: vec![scenario("sc_1", "Good night"), scenario("sc_2", "Away")],
            ..FakeHome::default()
        }
    }

    fn ctx() -> Ctx {
        Ctx {
            format: OutputFormat::Table,
            quiet: true,
        }
    }

    #[tokio::test]
    async fn trigger_reaches_the_controller_once() {
        let home = home();
        let args = ScenariosArgs {
            command: ScenariosCommand::Trigger { id: "sc_2".into() },
        };
        let out = handle(&home, args, ctx()).await.unwrap();

        assert_eq!(out, "");
        assert_eq!(*home.triggered.lock().unwrap(), vec!["sc_2".to_owned()]);
    }

    #[tokio::test]
    async fn trigger_unknown_scenario_is_not_found() {
        let home = home();
        let args = ScenariosArgs {
            command: ScenariosCommand::Trigger { id: "sc_9".into() },
        };
        let err = handle(&home, args, ctx()).await.unwrap_err();

        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert!(home.triggered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn detail_lists_actions_in_order() {
        let args = ScenariosArgs {
            command: ScenariosCommand::Get { id: "sc_1".into() },
        };
        let out = handle(&home(), args, ctx()).await.unwrap();

        assert!(out.contains("Name:    Good night"));
        assert!(out.contains("Actions: 1"));
        assert!(out.contains(r#"  1. {"deviceId":"hdm:ZigBee:1","targetState":"CLOSED"}"#));
    }

    #[tokio::test]
    async fn list_table_counts_actions() {
        let args = ScenariosArgs {
            command: ScenariosCommand::List,
        };
        let out = handle(&home(), args, ctx()).await.unwrap();

        assert!(out.contains("Actions"));
        assert!(out.contains("Good night"));
        assert!(out.contains("sc_2"));
    }
}

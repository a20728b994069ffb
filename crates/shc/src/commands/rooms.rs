//! Room command handlers.

use shc_api::{Room, SmartHome};
use tabled::Tabled;

use crate::cli::{RoomsArgs, RoomsCommand};
use crate::error::CliError;
use crate::output;

use super::{Ctx, or_dash};

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Icon")]
    icon: String,
}

impl From<&Room> for RoomRow {
    fn from(r: &Room) -> Self {
        Self {
            id: r.id.clone(),
            name: r.name.clone(),
            icon: r.icon_id.clone(),
        }
    }
}

fn detail(r: &Room) -> String {
    [
        format!("ID:   {}", r.id),
        format!("Name: {}", or_dash(&r.name)),
        format!("Type: {}", or_dash(&r.room_type)),
        format!("Icon: {}", or_dash(&r.icon_id)),
    ]
    .join("\n")
}

pub async fn handle<S: SmartHome>(home: &S, args: RoomsArgs, ctx: Ctx) -> Result<String, CliError> {
    match args.command {
        RoomsCommand::List => {
            let rooms = home
                .list_rooms()
                .await
                .map_err(|e| CliError::from_api(e, "room", None))?;
            output::render_list(ctx.format, &rooms, |r| RoomRow::from(r), |r| r.id.clone())
        }

        RoomsCommand::Get { id } => {
            let room = home
                .get_room(&id)
                .await
                .map_err(|e| CliError::from_api(e, "room", Some(&id)))?;
            output::render_single(ctx.format, &room, detail, |r| r.id.clone())
        }
    }
}

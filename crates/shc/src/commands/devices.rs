//! Device command handlers.

use shc_api::{Device, SmartHome};
use tabled::Tabled;

use crate::cli::{DevicesArgs, DevicesCommand};
use crate::error::CliError;
use crate::output;

use super::{Ctx, or_dash};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Room")]
    room: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            model: d.device_model.clone(),
            room: d.room_id.clone(),
            status: d.status.to_string(),
        }
    }
}

fn detail(d: &Device) -> String {
    let mut lines = vec![
        format!("ID:           {}", d.id),
        format!("Name:         {}", or_dash(&d.name)),
        format!("Type:         {}", or_dash(&d.device_type)),
        format!("Model:        {}", or_dash(&d.device_model)),
        format!("Manufacturer: {}", or_dash(&d.manufacturer)),
        format!("Profile:      {}", or_dash(&d.profile)),
        format!("Serial:       {}", or_dash(&d.serial)),
        format!("Room:         {}", or_dash(&d.room_id)),
        format!("Root device:  {}", or_dash(&d.root_device_id)),
        format!("Status:       {}", or_dash(d.status.as_str())),
    ];
    if !d.device_service_ids.is_empty() {
        lines.push(format!("Services:     {}", d.device_service_ids.join(", ")));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle<S: SmartHome>(
    home: &S,
    args: DevicesArgs,
    ctx: Ctx,
) -> Result<String, CliError> {
    match args.command {
        DevicesCommand::List { available, room } => {
            let devices: Vec<Device> = home
                .list_devices()
                .await
                .map_err(|e| CliError::from_api(e, "device", None))?
                .into_iter()
                .filter(|d| !available || d.status.is_available())
                .filter(|d| room.as_deref().is_none_or(|r| d.room_id == r))
                .collect();
            output::render_list(ctx.format, &devices, |d| DeviceRow::from(d), |d| d.id.clone())
        }

        DevicesCommand::Get { id } => {
            let device = home
                .get_device(&id)
                .await
                .map_err(|e| CliError::from_api(e, "device", Some(&id)))?;
            output::render_single(ctx.format, &device, detail, |d| d.id.clone())
        }
    }
}

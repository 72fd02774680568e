//! `innkeep catalog`: room types, accommodations and the rules between them.

use innkeep_core::domain::{Accommodation, COMPATIBILITY_REGISTRY, RoomType};

use crate::{cli::CatalogCommands, commands::Services, error::CliResult, output::OutputManager};

pub async fn execute(
    cmd: CatalogCommands,
    services: &Services,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        CatalogCommands::Types => {
            let types = services.catalog.types().await?;
            types_table(&types, output)
        }
        CatalogCommands::Accommodations { room_type } => {
            let choices = services.catalog.accommodation_choices(room_type).await?;
            let title = match room_type {
                Some(ty) => format!("Accommodations for room type {ty}"),
                None => "Accommodations".to_owned(),
            };
            accommodations_table(&title, &choices, output)
        }
        CatalogCommands::Rules => rules(output),
    }
}

fn types_table(types: &[RoomType], output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return Ok(output.json(types)?);
    }
    output.header("Room types")?;
    let rows: Vec<Vec<String>> = types
        .iter()
        .map(|t| vec![t.id.to_string(), t.label.clone(), t.description.clone()])
        .collect();
    output.table(&["ID", "TYPE", "DESCRIPTION"], &rows)?;
    Ok(())
}

fn accommodations_table(
    title: &str,
    accommodations: &[Accommodation],
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        return Ok(output.json(accommodations)?);
    }
    output.header(title)?;
    if accommodations.is_empty() {
        output.info("Nothing to choose from.")?;
        return Ok(());
    }
    let rows: Vec<Vec<String>> = accommodations
        .iter()
        .map(|a| vec![a.id.to_string(), a.label.clone(), a.description.clone()])
        .collect();
    output.table(&["ID", "ACCOMMODATION", "DESCRIPTION"], &rows)?;
    Ok(())
}

/// The compatibility registry. Needs no API.
pub fn rules(output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let rules: Vec<serde_json::Value> = COMPATIBILITY_REGISTRY
            .iter()
            .map(|def| {
                serde_json::json!({
                    "type_id": def.room_type,
                    "accommodation_ids": def.accommodations,
                })
            })
            .collect();
        return Ok(output.json(&rules)?);
    }

    output.header("Accommodations offered per room type")?;
    let rows: Vec<Vec<String>> = COMPATIBILITY_REGISTRY
        .iter()
        .map(|def| {
            let allowed: Vec<String> = def.accommodations.iter().map(|a| a.to_string()).collect();
            vec![def.room_type.to_string(), allowed.join(", ")]
        })
        .collect();
    output.table(&["TYPE", "ACCOMMODATIONS"], &rows)?;
    output.print("Other types accept any accommodation.")?;
    Ok(())
}

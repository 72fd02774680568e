//! `innkeep hotels`: hotel CRUD.

use tracing::instrument;

use innkeep_core::{
    application::View,
    domain::{HotelDraft, HotelId},
};

use crate::{
    cli::{HotelCommands, HotelFields},
    commands::{Services, confirm, views},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub async fn execute(
    cmd: HotelCommands,
    services: &Services,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        HotelCommands::List => views::show(View::HotelList, services, output).await,
        HotelCommands::Show { id } => {
            let hotel = services.hotels.get(id).await?;
            views::hotel_detail(&hotel, output)
        }
        HotelCommands::Create(fields) => create(fields, services, output).await,
        HotelCommands::Edit { id, fields } => edit(id, fields, services, output).await,
        HotelCommands::Delete { id, yes } => delete(id, yes, services, output).await,
    }
}

#[instrument(skip_all)]
async fn create(fields: HotelFields, services: &Services, output: &OutputManager) -> CliResult<()> {
    let mut draft = HotelDraft::default();
    apply_fields(&mut draft, fields);

    let hotel = services.hotels.create(draft).await?;
    if output.is_json() {
        return Ok(output.json(&hotel)?);
    }
    output.success(&format!("Hotel '{}' created (#{})", hotel.name, hotel.id))?;
    views::show(View::HotelList, services, output).await
}

#[instrument(skip(fields, services, output))]
async fn edit(
    id: HotelId,
    fields: HotelFields,
    services: &Services,
    output: &OutputManager,
) -> CliResult<()> {
    let current = services.hotels.get(id).await?;
    let mut draft = HotelDraft::from_hotel(&current);
    apply_fields(&mut draft, fields);

    let hotel = services.hotels.update(id, draft).await?;
    if output.is_json() {
        return Ok(output.json(&hotel)?);
    }
    output.success(&format!("Hotel '{}' updated", hotel.name))?;
    views::hotel_detail(&hotel, output)
}

#[instrument(skip(services, output))]
async fn delete(
    id: HotelId,
    yes: bool,
    services: &Services,
    output: &OutputManager,
) -> CliResult<()> {
    let hotel = services.hotels.get(id).await?;
    if !yes
        && !confirm(&format!(
            "Delete hotel '{}' and its {} rooms?",
            hotel.name, hotel.total_rooms
        ))?
    {
        return Err(CliError::Cancelled);
    }

    let deleted = services.hotels.delete(id).await?;
    output.success(&format!("Hotel '{}' deleted", deleted.name))?;
    views::show(View::HotelList, services, output).await
}

/// Overwrite the draft with every field given on the command line.
fn apply_fields(draft: &mut HotelDraft, fields: HotelFields) {
    let HotelFields {
        name,
        description,
        address,
        phone,
        email,
        website,
        capacity,
    } = fields;
    for (slot, value) in [
        (&mut draft.name, name),
        (&mut draft.description, description),
        (&mut draft.address, address),
        (&mut draft.phone, phone),
        (&mut draft.email, email),
        (&mut draft.website, website),
    ] {
        if let Some(value) = value {
            *slot = value;
        }
    }
    if capacity.is_some() {
        draft.capacity = capacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_given_fields_are_replaced() {
        let mut draft = HotelDraft {
            name: "Old".into(),
            email: "old@hotel.test".into(),
            capacity: Some(10),
            ..HotelDraft::default()
        };
        apply_fields(
            &mut draft,
            HotelFields {
                name: Some("New".into()),
                capacity: Some(12),
                ..HotelFields::default()
            },
        );
        assert_eq!(draft.name, "New");
        assert_eq!(draft.email, "old@hotel.test");
        assert_eq!(draft.capacity, Some(12));
    }
}

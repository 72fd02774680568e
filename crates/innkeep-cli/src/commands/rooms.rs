//! `innkeep rooms`: the room workflow.
//!
//! Create and edit go through a [`RoomForm`] so that a rejection resets the
//! same fields it would reset on an interactive form. The hints printed
//! afterwards name the flags to change.

use tracing::{debug, instrument};

use innkeep_core::{
    application::{RoomForm, RoomMutation, View},
    domain::RoomId,
    error::InnkeepError,
};

use crate::{
    cli::{RoomCommands, RoomDetails, RoomFields},
    commands::{Services, confirm, views},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub async fn execute(
    cmd: RoomCommands,
    services: &Services,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        RoomCommands::List { hotel } => views::show(View::RoomList(hotel), services, output).await,
        RoomCommands::Show { id } => {
            let room = services.rooms.get(id).await?;
            views::room_detail(&room, output)
        }
        RoomCommands::Create(fields) => create(fields, services, output).await,
        RoomCommands::Edit { id, details } => edit(id, details, services, output).await,
        RoomCommands::Delete { id, yes } => delete(id, yes, services, output).await,
    }
}

#[instrument(skip_all)]
async fn create(fields: RoomFields, services: &Services, output: &OutputManager) -> CliResult<()> {
    let mut form = fields.hotel.map(RoomForm::for_create).unwrap_or_default();
    fill_form(&mut form, fields.details);

    let spinner = output.spinner("Creating room...");
    let result = services.rooms.create(form.to_draft()).await;
    spinner.finish_and_clear();

    conclude(result, &mut form, services, output).await
}

#[instrument(skip(details, services, output))]
async fn edit(
    id: RoomId,
    details: RoomDetails,
    services: &Services,
    output: &OutputManager,
) -> CliResult<()> {
    let room = services.rooms.get(id).await?;
    let mut form = RoomForm::for_edit(&room);
    fill_form(&mut form, details);

    let target = form.editing().ok_or_else(|| {
        CliError::Core(InnkeepError::Internal {
            message: "edit form without a target room".into(),
        })
    })?;

    let spinner = output.spinner("Updating room...");
    let result = services.rooms.update(target, form.to_draft()).await;
    spinner.finish_and_clear();

    conclude(result, &mut form, services, output).await
}

#[instrument(skip(services, output))]
async fn delete(
    id: RoomId,
    yes: bool,
    services: &Services,
    output: &OutputManager,
) -> CliResult<()> {
    let room = services.rooms.get(id).await?;
    if !yes && !confirm(&format!("Delete room '{}' ({} units)?", room.name, room.count))? {
        return Err(CliError::Cancelled);
    }

    let deleted = services.rooms.delete(id).await?;
    output.success(&format!("Room '{}' deleted", deleted.name))?;
    views::show(View::RoomList(deleted.hotel_id), services, output).await
}

/// Copy the command line into the form. The type goes first so that an
/// accommodation given alongside it is not cleared.
fn fill_form(form: &mut RoomForm, details: RoomDetails) {
    let RoomDetails {
        name,
        description,
        count,
        room_type,
        accommodation,
    } = details;

    if let Some(name) = name {
        form.name = name;
    }
    if let Some(description) = description {
        form.description = description;
    }
    if count.is_some() {
        form.count = count;
    }
    if room_type.is_some() {
        form.select_type(room_type);
    }
    if accommodation.is_some() {
        form.select_accommodation(accommodation);
    }
}

/// Report a submission and move on to the view it leads to.
async fn conclude(
    result: Result<RoomMutation, InnkeepError>,
    form: &mut RoomForm,
    services: &Services,
    output: &OutputManager,
) -> CliResult<()> {
    match result {
        Ok(mutation) => {
            debug!(room = %mutation.room.id, kind = ?mutation.kind, "Room saved");
            if output.is_json() {
                return Ok(output.json(&mutation.room)?);
            }
            output.success(&mutation.notification.message)?;
            views::show(mutation.next, services, output).await
        }
        Err(err) => {
            let before = form.clone();
            form.apply_rejection(&err);
            for hint in cleared_field_hints(&before, form) {
                output.warning(hint)?;
            }
            if err.next_view() != View::Form {
                views::show_best_effort(err.next_view(), services, output).await;
            }
            Err(CliError::Core(err))
        }
    }
}

fn cleared_field_hints(before: &RoomForm, after: &RoomForm) -> Vec<&'static str> {
    let mut hints = Vec::new();
    if before.selected_type().is_some() && after.selected_type().is_none() {
        hints.push("Choose another --type and --accommodation pair");
    }
    if before.count.is_some() && after.count.is_none() {
        hints.push("Choose a smaller --count");
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep_core::domain::{AccommodationId, DomainError, HotelId, MutationKind, TypeId};

    fn details() -> RoomDetails {
        RoomDetails {
            name: Some("Garden".into()),
            description: Some("Ground floor".into()),
            count: Some(2),
            room_type: Some(TypeId::new(1)),
            accommodation: Some(AccommodationId::new(2)),
        }
    }

    #[test]
    fn fill_form_keeps_accommodation_given_with_type() {
        let mut form = RoomForm::for_create(HotelId::new(1));
        fill_form(&mut form, details());
        assert_eq!(form.selected_type(), Some(TypeId::new(1)));
        assert_eq!(form.selected_accommodation(), Some(AccommodationId::new(2)));
        assert_eq!(form.hotel_id(), Some(HotelId::new(1)));
    }

    #[test]
    fn changing_only_the_type_drops_an_incompatible_accommodation() {
        let mut form = RoomForm::default();
        fill_form(&mut form, details());
        // Junior rooms only offer triples and quadruples.
        fill_form(
            &mut form,
            RoomDetails {
                room_type: Some(TypeId::new(2)),
                ..RoomDetails::default()
            },
        );
        assert_eq!(form.selected_accommodation(), None);
        assert_eq!(form.name, "Garden");
    }

    #[test]
    fn duplicate_rejection_hints_at_the_selectors() {
        let mut form = RoomForm::default();
        fill_form(&mut form, details());
        let before = form.clone();
        let err = InnkeepError::Domain(DomainError::DuplicateRoomConfiguration {
            existing_room: "Patio".into(),
            type_label: "Standard".into(),
            accommodation_label: "Double".into(),
            candidate: "Garden".into(),
            kind: MutationKind::Create,
        });
        form.apply_rejection(&err);
        let hints = cleared_field_hints(&before, &form);
        assert_eq!(hints.len(), 1);
        assert!(hints[0].contains("--type"));
    }

    #[test]
    fn no_hints_when_nothing_was_cleared() {
        let form = RoomForm::default();
        assert!(cleared_field_hints(&form, &form).is_empty());
    }
}

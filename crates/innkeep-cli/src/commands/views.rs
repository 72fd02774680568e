//! Rendering of the list screens a command lands on.

use innkeep_core::{
    application::{HotelRooms, View},
    domain::{Hotel, Room},
};
use tracing::debug;

use crate::{commands::Services, error::CliResult, output::OutputManager};

/// Present `view`. `View::Form` means the command stays put and shows nothing.
pub async fn show(view: View, services: &Services, output: &OutputManager) -> CliResult<()> {
    match view {
        View::Form => Ok(()),
        View::HotelList => {
            let hotels = services.hotels.list().await?;
            hotel_list(&hotels, output)
        }
        View::RoomList(hotel_id) => {
            let listing = services.rooms.list_for_hotel(hotel_id).await?;
            room_list(&listing, output)
        }
    }
}

/// Like [`show`], but a failure to load the view is only logged. Used after an
/// error that is already being reported.
pub async fn show_best_effort(view: View, services: &Services, output: &OutputManager) {
    if let Err(e) = show(view, services, output).await {
        debug!(error = %e, "Could not load the next view");
    }
}

pub fn hotel_list(hotels: &[Hotel], output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return Ok(output.json(hotels)?);
    }
    output.header("Hotels")?;
    if hotels.is_empty() {
        output.info("No hotels registered yet. Create one with: innkeep hotels create")?;
        return Ok(());
    }
    let rows: Vec<Vec<String>> = hotels
        .iter()
        .map(|h| {
            vec![
                h.id.to_string(),
                h.name.clone(),
                format!("{}/{}", h.total_rooms, h.capacity),
                h.email.clone(),
                h.website.clone(),
            ]
        })
        .collect();
    output.table(&["ID", "NAME", "ROOMS", "EMAIL", "WEBSITE"], &rows)?;
    Ok(())
}

pub fn hotel_detail(hotel: &Hotel, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return Ok(output.json(hotel)?);
    }
    output.header(&format!("{} (#{})", hotel.name, hotel.id))?;
    output.print(&format!("  Description: {}", hotel.description))?;
    output.print(&format!("  Address:     {}", hotel.address))?;
    output.print(&format!("  Phone:       {}", hotel.phone))?;
    output.print(&format!("  Email:       {}", hotel.email))?;
    output.print(&format!("  Website:     {}", hotel.website))?;
    output.print(&format!(
        "  Rooms:       {} of {} created, {} free",
        hotel.total_rooms,
        hotel.capacity,
        hotel.remaining_capacity()
    ))?;
    if let Some(created) = hotel.created_at {
        output.print(&format!("  Created:     {}", created.format("%Y-%m-%d %H:%M")))?;
    }
    Ok(())
}

pub fn room_list(listing: &HotelRooms, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return Ok(output.json(&listing.rooms)?);
    }
    let hotel = &listing.hotel;
    output.header(&format!(
        "Rooms of {} ({} of {} created)",
        hotel.name, hotel.total_rooms, hotel.capacity
    ))?;
    if listing.rooms.is_empty() {
        output.info(&format!(
            "No rooms yet. Add one with: innkeep rooms create --hotel {}",
            hotel.id
        ))?;
        return Ok(());
    }
    let rows: Vec<Vec<String>> = listing.rooms.iter().map(room_row).collect();
    output.table(&["ID", "NAME", "TYPE", "ACCOMMODATION", "COUNT"], &rows)?;
    Ok(())
}

pub fn room_detail(room: &Room, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return Ok(output.json(room)?);
    }
    output.header(&format!("{} (#{})", room.name, room.id))?;
    output.print(&format!("  Hotel:         {} (#{})", room.hotel_name, room.hotel_id))?;
    output.print(&format!("  Description:   {}", room.description))?;
    output.print(&format!("  Type:          {} (#{})", room.type_label, room.type_id))?;
    output.print(&format!(
        "  Accommodation: {} (#{})",
        room.accommodation_label, room.accommodation_id
    ))?;
    output.print(&format!("  Count:         {}", room.count))?;
    Ok(())
}

fn room_row(room: &Room) -> Vec<String> {
    vec![
        room.id.to_string(),
        room.name.clone(),
        label_or_id(&room.type_label, room.type_id.get()),
        label_or_id(&room.accommodation_label, room.accommodation_id.get()),
        room.count.to_string(),
    ]
}

fn label_or_id(label: &str, id: u64) -> String {
    if label.is_empty() {
        format!("#{id}")
    } else {
        label.to_owned()
    }
}

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    compatibility,
    entities::{HotelDraft, HotelPayload, RoomDraft, RoomPayload},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All field-level validation lives here, not scattered across entities.
/// Rules that need fresh server data (uniqueness, capacity) do not.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_room_draft(draft: &RoomDraft) -> Result<RoomPayload, DomainError> {
        let name = required_text("name", &draft.name)?;
        let description = required_text("description", &draft.description)?;
        let count = draft
            .count
            .ok_or(DomainError::MissingRequiredField { field: "count" })?;
        let hotel_id = draft
            .hotel_id
            .ok_or(DomainError::MissingRequiredField { field: "hotel_id" })?;
        let type_id = draft
            .type_id
            .ok_or(DomainError::MissingRequiredField { field: "type_id" })?;
        let accommodation_id = draft.accommodation_id.ok_or(DomainError::MissingRequiredField {
            field: "accommodation_id",
        })?;

        if count == 0 {
            return Err(DomainError::InvalidField {
                field: "count",
                reason: "must be at least 1".into(),
            });
        }

        if !compatibility::is_compatible(type_id, accommodation_id) {
            return Err(DomainError::IncompatibleAccommodation {
                type_id: type_id.get(),
                accommodation_id: accommodation_id.get(),
            });
        }

        Ok(RoomPayload {
            hotel_id,
            habitacion: name,
            descripcion: description,
            cantidad: count,
            tipo_id: type_id,
            acomodacion_id: accommodation_id,
        })
    }

    /// Blank fields are reported first, in form order, then the email, the
    /// website and the capacity. Only the first problem is returned.
    pub fn validate_hotel_draft(draft: &HotelDraft) -> Result<HotelPayload, DomainError> {
        let hotel = required_text("name", &draft.name)?;
        let descripcion = required_text("description", &draft.description)?;
        let direccion = required_text("address", &draft.address)?;
        let telefono = required_text("phone", &draft.phone)?;
        let email = required_text("email", &draft.email)?;
        let pagina_web = required_text("website", &draft.website)?;
        let numero_habitaciones = draft
            .capacity
            .ok_or(DomainError::MissingRequiredField { field: "capacity" })?;

        if !is_valid_email(&email) {
            return Err(DomainError::InvalidField {
                field: "email",
                reason: format!("'{email}' is not a valid email address"),
            });
        }

        if !is_valid_website(&pagina_web) {
            return Err(DomainError::InvalidField {
                field: "website",
                reason: format!("'{pagina_web}' must start with http://, https:// or ftp://"),
            });
        }

        if numero_habitaciones == 0 {
            return Err(DomainError::InvalidField {
                field: "capacity",
                reason: "must be at least 1".into(),
            });
        }

        Ok(HotelPayload {
            hotel,
            descripcion,
            direccion,
            telefono,
            email,
            pagina_web,
            numero_habitaciones,
        })
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingRequiredField { field });
    }
    Ok(trimmed.to_owned())
}

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static WEBSITE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"^(ftp|http|https)://[^ "]+$"#).ok());

/// `local@domain.tld`: one `@`, no whitespace, a dot inside the domain.
fn is_valid_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(email))
}

/// `ftp://`, `http://` or `https://` followed by anything without a space or
/// a double quote.
fn is_valid_website(url: &str) -> bool {
    WEBSITE.as_ref().is_some_and(|re| re.is_match(url))
}

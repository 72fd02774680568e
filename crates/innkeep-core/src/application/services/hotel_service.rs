//! Hotel Service - hotel CRUD use cases.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::HotelGateway, services::bounded},
    domain::{Hotel, HotelDraft, HotelId, RoomCapacity},
    error::InnkeepResult,
};

pub struct HotelService {
    hotels: Arc<dyn HotelGateway>,
    timeout: Option<Duration>,
}

impl HotelService {
    pub fn new(hotels: Arc<dyn HotelGateway>) -> Self {
        Self {
            hotels,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> InnkeepResult<Vec<Hotel>> {
        bounded(self.timeout, "list_hotels", self.hotels.list_hotels()).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: HotelId) -> InnkeepResult<Hotel> {
        bounded(self.timeout, "fetch_hotel", self.hotels.fetch_hotel(id))
            .await?
            .ok_or_else(|| ApplicationError::HotelNotFound { id }.into())
    }

    /// Validate the draft and register a new hotel.
    #[instrument(skip_all, fields(hotel = %draft.name))]
    pub async fn create(&self, draft: HotelDraft) -> InnkeepResult<Hotel> {
        let payload = draft
            .validate()
            .inspect_err(|e| warn!(error = %e, "Hotel draft rejected"))?;
        let hotel = bounded(
            self.timeout,
            "create_hotel",
            self.hotels.create_hotel(&payload),
        )
        .await?;
        info!(hotel_id = %hotel.id, "Hotel created");
        Ok(hotel)
    }

    /// Replace hotel `id`. The capacity may not drop below the rooms already
    /// created for it.
    #[instrument(skip(self, draft), fields(hotel = %draft.name))]
    pub async fn update(&self, id: HotelId, draft: HotelDraft) -> InnkeepResult<Hotel> {
        let payload = draft
            .validate()
            .inspect_err(|e| warn!(error = %e, "Hotel draft rejected"))?;
        let current = self.get(id).await?;
        RoomCapacity::of(&current)
            .check_new_capacity(payload.numero_habitaciones)
            .inspect_err(|e| warn!(error = %e, "Capacity change rejected"))?;
        let hotel = bounded(
            self.timeout,
            "update_hotel",
            self.hotels.update_hotel(id, &payload),
        )
        .await?;
        info!(hotel_id = %hotel.id, "Hotel updated");
        Ok(hotel)
    }

    /// Delete a hotel and return it as it was. The API removes its rooms too.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: HotelId) -> InnkeepResult<Hotel> {
        let hotel = self.get(id).await?;
        bounded(self.timeout, "delete_hotel", self.hotels.delete_hotel(id)).await?;
        info!("Hotel deleted");
        Ok(hotel)
    }
}

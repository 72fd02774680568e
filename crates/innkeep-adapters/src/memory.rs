//! In-memory backend that behaves like the hotel API.
//!
//! It keeps `total_habitaciones` in step with the rooms it stores, fills in
//! the denormalized labels and removes a hotel's rooms with the hotel. It
//! performs no capacity or uniqueness checks of its own.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;
use chrono::Utc;
use innkeep_core::{
    application::{
        ApplicationError,
        ports::{CatalogGateway, HotelGateway, RoomGateway},
    },
    domain::{
        Accommodation, AccommodationId, Hotel, HotelId, HotelPayload, Room, RoomId, RoomPayload,
        RoomType, TypeId,
    },
    error::InnkeepResult,
};
use tracing::debug;

#[derive(Debug, Default)]
struct State {
    hotels: BTreeMap<HotelId, Hotel>,
    rooms: BTreeMap<RoomId, Room>,
    types: Vec<RoomType>,
    accommodations: Vec<Accommodation>,
    last_hotel_id: u64,
    last_room_id: u64,
    offline: bool,
}

impl State {
    fn type_label(&self, id: TypeId) -> String {
        self.types
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.label.clone())
            .unwrap_or_default()
    }

    fn accommodation_label(&self, id: AccommodationId) -> String {
        self.accommodations
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.label.clone())
            .unwrap_or_default()
    }

    fn adjust_total(&mut self, hotel_id: HotelId, removed: u32, added: u32) {
        if let Some(hotel) = self.hotels.get_mut(&hotel_id) {
            hotel.total_rooms = hotel.total_rooms.saturating_sub(removed).saturating_add(added);
        }
    }

    fn room_from(&self, id: RoomId, payload: &RoomPayload) -> InnkeepResult<Room> {
        let hotel = self
            .hotels
            .get(&payload.hotel_id)
            .ok_or(ApplicationError::HotelNotFound {
                id: payload.hotel_id,
            })?;
        let now = Utc::now();
        Ok(Room {
            id,
            name: payload.habitacion.clone(),
            description: payload.descripcion.clone(),
            count: payload.cantidad,
            hotel_id: payload.hotel_id,
            hotel_name: hotel.name.clone(),
            type_id: payload.tipo_id,
            type_label: self.type_label(payload.tipo_id),
            accommodation_id: payload.acomodacion_id,
            accommodation_label: self.accommodation_label(payload.acomodacion_id),
            created_at: Some(now),
            updated_at: Some(now),
        })
    }
}

/// Thread-safe in-memory backend implementing every gateway.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    inner: Arc<RwLock<State>>,
}

impl InMemoryBackend {
    /// Create a backend with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend seeded with the standard type and accommodation
    /// catalogs.
    pub fn with_default_catalog() -> Self {
        let backend = Self::new();
        if let Ok(mut state) = backend.inner.write() {
            state.types = vec![
                RoomType::new(1, "Standard", "Standard room"),
                RoomType::new(2, "Junior", "Junior suite"),
                RoomType::new(3, "Suite", "Suite"),
            ];
            state.accommodations = vec![
                Accommodation::new(1, "Single", "One guest"),
                Accommodation::new(2, "Double", "Two guests"),
                Accommodation::new(3, "Triple", "Three guests"),
                Accommodation::new(4, "Quadruple", "Four guests"),
            ];
        }
        backend
    }

    /// Make every subsequent call fail as if the API were unreachable.
    pub fn set_offline(&self, offline: bool) -> InnkeepResult<()> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        state.offline = offline;
        Ok(())
    }

    fn read(&self, operation: &'static str) -> InnkeepResult<RwLockReadGuard<'_, State>> {
        let state = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        if state.offline {
            return Err(ApplicationError::transport(operation, "backend offline").into());
        }
        Ok(state)
    }

    fn write(&self, operation: &'static str) -> InnkeepResult<RwLockWriteGuard<'_, State>> {
        let state = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        if state.offline {
            return Err(ApplicationError::transport(operation, "backend offline").into());
        }
        Ok(state)
    }
}

#[async_trait]
impl HotelGateway for InMemoryBackend {
    async fn list_hotels(&self) -> InnkeepResult<Vec<Hotel>> {
        Ok(self.read("list_hotels")?.hotels.values().cloned().collect())
    }

    async fn fetch_hotel(&self, id: HotelId) -> InnkeepResult<Option<Hotel>> {
        Ok(self.read("fetch_hotel")?.hotels.get(&id).cloned())
    }

    async fn create_hotel(&self, payload: &HotelPayload) -> InnkeepResult<Hotel> {
        let mut state = self.write("create_hotel")?;
        state.last_hotel_id += 1;
        let id = HotelId::new(state.last_hotel_id);
        let now = Utc::now();
        let hotel = Hotel {
            id,
            name: payload.hotel.clone(),
            description: payload.descripcion.clone(),
            address: payload.direccion.clone(),
            phone: payload.telefono.clone(),
            email: payload.email.clone(),
            website: payload.pagina_web.clone(),
            rating: 0.0,
            capacity: payload.numero_habitaciones,
            total_rooms: 0,
            created_at: Some(now),
            updated_at: Some(now),
        };
        state.hotels.insert(id, hotel.clone());
        debug!(hotel_id = %id, "Stored hotel");
        Ok(hotel)
    }

    async fn update_hotel(&self, id: HotelId, payload: &HotelPayload) -> InnkeepResult<Hotel> {
        let mut state = self.write("update_hotel")?;
        let hotel = state
            .hotels
            .get_mut(&id)
            .ok_or(ApplicationError::HotelNotFound { id })?;
        hotel.name = payload.hotel.clone();
        hotel.description = payload.descripcion.clone();
        hotel.address = payload.direccion.clone();
        hotel.phone = payload.telefono.clone();
        hotel.email = payload.email.clone();
        hotel.website = payload.pagina_web.clone();
        hotel.capacity = payload.numero_habitaciones;
        hotel.updated_at = Some(Utc::now());
        let updated = hotel.clone();

        for room in state.rooms.values_mut().filter(|r| r.hotel_id == id) {
            room.hotel_name = updated.name.clone();
        }
        Ok(updated)
    }

    async fn delete_hotel(&self, id: HotelId) -> InnkeepResult<()> {
        let mut state = self.write("delete_hotel")?;
        state
            .hotels
            .remove(&id)
            .ok_or(ApplicationError::HotelNotFound { id })?;
        state.rooms.retain(|_, room| room.hotel_id != id);
        debug!(hotel_id = %id, "Removed hotel and its rooms");
        Ok(())
    }
}

#[async_trait]
impl RoomGateway for InMemoryBackend {
    async fn rooms_by_hotel(&self, hotel_id: HotelId) -> InnkeepResult<Vec<Room>> {
        Ok(self
            .read("rooms_by_hotel")?
            .rooms
            .values()
            .filter(|room| room.hotel_id == hotel_id)
            .cloned()
            .collect())
    }

    async fn fetch_room(&self, id: RoomId) -> InnkeepResult<Option<Room>> {
        Ok(self.read("fetch_room")?.rooms.get(&id).cloned())
    }

    async fn create_room(&self, payload: &RoomPayload) -> InnkeepResult<Room> {
        let mut state = self.write("create_room")?;
        let id = RoomId::new(state.last_room_id + 1);
        let room = state.room_from(id, payload)?;
        state.last_room_id = id.get();
        state.adjust_total(room.hotel_id, 0, room.count);
        state.rooms.insert(id, room.clone());
        debug!(room_id = %id, hotel_id = %room.hotel_id, "Stored room");
        Ok(room)
    }

    async fn update_room(&self, id: RoomId, payload: &RoomPayload) -> InnkeepResult<Room> {
        let mut state = self.write("update_room")?;
        let previous = state
            .rooms
            .get(&id)
            .cloned()
            .ok_or(ApplicationError::RoomNotFound { id })?;
        let mut room = state.room_from(id, payload)?;
        room.created_at = previous.created_at;

        state.adjust_total(previous.hotel_id, previous.count, 0);
        state.adjust_total(room.hotel_id, 0, room.count);
        state.rooms.insert(id, room.clone());
        Ok(room)
    }

    async fn delete_room(&self, id: RoomId) -> InnkeepResult<()> {
        let mut state = self.write("delete_room")?;
        let room = state
            .rooms
            .remove(&id)
            .ok_or(ApplicationError::RoomNotFound { id })?;
        state.adjust_total(room.hotel_id, room.count, 0);
        Ok(())
    }
}

#[async_trait]
impl CatalogGateway for InMemoryBackend {
    async fn list_types(&self) -> InnkeepResult<Vec<RoomType>> {
        Ok(self.read("list_types")?.types.clone())
    }

    async fn list_accommodations(&self) -> InnkeepResult<Vec<Accommodation>> {
        Ok(self.read("list_accommodations")?.accommodations.clone())
    }
}

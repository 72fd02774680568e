//! Room Service - the room mutation workflow.
//!
//! Create and edit run the same state machine:
//!
//! ```text
//! Idle → Validating → FetchingContext → CheckingUniqueness
//!      → (fetch hotel) → CheckingCapacity → Persisting → Done
//! ```
//!
//! Any check may exit early with a rejection; a missing hotel is fatal and
//! sends the caller back to the hotel list. Reads are awaited one after the
//! other and the single write only happens after every check passed.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, EditTarget, RoomMutation,
        ports::{HotelGateway, RoomGateway},
        services::bounded,
    },
    domain::{
        DomainError, Hotel, HotelId, MutationKind, Room, RoomCapacity, RoomDraft, RoomId,
        RoomSlot, ensure_unique,
    },
    error::InnkeepResult,
};

/// Stage of the room mutation workflow, reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    Validating,
    FetchingContext,
    CheckingUniqueness,
    CheckingCapacity,
    Persisting,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validating => "validating",
            Self::FetchingContext => "fetching-context",
            Self::CheckingUniqueness => "checking-uniqueness",
            Self::CheckingCapacity => "checking-capacity",
            Self::Persisting => "persisting",
        };
        f.write_str(name)
    }
}

/// A hotel together with its rooms, as shown by the room list view.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, Copy)]
enum Submission {
    Create,
    Update(EditTarget),
}

impl Submission {
    fn kind(self) -> MutationKind {
        match self {
            Self::Create => MutationKind::Create,
            Self::Update { .. } => MutationKind::Update,
        }
    }

    fn editing(self) -> Option<RoomId> {
        match self {
            Self::Create => None,
            Self::Update(target) => Some(target.room_id),
        }
    }
}

/// Room use cases.
pub struct RoomService {
    hotels: Arc<dyn HotelGateway>,
    rooms: Arc<dyn RoomGateway>,
    timeout: Option<Duration>,
}

impl RoomService {
    pub fn new(hotels: Arc<dyn HotelGateway>, rooms: Arc<dyn RoomGateway>) -> Self {
        Self {
            hotels,
            rooms,
            timeout: None,
        }
    }

    /// Bound every remote call made by this service.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a room after the uniqueness and capacity checks pass.
    #[instrument(skip_all, fields(hotel = ?draft.hotel_id, room = %draft.name))]
    pub async fn create(&self, draft: RoomDraft) -> InnkeepResult<RoomMutation> {
        self.submit(Submission::Create, draft).await
    }

    /// Replace the room `target` describes. The draft must keep the room's
    /// hotel.
    #[instrument(skip_all, fields(room_id = %target.room_id, room = %draft.name))]
    pub async fn update(
        &self,
        target: EditTarget,
        draft: RoomDraft,
    ) -> InnkeepResult<RoomMutation> {
        self.submit(Submission::Update(target), draft).await
    }

    /// The hotel and its rooms. The hotel must exist.
    #[instrument(skip(self))]
    pub async fn list_for_hotel(&self, hotel_id: HotelId) -> InnkeepResult<HotelRooms> {
        let hotel = self.require_hotel(hotel_id).await?;
        let rooms = bounded(
            self.timeout,
            "rooms_by_hotel",
            self.rooms.rooms_by_hotel(hotel_id),
        )
        .await?;
        Ok(HotelRooms { hotel, rooms })
    }

    /// Fetch one room, failing when it does not exist.
    #[instrument(skip(self))]
    pub async fn get(&self, room_id: RoomId) -> InnkeepResult<Room> {
        bounded(self.timeout, "fetch_room", self.rooms.fetch_room(room_id))
            .await?
            .ok_or_else(|| ApplicationError::RoomNotFound { id: room_id }.into())
    }

    /// Delete a room and return the record as it was before deletion.
    #[instrument(skip(self))]
    pub async fn delete(&self, room_id: RoomId) -> InnkeepResult<Room> {
        let room = self.get(room_id).await?;
        bounded(self.timeout, "delete_room", self.rooms.delete_room(room_id)).await?;
        info!(hotel = %room.hotel_id, "Room deleted");
        Ok(room)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    async fn submit(
        &self,
        submission: Submission,
        draft: RoomDraft,
    ) -> InnkeepResult<RoomMutation> {
        debug!(stage = %WorkflowStage::Validating);
        let payload = draft
            .validate()
            .and_then(|payload| match submission {
                Submission::Update(target) if target.hotel_id != payload.hotel_id => {
                    Err(DomainError::HotelReassignment {
                        owner: target.hotel_id.get(),
                        requested: payload.hotel_id.get(),
                    })
                }
                _ => Ok(payload),
            })
            .inspect_err(|e| warn!(error = %e, "Draft rejected"))?;
        let hotel_id = payload.hotel_id;

        debug!(stage = %WorkflowStage::FetchingContext);
        let rooms = bounded(
            self.timeout,
            "rooms_by_hotel",
            self.rooms.rooms_by_hotel(hotel_id),
        )
        .await?;

        debug!(stage = %WorkflowStage::CheckingUniqueness, existing = rooms.len());
        ensure_unique(
            &rooms,
            RoomSlot::new(payload.tipo_id, payload.acomodacion_id),
            submission.editing(),
            &payload.habitacion,
        )
        .inspect_err(|e| warn!(error = %e, "Uniqueness check failed"))?;

        let hotel = self.require_hotel(hotel_id).await?;

        debug!(
            stage = %WorkflowStage::CheckingCapacity,
            capacity = hotel.capacity,
            total = hotel.total_rooms,
        );
        let capacity = RoomCapacity::of(&hotel);
        match submission {
            Submission::Create => capacity.check_create(payload.cantidad),
            Submission::Update(target) => {
                capacity.check_update(target.previous_count, payload.cantidad)
            }
        }
        .inspect_err(|e| warn!(error = %e, "Capacity check failed"))?;

        debug!(stage = %WorkflowStage::Persisting);
        let room = match submission {
            Submission::Create => {
                bounded(self.timeout, "create_room", self.rooms.create_room(&payload)).await?
            }
            Submission::Update(target) => {
                bounded(
                    self.timeout,
                    "update_room",
                    self.rooms.update_room(target.room_id, &payload),
                )
                .await?
            }
        };

        info!(room_id = %room.id, hotel = %room.hotel_id, "Room {}", submission.kind());
        Ok(RoomMutation::new(room, submission.kind()))
    }

    async fn require_hotel(&self, hotel_id: HotelId) -> InnkeepResult<Hotel> {
        bounded(self.timeout, "fetch_hotel", self.hotels.fetch_hotel(hotel_id))
            .await?
            .ok_or_else(|| {
                warn!(hotel = %hotel_id, "Hotel not found");
                ApplicationError::HotelNotFound { id: hotel_id }.into()
            })
    }
}

//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a room" or "edit a hotel".

pub mod catalog_service;
pub mod hotel_service;
pub mod room_service;

use std::future::Future;
use std::time::Duration;

use crate::application::ApplicationError;
use crate::error::InnkeepResult;

pub use catalog_service::CatalogService;
pub use hotel_service::HotelService;
pub use room_service::{HotelRooms, RoomService, WorkflowStage};

/// Await one gateway call, bounded by `limit` when set.
pub(crate) async fn bounded<T, F>(
    limit: Option<Duration>,
    operation: &'static str,
    call: F,
) -> InnkeepResult<T>
where
    F: Future<Output = InnkeepResult<T>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
            ApplicationError::Timeout {
                operation,
                after_ms: limit.as_millis(),
            }
        })?,
        None => call.await,
    }
}

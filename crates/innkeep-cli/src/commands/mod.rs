//! Command handlers.
//!
//! Handlers translate arguments into core calls and render the results. No
//! business logic lives here.

pub mod catalog;
pub mod completions;
pub mod config;
pub mod hotels;
pub mod init;
pub mod rooms;
pub mod views;

use std::io::IsTerminal as _;
use std::sync::Arc;

use innkeep_adapters::HttpBackend;
use innkeep_core::application::{
    CatalogService, HotelService, RoomService,
    ports::{CatalogGateway, HotelGateway, RoomGateway},
};
use tracing::debug;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// The application services, wired to one backend.
pub struct Services {
    pub hotels: HotelService,
    pub rooms: RoomService,
    pub catalog: CatalogService,
}

impl Services {
    /// Services talking to the API at `api.base_url`.
    pub fn connect(config: &AppConfig) -> CliResult<Self> {
        let backend = HttpBackend::new(config.api.base_url.clone())?;
        debug!(base_url = backend.base_url(), timeout = ?config.timeout(), "Using hotel API");
        Ok(Self::over(Arc::new(backend), config))
    }

    fn over<B>(backend: Arc<B>, config: &AppConfig) -> Self
    where
        B: HotelGateway + RoomGateway + CatalogGateway + 'static,
    {
        let mut hotels = HotelService::new(backend.clone());
        let mut rooms = RoomService::new(backend.clone(), backend.clone());
        let mut catalog = CatalogService::new(backend);
        if let Some(timeout) = config.timeout() {
            hotels = hotels.with_timeout(timeout);
            rooms = rooms.with_timeout(timeout);
            catalog = catalog.with_timeout(timeout);
        }
        Self {
            hotels,
            rooms,
            catalog,
        }
    }
}

/// Ask before a destructive action. Without a terminal the caller must pass
/// `--yes` instead.
pub fn confirm(prompt: &str) -> CliResult<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "confirmation required; pass --yes when not running interactively".into(),
        });
    }
    prompt_yes_no(prompt)
}

#[cfg(feature = "interactive")]
fn prompt_yes_no(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt_yes_no(prompt: &str) -> CliResult<bool> {
    use std::io::{self, Write};

    print!("{prompt} [y/N] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

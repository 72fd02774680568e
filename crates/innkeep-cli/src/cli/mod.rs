//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use innkeep_core::domain::{AccommodationId, HotelId, RoomId, TypeId};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "innkeep",
    bin_name = "innkeep",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Hotel and room administration",
    long_about = "Innkeep manages hotels and their room configurations through \
                  the hotel API, enforcing room type compatibility, one room \
                  per type and accommodation, and hotel capacity.",
    after_help = "EXAMPLES:\n\
        \x20 innkeep hotels list\n\
        \x20 innkeep rooms create --hotel 1 --name Garden --description 'Ground floor' \\\n\
        \x20     --count 3 --type 1 --accommodation 2\n\
        \x20 innkeep catalog accommodations --type 2\n\
        \x20 innkeep completions bash > /usr/share/bash-completion/completions/innkeep",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage hotels.
    #[command(
        visible_alias = "h",
        subcommand,
        about = "Manage hotels",
        after_help = "EXAMPLES:\n\
            \x20 innkeep hotels list\n\
            \x20 innkeep hotels show 3\n\
            \x20 innkeep hotels edit 3 --capacity 40"
    )]
    Hotels(HotelCommands),

    /// Manage the rooms of a hotel.
    #[command(
        visible_alias = "r",
        subcommand,
        about = "Manage rooms",
        after_help = "EXAMPLES:\n\
            \x20 innkeep rooms list --hotel 3\n\
            \x20 innkeep rooms edit 12 --count 4\n\
            \x20 innkeep rooms delete 12 --yes"
    )]
    Rooms(RoomCommands),

    /// Inspect room types and accommodations.
    #[command(
        subcommand,
        about = "Room types and accommodations",
        after_help = "EXAMPLES:\n\
            \x20 innkeep catalog types\n\
            \x20 innkeep catalog accommodations --type 1\n\
            \x20 innkeep catalog rules"
    )]
    Catalog(CatalogCommands),

    /// Initialise an Innkeep configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 innkeep init\n\
            \x20 innkeep init --api-url https://hotels.example.com/api\n\
            \x20 innkeep init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 innkeep completions bash > ~/.local/share/bash-completion/completions/innkeep\n\
            \x20 innkeep completions zsh  > ~/.zfunc/_innkeep\n\
            \x20 innkeep completions fish > ~/.config/fish/completions/innkeep.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Innkeep configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 innkeep config get api.base_url\n\
            \x20 innkeep config set api.timeout_secs 10\n\
            \x20 innkeep config list"
    )]
    Config(ConfigCommands),
}

// ── hotels ────────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum HotelCommands {
    /// List every hotel.
    #[command(visible_alias = "ls")]
    List,
    /// Show one hotel and its capacity usage.
    Show {
        #[arg(value_name = "HOTEL_ID")]
        id: HotelId,
    },
    /// Register a new hotel.
    Create(HotelFields),
    /// Change a hotel. Omitted fields keep their current value.
    Edit {
        #[arg(value_name = "HOTEL_ID")]
        id: HotelId,
        #[command(flatten)]
        fields: HotelFields,
    },
    /// Delete a hotel together with its rooms.
    #[command(visible_alias = "rm")]
    Delete {
        #[arg(value_name = "HOTEL_ID")]
        id: HotelId,
        #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

/// Hotel form fields.
#[derive(Debug, Args, Default)]
pub struct HotelFields {
    #[arg(long, help = "Hotel name")]
    pub name: Option<String>,
    #[arg(long, help = "Short description")]
    pub description: Option<String>,
    #[arg(long, help = "Street address")]
    pub address: Option<String>,
    #[arg(long, help = "Phone number")]
    pub phone: Option<String>,
    #[arg(long, help = "Contact email")]
    pub email: Option<String>,
    #[arg(long, help = "Website (http, https or ftp URL)")]
    pub website: Option<String>,
    #[arg(long, value_name = "ROOMS", help = "Declared room capacity")]
    pub capacity: Option<u32>,
}

// ── rooms ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum RoomCommands {
    /// List the rooms of a hotel.
    #[command(visible_alias = "ls")]
    List {
        #[arg(long = "hotel", value_name = "HOTEL_ID")]
        hotel: HotelId,
    },
    /// Show one room.
    Show {
        #[arg(value_name = "ROOM_ID")]
        id: RoomId,
    },
    /// Add a room configuration to a hotel.
    Create(RoomFields),
    /// Change a room. Omitted fields keep their current value; the hotel
    /// never changes.
    Edit {
        #[arg(value_name = "ROOM_ID")]
        id: RoomId,
        #[command(flatten)]
        details: RoomDetails,
    },
    /// Delete a room.
    #[command(visible_alias = "rm")]
    Delete {
        #[arg(value_name = "ROOM_ID")]
        id: RoomId,
        #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

/// Fields of a new room.
#[derive(Debug, Args, Default)]
pub struct RoomFields {
    #[arg(long = "hotel", value_name = "HOTEL_ID", help = "Hotel the room belongs to")]
    pub hotel: Option<HotelId>,
    #[command(flatten)]
    pub details: RoomDetails,
}

/// Room fields that `rooms edit` may change.
#[derive(Debug, Args, Default)]
pub struct RoomDetails {
    #[arg(long, help = "Room name")]
    pub name: Option<String>,
    #[arg(long, help = "Short description")]
    pub description: Option<String>,
    #[arg(long, value_name = "UNITS", help = "Number of units with this configuration")]
    pub count: Option<u32>,
    #[arg(long = "type", value_name = "TYPE_ID", help = "Room type id")]
    pub room_type: Option<TypeId>,
    #[arg(
        long = "accommodation",
        value_name = "ACCOMMODATION_ID",
        help = "Accommodation id (see: innkeep catalog accommodations --type <id>)"
    )]
    pub accommodation: Option<AccommodationId>,
}

// ── catalog ───────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum CatalogCommands {
    /// List room types.
    Types,
    /// List accommodations, optionally only those a room type offers.
    Accommodations {
        #[arg(long = "type", value_name = "TYPE_ID")]
        room_type: Option<TypeId>,
    },
    /// Print which accommodations each room type offers.
    Rules,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `innkeep init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `innkeep completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `innkeep config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `api.base_url`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_room_create() {
        let cli = Cli::parse_from([
            "innkeep",
            "rooms",
            "create",
            "--hotel",
            "1",
            "--name",
            "Garden",
            "--count",
            "3",
            "--type",
            "1",
            "--accommodation",
            "2",
        ]);
        let Commands::Rooms(RoomCommands::Create(fields)) = cli.command else {
            panic!("expected rooms create");
        };
        assert_eq!(fields.hotel, Some(HotelId::new(1)));
        assert_eq!(fields.details.room_type, Some(TypeId::new(1)));
        assert_eq!(fields.details.accommodation, Some(AccommodationId::new(2)));
        assert_eq!(fields.details.description, None);
    }

    #[test]
    fn room_edit_has_no_hotel_flag() {
        let result = Cli::try_parse_from(["innkeep", "rooms", "edit", "3", "--hotel", "2"]);
        assert!(result.is_err());

        let cli = Cli::parse_from(["innkeep", "rooms", "edit", "3", "--count", "4"]);
        let Commands::Rooms(RoomCommands::Edit { id, details }) = cli.command else {
            panic!("expected rooms edit");
        };
        assert_eq!(id, RoomId::new(3));
        assert_eq!(details.count, Some(4));
    }

    #[test]
    fn ids_must_be_numeric() {
        let result = Cli::try_parse_from(["innkeep", "hotels", "show", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn api_url_is_global() {
        let cli = Cli::parse_from([
            "innkeep",
            "catalog",
            "types",
            "--api-url",
            "http://localhost:9000",
        ]);
        assert_eq!(cli.global.api_url.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn aliases_resolve() {
        let cli = Cli::parse_from(["innkeep", "r", "ls", "--hotel", "4"]);
        assert!(matches!(
            cli.command,
            Commands::Rooms(RoomCommands::List { hotel }) if hotel == HotelId::new(4)
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["innkeep", "--quiet", "--verbose", "hotels", "list"]);
        assert!(result.is_err());
    }
}

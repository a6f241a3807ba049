//! Frontdesk CLI - Room and reservation management
//!
//! Presentation layer over the frontdesk ledger. Every command loads both
//! stores, performs at most one mutation and renders from the ledger again.

mod config;
mod desk;
mod render;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use config::Config;
use desk::Desk;
use frontdesk::{parse_room_id, SUGGESTED_ROOM_TYPES};

#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(about = "Frontdesk - Room registration and reservations", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the rooms and reservations stores
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage rooms
    Rooms {
        #[command(subcommand)]
        action: RoomAction,
    },

    /// Reserve a free room
    Reserve {
        /// Room ID
        #[arg(short, long)]
        room: String,
        /// Customer name (will prompt if not provided)
        #[arg(short, long)]
        name: Option<String>,
        /// Arrival date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        arrival: Option<NaiveDate>,
        /// Departure date, YYYY-MM-DD (defaults to the day after arrival)
        #[arg(long)]
        departure: Option<NaiveDate>,
    },

    /// List reservations
    Reservations,

    /// Cancel a reservation
    Cancel {
        /// Row number as shown by `frontdesk reservations`
        row: Option<usize>,
        /// Reservation ID instead of a row number
        #[arg(long, conflicts_with = "row")]
        id: Option<Uuid>,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Reconcile room status and show rooms and reservations
    Status,

    /// Show where the stores live
    Paths,

    /// Show current configuration
    Config {
        /// Write a config file with default values if none exists
        #[arg(long)]
        init: bool,
    },
}

#[derive(Subcommand)]
enum RoomAction {
    /// List rooms with their status
    List,
    /// Register a new room
    Add {
        /// Room ID (positive integer)
        id: String,
        /// Room type (single, double, suite or any label)
        #[arg(short = 't', long, default_value = "single")]
        r#type: String,
    },
    /// Show one room
    Show {
        /// Room ID
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    init_tracing(level);

    match cli.command {
        Commands::Rooms { action } => cmd_rooms(&config, action),
        Commands::Reserve { room, name, arrival, departure } => {
            cmd_reserve(&config, room, name, arrival, departure)
        }
        Commands::Reservations => cmd_reservations(&config),
        Commands::Cancel { row, id, yes } => cmd_cancel(&config, row, id, yes),
        Commands::Status => cmd_status(&config),
        Commands::Paths => cmd_paths(&config),
        Commands::Config { init } => cmd_config(&config, init),
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ============================================
// Command Implementations
// ============================================

fn cmd_rooms(config: &Config, action: RoomAction) -> Result<()> {
    let mut desk = desk::open(config)?;

    match action {
        RoomAction::List => {
            render::print_rooms(desk.registry().list());
        }

        RoomAction::Add { id, r#type } => {
            let id = parse_room_id(&id)?;
            if !SUGGESTED_ROOM_TYPES.contains(&r#type.trim()) {
                println!(
                    "{} '{}' is not one of {}; registering anyway",
                    "!".yellow(),
                    r#type,
                    SUGGESTED_ROOM_TYPES.join(", ")
                );
            }

            let room = desk.register_room(id, &r#type)?;
            println!("{} Room {} added ({})", "✓".green(), room.id, room.room_type);
            println!();
            render::print_rooms(desk.registry().list());
        }

        RoomAction::Show { id } => {
            let id = parse_room_id(&id)?;
            let room = desk
                .registry()
                .lookup(id)
                .with_context(|| format!("Room {} not found", id))?;
            println!("{}", room);

            for reservation in desk.list().iter().filter(|r| r.room_id == id) {
                println!("  {}", render::reservation_line(&desk, reservation).dimmed());
            }
        }
    }

    Ok(())
}

fn cmd_reserve(
    config: &Config,
    room: String,
    name: Option<String>,
    arrival: Option<NaiveDate>,
    departure: Option<NaiveDate>,
) -> Result<()> {
    let room_id = parse_room_id(&room)?;
    let mut desk = desk::open(config)?;

    let customer_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Customer name")
            .interact_text()
            .context("Failed to read customer name")?,
    };

    let arrival = arrival.unwrap_or_else(|| Local::now().date_naive());
    let departure = match departure {
        Some(d) => d,
        None => default_departure(arrival)?,
    };

    let reservation = desk.create(&customer_name, room_id, arrival, departure)?;

    println!(
        "{} Reservation successful for {} - Room {}",
        "✓".green(),
        reservation.customer_name.cyan(),
        reservation.room_id
    );
    println!();
    render::print_board(&desk);

    Ok(())
}

fn cmd_reservations(config: &Config) -> Result<()> {
    let desk = desk::open(config)?;
    render::print_reservations(&desk);
    Ok(())
}

fn cmd_cancel(config: &Config, row: Option<usize>, id: Option<Uuid>, yes: bool) -> Result<()> {
    let mut desk = desk::open(config)?;

    if desk.is_empty() {
        println!("No reservations to cancel.");
        return Ok(());
    }

    let index = match (row, id) {
        (Some(row), _) => row_to_index(row)?,
        (None, Some(id)) => desk
            .position(id)
            .with_context(|| format!("Reservation {} not found", id))?,
        (None, None) => pick_reservation(&desk)?,
    };

    if let Some(reservation) = desk.list().get(index) {
        if !yes && !confirm_cancel(&render::reservation_line(&desk, reservation))? {
            println!("Nothing cancelled.");
            return Ok(());
        }
    }

    let cancelled = match id {
        Some(id) => desk.cancel_by_id(id)?,
        None => desk.cancel(index)?,
    };

    println!(
        "{} Reservation canceled: {} - Room {}",
        "✓".green(),
        cancelled.customer_name,
        cancelled.room_id
    );
    println!();
    render::print_board(&desk);

    Ok(())
}

fn cmd_status(config: &Config) -> Result<()> {
    let mut desk = desk::open(config)?;

    let repaired = desk.refresh();
    if repaired > 0 {
        println!("{} Repaired status of {} room(s)", "!".yellow(), repaired);
    }
    render::print_board(&desk);

    Ok(())
}

fn cmd_paths(config: &Config) -> Result<()> {
    let rooms = config.rooms_path()?;
    let reservations = config.reservations_path()?;

    println!("{}", "Stores:".bold());
    for (label, path) in [("Rooms", &rooms), ("Reservations", &reservations)] {
        let state = if path.exists() { "present".green() } else { "not created yet".yellow() };
        println!("  {}: {} ({})", label, path.display(), state);
    }

    Ok(())
}

fn cmd_config(config: &Config, init: bool) -> Result<()> {
    let path = Config::config_path()?;

    if init {
        if path.exists() {
            bail!("Config already exists at {:?}", path);
        }
        Config::default().save()?;
        println!("{} Config written to {:?}", "✓".green(), path);
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", path);
    println!("  Data dir: {}", config.data_dir()?.display());
    println!("  Rooms file: {}", config.rooms_file);
    println!("  Reservations file: {}", config.reservations_file);
    println!("  Log level: {}", config.log_level.cyan());
    println!("  Seed rooms: {}", config.seed_rooms.len());

    Ok(())
}

// ============================================
// Helpers
// ============================================

/// Displayed rows start at 1; the ledger index starts at 0
fn row_to_index(row: usize) -> Result<usize> {
    match row.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Row numbers start at 1"),
    }
}

fn default_departure(arrival: NaiveDate) -> Result<NaiveDate> {
    arrival
        .succ_opt()
        .with_context(|| format!("No day after {}", arrival))
}

fn pick_reservation(desk: &Desk) -> Result<usize> {
    let items: Vec<String> = desk
        .list()
        .iter()
        .map(|r| render::reservation_line(desk, r))
        .collect();

    Select::new()
        .with_prompt("Reservation to cancel")
        .items(&items)
        .default(0)
        .interact()
        .context("Failed to read selection")
}

fn confirm_cancel(line: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!("Cancel \"{}\"?", line))
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_index() {
        assert_eq!(row_to_index(1).unwrap(), 0);
        assert_eq!(row_to_index(4).unwrap(), 3);
        assert!(row_to_index(0).is_err());
    }

    #[test]
    fn test_default_departure_is_next_day() {
        let arrival = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(
            default_departure(arrival).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(default_departure(NaiveDate::MAX).is_err());
    }

    #[test]
    fn test_cli_parses_reserve() {
        let cli = Cli::try_parse_from([
            "frontdesk",
            "reserve",
            "--room",
            "2",
            "--name",
            "Alice",
            "--arrival",
            "2024-01-10",
        ])
        .unwrap();

        match cli.command {
            Commands::Reserve { room, name, arrival, departure } => {
                assert_eq!(room, "2");
                assert_eq!(name.as_deref(), Some("Alice"));
                assert_eq!(arrival, NaiveDate::from_ymd_opt(2024, 1, 10));
                assert!(departure.is_none());
            }
            _ => panic!("Expected Reserve command"),
        }
    }

    #[test]
    fn test_cancel_row_conflicts_with_id() {
        let result = Cli::try_parse_from([
            "frontdesk",
            "cancel",
            "1",
            "--id",
            "67e55044-10b1-426f-9247-bb680e5fe0c8",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ActivityCommands, PlanCommands, ShowItineraryArgs};

/// Plan vacations and browse them day by day
///
/// Itinera keeps vacation plans (a destination and a date range) and the
/// activities scheduled on them, and lays each trip out as numbered days.
/// Running it without a command lists all plans.
#[derive(Parser)]
#[command(version, about, name = "itinera")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/itinera/itinera.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// IANA time zone deciding what "today" is (e.g. Europe/Paris).
    /// Defaults to UTC
    #[arg(long, global = true)]
    pub time_zone: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Itinera CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage vacation plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage activities within plans
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Show a plan's day-by-day itinerary
    #[command(alias = "i")]
    Itinerary(ShowItineraryArgs),
}

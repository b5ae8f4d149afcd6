//! Itinera CLI Application
//!
//! Command-line front end for vacation plans, activities and day-by-day
//! itineraries.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use itinera_core::{params::ListPlans, PlannerBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        time_zone,
        command,
    } = Args::parse();

    let mut builder = PlannerBuilder::new().with_database_path(database_file);
    if let Some(name) = time_zone {
        builder = builder
            .with_time_zone_name(&name)
            .context("Invalid --time-zone")?;
    }
    let planner = builder
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer);

    info!("Itinera started");

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Activity { command }) => cli.handle_activity_command(command).await,
        Some(Itinerary(args)) => cli.show_itinerary(args).await,
        None => cli.list_plans(&ListPlans::default()).await,
    }
}

//! Command definitions and handlers.
//!
//! Every command has a clap argument struct that converts into the matching
//! core parameter type, so clap attributes never leak into `itinera-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner → Display → Renderer
//! ```
//!
//! Commands that pick trip dates take today's date as the earliest allowed
//! date unless `--allow-past` is given; those conversions go through
//! `into_params(today)` instead of `From`.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use itinera_core::{
    display::{Activities, CreateResult, DeleteResult, OperationStatus, Plans, UpdateResult},
    models::{parse_calendar_date, ClockTime, PlanStatus},
    params::{AddActivity, CreatePlan, DeletePlan, Id, ListPlans, ReschedulePlan, ShowItinerary},
    Planner, VacationPlan,
};
use jiff::civil::Date;
use log::{debug, info};

use crate::renderer::TerminalRenderer;

/// Parses a `YYYY-MM-DD` argument.
fn parse_date(s: &str) -> std::result::Result<Date, String> {
    parse_calendar_date(s).map_err(|e| e.to_string())
}

/// Parses an `HH:MM` argument.
fn parse_time(s: &str) -> std::result::Result<ClockTime, String> {
    s.parse::<ClockTime>().map_err(|e| e.to_string())
}

fn minimum_date(allow_past: bool, today: Date) -> Option<Date> {
    if allow_past {
        None
    } else {
        Some(today)
    }
}

/// Create a new vacation plan
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Destination the trip goes to
    pub destination_id: u64,
    /// First day of the trip (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    pub start: Date,
    /// Last day of the trip, inclusive (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    pub end: Date,
    /// Accept dates before today
    #[arg(long)]
    pub allow_past: bool,
}

impl CreatePlanArgs {
    pub fn into_params(self, today: Date) -> CreatePlan {
        CreatePlan {
            destination_id: self.destination_id,
            start: self.start,
            end: self.end,
            minimum_date: minimum_date(self.allow_past, today),
        }
    }
}

/// Plan status accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlanStatusArg {
    Planned,
    Confirmed,
    Cancelled,
}

impl From<PlanStatusArg> for PlanStatus {
    fn from(val: PlanStatusArg) -> Self {
        match val {
            PlanStatusArg::Planned => PlanStatus::Planned,
            PlanStatusArg::Confirmed => PlanStatus::Confirmed,
            PlanStatusArg::Cancelled => PlanStatus::Cancelled,
        }
    }
}

/// List vacation plans
#[derive(Args)]
pub struct ListPlansArgs {
    /// Only plans with this status
    #[arg(long, value_enum)]
    pub status: Option<PlanStatusArg>,
    /// Only plans for this destination
    #[arg(long)]
    pub destination: Option<u64>,
    /// Only plans that have not ended yet and are not cancelled
    #[arg(long, conflicts_with = "status")]
    pub upcoming: bool,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            status: val.status.map(PlanStatus::from),
            destination_id: val.destination,
        }
    }
}

/// Identifies a plan by ID
#[derive(Args)]
pub struct PlanIdArgs {
    /// ID of the plan
    pub id: u64,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Move a plan to new dates
#[derive(Args)]
pub struct ReschedulePlanArgs {
    /// ID of the plan to move
    pub id: u64,
    /// New first day (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    pub start: Date,
    /// New last day, inclusive (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    pub end: Date,
    /// Accept dates before today
    #[arg(long)]
    pub allow_past: bool,
}

impl ReschedulePlanArgs {
    pub fn into_params(self, today: Date) -> ReschedulePlan {
        ReschedulePlan {
            id: self.id,
            start: self.start,
            end: self.end,
            minimum_date: minimum_date(self.allow_past, today),
        }
    }
}

/// Permanently delete a plan and its activities
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    pub id: u64,
    /// Confirm the deletion
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new vacation plan
    Create(CreatePlanArgs),
    /// List vacation plans
    #[command(alias = "ls")]
    List(ListPlansArgs),
    /// Show a plan and its activities
    Show(PlanIdArgs),
    /// Mark a plan as confirmed
    Confirm(PlanIdArgs),
    /// Mark a plan as cancelled
    Cancel(PlanIdArgs),
    /// Move a plan to new dates
    Reschedule(ReschedulePlanArgs),
    /// Permanently delete a plan and its activities
    #[command(alias = "rm")]
    Delete(DeletePlanArgs),
}

/// Schedule an activity on a plan
#[derive(Args)]
pub struct AddActivityArgs {
    /// ID of the plan
    pub plan_id: u64,
    /// Place being visited
    pub place_id: u64,
    /// Day of the visit (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    pub date: Date,
    /// Start time (HH:MM); all-day when omitted
    #[arg(long, value_parser = parse_time)]
    pub start: Option<ClockTime>,
    /// End time (HH:MM)
    #[arg(long, value_parser = parse_time, requires = "start")]
    pub end: Option<ClockTime>,
    /// Free-text notes
    #[arg(short, long, default_value = "")]
    pub notes: String,
}

impl From<AddActivityArgs> for AddActivity {
    fn from(val: AddActivityArgs) -> Self {
        AddActivity {
            plan_id: val.plan_id,
            place_id: val.place_id,
            date: val.date,
            start_time: val.start,
            end_time: val.end,
            notes: val.notes,
        }
    }
}

/// Identifies an activity by ID
#[derive(Args)]
pub struct ActivityIdArgs {
    /// ID of the activity
    pub id: u64,
}

impl From<ActivityIdArgs> for Id {
    fn from(val: ActivityIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Schedule an activity on a plan
    Add(AddActivityArgs),
    /// List a plan's activities
    #[command(alias = "ls")]
    List(PlanIdArgs),
    /// Delete an activity
    #[command(alias = "rm")]
    Delete(ActivityIdArgs),
}

/// Show a plan's day-by-day itinerary
#[derive(Args)]
pub struct ShowItineraryArgs {
    /// ID of the plan
    pub plan_id: u64,
    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<Date>,
    /// Print the itinerary as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&ShowItineraryArgs> for ShowItinerary {
    fn from(val: &ShowItineraryArgs) -> Self {
        ShowItinerary {
            plan_id: val.plan_id,
            today: val.today,
        }
    }
}

/// Runs commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let params = args.into_params(self.planner.today());
                let plan = self
                    .planner
                    .create_plan(&params)
                    .await
                    .context("Failed to create plan")?;
                info!("Created plan {}", plan.id);
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::List(args) => {
                if args.upcoming {
                    let plans = self
                        .planner
                        .list_upcoming_plans()
                        .await
                        .context("Failed to list plans")?;
                    self.render_plans("Upcoming plans", plans)
                } else {
                    self.list_plans(&args.into()).await
                }
            }
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Confirm(args) => {
                let plan = self
                    .planner
                    .confirm_plan(&args.into())
                    .await
                    .context("Failed to confirm plan")?;
                let changes = vec![format!("Status set to {}", plan.status)];
                self.renderer
                    .render(&UpdateResult::with_changes(plan, changes).to_string())
            }
            PlanCommands::Cancel(args) => {
                let plan = self
                    .planner
                    .cancel_plan(&args.into())
                    .await
                    .context("Failed to cancel plan")?;
                let changes = vec![format!("Status set to {}", plan.status)];
                self.renderer
                    .render(&UpdateResult::with_changes(plan, changes).to_string())
            }
            PlanCommands::Reschedule(args) => {
                let params = args.into_params(self.planner.today());
                let plan = self
                    .planner
                    .reschedule_plan(&params)
                    .await
                    .context("Failed to reschedule plan")?;
                let changes = vec![format!("Dates moved to {}", plan.range)];
                self.renderer
                    .render(&UpdateResult::with_changes(plan, changes).to_string())
            }
            PlanCommands::Delete(args) => {
                if !args.confirm {
                    let status = OperationStatus::failure(format!(
                        "Plan {} was not deleted. Pass --confirm to delete it and all its activities.",
                        args.id
                    ));
                    return self.renderer.render(&status.to_string());
                }
                let plan = self
                    .planner
                    .delete_plan(&args.into())
                    .await
                    .context("Failed to delete plan")?;
                self.renderer.render(&DeleteResult::new(plan).to_string())
            }
        }
    }

    pub async fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::Add(args) => {
                let activity = self
                    .planner
                    .add_activity(&args.into())
                    .await
                    .context("Failed to add activity")?;
                info!("Added activity {} to plan {}", activity.id, activity.plan_id);
                self.renderer
                    .render(&CreateResult::new(activity).to_string())
            }
            ActivityCommands::List(args) => {
                let id: Id = args.into();
                let activities = self
                    .planner
                    .get_activities(&id)
                    .await
                    .context("Failed to list activities")?;
                let markdown = format!(
                    "# Activities for plan {}\n\n{}",
                    id.id,
                    Activities(activities)
                );
                self.renderer.render(&markdown)
            }
            ActivityCommands::Delete(args) => {
                let activity = self
                    .planner
                    .delete_activity(&args.into())
                    .await
                    .context("Failed to delete activity")?;
                self.renderer
                    .render(&DeleteResult::new(activity).to_string())
            }
        }
    }

    pub async fn show_itinerary(&self, args: ShowItineraryArgs) -> Result<()> {
        let itinerary = self
            .planner
            .show_itinerary(&ShowItinerary::from(&args))
            .await
            .context("Failed to build itinerary")?;
        debug!(
            "Itinerary for plan {} has {} days",
            args.plan_id,
            itinerary.days.len()
        );

        if args.json {
            let json = serde_json::to_string_pretty(&itinerary)
                .context("Failed to serialize itinerary")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&itinerary.to_string())
        }
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let plans = self
            .planner
            .list_plans(params)
            .await
            .context("Failed to list plans")?;
        self.render_plans("Vacation plans", plans)
    }

    async fn show_plan(&self, id: &Id) -> Result<()> {
        let Some(plan) = self
            .planner
            .get_plan(id)
            .await
            .context("Failed to load plan")?
        else {
            let status = OperationStatus::failure(format!("Plan {} not found", id.id));
            return self.renderer.render(&status.to_string());
        };

        let activities = self
            .planner
            .get_activities(id)
            .await
            .context("Failed to load activities")?;
        let markdown = format!("{plan}\n## Activities\n\n{}", Activities(activities));
        self.renderer.render(&markdown)
    }

    fn render_plans(&self, title: &str, plans: Vec<VacationPlan>) -> Result<()> {
        let markdown = format!("# {title}\n\n{}", Plans(plans));
        self.renderer.render(&markdown)
    }
}

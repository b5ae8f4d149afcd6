//! Checks that the CLI prints exactly what the core Display implementations
//! produce for the same data.

use std::process::Command;

use itinera_core::{
    display::Plans,
    params::{AddActivity, CreatePlan, ListPlans, ShowItinerary},
    Planner, PlannerBuilder,
};
use jiff::civil::date;
use tempfile::TempDir;

/// Helper function to create a test planner with temporary database
async fn create_test_planner() -> (Planner, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create planner");

    (planner, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(planner: &Planner, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_itinera"))
        .arg("--no-color")
        .arg("--database-file")
        .arg(planner.database_path())
        .args(args)
        .output()
        .expect("Failed to run CLI command");
    assert!(output.status.success(), "CLI failed: {output:?}");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

async fn seed_trip(planner: &Planner) -> u64 {
    let plan = planner
        .create_plan(&CreatePlan {
            destination_id: 21,
            start: date(2024, 9, 5),
            end: date(2024, 9, 8),
            minimum_date: None,
        })
        .await
        .expect("Failed to create plan");

    for (place_id, day, start) in [(1, 5, Some("09:30")), (2, 5, None), (3, 7, Some("19:00"))] {
        planner
            .add_activity(&AddActivity {
                plan_id: plan.id,
                place_id,
                date: date(2024, 9, day),
                start_time: start.map(|t| t.parse().unwrap()),
                end_time: None,
                notes: String::new(),
            })
            .await
            .expect("Failed to add activity");
    }
    plan.id
}

#[tokio::test]
async fn test_itinerary_output_matches_display() {
    let (planner, _temp_dir) = create_test_planner().await;
    let plan_id = seed_trip(&planner).await;

    let cli_output = run_cli_command(
        &planner,
        &["itinerary", &plan_id.to_string(), "--today", "2024-09-07"],
    );

    let itinerary = planner
        .show_itinerary(&ShowItinerary {
            plan_id,
            today: Some(date(2024, 9, 7)),
        })
        .await
        .expect("Failed to build itinerary");

    assert_eq!(cli_output, itinerary.to_string());
    assert!(cli_output.contains("## Day 3 - Sat 2024-09-07 (today)"));
}

#[tokio::test]
async fn test_itinerary_json_matches_serde() {
    let (planner, _temp_dir) = create_test_planner().await;
    let plan_id = seed_trip(&planner).await;

    let cli_output = run_cli_command(
        &planner,
        &["itinerary", &plan_id.to_string(), "--today", "2024-09-01", "--json"],
    );

    let itinerary = planner
        .show_itinerary(&ShowItinerary {
            plan_id,
            today: Some(date(2024, 9, 1)),
        })
        .await
        .unwrap();

    let from_cli: serde_json::Value = serde_json::from_str(&cli_output).unwrap();
    assert_eq!(from_cli, serde_json::to_value(&itinerary).unwrap());
}

#[tokio::test]
async fn test_list_plans_output_matches_display() {
    let (planner, _temp_dir) = create_test_planner().await;
    seed_trip(&planner).await;

    let cli_output = run_cli_command(&planner, &["plan", "list"]);
    let plans = planner.list_plans(&ListPlans::default()).await.unwrap();

    assert_eq!(cli_output, format!("# Vacation plans\n\n{}", Plans(plans)));
}

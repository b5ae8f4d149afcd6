//! Tests for the planner module.

use jiff::civil::{date, Date};
use tempfile::TempDir;

use super::*;
use crate::{
    error::ItineraryError,
    itinerary::TripPhase,
    models::{ClockTime, PlanStatus},
    params::{AddActivity, CreatePlan, DeletePlan, Id, ListPlans, ReschedulePlan, ShowItinerary},
};

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn june(day: i8) -> Date {
    date(2024, 6, day)
}

fn june_plan(destination_id: u64) -> CreatePlan {
    CreatePlan {
        destination_id,
        start: june(10),
        end: june(12),
        minimum_date: None,
    }
}

fn add_activity(plan_id: u64, on: Date, start: Option<&str>) -> AddActivity {
    AddActivity {
        plan_id,
        place_id: 5,
        date: on,
        start_time: start.map(|t| t.parse::<ClockTime>().unwrap()),
        end_time: None,
        notes: String::new(),
    }
}

#[tokio::test]
async fn test_create_and_get_plan() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&june_plan(7))
        .await
        .expect("Failed to create plan");
    assert_eq!(plan.destination_id, 7);
    assert_eq!(plan.status, PlanStatus::Planned);
    assert_eq!(plan.range.start, june(10));
    assert_eq!(plan.range.end, june(12));

    let fetched = planner
        .get_plan(&Id { id: plan.id })
        .await
        .expect("Failed to get plan")
        .expect("Plan should exist");
    assert_eq!(fetched.id, plan.id);
    assert_eq!(fetched.range, plan.range);
    assert_eq!(fetched.status, PlanStatus::Planned);
}

#[tokio::test]
async fn test_create_plan_rejects_reversed_dates() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .create_plan(&CreatePlan {
            destination_id: 1,
            start: june(12),
            end: june(10),
            minimum_date: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ItineraryError::InvalidRange { .. }));

    let plans = planner.list_plans(&ListPlans::default()).await.unwrap();
    assert!(plans.is_empty());
}

#[tokio::test]
async fn test_create_plan_enforces_minimum_date() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .create_plan(&CreatePlan {
            minimum_date: Some(june(11)),
            ..june_plan(1)
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ItineraryError::DateOutOfRange { date, minimum } if date == june(10) && minimum == june(11)
    ));
}

#[tokio::test]
async fn test_get_missing_plan_returns_none() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.get_plan(&Id { id: 99 }).await.unwrap();
    assert!(plan.is_none());
}

#[tokio::test]
async fn test_list_plans_filters_and_orders_by_start() {
    let (_temp_dir, planner) = create_test_planner().await;

    let later = planner
        .create_plan(&CreatePlan {
            destination_id: 2,
            start: date(2024, 8, 1),
            end: date(2024, 8, 5),
            minimum_date: None,
        })
        .await
        .unwrap();
    let earlier = planner.create_plan(&june_plan(1)).await.unwrap();
    planner.confirm_plan(&Id { id: later.id }).await.unwrap();

    let all = planner.list_plans(&ListPlans::default()).await.unwrap();
    let ids: Vec<u64> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    let confirmed = planner
        .list_plans(&ListPlans {
            status: Some(PlanStatus::Confirmed),
            destination_id: None,
        })
        .await
        .unwrap();
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].id, later.id);

    let for_destination = planner
        .list_plans(&ListPlans {
            status: None,
            destination_id: Some(1),
        })
        .await
        .unwrap();
    assert_eq!(for_destination.len(), 1);
    assert_eq!(for_destination[0].id, earlier.id);
}

#[tokio::test]
async fn test_list_upcoming_plans_skips_past_and_cancelled() {
    let (_temp_dir, planner) = create_test_planner().await;
    let today = planner.today();

    let past = planner.create_plan(&june_plan(1)).await.unwrap();
    let future = planner
        .create_plan(&CreatePlan {
            destination_id: 2,
            start: date(today.year() + 1, 1, 10),
            end: date(today.year() + 1, 1, 12),
            minimum_date: Some(today),
        })
        .await
        .unwrap();
    let cancelled = planner
        .create_plan(&CreatePlan {
            destination_id: 3,
            start: date(today.year() + 1, 2, 1),
            end: date(today.year() + 1, 2, 3),
            minimum_date: Some(today),
        })
        .await
        .unwrap();
    planner.cancel_plan(&Id { id: cancelled.id }).await.unwrap();

    let upcoming = planner.list_upcoming_plans().await.unwrap();
    let ids: Vec<u64> = upcoming.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![future.id]);
    assert!(!ids.contains(&past.id));
}

#[tokio::test]
async fn test_confirm_and_cancel_plan() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&june_plan(1)).await.unwrap();

    let confirmed = planner.confirm_plan(&Id { id: plan.id }).await.unwrap();
    assert_eq!(confirmed.status, PlanStatus::Confirmed);

    let cancelled = planner.cancel_plan(&Id { id: plan.id }).await.unwrap();
    assert_eq!(cancelled.status, PlanStatus::Cancelled);

    let err = planner.confirm_plan(&Id { id: 42 }).await.unwrap_err();
    assert!(matches!(err, ItineraryError::PlanNotFound { id: 42 }));
}

#[tokio::test]
async fn test_reschedule_plan() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&june_plan(1)).await.unwrap();

    let moved = planner
        .reschedule_plan(&ReschedulePlan {
            id: plan.id,
            start: june(20),
            end: june(25),
            minimum_date: None,
        })
        .await
        .unwrap();
    assert_eq!(moved.range.start, june(20));
    assert_eq!(moved.range.end, june(25));

    let err = planner
        .reschedule_plan(&ReschedulePlan {
            id: plan.id,
            start: june(25),
            end: june(20),
            minimum_date: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ItineraryError::InvalidRange { .. }));

    let unchanged = planner.get_plan(&Id { id: plan.id }).await.unwrap().unwrap();
    assert_eq!(unchanged.range.start, june(20));
}

#[tokio::test]
async fn test_delete_plan_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&june_plan(1)).await.unwrap();
    planner
        .add_activity(&add_activity(plan.id, june(11), None))
        .await
        .unwrap();

    let err = planner
        .delete_plan(&DeletePlan {
            id: plan.id,
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ItineraryError::InvalidInput { ref field, .. } if field == "confirmed"));

    let deleted = planner
        .delete_plan(&DeletePlan {
            id: plan.id,
            confirmed: true,
        })
        .await
        .unwrap();
    assert_eq!(deleted.id, plan.id);
    assert!(planner.get_plan(&Id { id: plan.id }).await.unwrap().is_none());

    let err = planner.get_activities(&Id { id: plan.id }).await.unwrap_err();
    assert!(matches!(err, ItineraryError::PlanNotFound { .. }));
}

#[tokio::test]
async fn test_add_activity_validates_against_plan() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&june_plan(1)).await.unwrap();

    let err = planner
        .add_activity(&add_activity(plan.id, june(13), None))
        .await
        .unwrap_err();
    assert!(matches!(err, ItineraryError::InvalidInput { ref field, .. } if field == "date"));

    let err = planner
        .add_activity(&AddActivity {
            end_time: Some("09:00".parse().unwrap()),
            ..add_activity(plan.id, june(11), Some("10:00"))
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ItineraryError::InvalidInput { ref field, .. } if field == "end_time"));

    let err = planner
        .add_activity(&AddActivity {
            end_time: Some("09:00".parse().unwrap()),
            ..add_activity(plan.id, june(11), None)
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ItineraryError::InvalidInput { .. }));

    let err = planner
        .add_activity(&add_activity(999, june(11), None))
        .await
        .unwrap_err();
    assert!(matches!(err, ItineraryError::PlanNotFound { id: 999 }));
}

#[tokio::test]
async fn test_activity_round_trip_and_delete() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&june_plan(1)).await.unwrap();

    let added = planner
        .add_activity(&AddActivity {
            end_time: Some("16:30".parse().unwrap()),
            notes: "Guided tour".to_string(),
            ..add_activity(plan.id, june(11), Some("14:00"))
        })
        .await
        .unwrap();

    let fetched = planner
        .get_activity(&Id { id: added.id })
        .await
        .unwrap()
        .expect("Activity should exist");
    assert_eq!(fetched, added);

    let deleted = planner.delete_activity(&Id { id: added.id }).await.unwrap();
    assert_eq!(deleted.id, added.id);
    assert!(planner
        .get_activity(&Id { id: added.id })
        .await
        .unwrap()
        .is_none());

    let err = planner
        .delete_activity(&Id { id: added.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ItineraryError::ActivityNotFound { .. }));
}

#[tokio::test]
async fn test_show_itinerary_groups_activities() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&june_plan(1)).await.unwrap();

    let afternoon = planner
        .add_activity(&add_activity(plan.id, june(11), Some("14:00")))
        .await
        .unwrap();
    let all_day = planner
        .add_activity(&add_activity(plan.id, june(11), None))
        .await
        .unwrap();

    let itinerary = planner
        .show_itinerary(&ShowItinerary {
            plan_id: plan.id,
            today: Some(june(11)),
        })
        .await
        .unwrap();

    assert_eq!(itinerary.plan_id, Some(plan.id));
    assert_eq!(itinerary.days.len(), 3);
    assert_eq!(itinerary.current_day, Some(2));
    assert_eq!(
        itinerary.phase(),
        Some(TripPhase::InProgress { day_index: 2 })
    );
    let ids: Vec<u64> = itinerary.days[1].activities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![all_day.id, afternoon.id]);
    assert!(itinerary.days[0].activities.is_empty());
    assert!(itinerary.days[2].activities.is_empty());
}

#[tokio::test]
async fn test_reschedule_leaves_activities_outside_itinerary() {
    let (_temp_dir, planner) = create_test_planner().await;
    let plan = planner.create_plan(&june_plan(1)).await.unwrap();
    let activity = planner
        .add_activity(&add_activity(plan.id, june(10), Some("09:00")))
        .await
        .unwrap();

    planner
        .reschedule_plan(&ReschedulePlan {
            id: plan.id,
            start: june(11),
            end: june(12),
            minimum_date: None,
        })
        .await
        .unwrap();

    let itinerary = planner
        .show_itinerary(&ShowItinerary {
            plan_id: plan.id,
            today: Some(june(20)),
        })
        .await
        .unwrap();
    assert_eq!(itinerary.days.len(), 2);
    assert_eq!(itinerary.scheduled_count(), 0);
    assert_eq!(itinerary.outside_range.len(), 1);
    assert_eq!(itinerary.outside_range[0].id, activity.id);
    assert_eq!(itinerary.current_day, None);
}

#[tokio::test]
async fn test_show_itinerary_for_missing_plan() {
    let (_temp_dir, planner) = create_test_planner().await;
    let err = planner
        .show_itinerary(&ShowItinerary {
            plan_id: 5,
            today: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ItineraryError::PlanNotFound { id: 5 }));
}

#[tokio::test]
async fn test_builder_time_zone() {
    let temp_dir = TempDir::new().unwrap();
    let planner = PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("tz.db")))
        .with_time_zone_name("Asia/Tokyo")
        .unwrap()
        .build()
        .await
        .unwrap();
    assert_eq!(planner.time_zone().iana_name(), Some("Asia/Tokyo"));

    let err = PlannerBuilder::new()
        .with_time_zone_name("Mars/Olympus_Mons")
        .unwrap_err();
    assert!(matches!(err, ItineraryError::InvalidInput { ref field, .. } if field == "time_zone"));
}

#[tokio::test]
async fn test_default_time_zone_is_utc() {
    let (_temp_dir, planner) = create_test_planner().await;
    assert_eq!(planner.time_zone().iana_name(), Some("UTC"));
}

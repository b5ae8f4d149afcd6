#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, Timestamp};

    use crate::{
        error::ItineraryError,
        models::{
            days_between, parse_calendar_date, Activity, ClockTime, DateRange, PlanStatus,
            TripDay, VacationPlan,
        },
    };

    fn create_test_activity(start_time: Option<&str>) -> Activity {
        Activity {
            id: 3,
            plan_id: 1,
            place_id: 42,
            date: date(2024, 6, 11),
            start_time: start_time.map(|t| t.parse().unwrap()),
            end_time: None,
            notes: "Museum pass included".to_string(),
        }
    }

    #[test]
    fn test_date_range_new_accepts_single_day() {
        let range = DateRange::new(date(2024, 6, 10), date(2024, 6, 10)).unwrap();
        assert_eq!(range, DateRange::single_day(date(2024, 6, 10)));
        assert_eq!(range.total_days().unwrap(), 1);
    }

    #[test]
    fn test_date_range_new_rejects_reversed_dates() {
        let err = DateRange::new(date(2024, 6, 12), date(2024, 6, 10)).unwrap_err();
        match err {
            ItineraryError::InvalidRange { start, end } => {
                assert_eq!(start, date(2024, 6, 12));
                assert_eq!(end, date(2024, 6, 10));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_date_range_contains_is_inclusive() {
        let range = DateRange::new(date(2024, 6, 10), date(2024, 6, 12)).unwrap();
        assert!(range.contains(date(2024, 6, 10)));
        assert!(range.contains(date(2024, 6, 12)));
        assert!(!range.contains(date(2024, 6, 9)));
        assert!(!range.contains(date(2024, 6, 13)));
    }

    #[test]
    fn test_total_days_across_month_and_leap_day() {
        let range = DateRange::new(date(2024, 2, 27), date(2024, 3, 2)).unwrap();
        assert_eq!(range.total_days().unwrap(), 5);

        let range = DateRange::new(date(2023, 12, 30), date(2024, 1, 2)).unwrap();
        assert_eq!(range.total_days().unwrap(), 4);
    }

    #[test]
    fn test_total_days_across_daylight_saving_change() {
        // 2024-03-10 is the US spring-forward day; civil dates are unaffected.
        let range = DateRange::new(date(2024, 3, 9), date(2024, 3, 11)).unwrap();
        assert_eq!(range.total_days().unwrap(), 3);
    }

    #[test]
    fn test_total_days_rejects_unchecked_reversed_range() {
        let range = DateRange {
            start: date(2024, 6, 12),
            end: date(2024, 6, 10),
        };
        assert!(matches!(
            range.total_days(),
            Err(ItineraryError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(date(2024, 6, 10), date(2024, 6, 12)).unwrap(), 2);
        assert_eq!(days_between(date(2024, 6, 12), date(2024, 6, 10)).unwrap(), -2);
        assert_eq!(days_between(date(2024, 6, 10), date(2024, 6, 10)).unwrap(), 0);
    }

    #[test]
    fn test_clock_time_parse_and_display() {
        let time: ClockTime = "09:05".parse().unwrap();
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 5);
        assert_eq!(time.to_string(), "09:05");

        let time: ClockTime = "23:59".parse().unwrap();
        assert_eq!(time, ClockTime::new(23, 59).unwrap());
    }

    #[test]
    fn test_clock_time_rejects_invalid_input() {
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
        assert!("".parse::<ClockTime>().is_err());
        assert!(ClockTime::new(12, 60).is_err());
    }

    #[test]
    fn test_clock_time_ordering_is_chronological() {
        let morning: ClockTime = "09:00".parse().unwrap();
        let afternoon: ClockTime = "14:00".parse().unwrap();
        assert!(morning < afternoon);
        // Untimed entries order before timed ones.
        assert!(None < Some(morning));
    }

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(parse_calendar_date("2024-06-10").unwrap(), date(2024, 6, 10));
        assert_eq!(parse_calendar_date(" 2024-02-29 ").unwrap(), date(2024, 2, 29));
        assert!(parse_calendar_date("2023-02-29").is_err());
        assert!(parse_calendar_date("10/06/2024").is_err());
    }

    #[test]
    fn test_parse_calendar_date_requires_exact_form() {
        for input in [
            "2024-6-1",
            "2024-06-1",
            "-0001-01-01",
            "+2024-06-10",
            "02024-06-10",
            "2024-06-10T09:00",
        ] {
            let err = parse_calendar_date(input).unwrap_err();
            assert!(
                matches!(err, ItineraryError::InvalidInput { ref field, .. } if field == "date"),
                "{input} should be rejected, got {err:?}"
            );
        }
        assert_eq!(parse_calendar_date("0001-01-01").unwrap(), date(1, 1, 1));
    }

    #[test]
    fn test_plan_status_from_str() {
        assert_eq!("planned".parse::<PlanStatus>(), Ok(PlanStatus::Planned));
        assert_eq!("Confirmed".parse::<PlanStatus>(), Ok(PlanStatus::Confirmed));
        assert_eq!("canceled".parse::<PlanStatus>(), Ok(PlanStatus::Cancelled));
        assert!("booked".parse::<PlanStatus>().is_err());
        assert_eq!(PlanStatus::default(), PlanStatus::Planned);
        assert_eq!(PlanStatus::Cancelled.as_str(), "cancelled");
    }

    #[test]
    fn test_activity_wire_format() {
        let activity = create_test_activity(Some("14:00"));
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["planId"], 1);
        assert_eq!(json["placeId"], 42);
        assert_eq!(json["date"], "2024-06-11");
        assert_eq!(json["startTime"], "14:00");
        assert!(json["endTime"].is_null());

        let parsed: Activity = serde_json::from_str(
            r#"{"id":9,"planId":1,"placeId":5,"date":"2024-06-13","startTime":"09:30"}"#,
        )
        .unwrap();
        assert_eq!(parsed.date, date(2024, 6, 13));
        assert_eq!(parsed.start_time, Some(ClockTime::new(9, 30).unwrap()));
        assert_eq!(parsed.end_time, None);
        assert!(parsed.notes.is_empty());
    }

    #[test]
    fn test_activity_rejects_malformed_time_on_the_wire() {
        let result = serde_json::from_str::<Activity>(
            r#"{"id":9,"planId":1,"placeId":5,"date":"2024-06-13","startTime":"9am"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_all_day_activity() {
        assert!(create_test_activity(None).is_all_day());
        assert!(!create_test_activity(Some("08:00")).is_all_day());
    }

    #[test]
    fn test_vacation_plan_wire_format() {
        let plan = VacationPlan {
            id: 1,
            destination_id: 7,
            range: DateRange::new(date(2024, 6, 10), date(2024, 6, 12)).unwrap(),
            status: PlanStatus::Confirmed,
            created_at: Timestamp::from_second(1_717_977_600).unwrap(),
            updated_at: Timestamp::from_second(1_717_977_600).unwrap(),
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["destinationId"], 7);
        assert_eq!(json["range"]["start"], "2024-06-10");
        assert_eq!(json["range"]["end"], "2024-06-12");
        assert_eq!(json["status"], "confirmed");
    }

    #[test]
    fn test_trip_day_starts_free() {
        let day = TripDay::new(1, date(2024, 6, 10));
        assert!(day.is_free());
        assert_eq!(day.day_index, 1);
    }
}

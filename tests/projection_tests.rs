mod common;
use common::{open_blank, ts};
use chrono::Duration;
use fleetlog::HistoryFilter;
use fleetlog::models::vehicle::VehicleStatus;
use fleetlog::utils::date::parse_date;
use fleetlog::utils::time::format_duration;

#[test]
fn test_available_and_on_trip_are_disjoint() {
    let mut fleet = open_blank("proj_disjoint");
    fleet
        .add_vehicle("B 1 AAA", "Bogor", "Andi", VehicleStatus::Delivery)
        .unwrap();
    fleet
        .add_vehicle("B 2 BBB", "Depok", "Budi", VehicleStatus::SalesVan)
        .unwrap();
    fleet
        .add_vehicle("B 3 CCC", "Cibinong", "Citra", VehicleStatus::Delivery)
        .unwrap();

    fleet
        .depart("B 2 BBB", ts("2025-08-01 08:00:00"), 100, "sales")
        .unwrap();

    let on_trip: Vec<&str> = fleet
        .on_trip()
        .iter()
        .map(|log| log.license_plate.as_str())
        .collect();
    let available: Vec<&str> = fleet
        .available_vehicles()
        .iter()
        .map(|v| v.license_plate.as_str())
        .collect();

    assert_eq!(on_trip, vec!["B 2 BBB"]);
    assert_eq!(available, vec!["B 3 CCC", "B 1 AAA"]);
    assert!(available.iter().all(|plate| !on_trip.contains(plate)));

    // Once back, the plate reappears in the available list.
    fleet
        .return_trip("B 2 BBB", ts("2025-08-01 12:00:00"), 150)
        .unwrap();
    assert!(fleet.on_trip().is_empty());
    assert_eq!(fleet.available_vehicles().len(), 3);
}

#[test]
fn test_duration_formatting_omits_zero_units() {
    let start = ts("2025-08-01 08:00:00");

    assert_eq!(format_duration(start, start), "0 dtk");
    assert_eq!(format_duration(start, start + Duration::seconds(45)), "45 dtk");
    assert_eq!(
        format_duration(start, start + Duration::hours(1) + Duration::seconds(5)),
        "1 jam 5 dtk"
    );
    assert_eq!(
        format_duration(start, start + Duration::hours(2) + Duration::minutes(3)),
        "2 jam 3 mnt"
    );
    assert_eq!(
        format_duration(
            start,
            start + Duration::hours(1) + Duration::minutes(2) + Duration::seconds(3)
        ),
        "1 jam 2 mnt 3 dtk"
    );
}

#[test]
fn test_trip_duration_and_distance() {
    let mut fleet = open_blank("proj_duration");
    fleet
        .depart("B 1 AAA", ts("2025-08-01 08:00:00"), 100, "delivery")
        .unwrap();

    assert_eq!(fleet.logs()[0].duration(), None);
    assert_eq!(fleet.logs()[0].distance(), None);

    fleet
        .return_trip("B 1 AAA", ts("2025-08-01 09:00:05"), 163)
        .unwrap();
    assert_eq!(fleet.logs()[0].duration().as_deref(), Some("1 jam 5 dtk"));
    assert_eq!(fleet.logs()[0].distance(), Some(63));
}

#[test]
fn test_daily_summary_counts_departures_on_reference_day() {
    let mut fleet = open_blank("proj_summary");
    fleet
        .add_vehicle("B 1 AAA", "Bogor", "Andi", VehicleStatus::Delivery)
        .unwrap();
    fleet
        .add_vehicle("B 2 BBB", "Depok", "Budi", VehicleStatus::SalesVan)
        .unwrap();

    // One departure yesterday, three on the reference day.
    fleet
        .depart("B 1 AAA", ts("2025-07-31 15:00:00"), 10, "old run")
        .unwrap();
    fleet
        .return_trip("B 1 AAA", ts("2025-07-31 18:00:00"), 40)
        .unwrap();
    fleet
        .depart("B 1 AAA", ts("2025-08-01 07:30:00"), 40, "first")
        .unwrap();
    fleet
        .return_trip("B 1 AAA", ts("2025-08-01 09:00:00"), 80)
        .unwrap();
    fleet
        .depart("B 1 AAA", ts("2025-08-01 10:00:00"), 80, "second")
        .unwrap();
    fleet
        .depart("B 2 BBB", ts("2025-08-01 23:59:00"), 500, "late run")
        .unwrap();

    let summary = fleet.daily_summary(parse_date("2025-08-01").unwrap());
    assert_eq!(summary.departures_today, 3);
    assert_eq!(summary.on_trip_count, 2);
    assert_eq!(summary.total_registered_vehicles, 2);
}

#[test]
fn test_filter_history_plate_is_case_and_spacing_insensitive() {
    let mut fleet = open_blank("proj_filter_plate");
    fleet
        .depart("B 1234 ABC", ts("2025-08-01 08:00:00"), 100, "delivery")
        .unwrap();
    fleet
        .return_trip("B 1234 ABC", ts("2025-08-01 12:00:00"), 150)
        .unwrap();
    fleet
        .depart("F 5678 XYZ", ts("2025-08-01 09:00:00"), 200, "sales")
        .unwrap();
    fleet
        .return_trip("F 5678 XYZ", ts("2025-08-01 13:00:00"), 260)
        .unwrap();

    let filter = HistoryFilter {
        plate: Some("b1".to_string()),
        ..Default::default()
    };
    let hits = fleet.filter_history(&filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].license_plate, "B 1234 ABC");
}

#[test]
fn test_filter_history_date_range_is_inclusive() {
    let mut fleet = open_blank("proj_filter_dates");
    for (day, km) in [("01", 100), ("02", 200), ("03", 300)] {
        let plate = format!("B {} AAA", day);
        fleet
            .depart(
                &plate,
                ts(&format!("2025-08-{} 08:00:00", day)),
                km,
                "delivery",
            )
            .unwrap();
        fleet
            .return_trip(&plate, ts(&format!("2025-08-{} 12:00:00", day)), km + 50)
            .unwrap();
    }

    let filter = HistoryFilter {
        from: parse_date("2025-08-02"),
        to: parse_date("2025-08-03"),
        ..Default::default()
    };
    let hits = fleet.filter_history(&filter);
    let plates: Vec<&str> = hits.iter().map(|log| log.license_plate.as_str()).collect();
    assert_eq!(plates, vec!["B 03 AAA", "B 02 AAA"]);

    // A departure at 08:00 still falls inside a single-day range.
    let filter = HistoryFilter {
        from: parse_date("2025-08-01"),
        to: parse_date("2025-08-01"),
        ..Default::default()
    };
    assert_eq!(fleet.filter_history(&filter).len(), 1);
}

#[test]
fn test_filter_history_status_joins_registry() {
    let mut fleet = open_blank("proj_filter_status");
    let a = fleet
        .add_vehicle("B 1 AAA", "Bogor", "Andi", VehicleStatus::Delivery)
        .unwrap();
    fleet
        .add_vehicle("B 2 BBB", "Depok", "Budi", VehicleStatus::SalesVan)
        .unwrap();

    for plate in ["B 1 AAA", "B 2 BBB"] {
        fleet
            .depart(plate, ts("2025-08-01 08:00:00"), 100, "run")
            .unwrap();
        fleet
            .return_trip(plate, ts("2025-08-01 12:00:00"), 150)
            .unwrap();
    }

    let filter = HistoryFilter {
        status: Some(VehicleStatus::Delivery),
        ..Default::default()
    };
    let hits = fleet.filter_history(&filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].license_plate, "B 1 AAA");

    // With the vehicle gone from the registry, its entries drop out of a
    // status-filtered view but stay in the unfiltered history.
    fleet.remove_vehicle(a.id).unwrap();
    assert!(fleet.filter_history(&filter).is_empty());
    assert_eq!(fleet.filter_history(&HistoryFilter::default()).len(), 2);
}

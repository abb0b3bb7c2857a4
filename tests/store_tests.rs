mod common;
use common::{open_blank, setup_test_store, ts};
use chrono::Duration;
use fleetlog::Fleet;
use fleetlog::store::Store;
use std::fs;

#[test]
fn test_round_trip_preserves_timestamps() {
    let path = setup_test_store("store_round_trip");
    let departure = ts("2025-08-01 08:15:30") + Duration::milliseconds(123);
    let ret = ts("2025-08-01 11:45:10") + Duration::milliseconds(987);

    {
        let mut fleet = Fleet::open(Store::new(path.clone())).unwrap();
        fleet.depart("B 1234 ABC", departure, 100, "delivery").unwrap();
        fleet.return_trip("B 1234 ABC", ret, 163).unwrap();
    }

    let reopened = Fleet::open(Store::new(path)).unwrap();
    let log = &reopened.logs()[0];
    assert_eq!(log.license_plate, "B 1234 ABC");
    assert_eq!(log.departure_time, departure);
    assert_eq!(log.return_time, Some(ret));
    assert_eq!(log.departure_odometer, Some(100));
    assert_eq!(log.return_odometer, Some(163));
    assert_eq!(log.purpose.as_deref(), Some("delivery"));
}

#[test]
fn test_seed_on_first_run_and_persisted() {
    let path = setup_test_store("store_seed");
    {
        let fleet = Fleet::open(Store::new(path.clone())).unwrap();
        assert_eq!(fleet.vehicles().len(), 2);
        assert_eq!(fleet.users().len(), 1);
        assert_eq!(fleet.users()[0].username, "admin");
    }

    // The seeds land in the file, not just in memory.
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("masterVehicles"));
    assert!(content.contains("B 1234 ABC"));
    assert!(content.contains("admin"));
}

#[test]
fn test_blank_store_is_not_reseeded() {
    // An existing (even empty) document means the registry was emptied on
    // purpose; only the admin account comes back.
    let fleet = open_blank("store_blank");
    assert!(fleet.vehicles().is_empty());
    assert!(fleet.logs().is_empty());
    assert_eq!(fleet.users().len(), 1);
}

#[test]
fn test_missing_fields_tolerated_on_load() {
    let path = setup_test_store("store_legacy");
    let raw = r#"{
        "vehicleLogs": [
            {
                "id": 1,
                "licensePlate": "B 1234 ABC",
                "departureTime": "2025-08-01T08:00:00+07:00"
            }
        ],
        "masterVehicles": [
            {
                "id": 1,
                "licensePlate": "B 1234 ABC",
                "subBranch": "Bogor",
                "driverName": "John Doe"
            }
        ]
    }"#;
    fs::write(&path, raw).unwrap();

    let fleet = Fleet::open(Store::new(path)).unwrap();
    let log = &fleet.logs()[0];
    assert!(log.is_open());
    assert_eq!(log.departure_odometer, None);
    assert_eq!(log.purpose, None);
    assert_eq!(log.distance(), None);

    // A record written before the status column existed reads as Delivery.
    assert_eq!(
        fleet.vehicles()[0].status,
        fleetlog::models::vehicle::VehicleStatus::Delivery
    );
}

#[test]
fn test_negative_distance_from_edited_store_is_reported() {
    let path = setup_test_store("store_negative_distance");
    let raw = r#"{
        "vehicleLogs": [
            {
                "id": 1,
                "licensePlate": "B 1234 ABC",
                "departureTime": "2025-08-01T08:00:00+07:00",
                "returnTime": "2025-08-01T12:00:00+07:00",
                "departureOdometer": 200,
                "returnOdometer": 150
            }
        ]
    }"#;
    fs::write(&path, raw).unwrap();

    let fleet = Fleet::open(Store::new(path)).unwrap();
    assert_eq!(fleet.logs()[0].distance(), Some(-50));
}

#[test]
fn test_activity_log_records_mutations_newest_first() {
    let mut fleet = open_blank("store_activity");
    fleet.depart("B 1 AAA", ts("2025-08-01 08:00:00"), 100, "delivery").unwrap();
    fleet.return_trip("B 1 AAA", ts("2025-08-01 12:00:00"), 150).unwrap();

    let activity = fleet.activity();
    assert!(activity.len() >= 2);
    assert_eq!(activity[0].operation, "return");
    assert_eq!(activity[1].operation, "depart");
    assert_eq!(activity[0].target, "B 1 AAA");
}

use agenda_core::{
    availability::{BusySchedule, check_availability},
    catalog::ServiceCatalog,
    models::slot::{AvailabilityRequest, AvailabilityStatus, BusySlot},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("2025-10-20", "14:00")]
#[case("2025-10-20", "15:00")]
fn test_seeded_busy_slots_are_occupied(#[case] date: &str, #[case] hour: &str) {
    let schedule = BusySchedule::seeded();

    assert!(!schedule.is_free(date, hour));
    assert_eq!(
        schedule.status(&AvailabilityRequest::new(date, hour)),
        AvailabilityStatus::Occupied
    );
}

#[rstest]
#[case("2025-10-20", "16:00")]
#[case("2025-10-20", "14:15")]
#[case("2025-10-21", "14:00")]
#[case("2099-01-01", "09:00")]
fn test_unlisted_pairs_are_free(#[case] date: &str, #[case] hour: &str) {
    let schedule = BusySchedule::seeded();

    assert!(schedule.is_free(date, hour));
    assert_eq!(
        schedule.status(&AvailabilityRequest::new(date, hour)),
        AvailabilityStatus::Free
    );
}

#[test]
fn test_malformed_input_is_reported_free_by_predicate() {
    let schedule = BusySchedule::seeded();

    assert!(schedule.is_free("2025-10-20", ""));
    assert!(schedule.is_free("", ""));
    assert!(schedule.is_free("2025-10-20", "14:00 "));
    assert!(schedule.is_free("2025-10-20", "2:00 PM"));
}

#[test]
fn test_predicate_is_pure() {
    let schedule = BusySchedule::seeded();
    let before = schedule.clone();

    let first: Vec<bool> = ["13:00", "14:00", "15:00", "16:00"]
        .iter()
        .map(|hour| schedule.is_free("2025-10-20", hour))
        .collect();
    let second: Vec<bool> = ["13:00", "14:00", "15:00", "16:00"]
        .iter()
        .map(|hour| schedule.is_free("2025-10-20", hour))
        .collect();

    assert_eq!(first, second);
    assert_eq!(first, vec![true, false, false, true]);
    assert_eq!(schedule, before);
}

#[test]
fn test_result_does_not_depend_on_slot_order() {
    let slots = vec![
        BusySlot::new("2025-10-20", "14:00"),
        BusySlot::new("2025-10-20", "15:00"),
        BusySlot::new("2025-11-03", "09:30"),
        BusySlot::new("2026-01-15", "18:00"),
    ];
    let mut reversed = slots.clone();
    reversed.reverse();
    let mut rotated = slots.clone();
    rotated.rotate_left(2);

    let pairs = [
        ("2025-10-20", "14:00"),
        ("2025-10-20", "15:00"),
        ("2025-11-03", "09:30"),
        ("2026-01-15", "18:00"),
        ("2025-10-20", "16:00"),
        ("2026-01-15", "09:30"),
    ];

    let schedule = BusySchedule::new(slots.clone());
    assert_eq!(schedule.slots(), slots.as_slice());

    for (date, hour) in pairs {
        let expected = check_availability(schedule.slots(), date, hour);
        assert_eq!(check_availability(&reversed, date, hour), expected);
        assert_eq!(check_availability(&rotated, date, hour), expected);
    }
}

#[test]
fn test_service_duration_does_not_affect_check() {
    let catalog = ServiceCatalog::seeded();
    let schedule = BusySchedule::seeded();

    let haircut = catalog.get(1).expect("seeded service");
    assert_eq!(haircut.duration_minutes, 30);

    // 14:00 is booked, 14:15 would overlap a 30 minute haircut but is still free.
    assert!(schedule.is_free("2025-10-20", "14:15"));
}

#[test]
fn test_seeded_catalog() {
    let catalog = ServiceCatalog::seeded();

    let labels: Vec<String> = catalog.services().iter().map(|s| s.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Corte de Cabelo (30 min)".to_string(),
            "Manicure (45 min)".to_string(),
        ]
    );
    assert!(catalog.get(3).is_none());
}

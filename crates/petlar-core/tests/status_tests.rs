// Rust guideline compliant 2026-10-18

//! Unit tests for status labels and colors.

use petlar_core::{status_colors, status_label, Error, FilterStatus, ReservationStatus, StatusColors};
use std::collections::HashSet;

#[test]
fn test_labels_are_non_empty_and_distinct() {
    let labels: HashSet<&str> = ReservationStatus::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels.len(), 6, "Every status should have its own label");
    assert!(labels.iter().all(|label| !label.is_empty()));
}

#[test]
fn test_known_labels() {
    assert_eq!(ReservationStatus::Pending.label(), "Pendente");
    assert_eq!(ReservationStatus::InProgress.label(), "Em andamento");
    assert_eq!(ReservationStatus::Canceled.label(), "Cancelada");
}

#[test]
fn test_status_label_from_raw() {
    assert_eq!(status_label("confirmed").unwrap(), "Confirmada");
    assert_eq!(status_label("completed").unwrap(), "Concluída");
}

#[test]
fn test_status_label_rejects_unknown_values() {
    for raw in ["all", "", "PENDING", "cancelled", "archived"] {
        let err = status_label(raw).expect_err("Unknown status should not get a label");
        assert!(
            matches!(err, Error::InvalidStatus(ref value) if value == raw),
            "Expected InvalidStatus for {raw:?}, got {err:?}"
        );
    }
}

#[test]
fn test_denied_and_canceled_share_colors() {
    assert_eq!(
        ReservationStatus::Denied.colors(),
        ReservationStatus::Canceled.colors()
    );
}

#[test]
fn test_other_statuses_have_distinct_colors() {
    let refused = ReservationStatus::Denied.colors();
    let others = [
        ReservationStatus::Pending,
        ReservationStatus::Confirmed,
        ReservationStatus::InProgress,
        ReservationStatus::Completed,
    ];

    let mut seen = HashSet::new();
    for status in others {
        let colors = status.colors();
        assert_ne!(colors, refused, "{status} should not share the refused colors");
        assert_ne!(colors, StatusColors::NEUTRAL, "{status} should not be neutral");
        assert!(seen.insert(colors), "{status} should have its own colors");
    }
}

#[test]
fn test_non_status_values_are_neutral() {
    assert_eq!(FilterStatus::All.colors(), StatusColors::NEUTRAL);
    assert_eq!(status_colors("all"), StatusColors::NEUTRAL);
    assert_eq!(status_colors("unknown"), StatusColors::NEUTRAL);
    assert_eq!(status_colors(""), StatusColors::NEUTRAL);
}

#[test]
fn test_raw_colors_match_typed_colors() {
    for status in ReservationStatus::ALL {
        assert_eq!(status_colors(status.as_str()), status.colors());
        assert_eq!(FilterStatus::from(status).colors(), status.colors());
    }
}

#[test]
fn test_filter_status_parsing() {
    assert_eq!("all".parse::<FilterStatus>().unwrap(), FilterStatus::All);
    assert_eq!(
        "denied".parse::<FilterStatus>().unwrap(),
        FilterStatus::Status(ReservationStatus::Denied)
    );
    assert!("everything".parse::<FilterStatus>().is_err());
    assert_eq!(FilterStatus::All.label(), "Todas");
}

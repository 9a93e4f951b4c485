// Rust guideline compliant 2026-10-18

//! Unit tests for output formatting module.

use petlar_app::StatusCount;
use petlar_cli::create_formatter;
use petlar_core::{HostSummary, NewReservation, Pet, ReservationStatus, ReservationView};

fn create_test_view() -> ReservationView {
    let pet: Pet = serde_json::from_value(serde_json::json!({
        "id": "pet-1",
        "tutorId": "tutor-1",
        "name": "Rex"
    }))
    .expect("valid pet");

    ReservationView {
        id: "res-1".to_string(),
        start_date: "2024-03-10".to_string(),
        end_date: "2024-03-12".to_string(),
        days: 2,
        status: ReservationStatus::Confirmed,
        total_price: 1234.5,
        host: HostSummary {
            id: "host-1".to_string(),
            name: "Maria Souza".to_string(),
            location: "Recife, PE".to_string(),
            avatar: None,
        },
        pets: vec![pet],
    }
}

#[test]
fn test_json_formatter_single_reservation() {
    let formatter = create_formatter("json", false);
    let output = formatter.format_reservation(&create_test_view());

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["status"], "ok");
    assert_eq!(value["result"]["id"], "res-1");
    assert_eq!(value["result"]["status"], "confirmed");
    assert_eq!(value["result"]["startDate"], "2024-03-10");
    assert_eq!(value["result"]["host"]["name"], "Maria Souza");
}

#[test]
fn test_json_formatter_list_has_total() {
    let formatter = create_formatter("json", false);
    let output = formatter.format_list(&[create_test_view()]);

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["result"]["total"], 1);
    assert_eq!(value["result"]["reservations"][0]["days"], 2);
}

#[test]
fn test_table_formatter_single_reservation() {
    let formatter = create_formatter("table", false);
    let output = formatter.format_reservation(&create_test_view());

    assert!(output.contains("res-1"));
    assert!(output.contains("Confirmada"));
    assert!(output.contains("Recife, PE"));
    assert!(output.contains("10/03/2024 a 12/03/2024"));
    assert!(output.contains("R$ 1234,50"));
    assert!(output.contains("Rex"));
}

#[test]
fn test_table_formatter_list() {
    let formatter = create_formatter("table", false);
    let output = formatter.format_list(&[create_test_view()]);

    assert!(output.contains("ID"));
    assert!(output.contains("Status"));
    assert!(output.contains("Confirmada"));
    assert!(output.contains("Maria Souza"));
}

#[test]
fn test_table_formatter_empty_list() {
    let formatter = create_formatter("table", false);
    assert_eq!(formatter.format_list(&[]), "No reservations found.");
}

#[test]
fn test_table_formatter_colored_badge() {
    let formatter = create_formatter("table", true);
    let output = formatter.format_reservation(&create_test_view());
    assert!(output.contains('\u{1b}'));
    assert!(output.contains("Confirmada"));
}

#[test]
fn test_plain_formatter_list() {
    let formatter = create_formatter("plain", false);
    let output = formatter.format_list(&[create_test_view()]);

    assert_eq!(
        output,
        "res-1 confirmed 10/03/2024 12/03/2024 2 R$ 1234,50\n"
    );
}

#[test]
fn test_statuses_cover_every_label() {
    let formatter = create_formatter("plain", false);
    let output = formatter.format_statuses();

    for status in ReservationStatus::ALL {
        assert!(output.contains(status.label()));
    }
    assert_eq!(output.lines().count(), 6);
}

#[test]
fn test_summary_totals() {
    let counts = vec![
        StatusCount {
            status: ReservationStatus::Pending,
            label: "Pendente",
            count: 2,
        },
        StatusCount {
            status: ReservationStatus::Completed,
            label: "Concluída",
            count: 1,
        },
    ];

    let json = create_formatter("json", false).format_summary(&counts);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["result"]["total"], 3);

    let table = create_formatter("table", false).format_summary(&counts);
    assert!(table.contains("Pendente"));
    assert!(table.contains("Total"));
}

#[test]
fn test_quote_formatters() {
    let payload = NewReservation {
        tutor_id: "tutor-1".to_string(),
        host_id: "host-1".to_string(),
        start_date: "2024-03-10".to_string(),
        end_date: "2024-03-12".to_string(),
        status: ReservationStatus::Pending,
        pet_ids: vec!["pet-1".to_string(), "pet-2".to_string()],
        price_per_day: 50.0,
        pet_count: 2,
        days: 2,
        total_price: 200.0,
    };

    let json = create_formatter("json", false).format_quote(&payload);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["result"]["status"], "pending");
    assert_eq!(value["result"]["pricePerDay"], 50.0);
    assert_eq!(value["result"]["totalPrice"], 200.0);

    let table = create_formatter("table", false).format_quote(&payload);
    assert!(table.contains("R$ 200,00"));
    assert!(table.contains("R$ 50,00"));
}

#[test]
fn test_format_value() {
    let json = create_formatter("json", false).format_value("days", serde_json::json!(3));
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["result"]["days"], 3);

    let plain = create_formatter("plain", false).format_value("date", serde_json::json!("10/03/2024"));
    assert_eq!(plain, "10/03/2024");
}

#[test]
fn test_error_formatting() {
    let json = create_formatter("json", false).format_error("boom");
    assert!(json.contains("\"error\""));
    assert_eq!(create_formatter("table", false).format_error("boom"), "Error: boom");
}

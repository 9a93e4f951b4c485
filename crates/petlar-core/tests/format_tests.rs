// Rust guideline compliant 2026-10-18

//! Unit tests for date and currency formatting.

use petlar_core::{format_currency, format_date, parse_calendar_date};

#[test]
fn test_currency_whole_amounts() {
    assert_eq!(format_currency(0.0), "R$ 0,00");
    assert_eq!(format_currency(10.0), "R$ 10,00");
    assert_eq!(format_currency(1500.0), "R$ 1500,00");
}

#[test]
fn test_currency_rounds_to_two_decimals() {
    assert_eq!(format_currency(19.999), "R$ 20,00");
    assert_eq!(format_currency(49.9), "R$ 49,90");
    assert_eq!(format_currency(3.14159), "R$ 3,14");
}

#[test]
fn test_currency_negative_keeps_minus() {
    assert_eq!(format_currency(-5.5), "R$ -5,50");
    assert_eq!(format_currency(-120.0), "R$ -120,00");
}

#[test]
fn test_currency_tiny_negative_is_zero() {
    assert_eq!(format_currency(-0.001), "R$ 0,00");
}

#[test]
fn test_currency_huge_amounts_keep_every_digit() {
    assert_eq!(format_currency(1e17), "R$ 100000000000000000,00");
    assert_eq!(format_currency(-1e17), "R$ -100000000000000000,00");

    let huge = format_currency(1e300);
    assert!(huge.starts_with("R$ 1"));
    assert!(huge.ends_with(",00"));
    assert_eq!(huge.len(), "R$ ".len() + 301 + ",00".len());
    assert_ne!(huge, format_currency(1e17));

    let near_max = format_currency(f64::MAX);
    assert!(near_max.ends_with(",00"));
    assert_eq!(format_currency(-1e300).replacen('-', "", 1), huge);
}

#[test]
fn test_currency_non_finite_is_zero() {
    assert_eq!(format_currency(f64::NAN), "R$ 0,00");
    assert_eq!(format_currency(f64::INFINITY), "R$ 0,00");
}

#[test]
fn test_date_iso() {
    assert_eq!(format_date("2024-01-15"), "15/01/2024");
    assert_eq!(format_date("2024-12-01T08:30:00"), "01/12/2024");
    assert_eq!(format_date("2024-12-01T08:30:00.250"), "01/12/2024");
    assert_eq!(format_date("2024-12-01 08:30:00"), "01/12/2024");
    assert_eq!(format_date("2024-07-04T12:00:00Z"), "04/07/2024");
}

#[test]
fn test_date_garbage_is_unchanged() {
    assert_eq!(format_date("not-a-date"), "not-a-date");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("2024-02-30"), "2024-02-30");
}

#[test]
fn test_date_formatting_is_idempotent() {
    let once = format_date("2023-09-07");
    assert_eq!(once, "07/09/2023");
    assert_eq!(format_date(&once), once);

    let garbage = format_date("amanhã");
    assert_eq!(format_date(&garbage), garbage);
}

#[test]
fn test_parse_calendar_date_accepts_display_format() {
    let date = parse_calendar_date("31/12/2024").expect("Display format should parse");
    assert_eq!(date.to_string(), "2024-12-31");
}

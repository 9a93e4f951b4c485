// Rust guideline compliant 2026-10-18

//! Output formatting module for the PetLar CLI.
//!
//! This module renders reservations, status tables and booking payloads
//! in various output formats (JSON, table, plain text).

use crate::terminal::badge;
use petlar_app::{StatusCount, SuccessEnvelope};
use petlar_core::{
    format_currency, format_date, NewReservation, ReservationStatus, ReservationView,
};
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for rendering PetLar data in different output formats.
pub trait OutputFormatter {
    /// Formats a single reservation for display.
    fn format_reservation(&self, view: &ReservationView) -> String;

    /// Formats a list of reservations for display.
    fn format_list(&self, views: &[ReservationView]) -> String;

    /// Formats per-status reservation counts.
    fn format_summary(&self, counts: &[StatusCount]) -> String;

    /// Formats the status reference (literal, label, colors).
    fn format_statuses(&self) -> String;

    /// Formats a reservation-creation payload.
    fn format_quote(&self, payload: &NewReservation) -> String;

    /// Formats a single computed value under `key`.
    fn format_value(&self, key: &str, value: serde_json::Value) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

fn pet_names(view: &ReservationView) -> String {
    view.pets
        .iter()
        .map(|pet| pet.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn period(view: &ReservationView) -> String {
    format!(
        "{} a {}",
        format_date(&view.start_date),
        format_date(&view.end_date)
    )
}

fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// JSON output formatter.
///
/// Wraps every result in a success envelope for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(result))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_reservation(&self, view: &ReservationView) -> String {
        Self::envelope(view)
    }

    fn format_list(&self, views: &[ReservationView]) -> String {
        Self::envelope(json!({
            "reservations": views,
            "total": views.len(),
        }))
    }

    fn format_summary(&self, counts: &[StatusCount]) -> String {
        Self::envelope(json!({
            "counts": counts,
            "total": counts.iter().map(|c| c.count).sum::<usize>(),
        }))
    }

    fn format_statuses(&self) -> String {
        let statuses: Vec<serde_json::Value> = ReservationStatus::ALL
            .iter()
            .map(|status| {
                json!({
                    "status": status,
                    "label": status.label(),
                    "colors": status.colors(),
                })
            })
            .collect();
        Self::envelope(statuses)
    }

    fn format_quote(&self, payload: &NewReservation) -> String {
        Self::envelope(payload)
    }

    fn format_value(&self, key: &str, value: serde_json::Value) -> String {
        let mut result = serde_json::Map::new();
        result.insert(key.to_string(), value);
        Self::envelope(result)
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats reservations as human-readable tables with colored status badges.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_reservation(&self, view: &ReservationView) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", view.id));
        output.push_str(&format!(
            "Status:      {}\n",
            badge(view.status.label(), view.status.colors(), self.use_color)
        ));
        output.push_str(&format!("Host:        {}\n", view.host.name));
        output.push_str(&format!("Location:    {}\n", view.host.location));
        output.push_str(&format!("Period:      {}\n", period(view)));
        output.push_str(&format!("Days:        {}\n", view.days));
        output.push_str(&format!("Total:       {}\n", format_currency(view.total_price)));

        if !view.pets.is_empty() {
            output.push_str(&format!("Pets:        {}\n", pet_names(view)));
        }

        output
    }

    fn format_list(&self, views: &[ReservationView]) -> String {
        if views.is_empty() {
            return "No reservations found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Status", "Host", "Period", "Days", "Pets", "Total"]);

        for view in views {
            builder.push_record(vec![
                view.id.clone(),
                view.status.label().to_string(),
                view.host.name.clone(),
                period(view),
                view.days.to_string(),
                pet_names(view),
                format_currency(view.total_price),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_summary(&self, counts: &[StatusCount]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Status", "Label", "Count"]);

        for count in counts {
            builder.push_record(vec![
                count.status.to_string(),
                count.label.to_string(),
                count.count.to_string(),
            ]);
        }
        let total: usize = counts.iter().map(|c| c.count).sum();
        builder.push_record(vec![String::new(), "Total".to_string(), total.to_string()]);

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_statuses(&self) -> String {
        let mut output = String::new();
        for status in ReservationStatus::ALL {
            let colors = status.colors();
            output.push_str(&format!(
                "{:<12} {:<14} {} on {}  {}\n",
                status.as_str(),
                status.label(),
                colors.text,
                colors.background,
                badge(status.label(), colors, self.use_color)
            ));
        }
        output
    }

    fn format_quote(&self, payload: &NewReservation) -> String {
        let mut output = String::new();

        output.push_str(&format!("Tutor:       {}\n", payload.tutor_id));
        output.push_str(&format!("Host:        {}\n", payload.host_id));
        output.push_str(&format!(
            "Period:      {} a {}\n",
            format_date(&payload.start_date),
            format_date(&payload.end_date)
        ));
        output.push_str(&format!("Days:        {}\n", payload.days));
        output.push_str(&format!("Pets:        {}\n", payload.pet_count));
        output.push_str(&format!(
            "Per day:     {}\n",
            format_currency(payload.price_per_day)
        ));
        output.push_str(&format!(
            "Total:       {}\n",
            format_currency(payload.total_price)
        ));

        output
    }

    fn format_value(&self, _key: &str, value: serde_json::Value) -> String {
        scalar_text(&value)
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// Formats reservations as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_reservation(&self, view: &ReservationView) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", view.id));
        output.push_str(&format!("{}\n", view.status));
        output.push_str(&format!("{}\n", view.host.name));
        output.push_str(&format!("{}\n", period(view)));
        output.push_str(&format!("{}\n", view.days));
        output.push_str(&format!("{}\n", format_currency(view.total_price)));

        output
    }

    fn format_list(&self, views: &[ReservationView]) -> String {
        if views.is_empty() {
            return "No reservations found.".to_string();
        }

        let mut output = String::new();
        for view in views {
            output.push_str(&format!(
                "{} {} {} {} {} {}\n",
                view.id,
                view.status,
                format_date(&view.start_date),
                format_date(&view.end_date),
                view.days,
                format_currency(view.total_price)
            ));
        }
        output
    }

    fn format_summary(&self, counts: &[StatusCount]) -> String {
        let mut output = String::new();
        for count in counts {
            output.push_str(&format!("{} {}\n", count.status, count.count));
        }
        output
    }

    fn format_statuses(&self) -> String {
        let mut output = String::new();
        for status in ReservationStatus::ALL {
            let colors = status.colors();
            output.push_str(&format!(
                "{} {} {} {}\n",
                status,
                colors.background,
                colors.text,
                status.label()
            ));
        }
        output
    }

    fn format_quote(&self, payload: &NewReservation) -> String {
        format!(
            "{} {} {} {}\n",
            payload.days,
            payload.pet_count,
            payload.price_per_day,
            payload.total_price
        )
    }

    fn format_value(&self, _key: &str, value: serde_json::Value) -> String {
        scalar_text(&value)
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}

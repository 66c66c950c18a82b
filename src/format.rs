//! Display Formatting
//!
//! Pure helpers that turn record fields into the text shown in cells and chips.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::TaskStatus;

/// Chip label and style for a task status. Unknown statuses look like "To Do".
pub fn status_chip(status: &TaskStatus) -> (&'static str, &'static str) {
    match status {
        TaskStatus::ToDo | TaskStatus::Unknown(_) => ("To Do", "chip outlined"),
        TaskStatus::Doing => ("In Progress", "chip warning"),
        TaskStatus::PenApproval => ("Waiting", "chip info"),
        TaskStatus::Done => ("Done", "chip success"),
    }
}

/// Parse the date part of an ISO date or timestamp
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()
}

/// `dd/mm/yyyy`, or "N/A" for missing and unparseable dates
pub fn display_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Value for an `<input type="date">`
pub fn date_input_value(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Whole quantities without a decimal point
pub fn display_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

/// Avatar letter for a person's name
pub fn initial(name: Option<&str>) -> String {
    name.and_then(|n| n.trim().chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Optional text, or the given placeholder when missing or blank
pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| placeholder.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_formats() {
        assert_eq!(display_date(Some("2024-03-07")), "07/03/2024");
        assert_eq!(display_date(Some("2024-03-07T22:15:00Z")), "07/03/2024");
        assert_eq!(display_date(Some("2024-03-07T22:15:00.000")), "07/03/2024");
        assert_eq!(display_date(Some("next week")), "N/A");
        assert_eq!(display_date(None), "N/A");
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value(Some("2024-12-31T00:00:00+02:00")), "2024-12-31");
        assert_eq!(date_input_value(None), "");
    }

    #[test]
    fn test_status_chip_fallback() {
        assert_eq!(status_chip(&TaskStatus::PenApproval).0, "Waiting");
        assert_eq!(
            status_chip(&TaskStatus::Unknown("Archived".to_string())),
            status_chip(&TaskStatus::ToDo)
        );
    }

    #[test]
    fn test_small_helpers() {
        assert_eq!(display_quantity(3.0), "3");
        assert_eq!(display_quantity(2.5), "2.5");
        assert_eq!(initial(Some("  omar")), "O");
        assert_eq!(initial(None), "?");
        assert_eq!(or_placeholder(Some(" "), "N/A"), "N/A");
        assert_eq!(or_placeholder(Some("High"), "Not Set"), "High");
    }
}

//! Formatting helpers for presenting prices and dates.

use time::macros::format_description;
use time::Date;

use super::error::{Result, SiteError};

/// Whole currency units, e.g. `$85`.
pub fn format_price(amount: u32) -> String {
    format!("${amount}")
}

pub fn format_rating(rating: f32) -> String {
    format!("{rating:.1}")
}

/// `YYYY-MM-DD`, the key format of the availability calendar.
pub fn iso_date(date: Date) -> String {
    let fmt = format_description!("[year]-[month]-[day]");
    date.format(&fmt).unwrap_or_else(|_| {
        format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month() as u8,
            date.day()
        )
    })
}

pub fn parse_iso_date(raw: &str) -> Result<Date> {
    let fmt = format_description!("[year]-[month]-[day]");
    Date::parse(raw.trim(), &fmt).map_err(|source| SiteError::InvalidDate {
        input: raw.to_string(),
        source,
    })
}

/// Compact picker label like `Jun 10`.
pub fn format_short_date(date: Date) -> String {
    let month = date.month().to_string();
    format!("{} {}", &month[..3], date.day())
}

/// Post dates: `2024-01-15` becomes `January 15, 2024`. Unparseable input is shown as-is.
pub fn format_post_date(raw: &str) -> String {
    match parse_iso_date(raw) {
        Ok(date) => format!("{} {}, {}", date.month(), date.day(), date.year()),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn iso_round_trip() {
        let date = Date::from_calendar_date(2025, Month::June, 3).unwrap();
        assert_eq!(iso_date(date), "2025-06-03");
        assert_eq!(parse_iso_date("2025-06-03").unwrap(), date);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_iso_date("2025-13-01").is_err());
        assert!(parse_iso_date("June 3rd").is_err());
    }

    #[test]
    fn short_labels() {
        let date = Date::from_calendar_date(2025, Month::June, 10).unwrap();
        assert_eq!(format_short_date(date), "Jun 10");
        assert_eq!(format_price(341), "$341");
        assert_eq!(format_rating(4.9), "4.9");
    }

    #[test]
    fn post_dates_are_spelled_out() {
        assert_eq!(format_post_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_post_date("soon"), "soon");
    }
}

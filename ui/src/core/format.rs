//! Formatting helpers for tooltip and summary text.

use time::macros::format_description;
use time::Month;

use crate::core::grid;
use crate::core::years::YearSelector;

pub fn format_count(count: u32) -> String {
    match count {
        0 => "No contributions".to_string(),
        1 => "1 contribution".to_string(),
        n => format!("{n} contributions"),
    }
}

/// "March 4, 2025"; falls back to the raw ISO string if it doesn't parse.
pub fn format_tooltip_date(iso: &str) -> String {
    grid::parse_iso(iso)
        .and_then(|date| {
            date.format(&format_description!(
                "[month repr:long] [day padding:none], [year]"
            ))
            .ok()
        })
        .unwrap_or_else(|| iso.to_string())
}

/// The full tooltip line, e.g. "3 contributions on March 4, 2025".
pub fn tooltip_label(count: u32, iso_date: &str) -> String {
    format!("{} on {}", format_count(count), format_tooltip_date(iso_date))
}

/// Summary line under the calendar, e.g. "1,204 contributions in 2024".
pub fn format_total(total: u64, selector: &YearSelector) -> String {
    let grouped = group_thousands(total);
    match selector {
        YearSelector::RollingLast => format!("{grouped} contributions in the last year"),
        YearSelector::Explicit(year) => format!("{grouped} contributions in {year}"),
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn month_short(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_labels_handle_plurals() {
        assert_eq!(
            tooltip_label(0, "2025-03-04"),
            "No contributions on March 4, 2025"
        );
        assert_eq!(
            tooltip_label(1, "2025-03-04"),
            "1 contribution on March 4, 2025"
        );
        assert_eq!(
            tooltip_label(12, "2025-12-31"),
            "12 contributions on December 31, 2025"
        );
    }

    #[test]
    fn unparseable_dates_fall_back_to_raw() {
        assert_eq!(format_tooltip_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn totals_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1204), "1,204");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn total_line_names_the_selection() {
        assert_eq!(
            format_total(812, &YearSelector::RollingLast),
            "812 contributions in the last year"
        );
        assert_eq!(
            format_total(1204, &YearSelector::Explicit(2024)),
            "1,204 contributions in 2024"
        );
    }
}

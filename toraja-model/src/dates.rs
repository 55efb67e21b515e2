//! Locale-aware date formatting for event listings and article bylines.

use chrono::{Datelike, NaiveDate};

use crate::locale::Locale;

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32, locale: Locale) -> &'static str {
    let idx = (month.clamp(1, 12) - 1) as usize;
    match locale {
        Locale::Id => MONTHS_ID[idx],
        Locale::En => MONTHS_EN[idx],
    }
}

/// `17 Agustus 2025` in Indonesian, `August 17, 2025` in English.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let month = month_name(date.month(), locale);
    match locale {
        Locale::Id => format!("{} {} {}", date.day(), month, date.year()),
        Locale::En => format!("{} {}, {}", month, date.day(), date.year()),
    }
}

/// Format an event span, collapsing the shared month and year.
pub fn format_date_range(
    start: NaiveDate,
    end: Option<NaiveDate>,
    locale: Locale,
) -> String {
    let end = match end {
        Some(end) if end != start => end,
        _ => return format_date(start, locale),
    };

    let same_year = start.year() == end.year();
    let same_month = same_year && start.month() == end.month();

    match (locale, same_month, same_year) {
        (Locale::Id, true, _) => format!(
            "{}\u{2013}{} {} {}",
            start.day(),
            end.day(),
            month_name(end.month(), locale),
            end.year()
        ),
        (Locale::Id, false, true) => format!(
            "{} {} \u{2013} {}",
            start.day(),
            month_name(start.month(), locale),
            format_date(end, locale)
        ),
        (Locale::En, true, _) => format!(
            "{} {}\u{2013}{}, {}",
            month_name(start.month(), locale),
            start.day(),
            end.day(),
            end.year()
        ),
        (Locale::En, false, true) => format!(
            "{} {} \u{2013} {}",
            month_name(start.month(), locale),
            start.day(),
            format_date(end, locale)
        ),
        (_, _, false) => format!(
            "{} \u{2013} {}",
            format_date(start, locale),
            format_date(end, locale)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_single_dates() {
        let d = date(2025, 8, 17);
        assert_eq!(format_date(d, Locale::Id), "17 Agustus 2025");
        assert_eq!(format_date(d, Locale::En), "August 17, 2025");
    }

    #[test]
    fn collapses_same_month_ranges() {
        let start = date(2025, 12, 20);
        let end = date(2025, 12, 23);
        assert_eq!(
            format_date_range(start, Some(end), Locale::Id),
            "20\u{2013}23 Desember 2025"
        );
        assert_eq!(
            format_date_range(start, Some(end), Locale::En),
            "December 20\u{2013}23, 2025"
        );
    }

    #[test]
    fn spans_months_and_years() {
        assert_eq!(
            format_date_range(
                date(2025, 6, 29),
                Some(date(2025, 7, 2)),
                Locale::Id
            ),
            "29 Juni \u{2013} 2 Juli 2025"
        );
        assert_eq!(
            format_date_range(
                date(2025, 12, 30),
                Some(date(2026, 1, 2)),
                Locale::En
            ),
            "December 30, 2025 \u{2013} January 2, 2026"
        );
    }

    #[test]
    fn single_day_range_is_a_plain_date() {
        let d = date(2025, 1, 5);
        assert_eq!(
            format_date_range(d, Some(d), Locale::En),
            "January 5, 2025"
        );
        assert_eq!(format_date_range(d, None, Locale::Id), "5 Januari 2025");
    }
}

//! Calendar months used to group expenses and salary payments.

use std::{fmt::Display, str::FromStr};

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The format used for dates in the CSV files and in HTML date inputs.
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Parse a date in the format `YYYY-MM-DD`.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is not a valid date in that format.
pub(crate) fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// A calendar month, e.g. June 2024.
///
/// Months are ordered chronologically and are displayed as `YYYY-MM`, so the
/// chronological and the lexicographic order of the display strings agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// The month that `date` falls in.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month().into(),
        }
    }

    /// Whether `date` falls in this month.
    pub fn contains(&self, date: Date) -> bool {
        Self::from_date(date) == *self
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    /// Parse a month in the format `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || Error::InvalidMonth(s.to_owned());

        let (year, month) = s.trim().split_once('-').ok_or_else(error)?;

        let is_digits = |text: &str, len: usize| {
            text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
        };

        if !is_digits(year, 4) || !is_digits(month, 2) {
            return Err(error());
        }

        let year: i32 = year.parse().map_err(|_| error())?;
        let month: u8 = month.parse().map_err(|_| error())?;

        if !(1..=12).contains(&month) {
            return Err(error());
        }

        Ok(Self { year, month })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::{YearMonth, parse_date};

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2024-06-01"), Ok(date!(2024 - 06 - 01)));
        assert_eq!(parse_date(" 2024-06-01 "), Ok(date!(2024 - 06 - 01)));
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        for text in ["01/06/2024", "2024-06-31", "2024-06-01 00:00:00", ""] {
            assert_eq!(parse_date(text), Err(Error::InvalidDate(text.to_owned())));
        }
    }

    #[test]
    fn displays_as_year_and_zero_padded_month() {
        let month = YearMonth::from_date(date!(2024 - 06 - 15));

        assert_eq!(month.to_string(), "2024-06");
    }

    #[test]
    fn parses_display_string() {
        let month: YearMonth = "2024-11".parse().unwrap();

        assert_eq!(month, YearMonth::from_date(date!(2024 - 11 - 01)));
    }

    #[test]
    fn rejects_malformed_months() {
        for text in [
            "",
            "2024",
            "2024-13",
            "2024-00",
            "24-06",
            "2024-6",
            "June 2024",
            "+024-06",
            "2024-+6",
        ] {
            assert_eq!(
                text.parse::<YearMonth>(),
                Err(Error::InvalidMonth(text.to_owned())),
                "expected {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn orders_chronologically() {
        let mut months = vec![
            YearMonth::from_date(date!(2025 - 01 - 01)),
            YearMonth::from_date(date!(2024 - 12 - 31)),
            YearMonth::from_date(date!(2024 - 02 - 10)),
        ];

        months.sort();

        let labels: Vec<String> = months.iter().map(YearMonth::to_string).collect();
        assert_eq!(labels, vec!["2024-02", "2024-12", "2025-01"]);
    }

    #[test]
    fn contains_only_dates_in_the_same_month() {
        let june = YearMonth::from_date(date!(2024 - 06 - 01));

        assert!(june.contains(date!(2024 - 06 - 30)));
        assert!(!june.contains(date!(2024 - 07 - 01)));
        assert!(!june.contains(date!(2023 - 06 - 15)));
    }
}

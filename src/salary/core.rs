//! The salary entry model and the CSV file that stores salary entries.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::{
    Date, PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::{
    Error,
    month::{YearMonth, parse_date},
    store::{CsvEntry, CsvStore, read_records},
};

/// The salary entries stored in a CSV file, in the order they were added.
pub type SalaryStore = CsvStore<SalaryEntry>;

/// The format spreadsheet tools use when they save a pay date as a timestamp.
const DATE_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// The date a salary payment is credited.
///
/// Pay dates come from hand-edited files, so a pay date that cannot be parsed
/// is kept as text instead of failing the whole file.
#[derive(Debug, Clone, PartialEq)]
pub enum PayDate {
    /// A pay date that was parsed.
    Date(Date),
    /// The text of a pay date that could not be parsed.
    Unparsed(String),
}

impl PayDate {
    /// Parse a pay date in the format `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`.
    ///
    /// Text in any other format is kept verbatim as [PayDate::Unparsed].
    pub fn parse(text: &str) -> Self {
        if let Ok(date) = parse_date(text) {
            return PayDate::Date(date);
        }

        match PrimitiveDateTime::parse(text.trim(), DATE_TIME_FORMAT) {
            Ok(date_time) => PayDate::Date(date_time.date()),
            Err(_) => {
                tracing::warn!("could not parse the pay date \"{text}\", keeping it as text");
                PayDate::Unparsed(text.to_owned())
            }
        }
    }

    /// The parsed date, or `None` if the pay date could not be parsed.
    pub fn date(&self) -> Option<Date> {
        match self {
            PayDate::Date(date) => Some(*date),
            PayDate::Unparsed(_) => None,
        }
    }
}

impl Display for PayDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayDate::Date(date) => write!(f, "{date}"),
            PayDate::Unparsed(text) => write!(f, "{text}"),
        }
    }
}

/// A salary payment for a pay period.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryEntry {
    /// The first day of the pay period.
    pub start_date: Date,
    /// The last day of the pay period.
    pub end_date: Date,
    /// The amount paid for the period in dollars.
    pub salary: f64,
    /// The date the salary is credited.
    pub pay_date: PayDate,
}

impl SalaryEntry {
    /// Create a salary entry.
    ///
    /// # Errors
    /// Returns [Error::NegativeAmount] if `salary` is less than zero, or
    /// [Error::NonFiniteAmount] if `salary` is `NaN` or infinite.
    pub fn new(
        start_date: Date,
        end_date: Date,
        salary: f64,
        pay_date: Date,
    ) -> Result<Self, Error> {
        if !salary.is_finite() {
            return Err(Error::NonFiniteAmount(salary));
        }

        if salary < 0.0 {
            return Err(Error::NegativeAmount(salary));
        }

        Ok(Self {
            start_date,
            end_date,
            salary,
            pay_date: PayDate::Date(pay_date),
        })
    }

    /// The month the salary is credited in, or `None` if the pay date could
    /// not be parsed.
    pub fn pay_month(&self) -> Option<YearMonth> {
        self.pay_date.date().map(YearMonth::from_date)
    }

    /// The month the pay period starts in.
    pub fn start_month(&self) -> YearMonth {
        YearMonth::from_date(self.start_date)
    }
}

/// A row of the salary CSV file.
///
/// Older files do not have the pay date column.
#[derive(Debug, Serialize, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "Start Date")]
    start_date: String,
    #[serde(rename = "End Date")]
    end_date: String,
    #[serde(rename = "Salary")]
    salary: f64,
    #[serde(rename = "Pay Date", default)]
    pay_date: Option<String>,
}

impl SalaryRecord {
    fn is_missing_pay_date(&self) -> bool {
        self.pay_date
            .as_deref()
            .is_none_or(|pay_date| pay_date.trim().is_empty())
    }
}

impl CsvEntry for SalaryEntry {
    type Record = SalaryRecord;

    const HEADERS: &'static [&'static str] = &["Start Date", "End Date", "Salary", "Pay Date"];

    fn from_record(record: Self::Record) -> Result<Self, Error> {
        let end_date = parse_date(&record.end_date)?;
        let pay_date = if record.is_missing_pay_date() {
            PayDate::Date(end_date)
        } else {
            PayDate::parse(record.pay_date.as_deref().unwrap_or_default())
        };

        Ok(Self {
            start_date: parse_date(&record.start_date)?,
            end_date,
            salary: record.salary,
            pay_date,
        })
    }

    fn to_record(&self) -> Self::Record {
        SalaryRecord {
            start_date: self.start_date.to_string(),
            end_date: self.end_date.to_string(),
            salary: self.salary,
            pay_date: Some(self.pay_date.to_string()),
        }
    }

    fn missing_entry_error() -> Error {
        Error::DeleteMissingSalary
    }
}

impl CsvStore<SalaryEntry> {
    /// Write the pay date of every record that does not have one, using the
    /// record's end date.
    ///
    /// Loading a file never writes the derived pay dates back, so this is the
    /// only way older files gain the pay date column. The file is left
    /// untouched if no record needs a pay date.
    ///
    /// Returns the number of records that were given a pay date.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or written.
    pub fn migrate_pay_dates(&self) -> Result<usize, Error> {
        let records = read_records::<SalaryRecord>(self.path())?;
        let missing_count = records
            .iter()
            .filter(|record| record.is_missing_pay_date())
            .count();

        if missing_count == 0 {
            tracing::info!("{} already has a pay date for every record", self.path().display());
            return Ok(0);
        }

        let entries = records
            .into_iter()
            .map(SalaryEntry::from_record)
            .collect::<Result<Vec<_>, Error>>()?;
        self.save_all(&entries)?;

        tracing::info!(
            "added the pay date to {missing_count} records in {}",
            self.path().display()
        );

        Ok(missing_count)
    }
}

//! Calendar month arithmetic.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{Error, Result};

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Whether two dates fall in the same calendar month.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Inclusive date range covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthRange {
    /// The full month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            start: month_start(date),
            end: month_end(date),
        }
    }
}

/// Iterator over the first day of every month from `from`'s month through
/// `until`'s month, inclusive.
///
/// Iteration stops once a month start sorts after `until` in `YYYY-MM-DD`
/// form, which for `NaiveDate` is plain date order.
#[derive(Debug, Clone)]
pub struct MonthIter {
    cursor: Option<NaiveDate>,
    until: NaiveDate,
}

impl Iterator for MonthIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.cursor?;
        if current > self.until {
            self.cursor = None;
            return None;
        }
        self.cursor = current.checked_add_months(Months::new(1));
        Some(current)
    }
}

/// Enumerate month starts from `from` to `until`. Empty when `from` is in a
/// later month than `until`.
pub fn months_between(from: NaiveDate, until: NaiveDate) -> MonthIter {
    MonthIter {
        cursor: Some(month_start(from)),
        until,
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidDate(format!("'{}': {}", raw, e)))
}

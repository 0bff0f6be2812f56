use chrono::{Datelike, NaiveDate};
use crate::models::FieldType;
use crate::utils::MrzError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
    Birth,
    Expiry,
}

impl DateKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            DateKind::Birth => FieldType::DateOfBirth,
            DateKind::Expiry => FieldType::DateOfExpiry,
        }
    }
}

/// Resolves two-digit MRZ years against an injected "today".
pub struct DateValidator;

impl DateValidator {
    /// Parses a `YYMMDD` fragment.
    ///
    /// Birth years after the current two-digit year belong to the previous
    /// century. Expiry years at or beyond the current two-digit year plus 50
    /// belong to the previous century.
    pub fn parse(raw: &str, kind: DateKind, today: NaiveDate) -> Result<NaiveDate, MrzError> {
        let invalid = || MrzError::InvalidDate {
            field: kind.field_type(),
            value: raw.to_string(),
        };

        if raw.len() != 6 || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let parsed_year: i32 = raw[0..2].parse().map_err(|_| invalid())?;
        let month: u32 = raw[2..4].parse().map_err(|_| invalid())?;
        let day: u32 = raw[4..6].parse().map_err(|_| invalid())?;

        let current_century = today.year() / 100;
        let current_year = today.year() % 100;
        let previous_century = match kind {
            DateKind::Birth => parsed_year > current_year,
            DateKind::Expiry => parsed_year >= current_year + 50,
        };
        let century = if previous_century {
            current_century - 1
        } else {
            current_century
        };

        NaiveDate::from_ymd_opt(century * 100 + parsed_year, month, day).ok_or_else(invalid)
    }
}

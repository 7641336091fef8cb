//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The one recognized date format for input and output.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_SHAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date regex"));

/// A contact's birthday, parsed from a `DD.MM.YYYY` string.
///
/// The wrapped date is a naive calendar date: no time of day, no timezone.
/// Parsing is strict — two-digit day, two-digit month, four-digit year,
/// `.` separators, and the date must exist on the calendar.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("18.05.1980").unwrap();
/// assert_eq!(birthday.to_string(), "18.05.1980");
/// assert!(Birthday::new("32.01.2000").is_err());
/// assert!(Birthday::new("1980-05-18").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` on wrong shape (separator,
    /// component width or count, non-numeric parts) or an impossible
    /// calendar date such as `32.01.2000` or `01.13.2000`.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !DATE_SHAPE_REGEX.is_match(&raw) {
            return Err(ValidationError::InvalidDate(raw));
        }

        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidDate(raw)),
        }
    }

    /// Get the stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's occurrence in the given year: same month and day,
    /// year replaced.
    ///
    /// A 29 February birthday has no occurrence in a non-leap year; it is
    /// observed on 1 March instead.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        self.0.with_year(year).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 3, 1).expect("1 March exists in every year")
        })
    }

    /// This birthday's occurrence in the current local calendar year.
    ///
    /// Reads the clock at call time; nothing is cached.
    pub fn this_year(&self) -> NaiveDate {
        self.occurrence_in(Local::now().date_naive().year())
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - reproduces the input format
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

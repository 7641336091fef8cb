//! The address book: a name-keyed store of contact records.

use crate::domain::DATE_FORMAT;
use crate::models::Record;
use crate::scheduling::{self, UPCOMING_WINDOW_DAYS};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of the upcoming-birthdays query: who to congratulate and when.
///
/// `congratulation_date` is formatted `DD.MM.YYYY` and already carries the
/// weekend-to-Monday shift.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BirthdayReminder {
    /// The record's name
    pub name: String,

    /// The date the congratulation should fire, formatted `DD.MM.YYYY`
    pub congratulation_date: String,
}

/// An in-memory mapping from contact name to [`Record`].
///
/// Names are unique keys; adding a record under an existing name silently
/// replaces the previous one. Iteration follows insertion order so results
/// are deterministic. The book holds no lock and performs no I/O; a
/// concurrent host must serialize access itself.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // Insertion-ordered keys; an overwrite keeps the original position.
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name, replacing any record already
    /// stored under that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        tracing::debug!(name = %key, "Record stored");
        self.records.insert(key, record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            self.order.retain(|key| key != name);
            tracing::debug!(name = %name, "Record deleted");
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Records whose birthday falls within the next 7 days, evaluated
    /// against the current local date.
    pub fn upcoming_birthdays(&self) -> Vec<BirthdayReminder> {
        self.upcoming_birthdays_on(Local::now().date_naive())
    }

    /// Records whose birthday falls within the next 7 days of `today`,
    /// both ends inclusive.
    pub fn upcoming_birthdays_on(&self, today: NaiveDate) -> Vec<BirthdayReminder> {
        self.upcoming_within(today, UPCOMING_WINDOW_DAYS)
    }

    /// Records whose next birthday occurrence is between `today` and
    /// `today + window_days`, both ends inclusive.
    ///
    /// Records without a birthday are skipped. Weekend occurrences are
    /// reported on the following Monday. Results follow insertion order.
    pub fn upcoming_within(&self, today: NaiveDate, window_days: i64) -> Vec<BirthdayReminder> {
        let mut reminders = Vec::new();

        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let occurrence = scheduling::next_occurrence(birthday, today);
            let days_delta = (occurrence - today).num_days();
            if days_delta > window_days {
                continue;
            }

            let congratulation = scheduling::congratulation_date(occurrence);
            reminders.push(BirthdayReminder {
                name: record.name().as_str().to_string(),
                congratulation_date: congratulation.format(DATE_FORMAT).to_string(),
            });
        }

        tracing::info!(
            count = reminders.len(),
            window_days,
            "Upcoming birthdays computed"
        );
        reminders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhoneNumber;

    fn record_with_phone(name: &str, raw: &str) -> Record {
        let mut record = Record::new(name);
        record.add_phone(PhoneNumber::new(raw).unwrap());
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));

        let john = book.find("John").unwrap();
        assert_eq!(john.name().as_str(), "John");
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));
        book.add_record(record_with_phone("John", "5555555555"));

        assert_eq!(book.len(), 1);
        let john = book.find("John").unwrap();
        assert_eq!(john.phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn test_delete_removes_and_ignores_absent() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("John"));

        book.delete("John");
        assert!(book.find("John").is_none());
        assert!(book.is_empty());

        // deleting again is a no-op
        book.delete("John");
        assert!(book.is_empty());
    }

    #[test]
    fn test_find_mut_allows_in_place_edits() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));

        let john = book.find_mut("John").unwrap();
        john.edit_phone("1234567890", "1112223333").unwrap();

        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "1112223333");
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Charlie"));
        book.add_record(Record::new("Alice"));
        book.add_record(Record::new("Bob"));

        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Charlie", "Alice", "Bob"]);
    }

    #[test]
    fn test_overwrite_keeps_position_delete_and_readd_moves_to_end() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice"));
        book.add_record(Record::new("Bob"));

        // overwrite keeps Alice first
        book.add_record(record_with_phone("Alice", "1234567890"));
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);

        // delete + re-add appends
        book.delete("Alice");
        book.add_record(Record::new("Alice"));
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Bob", "Alice"]);
    }

    #[test]
    fn test_reminder_serialization() {
        let reminder = BirthdayReminder {
            name: "John".to_string(),
            congratulation_date: "17.06.2024".to_string(),
        };
        let json = serde_json::to_string(&reminder).unwrap();
        assert_eq!(
            json,
            "{\"name\":\"John\",\"congratulation_date\":\"17.06.2024\"}"
        );

        let back: BirthdayReminder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reminder);
    }
}

//! Passenger value held by a booked seat.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The occupant of a booked seat.
///
/// All fields are stored trimmed. A missing value is an empty string,
/// which is also what [`Passenger::default`] produces.
/// `date_of_birth` is an ISO `yyyy-MM-dd` string and is not parsed here;
/// see [`super::validation::is_valid_dob_iso`] for the clerk-facing rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Passenger {
    first_name: String,
    last_name: String,
    date_of_birth: String,
}

impl Passenger {
    pub fn new(
        first_name: impl AsRef<str>,
        last_name: impl AsRef<str>,
        date_of_birth: impl AsRef<str>,
    ) -> Self {
        Self {
            first_name: clean(first_name),
            last_name: clean(last_name),
            date_of_birth: clean(date_of_birth),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl AsRef<str>) {
        self.first_name = clean(first_name);
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl AsRef<str>) {
        self.last_name = clean(last_name);
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    pub fn set_date_of_birth(&mut self, date_of_birth: impl AsRef<str>) {
        self.date_of_birth = clean(date_of_birth);
    }

    /// First and last name joined by a space, skipping empty parts.
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (true, true) => String::new(),
            (true, false) => self.last_name.clone(),
            (false, true) => self.first_name.clone(),
            (false, false) => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

fn clean(value: impl AsRef<str>) -> String {
    value.as_ref().trim().to_string()
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passenger{{{}, dob={}}}", self.full_name(), self.date_of_birth)
    }
}

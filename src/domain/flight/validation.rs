//! Clerk-facing input rules.
//!
//! These are stricter than the entity invariants: an entity only needs
//! non-blank identifiers, while a clerk typing a new flight or passenger
//! must follow the house formats below.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Largest number of rows a new flight may span.
pub const MAX_ROWS_PER_FLIGHT: i64 = 200;

/// Largest number of seat letters per row.
pub const MAX_SEAT_LETTERS: usize = 10;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}[\p{L}'\- ]*$").expect("name pattern is valid"));

static DOB_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

static FLIGHT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("flight id pattern is valid"));

static FLIGHT_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^NU[0-9]{1,4}$").expect("flight number pattern is valid"));

/// Letters, spaces, hyphens and apostrophes, starting with a letter.
/// Surrounding whitespace is ignored.
pub fn is_valid_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && NAME_PATTERN.is_match(name)
}

/// `yyyy-MM-dd`, a real calendar date, not in the future.
pub fn is_valid_dob_iso(date_of_birth: &str) -> bool {
    if !DOB_PATTERN.is_match(date_of_birth) {
        return false;
    }
    match NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d") {
        Ok(date) => date <= Local::now().date_naive(),
        Err(_) => false,
    }
}

/// Letters, digits and dashes, e.g. "F003" or "INTL-01".
pub fn is_valid_flight_id(flight_id: &str) -> bool {
    FLIGHT_ID_PATTERN.is_match(flight_id.trim())
}

/// "NU" followed by one to four digits, e.g. "NU310".
pub fn is_valid_flight_number(flight_number: &str) -> bool {
    FLIGHT_NUMBER_PATTERN.is_match(flight_number.trim())
}

/// Start at row 1 or later, end on or after start, at most
/// [`MAX_ROWS_PER_FLIGHT`] rows.
pub fn is_valid_row_range(start_row: i64, end_row: i64) -> bool {
    start_row >= 1 && end_row >= start_row && end_row - start_row + 1 <= MAX_ROWS_PER_FLIGHT
}

/// Parse a seat letter string such as "ABCDEF".
///
/// Returns the upper-cased letters in input order, or an empty list if
/// the input is blank, longer than [`MAX_SEAT_LETTERS`], contains anything
/// other than ASCII letters, or repeats a letter.
pub fn parse_seat_letters_unique(letters: &str) -> Vec<char> {
    let letters = letters.trim();
    if letters.is_empty() || letters.chars().count() > MAX_SEAT_LETTERS {
        return Vec::new();
    }

    let mut parsed: Vec<char> = Vec::with_capacity(letters.len());
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Vec::new();
        }
        let upper = c.to_ascii_uppercase();
        if parsed.contains(&upper) {
            return Vec::new();
        }
        parsed.push(upper);
    }
    parsed
}

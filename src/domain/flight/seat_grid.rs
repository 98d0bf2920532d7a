//! Seat grid layout used to create a flight's seats.
//!
//! A grid is a contiguous row range crossed with a list of seat letters.
//! Every (row, letter) pair yields one seat numbered `{row}{LETTER}`.

use super::Seat;
use crate::domain::foundation::ValidationError;

/// Maximum number of seats a single flight may be created with.
pub const MAX_SEATS_PER_FLIGHT: u64 = 5000;

/// Validated row range and seat letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    start_row: u32,
    end_row: u32,
    letters: Vec<char>,
}

impl SeatGrid {
    /// Validate a grid.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `start_row` is 0
    /// - `InvalidFormat` if `end_row` is before `start_row`
    /// - `EmptyField` if no letters are given
    /// - `InvalidFormat` if a letter is outside A-Z (either case)
    /// - `OutOfRange` if the grid exceeds [`MAX_SEATS_PER_FLIGHT`]
    pub fn new(start_row: u32, end_row: u32, letters: &[char]) -> Result<Self, ValidationError> {
        if start_row < 1 {
            return Err(ValidationError::out_of_range(
                "start_row",
                1,
                i64::from(u32::MAX),
                i64::from(start_row),
            ));
        }
        if end_row < start_row {
            return Err(ValidationError::invalid_format(
                "end_row",
                format!("row {} comes before start row {}", end_row, start_row),
            ));
        }
        if letters.is_empty() {
            return Err(ValidationError::empty_field("seat_letters"));
        }
        if let Some(bad) = letters.iter().find(|c| !c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "seat_letters",
                format!("'{}' is not a letter A-Z", bad),
            ));
        }

        let seat_count = u64::from(end_row - start_row + 1) * letters.len() as u64;
        if seat_count > MAX_SEATS_PER_FLIGHT {
            return Err(ValidationError::out_of_range(
                "seat_count",
                1,
                MAX_SEATS_PER_FLIGHT as i64,
                i64::try_from(seat_count).unwrap_or(i64::MAX),
            ));
        }

        Ok(Self {
            start_row,
            end_row,
            letters: letters.to_vec(),
        })
    }

    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn seat_count(&self) -> usize {
        (self.end_row - self.start_row + 1) as usize * self.letters.len()
    }

    /// Available seats, row by row, letters in the given order.
    pub fn build_seats(&self) -> Vec<Seat> {
        layout_seats(self.start_row, self.end_row, &self.letters)
    }
}

/// Lay out seats without validating the grid. Rows are inclusive.
pub(crate) fn layout_seats(start_row: u32, end_row: u32, letters: &[char]) -> Vec<Seat> {
    (start_row..=end_row)
        .flat_map(|row| {
            letters.iter().map(move |letter| {
                Seat::reconstitute(format!("{}{}", row, letter.to_uppercase()), None)
            })
        })
        .collect()
}

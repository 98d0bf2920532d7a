//! Flat-file codec for the flight collection.
//!
//! One line per seat, comma separated:
//!
//! ```text
//! # flightId,flightNumber,seatNumber,status,firstName,lastName,dateOfBirth
//! F001,NU100,1A,AVAILABLE,,,
//! F001,NU100,1B,BOOKED,John,Doe,1990-01-01
//! ```
//!
//! Fields are not escaped, so a comma inside a name corrupts its row.

use std::collections::HashMap;
use std::str::FromStr;

use tracing::warn;

use crate::domain::flight::{layout_seats, Flight, Passenger, Seat};
use crate::domain::foundation::{normalized_key, SeatStatus};

/// Field separator.
pub const DELIMITER: char = ',';

/// Header written as the first line of every file.
pub const HEADER: &str = "# flightId,flightNumber,seatNumber,status,firstName,lastName,dateOfBirth";

/// Fields a seat row must have.
pub const COLUMN_COUNT: usize = 7;

/// Decode file contents into flights.
///
/// Blank lines, `#` comments and malformed rows are skipped. Rows are
/// grouped by flight id (ignoring case) in first-seen order, and the
/// flight number of the first row seen for a flight wins.
pub fn decode(contents: &str) -> Vec<Flight> {
    let mut flights: Vec<Flight> = Vec::new();
    let mut index_by_id: HashMap<String, usize> = HashMap::new();

    for (line_no, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let row = match SeatRow::parse(line) {
            Ok(row) => row,
            Err(reason) => {
                warn!(line = line_no + 1, %reason, "Skipping malformed row: {}", line);
                continue;
            }
        };

        let key = normalized_key(&row.flight_id);
        let index = match index_by_id.get(&key) {
            Some(&index) => index,
            None => match Flight::new(row.flight_id, row.flight_number) {
                Ok(flight) => {
                    flights.push(flight);
                    index_by_id.insert(key, flights.len() - 1);
                    flights.len() - 1
                }
                Err(err) => {
                    warn!(line = line_no + 1, error = %err, "Skipping row with invalid flight");
                    continue;
                }
            },
        };
        flights[index].add_seat(row.seat);
    }

    flights
}

/// Encode flights, header first, then one row per seat in stored order.
pub fn encode(flights: &[Flight]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + flights.len() * 64);
    out.push_str(HEADER);
    out.push('\n');

    for flight in flights {
        for seat in flight.seats() {
            let (first, last, dob) = match seat.passenger() {
                Some(p) => (p.first_name(), p.last_name(), p.date_of_birth()),
                None => ("", "", ""),
            };
            let fields = [
                flight.id(),
                flight.flight_number(),
                seat.seat_number(),
                seat.status().as_str(),
                first,
                last,
                dob,
            ];
            out.push_str(&fields.join(&DELIMITER.to_string()));
            out.push('\n');
        }
    }

    out
}

/// The dataset used whenever no usable file exists.
///
/// - `F001` / `NU100`: rows 1-5, seats A-F (30 seats)
/// - `F002` / `NU245`: rows 1-4, seats A-D (16 seats)
pub fn default_flights() -> Vec<Flight> {
    vec![
        Flight::reconstitute(
            "F001".to_string(),
            "NU100".to_string(),
            layout_seats(1, 5, &['A', 'B', 'C', 'D', 'E', 'F']),
        ),
        Flight::reconstitute(
            "F002".to_string(),
            "NU245".to_string(),
            layout_seats(1, 4, &['A', 'B', 'C', 'D']),
        ),
    ]
}

/// One decoded seat row.
struct SeatRow {
    flight_id: String,
    flight_number: String,
    seat: Seat,
}

impl SeatRow {
    fn parse(line: &str) -> Result<Self, String> {
        let cols: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
        if cols.len() < COLUMN_COUNT {
            return Err(format!(
                "expected {} fields, found {}",
                COLUMN_COUNT,
                cols.len()
            ));
        }

        let (flight_id, flight_number, seat_number) = (cols[0], cols[1], cols[2]);
        if flight_id.is_empty() || flight_number.is_empty() || seat_number.is_empty() {
            return Err("flight id, flight number and seat number are required".to_string());
        }

        let status = SeatStatus::from_str(cols[3]).map_err(|e| e.to_string())?;
        let passenger = match status {
            SeatStatus::Booked => Some(Passenger::new(cols[4], cols[5], cols[6])),
            SeatStatus::Available => None,
        };
        let seat = Seat::with_passenger(seat_number, passenger).map_err(|e| e.to_string())?;

        Ok(Self {
            flight_id: flight_id.to_string(),
            flight_number: flight_number.to_string(),
            seat,
        })
    }
}

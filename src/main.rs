use std::error::Error;
use std::sync::Arc;

use serde_json::json;
use tracing::info;

use seat_booking::adapters::FileFlightStorage;
use seat_booking::application::FlightRepository;
use seat_booking::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init();

    let storage = Arc::new(FileFlightStorage::new(config.storage.path()));
    let repository = FlightRepository::open(storage).await;

    info!(path = %config.storage.path().display(), "Seat booking ready");

    for flight in repository.list_flights().await {
        if config.logging.is_json() {
            let summary = json!({
                "id": flight.id(),
                "flight_number": flight.flight_number(),
                "seats": flight.seat_count(),
                "booked": flight.booked_count(),
                "available": flight.available_count(),
            });
            println!("{}", summary);
        } else {
            println!(
                "{} {:<7} {:>4} seats  {:>4} booked  {:>4} available",
                flight.id(),
                flight.flight_number(),
                flight.seat_count(),
                flight.booked_count(),
                flight.available_count(),
            );
        }
    }

    Ok(())
}

use std::sync::Arc;

use chrono::NaiveDate;
use rand::Rng;
use vcasky_shared::{CabinClass, FlightClass, LegacyFlight};

use crate::airports::AirportDirectory;
use crate::curated::curated_flights;

const AIRLINES: [&str; 4] = ["TAM", "GOL", "AZUL", "Avianca"];
const DEPARTURE_MINUTES: [u32; 4] = [0, 15, 30, 45];
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Synthesized batch size bounds, inclusive.
pub const MIN_GENERATED: usize = 3;
pub const MAX_GENERATED: usize = 8;

/// Flight candidates for a route: curated flights when the exact direction
/// is known, synthesized ones otherwise.
pub struct FlightCatalog {
    directory: Arc<AirportDirectory>,
    curated: Vec<LegacyFlight>,
}

impl FlightCatalog {
    pub fn new(directory: Arc<AirportDirectory>) -> Self {
        let curated = curated_flights(&directory);
        Self { directory, curated }
    }

    /// Catalog with a custom curated table (empty disables curation).
    pub fn with_curated(directory: Arc<AirportDirectory>, curated: Vec<LegacyFlight>) -> Self {
        Self { directory, curated }
    }

    pub fn directory(&self) -> &AirportDirectory {
        &self.directory
    }

    /// Candidate flights from `origin_code` to `destination_code`.
    ///
    /// Unknown codes yield an empty list. Curated flights are returned as-is
    /// and ignore `date`; synthesized flights draw every random value from
    /// `rng`, so a seeded generator gives reproducible batches.
    pub fn flights_for_route<R: Rng + ?Sized>(
        &self,
        origin_code: &str,
        destination_code: &str,
        date: NaiveDate,
        rng: &mut R,
    ) -> Vec<LegacyFlight> {
        let (Some(origin), Some(destination)) = (
            self.directory.lookup(origin_code),
            self.directory.lookup(destination_code),
        ) else {
            tracing::debug!(origin_code, destination_code, "Route has an unknown airport");
            return Vec::new();
        };

        if origin.code == destination.code {
            return Vec::new();
        }

        let curated: Vec<LegacyFlight> = self
            .curated
            .iter()
            .filter(|f| f.origin.code == origin.code && f.destination.code == destination.code)
            .cloned()
            .collect();

        if !curated.is_empty() {
            tracing::debug!(
                origin = %origin.code,
                destination = %destination.code,
                count = curated.len(),
                "Serving curated flights"
            );
            return curated;
        }

        let count = rng.gen_range(MIN_GENERATED..=MAX_GENERATED);
        tracing::debug!(
            origin = %origin.code,
            destination = %destination.code,
            %date,
            count,
            "Synthesizing flights"
        );

        (0..count)
            .map(|index| {
                let airline = AIRLINES[rng.gen_range(0..AIRLINES.len())];
                let hour = rng.gen_range(0..24u32);
                let minute = DEPARTURE_MINUTES[rng.gen_range(0..DEPARTURE_MINUTES.len())];
                let duration = rng.gen_range(90..390u32);
                let class = CabinClass::ALL[rng.gen_range(0..CabinClass::ALL.len())];
                let base_price = rng.gen_range(200..1700u32);
                let available_seats = rng.gen_range(10..110u32);
                let suffix = rng.gen_range(1000..=9999u32);

                let prefix: String = airline.chars().take(2).collect::<String>().to_uppercase();

                LegacyFlight {
                    id: format!("generated-{}-{}-{}", origin.code, destination.code, index),
                    airline: airline.to_string(),
                    flight_number: format!("{}{}", prefix, suffix),
                    origin: origin.clone(),
                    destination: destination.clone(),
                    departure_time: clock_time(hour * 60 + minute),
                    arrival_time: clock_time(hour * 60 + minute + duration),
                    duration,
                    price: f64::from(base_price) + class.surcharge(),
                    class: FlightClass::from(class),
                    available_seats,
                }
            })
            .collect()
    }
}

/// `HH:MM` for a minute offset, wrapping past midnight without a day marker.
pub fn clock_time(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

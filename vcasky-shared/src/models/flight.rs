use serde::{Deserialize, Serialize};

use super::airport::Airport;
use super::cabin::FlightClass;

/// Operating carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baggage {
    pub carry: String,
    pub checked: String,
}

/// Extra itinerary data only the provider path knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDetails {
    pub aircraft: String,
    pub departure_date: String,
    pub arrival_date: String,
    pub stops: u32,
    pub baggage: Baggage,
    pub amenities: Vec<String>,
    pub booking_url: String,
    /// Grams of CO2 reported for this itinerary.
    pub carbon_emissions: u64,
}

/// Canonical flight shape returned by every search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub airline: Airline,
    pub flight_number: String,
    pub origin: Airport,
    pub destination: Airport,
    /// `HH:MM`, arrival may carry a `+1` day-rollover suffix.
    pub departure_time: String,
    pub arrival_time: String,
    /// Minutes.
    pub duration: u32,
    pub price: f64,
    pub class: FlightClass,
    pub available_seats: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<ItineraryDetails>,
}

/// Flat shape used by the curated table and the generator, where the
/// airline is only known by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyFlight {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub origin: Airport,
    pub destination: Airport,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: u32,
    pub price: f64,
    pub class: FlightClass,
    pub available_seats: u32,
}

/// A flight as handed over by a data source, before it is resolved into
/// the canonical [`Flight`]. Resolution happens exactly once, at the
/// search boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FlightRecord {
    Legacy(LegacyFlight),
    Canonical(Flight),
}

impl FlightRecord {
    pub fn into_flight(self) -> Flight {
        match self {
            FlightRecord::Legacy(legacy) => legacy.into(),
            FlightRecord::Canonical(flight) => flight,
        }
    }
}

impl From<LegacyFlight> for Flight {
    fn from(legacy: LegacyFlight) -> Self {
        // Carrier designator is the flight number prefix (JJ3021 -> JJ, G31045 -> G3).
        let code: String = legacy.flight_number.chars().take(2).collect();
        Self {
            id: legacy.id,
            airline: Airline {
                code,
                name: legacy.airline,
                logo: None,
            },
            flight_number: legacy.flight_number,
            origin: legacy.origin,
            destination: legacy.destination,
            departure_time: legacy.departure_time,
            arrival_time: legacy.arrival_time,
            duration: legacy.duration,
            price: legacy.price,
            class: legacy.class,
            available_seats: legacy.available_seats,
            itinerary: None,
        }
    }
}

impl From<LegacyFlight> for FlightRecord {
    fn from(legacy: LegacyFlight) -> Self {
        FlightRecord::Legacy(legacy)
    }
}

impl From<Flight> for FlightRecord {
    fn from(flight: Flight) -> Self {
        FlightRecord::Canonical(flight)
    }
}

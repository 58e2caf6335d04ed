use vcasky_shared::{CabinClass, LegacyFlight};

use crate::airports::AirportDirectory;

struct CuratedRoute {
    id: &'static str,
    airline: &'static str,
    flight_number: &'static str,
    origin: &'static str,
    destination: &'static str,
    departure_time: &'static str,
    arrival_time: &'static str,
    duration: u32,
    price: f64,
    class: CabinClass,
    available_seats: u32,
}

const CURATED_ROUTES: &[CuratedRoute] = &[
    // GRU -> GIG
    CuratedRoute { id: "1", airline: "TAM", flight_number: "JJ3021", origin: "GRU", destination: "GIG", departure_time: "08:00", arrival_time: "09:30", duration: 90, price: 350.0, class: CabinClass::Economy, available_seats: 45 },
    CuratedRoute { id: "2", airline: "GOL", flight_number: "G31045", origin: "GRU", destination: "GIG", departure_time: "10:15", arrival_time: "11:45", duration: 90, price: 320.0, class: CabinClass::Economy, available_seats: 32 },
    CuratedRoute { id: "3", airline: "AZUL", flight_number: "AD4578", origin: "GRU", destination: "GIG", departure_time: "14:30", arrival_time: "16:00", duration: 90, price: 450.0, class: CabinClass::PremiumEconomy, available_seats: 28 },
    CuratedRoute { id: "4", airline: "TAM", flight_number: "JJ3045", origin: "GRU", destination: "GIG", departure_time: "18:20", arrival_time: "19:50", duration: 90, price: 580.0, class: CabinClass::Business, available_seats: 12 },
    // GIG -> GRU
    CuratedRoute { id: "5", airline: "GOL", flight_number: "G31046", origin: "GIG", destination: "GRU", departure_time: "07:45", arrival_time: "09:15", duration: 90, price: 340.0, class: CabinClass::Economy, available_seats: 38 },
    CuratedRoute { id: "6", airline: "AZUL", flight_number: "AD4579", origin: "GIG", destination: "GRU", departure_time: "12:00", arrival_time: "13:30", duration: 90, price: 380.0, class: CabinClass::Economy, available_seats: 25 },
    // BSB -> GRU
    CuratedRoute { id: "7", airline: "TAM", flight_number: "JJ3102", origin: "BSB", destination: "GRU", departure_time: "09:30", arrival_time: "11:15", duration: 105, price: 420.0, class: CabinClass::Economy, available_seats: 42 },
    CuratedRoute { id: "8", airline: "GOL", flight_number: "G31120", origin: "BSB", destination: "GRU", departure_time: "16:45", arrival_time: "18:30", duration: 105, price: 390.0, class: CabinClass::Economy, available_seats: 35 },
    // International
    CuratedRoute { id: "9", airline: "TAM", flight_number: "JJ8001", origin: "GRU", destination: "JFK", departure_time: "23:30", arrival_time: "07:15+1", duration: 585, price: 2800.0, class: CabinClass::Economy, available_seats: 85 },
    CuratedRoute { id: "10", airline: "American Airlines", flight_number: "AA963", origin: "GRU", destination: "MIA", departure_time: "01:15", arrival_time: "07:45", duration: 510, price: 2400.0, class: CabinClass::Economy, available_seats: 76 },
];

/// Materializes the curated routes against `directory`.
///
/// Routes whose airports are not listed in the directory are left out.
pub fn curated_flights(directory: &AirportDirectory) -> Vec<LegacyFlight> {
    CURATED_ROUTES
        .iter()
        .filter_map(|route| {
            let origin = directory.lookup(route.origin)?.clone();
            let destination = directory.lookup(route.destination)?.clone();
            Some(LegacyFlight {
                id: route.id.to_string(),
                airline: route.airline.to_string(),
                flight_number: route.flight_number.to_string(),
                origin,
                destination,
                departure_time: route.departure_time.to_string(),
                arrival_time: route.arrival_time.to_string(),
                duration: route.duration,
                price: route.price,
                class: route.class.into(),
                available_seats: route.available_seats,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcasky_shared::Airport;

    #[test]
    fn test_builtin_directory_resolves_every_route() {
        let flights = curated_flights(&AirportDirectory::builtin());
        assert_eq!(flights.len(), CURATED_ROUTES.len());
        assert!(flights.iter().all(|f| f.origin.code != f.destination.code));
    }

    #[test]
    fn test_ids_are_unique() {
        let flights = curated_flights(&AirportDirectory::builtin());
        let mut ids: Vec<&str> = flights.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), flights.len());
    }

    #[test]
    fn test_unlisted_airports_are_skipped() {
        let directory = AirportDirectory::from_airports(vec![
            Airport::new("GRU", "Guarulhos", "São Paulo", "Brasil"),
            Airport::new("GIG", "Galeão", "Rio de Janeiro", "Brasil"),
        ]);
        let flights = curated_flights(&directory);
        assert_eq!(flights.len(), 6);
    }
}

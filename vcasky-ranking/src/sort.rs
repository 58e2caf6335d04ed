use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vcasky_shared::Flight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    DurationAsc,
    DurationDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::DurationAsc,
        SortKey::DurationDesc,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::DurationAsc => "duration-asc",
            SortKey::DurationDesc => "duration-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Mais barato",
            SortKey::PriceDesc => "Mais caro",
            SortKey::DurationAsc => "Mais rápido",
            SortKey::DurationDesc => "Mais demorado",
        }
    }

    fn compare(&self, a: &Flight, b: &Flight) -> Ordering {
        match self {
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::DurationAsc => a.duration.cmp(&b.duration),
            SortKey::DurationDesc => b.duration.cmp(&a.duration),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .iter()
            .copied()
            .find(|key| key.key() == s)
            .ok_or_else(|| format!("unknown sort key: {}", s))
    }
}

/// Stable sort into a new vector; the input is left untouched.
pub fn sort_flights_by(flights: &[Flight], key: SortKey) -> Vec<Flight> {
    let mut sorted = flights.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

/// Like [`sort_flights_by`], but takes the raw key. Unrecognized keys
/// return the flights in their original order.
pub fn sort_flights(flights: &[Flight], key: &str) -> Vec<Flight> {
    match key.parse::<SortKey>() {
        Ok(key) => sort_flights_by(flights, key),
        Err(_) => flights.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcasky_shared::{Airline, Airport, CabinClass};

    fn flight(id: &str, price: f64, duration: u32) -> Flight {
        Flight {
            id: id.to_string(),
            airline: Airline {
                code: "G3".into(),
                name: "GOL".into(),
                logo: None,
            },
            flight_number: format!("G3{}", id),
            origin: Airport::new("GRU", "Guarulhos", "São Paulo", "Brasil"),
            destination: Airport::new("SSA", "Salvador", "Salvador", "Brasil"),
            departure_time: "08:00".into(),
            arrival_time: "10:20".into(),
            duration,
            price,
            class: CabinClass::Economy.into(),
            available_seats: 20,
            itinerary: None,
        }
    }

    fn fixture() -> Vec<Flight> {
        vec![
            flight("a", 450.0, 140),
            flight("b", 320.0, 200),
            flight("c", 450.0, 95),
            flight("d", 1200.5, 140),
            flight("e", 99.9, 310),
        ]
    }

    fn ids(flights: &[Flight]) -> Vec<&str> {
        flights.iter().map(|f| f.id.as_str()).collect()
    }

    fn prices(flights: &[Flight]) -> Vec<f64> {
        flights.iter().map(|f| f.price).collect()
    }

    #[test]
    fn test_price_ordering_is_stable() {
        let flights = fixture();
        assert_eq!(ids(&sort_flights(&flights, "price-asc")), vec!["e", "b", "a", "c", "d"]);
        assert_eq!(ids(&sort_flights(&flights, "price-desc")), vec!["d", "a", "c", "b", "e"]);
    }

    #[test]
    fn test_duration_ordering_is_stable() {
        let flights = fixture();
        assert_eq!(ids(&sort_flights(&flights, "duration-asc")), vec!["c", "a", "d", "b", "e"]);
        assert_eq!(ids(&sort_flights(&flights, "duration-desc")), vec!["e", "b", "a", "d", "c"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let flights = fixture();
        for key in SortKey::ALL {
            let once = sort_flights_by(&flights, key);
            let twice = sort_flights_by(&once, key);
            assert_eq!(once, twice, "{} is not idempotent", key);
        }
    }

    #[test]
    fn test_reversed_ascending_matches_descending_prices() {
        let flights = fixture();
        let mut reversed = prices(&sort_flights_by(&flights, SortKey::PriceAsc));
        reversed.reverse();
        assert_eq!(reversed, prices(&sort_flights_by(&flights, SortKey::PriceDesc)));
    }

    #[test]
    fn test_unknown_key_keeps_input_order() {
        let flights = fixture();
        assert_eq!(sort_flights(&flights, "cheapest"), flights);
        assert_eq!(sort_flights(&flights, ""), flights);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let flights = fixture();
        let before = flights.clone();
        let _ = sort_flights(&flights, "price-asc");
        assert_eq!(flights, before);
    }

    #[test]
    fn test_sort_key_serde_uses_kebab_case() {
        let key: SortKey = serde_json::from_str("\"duration-desc\"").unwrap();
        assert_eq!(key, SortKey::DurationDesc);
        assert_eq!(serde_json::to_string(&SortKey::PriceAsc).unwrap(), "\"price-asc\"");
    }
}

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use vcasky_catalog::AirportDirectory;
use vcasky_shared::{Airline, Airport, Baggage, CabinClass, Flight, ItineraryDetails};

const UNKNOWN_AIRLINE: &str = "Unknown Airline";
const UNKNOWN_AIRCRAFT: &str = "Unknown";
const PLACEHOLDER_FLIGHT_NUMBER: &str = "XX000";
const CARRY_ON: &str = "1 bagagem de mão";
const CHECKED_INCLUDED: &str = "1 bagagem despachada";
const CHECKED_NOT_INCLUDED: &str = "Não inclusa";

static NULL: Value = Value::Null;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningIssue {
    /// Field absent or of the wrong type; a placeholder was used.
    Missing,
    /// Airport code not in the directory; built from provider fields.
    UnlistedAirport(String),
}

/// A field that could not be taken verbatim from a provider entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationWarning {
    /// Position of the entry in `best_flights` followed by `other_flights`.
    pub entry: usize,
    pub field: &'static str,
    pub issue: WarningIssue,
}

impl fmt::Display for NormalizationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.issue {
            WarningIssue::Missing => {
                write!(f, "entry {}: `{}` missing, placeholder used", self.entry, self.field)
            }
            WarningIssue::UnlistedAirport(code) => write!(
                f,
                "entry {}: `{}` airport {} not in directory",
                self.entry, self.field, code
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct Normalized {
    pub flights: Vec<Flight>,
    pub warnings: Vec<NormalizationWarning>,
}

/// Maps the flight-data provider's payload onto the canonical [`Flight`].
///
/// Never fails: malformed entries degrade field by field and each
/// substitution is reported as a [`NormalizationWarning`].
pub struct FlightNormalizer {
    directory: Arc<AirportDirectory>,
}

impl FlightNormalizer {
    pub fn new(directory: Arc<AirportDirectory>) -> Self {
        Self { directory }
    }

    /// Normalizes `best_flights` followed by `other_flights`.
    pub fn normalize(&self, payload: &Value) -> Normalized {
        let entries = ["best_flights", "other_flights"]
            .iter()
            .filter_map(|key| payload[*key].as_array())
            .flatten();

        let mut normalized = Normalized::default();
        for (index, entry) in entries.enumerate() {
            let (flight, warnings) = self.normalize_entry(index, entry);
            normalized.flights.push(flight);
            normalized.warnings.extend(warnings);
        }
        normalized
    }

    pub fn normalize_entry(&self, index: usize, entry: &Value) -> (Flight, Vec<NormalizationWarning>) {
        let mut reader = EntryReader {
            entry: index,
            warnings: Vec::new(),
        };

        let legs: &[Value] = match entry["flights"].as_array() {
            Some(legs) if !legs.is_empty() => legs,
            _ => {
                reader.missing("flights");
                &[]
            }
        };
        let first = legs.first().unwrap_or(&NULL);
        let last = legs.last().unwrap_or(&NULL);

        let flight_number = reader.string(&first["flight_number"], "flight_number", PLACEHOLDER_FLIGHT_NUMBER);
        let id = entry["flight_id"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}_{}", flight_number, index));

        let airline = Airline {
            code: carrier_code(&flight_number),
            name: reader.string(&first["airline"], "airline", UNKNOWN_AIRLINE),
            logo: first["airline_logo"]
                .as_str()
                .or_else(|| entry["airline_logo"].as_str())
                .filter(|logo| !logo.is_empty())
                .map(str::to_string),
        };

        let origin = self.airport(&mut reader, &first["departure_airport"], "departure_airport");
        let destination = self.airport(&mut reader, &last["arrival_airport"], "arrival_airport");

        let (departure_date, departure_time) =
            split_timestamp(&reader.string(&first["departure_airport"]["time"], "departure_time", ""));
        let (arrival_date, arrival_time) =
            split_timestamp(&reader.string(&last["arrival_airport"]["time"], "arrival_time", ""));

        let duration = reader.count(&entry["total_duration"], "total_duration");
        let price = match entry["price"].as_f64() {
            Some(price) if price.is_finite() && price >= 0.0 => price,
            _ => {
                reader.missing("price");
                0.0
            }
        };

        let extensions = strings(&entry["extensions"]);
        let checked = if extensions.iter().any(|e| e.to_lowercase().contains("baggage")) {
            CHECKED_INCLUDED
        } else {
            CHECKED_NOT_INCLUDED
        };

        let itinerary = ItineraryDetails {
            aircraft: reader.string(&first["airplane"], "airplane", UNKNOWN_AIRCRAFT),
            departure_date,
            arrival_date,
            stops: legs.len().saturating_sub(1) as u32,
            baggage: Baggage {
                carry: CARRY_ON.to_string(),
                checked: checked.to_string(),
            },
            amenities: strings(&first["extensions"]),
            booking_url: entry["booking_link"].as_str().unwrap_or_default().to_string(),
            carbon_emissions: entry["carbon_emissions"]["this_flight"].as_u64().unwrap_or(0),
        };

        let flight = Flight {
            id,
            airline,
            flight_number,
            origin,
            destination,
            departure_time,
            arrival_time,
            duration,
            price,
            // Provider does not report the cabin reliably
            class: CabinClass::Economy.into(),
            available_seats: 0,
            itinerary: Some(itinerary),
        };

        (flight, reader.warnings)
    }

    fn airport(&self, reader: &mut EntryReader, node: &Value, field: &'static str) -> Airport {
        let code = reader.string(&node["id"], field, "");
        if let Some(airport) = self.directory.lookup(&code) {
            return airport.clone();
        }

        if !code.is_empty() {
            reader.warnings.push(NormalizationWarning {
                entry: reader.entry,
                field,
                issue: WarningIssue::UnlistedAirport(code.clone()),
            });
        }

        let name = node["name"].as_str().unwrap_or_default().to_string();
        Airport {
            code,
            city: name.clone(),
            name,
            country: String::new(),
        }
    }
}

struct EntryReader {
    entry: usize,
    warnings: Vec<NormalizationWarning>,
}

impl EntryReader {
    fn missing(&mut self, field: &'static str) {
        self.warnings.push(NormalizationWarning {
            entry: self.entry,
            field,
            issue: WarningIssue::Missing,
        });
    }

    fn string(&mut self, value: &Value, field: &'static str, default: &str) -> String {
        match value.as_str() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => {
                self.missing(field);
                default.to_string()
            }
        }
    }

    fn count(&mut self, value: &Value, field: &'static str) -> u32 {
        match value.as_u64() {
            Some(n) => u32::try_from(n).unwrap_or(u32::MAX),
            None => {
                self.missing(field);
                0
            }
        }
    }
}

/// Splits `"2025-02-15 08:30"` into date and clock time. A bare time has
/// no date.
fn split_timestamp(raw: &str) -> (String, String) {
    match raw.trim().rsplit_once(' ') {
        Some((date, time)) => (date.trim().to_string(), time.to_string()),
        None => (String::new(), raw.trim().to_string()),
    }
}

/// Carrier designator from a flight number: `"LA 3456"` -> `"LA"`,
/// `"G31045"` -> `"G3"`.
fn carrier_code(flight_number: &str) -> String {
    match flight_number.split_once(char::is_whitespace) {
        Some((prefix, _)) => prefix.to_string(),
        None => flight_number.chars().take(2).collect(),
    }
}

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalizer() -> FlightNormalizer {
        FlightNormalizer::new(Arc::new(AirportDirectory::builtin()))
    }

    fn payload() -> Value {
        json!({
            "search_metadata": { "status": "Success" },
            "best_flights": [
                {
                    "flights": [
                        {
                            "departure_airport": { "name": "Guarulhos", "id": "GRU", "time": "2025-02-15 06:10" },
                            "arrival_airport": { "name": "Brasília", "id": "BSB", "time": "2025-02-15 07:50" },
                            "duration": 100,
                            "airplane": "Airbus A320",
                            "airline": "LATAM",
                            "airline_logo": "https://example.test/LA.png",
                            "flight_number": "LA 3456",
                            "extensions": ["Average legroom (76 cm)", "Wi-Fi for a fee"]
                        },
                        {
                            "departure_airport": { "name": "Brasília", "id": "BSB", "time": "2025-02-15 09:00" },
                            "arrival_airport": { "name": "Manaus", "id": "MAO", "time": "2025-02-15 11:40" },
                            "duration": 220,
                            "airplane": "Airbus A321",
                            "airline": "LATAM",
                            "flight_number": "LA 3890"
                        }
                    ],
                    "total_duration": 390,
                    "carbon_emissions": { "this_flight": 187000 },
                    "price": 1432,
                    "extensions": ["Checked baggage for a fee"],
                    "booking_link": "https://example.test/book/1"
                }
            ],
            "other_flights": [
                {
                    "flights": [
                        {
                            "departure_airport": { "name": "Guarulhos", "id": "GRU", "time": "2025-02-15 13:25" },
                            "arrival_airport": { "name": "Cuiabá", "id": "CGB", "time": "2025-02-15 15:05" },
                            "airplane": "Boeing 737",
                            "airline": "GOL",
                            "flight_number": "G3 1402"
                        }
                    ],
                    "total_duration": 160,
                    "price": 689.5
                },
                {}
            ]
        })
    }

    #[test]
    fn test_best_then_other_flights() {
        let normalized = normalizer().normalize(&payload());
        assert_eq!(normalized.flights.len(), 3);
        assert_eq!(normalized.flights[0].flight_number, "LA 3456");
        assert_eq!(normalized.flights[1].flight_number, "G3 1402");
    }

    #[test]
    fn test_multi_leg_itinerary_uses_first_and_last_leg() {
        let normalized = normalizer().normalize(&payload());
        let flight = &normalized.flights[0];

        assert_eq!(flight.id, "LA 3456_0");
        assert_eq!(flight.airline.code, "LA");
        assert_eq!(flight.airline.name, "LATAM");
        assert_eq!(flight.airline.logo.as_deref(), Some("https://example.test/LA.png"));
        assert_eq!(flight.origin.code, "GRU");
        assert_eq!(flight.origin.city, "São Paulo");
        assert_eq!(flight.destination.code, "MAO");
        assert_eq!(flight.departure_time, "06:10");
        assert_eq!(flight.arrival_time, "11:40");
        assert_eq!(flight.duration, 390);
        assert_eq!(flight.price, 1432.0);
        assert_eq!(flight.class.kind, CabinClass::Economy);

        let itinerary = flight.itinerary.as_ref().unwrap();
        assert_eq!(itinerary.stops, 1);
        assert_eq!(itinerary.aircraft, "Airbus A320");
        assert_eq!(itinerary.departure_date, "2025-02-15");
        assert_eq!(itinerary.baggage.checked, CHECKED_INCLUDED);
        assert_eq!(itinerary.amenities.len(), 2);
        assert_eq!(itinerary.booking_url, "https://example.test/book/1");
        assert_eq!(itinerary.carbon_emissions, 187000);
    }

    #[test]
    fn test_well_formed_entry_has_no_warnings() {
        let normalized = normalizer().normalize(&payload());
        assert!(normalized.warnings.iter().all(|w| w.entry != 0));
    }

    #[test]
    fn test_unlisted_airport_falls_back_to_provider_fields() {
        let normalized = normalizer().normalize(&payload());
        let flight = &normalized.flights[1];

        assert_eq!(flight.destination.code, "CGB");
        assert_eq!(flight.destination.name, "Cuiabá");
        assert_eq!(flight.destination.city, "Cuiabá");
        assert_eq!(flight.itinerary.as_ref().unwrap().baggage.checked, CHECKED_NOT_INCLUDED);
        assert_eq!(flight.itinerary.as_ref().unwrap().stops, 0);
        assert!(normalized.warnings.contains(&NormalizationWarning {
            entry: 1,
            field: "arrival_airport",
            issue: WarningIssue::UnlistedAirport("CGB".to_string()),
        }));
    }

    #[test]
    fn test_empty_entry_degrades_to_placeholders() {
        let (flight, warnings) = normalizer().normalize_entry(2, &json!({}));

        assert_eq!(flight.id, "XX000_2");
        assert_eq!(flight.airline.name, UNKNOWN_AIRLINE);
        assert_eq!(flight.airline.code, "XX");
        assert_eq!(flight.origin.code, "");
        assert_eq!(flight.duration, 0);
        assert_eq!(flight.price, 0.0);
        assert_eq!(flight.itinerary.as_ref().unwrap().aircraft, UNKNOWN_AIRCRAFT);
        assert_eq!(flight.itinerary.as_ref().unwrap().stops, 0);

        let fields: Vec<&str> = warnings.iter().map(|w| w.field).collect();
        for expected in ["flights", "flight_number", "airline", "departure_airport", "arrival_airport", "total_duration", "price", "airplane"] {
            assert!(fields.contains(&expected), "no warning for {}", expected);
        }
        assert!(warnings.iter().all(|w| w.issue == WarningIssue::Missing));
    }

    #[test]
    fn test_wrong_types_are_treated_as_missing() {
        let entry = json!({
            "flights": "not-a-list",
            "price": "R$ 500",
            "total_duration": -5
        });
        let (flight, warnings) = normalizer().normalize_entry(0, &entry);
        assert_eq!(flight.price, 0.0);
        assert_eq!(flight.duration, 0);
        assert!(warnings.iter().any(|w| w.field == "price"));
        assert!(warnings.iter().any(|w| w.field == "total_duration"));
    }

    #[test]
    fn test_payload_without_results() {
        let normalized = normalizer().normalize(&json!({ "error": "nothing" }));
        assert!(normalized.flights.is_empty());
        assert!(normalized.warnings.is_empty());
    }

    #[test]
    fn test_helpers() {
        assert_eq!(split_timestamp("2025-02-15 08:30"), ("2025-02-15".into(), "08:30".into()));
        assert_eq!(split_timestamp("08:30"), (String::new(), "08:30".into()));
        assert_eq!(carrier_code("AD 4578"), "AD");
        assert_eq!(carrier_code("G31045"), "G3");
    }

    #[test]
    fn test_warning_display() {
        let warning = NormalizationWarning {
            entry: 4,
            field: "price",
            issue: WarningIssue::Missing,
        };
        assert_eq!(warning.to_string(), "entry 4: `price` missing, placeholder used");
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cabin::CabinClass;
use super::flight::Flight;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_round_trip: bool,
    #[serde(default)]
    pub class: Option<CabinClass>,
}

impl SearchRequest {
    pub fn one_way(origin: &str, destination: &str, departure_date: NaiveDate) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date,
            return_date: None,
            is_round_trip: false,
            class: None,
        }
    }

    pub fn round_trip(
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
        return_date: NaiveDate,
    ) -> Self {
        Self {
            return_date: Some(return_date),
            is_round_trip: true,
            ..Self::one_way(origin, destination, departure_date)
        }
    }

    pub fn with_class(mut self, class: CabinClass) -> Self {
        self.class = Some(class);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub outbound_flights: Vec<Flight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_flights: Option<Vec<Flight>>,
    pub total_results: usize,
}

impl SearchResponse {
    pub fn new(outbound_flights: Vec<Flight>, return_flights: Option<Vec<Flight>>) -> Self {
        let total_results =
            outbound_flights.len() + return_flights.as_ref().map_or(0, |flights| flights.len());
        Self {
            outbound_flights,
            return_flights,
            total_results,
        }
    }
}

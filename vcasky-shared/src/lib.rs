pub mod models;
pub mod pii;

pub use models::airport::Airport;
pub use models::cabin::{CabinClass, FlightClass};
pub use models::flight::{Airline, Baggage, Flight, FlightRecord, ItineraryDetails, LegacyFlight};
pub use models::search::{SearchRequest, SearchResponse};
pub use pii::Masked;

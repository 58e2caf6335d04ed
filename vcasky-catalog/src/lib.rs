pub mod airports;
pub mod curated;
pub mod generator;

pub use airports::AirportDirectory;
pub use generator::FlightCatalog;

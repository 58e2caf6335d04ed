pub mod app_config;
pub mod normalizer;
pub mod serpapi;

pub use app_config::Config;
pub use normalizer::{FlightNormalizer, NormalizationWarning, Normalized, WarningIssue};
pub use serpapi::{SerpApiClient, SerpApiFlightSource};

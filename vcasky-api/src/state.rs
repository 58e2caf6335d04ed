use std::sync::Arc;
use std::time::Duration;

use vcasky_catalog::{AirportDirectory, FlightCatalog};
use vcasky_core::{CoreResult, DataSourceMode, FlightSource, GeneratedFlightSource, SearchService};
use vcasky_provider::{Config, FlightNormalizer, SerpApiClient, SerpApiFlightSource};

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<AirportDirectory>,
    pub search: Arc<SearchService>,
}

impl AppState {
    pub fn new(directory: Arc<AirportDirectory>, search: SearchService) -> Self {
        Self {
            directory,
            search: Arc::new(search),
        }
    }

    /// Wires the directory and the configured flight source.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let directory = Arc::new(AirportDirectory::builtin());

        let source: Arc<dyn FlightSource> = match config.search.data_source {
            DataSourceMode::Generator => {
                let catalog = FlightCatalog::new(directory.clone());
                let latency = Duration::from_millis(config.search.simulated_latency_ms);
                let generated = match config.search.seed {
                    Some(seed) => GeneratedFlightSource::with_seed(catalog, seed, latency),
                    None => GeneratedFlightSource::new(catalog, latency),
                };
                Arc::new(generated)
            }
            DataSourceMode::Provider => {
                if config.provider.credential().is_none() {
                    tracing::warn!("Provider mode without an API key, searches will be rejected");
                }
                let client = SerpApiClient::new(&config.provider)?;
                Arc::new(SerpApiFlightSource::new(
                    client,
                    FlightNormalizer::new(directory.clone()),
                ))
            }
        };

        let search = SearchService::new(directory.clone(), source);
        Ok(Self::new(directory, search))
    }
}

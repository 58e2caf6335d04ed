use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use vcasky_catalog::FlightCatalog;
use vcasky_shared::{Airport, CabinClass, FlightRecord};

use crate::{CoreError, CoreResult};

/// Where search results come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceMode {
    /// Curated and locally synthesized flights.
    Generator,
    /// Third-party flight-data API.
    Provider,
}

/// One directional leg to fetch, with both airports already resolved.
#[derive(Debug, Clone)]
pub struct LegQuery {
    pub origin: Airport,
    pub destination: Airport,
    pub date: NaiveDate,
    /// Set on the outbound leg of a round trip.
    pub return_date: Option<NaiveDate>,
    pub class: Option<CabinClass>,
}

/// Backend that produces candidate flights for a leg.
#[async_trait]
pub trait FlightSource: Send + Sync {
    fn mode(&self) -> DataSourceMode;

    /// Whether the source can answer the reverse leg of a round trip.
    fn serves_return_leg(&self) -> bool;

    async fn fetch_leg(&self, query: &LegQuery) -> CoreResult<Vec<FlightRecord>>;
}

/// Generator-mode source: curated/synthesized flights plus a fixed delay
/// that stands in for network latency.
pub struct GeneratedFlightSource {
    catalog: FlightCatalog,
    rng: Mutex<StdRng>,
    latency: Duration,
}

impl GeneratedFlightSource {
    pub fn new(catalog: FlightCatalog, latency: Duration) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy(), latency)
    }

    pub fn with_seed(catalog: FlightCatalog, seed: u64, latency: Duration) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed), latency)
    }

    pub fn with_rng(catalog: FlightCatalog, rng: StdRng, latency: Duration) -> Self {
        Self {
            catalog,
            rng: Mutex::new(rng),
            latency,
        }
    }
}

#[async_trait]
impl FlightSource for GeneratedFlightSource {
    fn mode(&self) -> DataSourceMode {
        DataSourceMode::Generator
    }

    fn serves_return_leg(&self) -> bool {
        true
    }

    async fn fetch_leg(&self, query: &LegQuery) -> CoreResult<Vec<FlightRecord>> {
        let flights = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| CoreError::InternalError("flight generator lock poisoned".into()))?;
            self.catalog.flights_for_route(
                &query.origin.code,
                &query.destination.code,
                query.date,
                &mut *rng,
            )
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(flights.into_iter().map(FlightRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vcasky_catalog::AirportDirectory;

    fn query(origin: &str, destination: &str) -> LegQuery {
        let directory = AirportDirectory::builtin();
        LegQuery {
            origin: directory.lookup(origin).unwrap().clone(),
            destination: directory.lookup(destination).unwrap().clone(),
            date: NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
            return_date: None,
            class: None,
        }
    }

    fn source(seed: u64) -> GeneratedFlightSource {
        let catalog = FlightCatalog::new(Arc::new(AirportDirectory::builtin()));
        GeneratedFlightSource::with_seed(catalog, seed, Duration::ZERO)
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let mode: DataSourceMode = serde_json::from_str("\"provider\"").unwrap();
        assert_eq!(mode, DataSourceMode::Provider);
    }

    #[tokio::test]
    async fn test_generated_source_hands_out_legacy_records() {
        let records = source(9).fetch_leg(&query("GRU", "GIG")).await.unwrap();
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| matches!(r, FlightRecord::Legacy(_))));
    }

    #[tokio::test]
    async fn test_seeded_sources_agree() {
        let a = source(11).fetch_leg(&query("SSA", "CWB")).await.unwrap();
        let b = source(11).fetch_leg(&query("SSA", "CWB")).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency_is_applied() {
        let catalog = FlightCatalog::new(Arc::new(AirportDirectory::builtin()));
        let source = GeneratedFlightSource::with_seed(catalog, 1, Duration::from_millis(800));
        let started = tokio::time::Instant::now();
        source.fetch_leg(&query("GRU", "GIG")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(800));
    }
}

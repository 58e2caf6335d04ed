use std::sync::Arc;

use vcasky_catalog::AirportDirectory;
use vcasky_shared::{Airport, Flight, SearchRequest, SearchResponse};

use crate::source::{DataSourceMode, FlightSource, LegQuery};
use crate::{CoreError, CoreResult};

/// Search orchestrator: validates a request, resolves airports, fetches
/// each leg from the configured source and assembles the response.
///
/// Holds no mutable state of its own; concurrent searches never interact.
pub struct SearchService {
    directory: Arc<AirportDirectory>,
    source: Arc<dyn FlightSource>,
}

impl SearchService {
    pub fn new(directory: Arc<AirportDirectory>, source: Arc<dyn FlightSource>) -> Self {
        Self { directory, source }
    }

    pub fn mode(&self) -> DataSourceMode {
        self.source.mode()
    }

    pub async fn search(&self, request: &SearchRequest) -> CoreResult<SearchResponse> {
        validate(request)?;

        let origin = self.resolve(&request.origin)?;
        let destination = self.resolve(&request.destination)?;

        if origin.code == destination.code {
            return Err(CoreError::ValidationError(
                "origin and destination must differ".into(),
            ));
        }

        let outbound_query = LegQuery {
            origin: origin.clone(),
            destination: destination.clone(),
            date: request.departure_date,
            return_date: request.return_date.filter(|_| request.is_round_trip),
            class: request.class,
        };
        let outbound_flights = self.fetch_filtered(&outbound_query).await?;

        // Provider mode only ever answers the outbound leg.
        let return_flights = match request.return_date {
            Some(return_date) if request.is_round_trip && self.source.serves_return_leg() => {
                let return_query = LegQuery {
                    origin: destination,
                    destination: origin,
                    date: return_date,
                    return_date: None,
                    class: request.class,
                };
                Some(self.fetch_filtered(&return_query).await?)
            }
            _ => None,
        };

        let response = SearchResponse::new(outbound_flights, return_flights);
        tracing::info!(
            origin = %request.origin,
            destination = %request.destination,
            mode = ?self.source.mode(),
            total_results = response.total_results,
            "Search completed"
        );
        Ok(response)
    }

    fn resolve(&self, code: &str) -> CoreResult<Airport> {
        self.directory
            .lookup(code)
            .cloned()
            .ok_or_else(|| CoreError::ResolutionError(code.to_string()))
    }

    async fn fetch_filtered(&self, query: &LegQuery) -> CoreResult<Vec<Flight>> {
        let records = self.source.fetch_leg(query).await?;

        Ok(records
            .into_iter()
            .map(|record| record.into_flight())
            .filter(|flight| query.class.map_or(true, |class| flight.class.kind == class))
            .collect())
    }
}

fn validate(request: &SearchRequest) -> CoreResult<()> {
    if !request.is_round_trip {
        return Ok(());
    }

    match request.return_date {
        None => Err(CoreError::ValidationError(
            "return_date is required for a round trip".into(),
        )),
        Some(return_date) if return_date < request.departure_date => {
            Err(CoreError::ValidationError(format!(
                "return_date {} is earlier than departure_date {}",
                return_date, request.departure_date
            )))
        }
        Some(_) => Ok(()),
    }
}

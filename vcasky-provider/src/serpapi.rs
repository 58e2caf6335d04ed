use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use vcasky_core::{CoreError, CoreResult, DataSourceMode, FlightSource, LegQuery};
use vcasky_shared::{FlightRecord, Masked};

use crate::app_config::ProviderConfig;
use crate::normalizer::FlightNormalizer;

const ENGINE: &str = "google_flights";
const ROUND_TRIP: &str = "1";
const ONE_WAY: &str = "2";

/// HTTP client for the SerpApi Google Flights engine.
pub struct SerpApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<Masked<String>>,
    currency: String,
    country: String,
    language: String,
}

impl SerpApiClient {
    pub fn new(config: &ProviderConfig) -> CoreResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("vcasky/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| CoreError::ConfigurationError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.credential().cloned(),
            currency: config.currency.clone(),
            country: config.country.clone(),
            language: config.language.clone(),
        })
    }

    /// Query string for `query`. Fails when no credential is configured.
    pub fn request_params(&self, query: &LegQuery) -> CoreResult<Vec<(&'static str, String)>> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            CoreError::ConfigurationError("flight provider API key is not configured".into())
        })?;

        let round_trip = query.return_date.is_some();
        let mut params = vec![
            ("engine", ENGINE.to_string()),
            ("api_key", api_key.expose().clone()),
            ("departure_id", query.origin.code.clone()),
            ("arrival_id", query.destination.code.clone()),
            ("outbound_date", query.date.to_string()),
            ("type", if round_trip { ROUND_TRIP } else { ONE_WAY }.to_string()),
            ("currency", self.currency.clone()),
            ("gl", self.country.clone()),
            ("hl", self.language.clone()),
        ];

        if let Some(return_date) = query.return_date {
            params.push(("return_date", return_date.to_string()));
        }
        if let Some(class) = query.class {
            params.push(("travel_class", class.provider_code().to_string()));
        }

        Ok(params)
    }

    /// Raw provider payload for `query`.
    pub async fn search(&self, query: &LegQuery) -> CoreResult<Value> {
        let params = self.request_params(query)?;
        let url = reqwest::Url::parse_with_params(&self.base_url, &params).map_err(|e| {
            CoreError::ConfigurationError(format!("invalid provider base_url: {}", e))
        })?;

        let response = self.http.get(url).send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, "Flight provider returned a non-success status");
            return Err(CoreError::TransportError {
                cause: format!("provider responded with {}", status),
            });
        }

        let payload: Value = response.json().await.map_err(transport_error)?;

        if let Some(message) = payload["error"].as_str() {
            tracing::error!(message, "Flight provider reported an error");
            return Err(CoreError::TransportError {
                cause: format!("provider error: {}", message),
            });
        }

        Ok(payload)
    }
}

fn transport_error(err: reqwest::Error) -> CoreError {
    // The request URL carries the API key
    let err = err.without_url();
    tracing::error!(error = %err, "Flight provider request failed");
    CoreError::TransportError {
        cause: err.to_string(),
    }
}

/// Provider-mode source. Answers the outbound leg only.
pub struct SerpApiFlightSource {
    client: SerpApiClient,
    normalizer: FlightNormalizer,
}

impl SerpApiFlightSource {
    pub fn new(client: SerpApiClient, normalizer: FlightNormalizer) -> Self {
        Self { client, normalizer }
    }
}

#[async_trait]
impl FlightSource for SerpApiFlightSource {
    fn mode(&self) -> DataSourceMode {
        DataSourceMode::Provider
    }

    fn serves_return_leg(&self) -> bool {
        false
    }

    async fn fetch_leg(&self, query: &LegQuery) -> CoreResult<Vec<FlightRecord>> {
        let payload = self.client.search(query).await?;
        let normalized = self.normalizer.normalize(&payload);

        for warning in &normalized.warnings {
            tracing::warn!(%warning, "Degraded provider flight entry");
        }
        tracing::debug!(
            flights = normalized.flights.len(),
            warnings = normalized.warnings.len(),
            "Normalized provider payload"
        );

        Ok(normalized.flights.into_iter().map(FlightRecord::from).collect())
    }
}

pub mod search;
pub mod session;
pub mod source;

pub use search::SearchService;
pub use session::{SearchSession, SearchTicket};
pub use source::{DataSourceMode, FlightSource, GeneratedFlightSource, LegQuery};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Airport not found: {0}")]
    ResolutionError(String),
    /// `cause` is for logs only; callers see the generic message.
    #[error("Flight search is unavailable right now, please try again")]
    TransportError { cause: String },
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

pub mod format;
pub mod options;
pub mod sort;

pub use format::{format_duration, format_price};
pub use options::{class_options, sort_options, SelectOption};
pub use sort::{sort_flights, sort_flights_by, SortKey};

pub mod airport;
pub mod cabin;
pub mod flight;
pub mod search;

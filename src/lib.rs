use errors::Error;

pub mod connection;
pub mod domain;
pub mod errors;
pub mod form;
pub mod notify;
pub mod telemetry;
pub mod view;

/// Result alias used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

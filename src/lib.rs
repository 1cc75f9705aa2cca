//! # SIRENE Establishment Watch Library
//!
//! Fetches newly registered food & beverage establishments from the
//! French SIRENE registry API, authenticating with an OAuth2
//! client-credentials token that is cached until the server rejects it.
//!
//! Modules:
//! - `config` — environment-derived settings
//! - `client` — token acquisition and the search call
//! - `parser` — lenient response-to-record parsing
//! - `resilience` — retry policy for transport failures

pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod model;
pub mod parser;
pub mod resilience;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use crate::client::sirene::SireneClient;
pub use crate::config::settings::{Environment, Settings};
pub use crate::error::Error;
pub use crate::model::establishment::Establishment;
pub use crate::parser::response::parse_response;
pub use crate::resilience::retry::RetryPolicy;

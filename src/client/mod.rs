//! Client side of the probe service: the HTTP client and the status page
//! model it feeds.

pub mod api;
pub mod status;

pub use api::{ApiClient, API_URL_VAR, DEFAULT_API_URL};
pub use status::{DbTicket, StatusBoard};

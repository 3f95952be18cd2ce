//! Client for the funds REST API.
//!
//! [ApiClient] performs the HTTP calls, while [clients], [funds] and
//! [transactions] expose one function per endpoint. The functions return the
//! decoded response body as is and propagate every failure unchanged.

mod client;
pub mod clients;
pub mod funds;
pub mod transactions;

pub use client::{ApiClient, ApiError};

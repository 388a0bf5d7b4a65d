//! Service Desk REST API Server Library
//!
//! Provides the web API for the service desk ticket tracker, enabling
//! clients to browse customers and employees and to drive the ticket
//! lifecycle.

pub mod routes;

// Re-export for convenience
pub use routes::create_routes;

//! Lunchmate backend: weekly lunch schedules shared between friends.
//!
//! The crate follows a hexagonal layout. [`domain`] holds the model, the
//! services, and the ports; [`inbound`] and [`outbound`] adapt HTTP and
//! storage to those ports; [`server`] wires everything into an Actix app.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

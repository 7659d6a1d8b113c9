//! Library record services.
//!
//! Three independent HTTP services share this crate: a book store, a member store and an order
//! store. Each binary in `src/bin` wires one of them up. The order service additionally serves
//! enriched order views by calling the other two services over HTTP.
//!
//! - [`model`] holds the JSON data transfer objects exchanged over the wire
//! - [`server`] holds the backend layers (controller, service, data) and infrastructure

pub mod model;
pub mod server;

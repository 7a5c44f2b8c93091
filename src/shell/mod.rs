// Composition root for the shipment mock API.
//
// Responsibilities
// - Read config from environment.
// - Build the fixture store once and hand it to the use case handlers.
// - Expose the HTTP router and serve it.

pub mod config;
pub mod http;
pub mod state;

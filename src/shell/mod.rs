// Composition root for the dog information service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the seeded in-memory stores once and share them through AppState.
// - Wire use case inbound handlers into the HTTP router.

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod state;

// Composition root for the employees service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the store and seed it.
// - Wire the store into the HTTP router.

pub mod config;
pub mod http;
pub mod seed;
pub mod state;

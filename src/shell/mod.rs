// Composition root for the expenses service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory store and wire it into the HTTP handlers.

pub mod config;
pub mod http;
pub mod state;

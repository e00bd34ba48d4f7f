// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the store and identity adapters.
// - Wire them into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod session;
pub mod state;

// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the concrete adapters and wire them into the use case handlers.
// - Resolve the calling client's session from its bearer token.
// - Expose the REST routes and the GraphQL schema over one axum router.

pub mod caller;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

//! HTTP front end for hosts that call the resolver over the network.

mod routes;
mod state;

pub use routes::create_router;
pub use state::{AppState, HttpResolver};

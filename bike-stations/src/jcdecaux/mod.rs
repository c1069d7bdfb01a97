//! JCDecaux bike-sharing API client.
//!
//! The VLS v1 API exposes, per contract (city), the full station listing
//! and the live state of each station: open or closed, bikes available and
//! free stands. Authentication is an `apiKey` query parameter.

mod client;
mod error;
mod types;

pub use client::{JcDecauxClient, JcDecauxConfig};
pub use error::ProviderError;
pub use types::StationDto;

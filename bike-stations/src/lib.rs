//! Nearest bike-sharing station resolver.
//!
//! Answers "what is the state of the bike stations closest to this
//! address?" with a sentence ready to be spoken by a voice assistant:
//! the address is geocoded, the cached station directory ranked by
//! distance, and the live status of the closest stations fetched from the
//! operator's API.

pub mod aggregate;
pub mod directory;
pub mod domain;
pub mod geocoding;
pub mod jcdecaux;
pub mod nearest;
pub mod pipeline;
pub mod speech;
pub mod web;

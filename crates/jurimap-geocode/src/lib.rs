//! Geocoder adapter: resolves a free-text location string to a single
//! best-match [`jurimap_core::SearchOrigin`] via a Nominatim-style search
//! endpoint.

mod client;
mod error;
mod types;

pub use client::GeocodeClient;
pub use error::GeocodeError;
pub use types::GeocodeMatch;

//! Presentational building blocks for the hotel dashboard.
//!
//! Components carry their own stylesheet and know nothing about routing,
//! authentication or the REST API.

pub mod components;

pub use components::*;

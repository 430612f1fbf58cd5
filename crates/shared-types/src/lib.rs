pub mod auth;
pub mod common;
pub mod config;
pub mod error;
pub mod hotel;

// View resolution: which dashboard mode a route belongs to.
pub mod detection;
pub mod route_table;
pub mod view;
pub mod view_store;

pub use auth::*;
pub use common::*;
pub use config::*;
pub use error::*;
pub use hotel::*;

pub use detection::*;
pub use route_table::*;
pub use view::*;
pub use view_store::*;

pub use client::GeocodeClient;
pub use error::GeocodeError;

pub mod client;
pub mod error;
pub mod extract;
pub mod models;
pub mod query;
pub mod suburb;

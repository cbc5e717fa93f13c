pub mod district;
pub mod error;

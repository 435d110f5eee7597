pub mod client;

// Public API exports
pub use client::{ApiError, Client};

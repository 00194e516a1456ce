pub mod client;
pub mod dto;
pub mod mapper;
pub mod retry;

pub use client::{CatalogProvider, JikanClient, Season};
pub use retry::{Backoff, RetryPolicy};

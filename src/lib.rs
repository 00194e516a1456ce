pub mod config;
pub mod dataset;
pub mod jikan;
pub mod pipeline;
pub mod shared;

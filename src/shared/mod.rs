pub mod errors;
pub mod utils;

pub use utils::RateLimiter;

mod cache;
mod client;
mod documents;
mod validation;

pub use cache::{CacheStats, QueryCache};
pub use client::{ClientError, UserClient};
pub use documents::*;
pub use validation::validate_create_input;

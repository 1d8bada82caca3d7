//! Domain entities - the core business objects.

mod document;
mod policy;

pub use document::{Description, Document, Product};
pub use policy::{RateLimitPolicy, TimeUnit};

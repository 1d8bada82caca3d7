//! # CRPT Shared
//!
//! Wire types exchanged with the CRPT document registry.
//! Kept free of domain logic so any client of the registry can reuse them.

pub mod dto;
pub mod response;

pub use dto::DocumentEnvelope;
pub use response::DocumentCreated;

//! # CRPT Core
//!
//! The domain layer of the CRPT submission client: the document model,
//! the rate-limit policy, the ports that infrastructure implements, and
//! the submission pipeline that ties them together.
//! This crate performs no I/O of its own.

pub mod domain;
pub mod error;
pub mod ports;
pub mod submission;

pub use error::{DomainError, SubmitError};
pub use submission::SubmissionPipeline;

//! Document encoders.

mod json;

pub use json::JsonDocumentEncoder;

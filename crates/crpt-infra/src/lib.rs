//! # CRPT Infrastructure
//!
//! Concrete implementations of the ports defined in `crpt-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network adapters
//! - `http` - Registry transport via reqwest

pub mod clock;
pub mod encoding;
pub mod rate_limit;

#[cfg(feature = "http")]
pub mod transport;

pub use clock::{ManualClock, SystemClock};
pub use encoding::JsonDocumentEncoder;
pub use rate_limit::{FixedWindowGate, WindowSnapshot};

#[cfg(feature = "http")]
pub use transport::{HttpTransportConfig, ReqwestTransport};

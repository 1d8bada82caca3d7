//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod encoder;
mod rate_limit;
mod transport;

pub use clock::Clock;
pub use encoder::{DocumentEncoder, EncodeError};
pub use rate_limit::{AdmissionGate, Decision};
pub use transport::{RegistryRequest, RegistryResponse, RegistryTransport, TransportError};

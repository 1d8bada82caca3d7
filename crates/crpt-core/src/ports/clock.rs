use std::time::Instant;

/// Source of monotonic time, injectable so window logic can be tested
/// deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

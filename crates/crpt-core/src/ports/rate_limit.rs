//! Admission port.

/// Outcome of a single admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Rejected,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

/// Admission gate - decides whether one submission attempt may proceed.
///
/// Implementations are shared between any number of threads and must answer
/// immediately: a rejection is reported, never waited out.
pub trait AdmissionGate: Send + Sync {
    /// Consume one admission decision.
    fn try_admit(&self) -> Decision;
}

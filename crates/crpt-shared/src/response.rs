//! Response bodies returned by the registry.

use serde::{Deserialize, Serialize};

/// Success body of `POST /documents/send`: the id assigned to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCreated {
    pub value: String,
}

impl DocumentCreated {
    /// Best-effort parse of a raw success body.
    ///
    /// Returns `None` when the registry answered with something other than
    /// the documented shape; callers should fall back to the raw body.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

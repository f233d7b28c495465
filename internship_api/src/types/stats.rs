use serde::{Deserialize, Serialize};

/// Dashboard counters returned by `/applications/stats`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplicationStats {
    pub total_applications: u64,
    /// Applications still `pending` or `in_review`.
    pub pending_review: u64,
    pub accepted: u64,
    pub rejected: u64,
    /// Applications created in the last seven days.
    pub new_this_week: u64,
}

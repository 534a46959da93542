//! Heal operation results.

use serde::{Deserialize, Serialize};

/// Outcome of healing a single object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealObjectResult {
    /// Number of offline disks that were healed.
    pub offline_disks_healed: usize,
    /// Number of corrupted disks that were healed.
    pub corrupted_disks_healed: usize,
}

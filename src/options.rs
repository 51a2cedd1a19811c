use serde::{Deserialize, Serialize};

/// Knobs for a reconstruction run.
///
/// Deserializes from any serde format with missing keys taking their defaults, so host
/// applications can embed it in their own configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructOptions {
    /// Fabricate the missing half of a match whose predecessor only forwards its winner.
    /// When disabled, every unpaired record fails with `UnresolvableMatch`.
    pub fabricate_siblings: bool,
    /// Added to planning and `wn` numbers of fabricated records. Must exceed every planning
    /// number of the export.
    pub synthetic_planning_offset: u32,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            fabricate_siblings: true,
            synthetic_planning_offset: 1_000_000,
        }
    }
}

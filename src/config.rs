//! Engine configuration.
//!
//! JavaScript may pass a partial object: every missing field falls back to
//! its default, so `{ layout: { totalWidth: 800 } }` is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::layout::LevelOrderConfig;
use crate::spatial::PlacementConfig;

/// All tunable constants of the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeConfig {
    /// Provisional placement of inserted nodes.
    pub placement: PlacementConfig,
    /// Full level-order layout.
    pub layout: LevelOrderConfig,
}

impl TreeConfig {
    /// Check every section.
    pub fn validate(&self) -> Result<(), TreeError> {
        self.placement.validate()?;
        self.layout.validate()
    }
}

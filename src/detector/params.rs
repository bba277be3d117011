//! Parameter types configuring the structure scan.
//!
//! Every threshold is a ratio of the skeleton size. The defaults are the
//! values existing chain files were produced with; changing them changes
//! which splits are accepted.

use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Minimum |x| of a limb branch center, as a fraction of the size.
    pub lateral_ratio: f32,
    /// Maximum |x| of a midline bone center, as a fraction of the size.
    pub midline_ratio: f32,
    /// Case-insensitive substring marking the head bone on the midline.
    pub head_token: String,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            lateral_ratio: 0.1,
            midline_ratio: 0.01,
            head_token: "head".to_string(),
        }
    }
}

impl DetectorParams {
    /// Absolute lateral threshold for a skeleton of the given size.
    pub fn lateral_limit(&self, size: f32) -> f32 {
        self.lateral_ratio * size
    }

    /// Absolute midline half-width for a skeleton of the given size.
    pub fn midline_limit(&self, size: f32) -> f32 {
        self.midline_ratio * size
    }
}

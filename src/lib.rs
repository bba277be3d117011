#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod mapping;
pub mod retarget;
pub mod skeleton;
pub mod types;

// Building blocks of the scan, public for tools and tests.
pub mod chains;
pub mod config;
pub mod fingers;
pub mod geometry;
pub mod split;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{detect_structure, DetectorParams, StructureDetector};
pub use crate::diagnostics::DetectionReport;
pub use crate::error::{Result, RigError};
pub use crate::mapping::RetargetMapping;
pub use crate::retarget::{plan_retarget, RetargetPlan};
pub use crate::skeleton::{Bone, BoneId, Skeleton};
pub use crate::types::{Chain, ChainKey, NamedChain, Side, StructureMap};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use rig_structure::prelude::*;
///
/// let skeleton = Skeleton::builder("stick")
///     .bone("Hips", [0.0, 0.0, 1.0], [0.0, 0.0, 1.1], None)
///     .bone("Head", [0.0, 0.0, 1.1], [0.0, 0.0, 1.3], Some("Hips"))
///     .size(0.5)
///     .build()
///     .unwrap();
/// let map = StructureDetector::new(DetectorParams::default()).detect(&skeleton);
/// assert_eq!(map.names(&skeleton, ChainKey::Head), ["Head"]);
/// ```
pub mod prelude {
    pub use crate::{ChainKey, DetectorParams, Skeleton, StructureDetector, StructureMap};
}

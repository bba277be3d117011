//! Structure detector mapping an unlabeled bone tree onto the fixed humanoid
//! chain taxonomy.
//!
//! Overview
//! - Locates the root: the first parentless bone in declaration order.
//! - Walks the Spine from the root along midline children.
//! - At the first accepted triple split (hips) extracts both legs as longest
//!   chains; at the second (shoulders) extracts both arms, stopping each at the
//!   first five-child bone (the hand) whose fingers are ordered along a
//!   forward axis derived from the spine.
//! - Continues along the Neck to the first midline bone named like a head.
//!
//! Modules
//! - [`params`] – thresholds shared by the classifier and the scan.
//! - `pipeline` – the [`StructureDetector`] entry point.
//! - `scanner` – the recursive scan and its explicit state.
//!
//! Key Ideas
//! - Every threshold scales with the skeleton size (its x extent by default).
//! - Left/right is read from world x: the rig faces −y, so its right side has
//!   negative x.
//! - The scan never fails: missing features leave chains empty.

pub mod params;
mod pipeline;
mod scanner;

pub use params::DetectorParams;
pub use pipeline::{detect_structure, StructureDetector};

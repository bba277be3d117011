//! Detector entry point.
//!
//! The [`StructureDetector`] exposes a simple API: feed a skeleton and get the
//! semantic chain map, optionally with a trace of the scan.
//!
//! Typical usage:
//! ```no_run
//! use rig_structure::skeleton::io::load_rig;
//! use rig_structure::{ChainKey, DetectorParams, StructureDetector};
//! use std::path::Path;
//!
//! # fn example() -> rig_structure::Result<()> {
//! let skeleton = load_rig(Path::new("rig.json"))?;
//! let detector = StructureDetector::new(DetectorParams::default());
//! let report = detector.process(&skeleton);
//! println!("spine: {:?}", report.structure.names(&skeleton, ChainKey::Spine));
//! # Ok(())
//! # }
//! ```

use super::scanner::Scanner;
use super::DetectorParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{DetectionReport, InputDescriptor, PipelineTrace, TimingBreakdown};
use crate::skeleton::Skeleton;
use crate::types::StructureMap;
use log::debug;
use std::time::Instant;

/// Structure detector: root lookup followed by the recursive scan.
///
/// The detector holds only parameters; every run owns its own scanner state,
/// so one detector can serve several skeletons, including from different
/// threads.
#[derive(Clone, Debug, Default)]
pub struct StructureDetector {
    params: DetectorParams,
}

impl StructureDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    pub fn set_params(&mut self, params: DetectorParams) {
        self.params = params;
    }

    /// Detect the chain structure of `skeleton`.
    pub fn detect(&self, skeleton: &Skeleton) -> StructureMap {
        self.process(skeleton).structure
    }

    /// Detect the chain structure and capture a trace of the scan.
    pub fn process(&self, skeleton: &Skeleton) -> DetectionReport {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let root_start = Instant::now();
        let root = skeleton.root();
        timings.push_since("root", root_start);

        let scan_start = Instant::now();
        let (structure, scan) = Scanner::new(skeleton, &self.params).run(root);
        timings.push_since("scan", scan_start);

        let chains = structure.to_named(skeleton);
        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "StructureDetector::process {}: {} bones, {} splits, {} fingers, head={:?} ({:.3} ms)",
            skeleton.name(),
            skeleton.len(),
            scan.splits.len(),
            structure.finger_count(),
            scan.head,
            timings.total_ms
        );

        DetectionReport {
            structure,
            chains,
            trace: PipelineTrace {
                input: InputDescriptor::from_skeleton(skeleton),
                timings,
                scan,
            },
        }
    }
}

/// Detect with default parameters.
pub fn detect_structure(skeleton: &Skeleton) -> StructureMap {
    StructureDetector::default().detect(skeleton)
}

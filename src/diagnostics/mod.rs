//! Diagnostics data model returned by the structure detector.
//!
//! `DetectionReport` is the main entry point: the detected chains with bone
//! names resolved, plus a `PipelineTrace` describing what the scan saw on the
//! way (root, accepted and rejected splits, hands, head).

pub mod pipeline;
pub mod scan;
pub mod timing;

pub use pipeline::{DetectionReport, InputDescriptor, PipelineTrace};
pub use scan::{HandEvent, ScanStage, SplitEvent, SplitRole};
pub use timing::{StageTiming, TimingBreakdown};

use crate::diagnostics::{ScanStage, TimingBreakdown};
use crate::skeleton::Skeleton;
use crate::types::{NamedChain, StructureMap};
use serde::Serialize;

/// Result produced by [`StructureDetector::process`](crate::StructureDetector::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    /// Bone ids, valid against the skeleton the report was built from.
    #[serde(skip)]
    pub structure: StructureMap,
    pub chains: Vec<NamedChain>,
    pub trace: PipelineTrace,
}

impl DetectionReport {
    /// Chains holding no bone, e.g. to tell a user "no legs detected".
    pub fn missing_chains(&self) -> Vec<String> {
        self.chains
            .iter()
            .filter(|c| c.bones.is_empty())
            .map(|c| c.key.to_string())
            .collect()
    }
}

/// End-to-end trace of a detection run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub scan: ScanStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub skeleton: String,
    pub bones: usize,
    pub size: f32,
}

impl InputDescriptor {
    pub fn from_skeleton(skeleton: &Skeleton) -> Self {
        Self {
            skeleton: skeleton.name().to_string(),
            bones: skeleton.len(),
            size: skeleton.size(),
        }
    }
}

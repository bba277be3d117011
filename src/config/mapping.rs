use crate::detector::DetectorParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct MappingToolConfig {
    /// Rig the animation comes from.
    pub source: PathBuf,
    /// Rig the animation is transferred to.
    pub target: PathBuf,
    #[serde(default)]
    pub detector: DetectorParams,
    pub output: MappingOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct MappingOutputConfig {
    pub mapping_json: PathBuf,
    #[serde(default)]
    pub plan_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<MappingToolConfig, String> {
    super::load_json(path)
}

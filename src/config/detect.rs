use crate::detector::DetectorParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    /// Rig description to scan.
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorParams,
    #[serde(default)]
    pub output: DetectOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DetectOutputConfig {
    /// Where to write the JSON report. Printed to stdout when absent.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    super::load_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detector_section_is_optional() {
        let cfg: DetectToolConfig = serde_json::from_str(r#"{ "input": "rig.json" }"#).unwrap();
        assert_eq!(cfg.detector, DetectorParams::default());
        assert!(cfg.output.report_json.is_none());
    }

    #[test]
    fn partial_detector_section_keeps_defaults() {
        let cfg: DetectToolConfig = serde_json::from_str(
            r#"{ "input": "rig.json", "detector": { "midline_ratio": 0.02 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.detector.midline_ratio, 0.02);
        assert_eq!(cfg.detector.lateral_ratio, 0.1);
        assert_eq!(cfg.detector.head_token, "head");
    }
}

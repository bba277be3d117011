//! JSON configuration for the demo binaries.
//!
//! - [`detect`]: one rig in, detection report out.
//! - [`mapping`]: source and target rigs in, chain mapping and retarget plan
//!   out.

pub mod detect;
pub mod mapping;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

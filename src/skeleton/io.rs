//! I/O helpers for rig descriptions and JSON.
//!
//! - `load_rig`: read a rig JSON file into a [`Skeleton`].
//! - `save_rig`: write a skeleton back as a rig description.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{RigDef, Skeleton};
use crate::error::{Result, RigError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a rig description from disk and build its skeleton.
pub fn load_rig(path: &Path) -> Result<Skeleton> {
    let def: RigDef = read_json_file(path)?;
    Skeleton::from_def(def)
}

pub fn save_rig(path: &Path, skeleton: &Skeleton) -> Result<()> {
    write_json_file(path, &skeleton.to_def())
}

/// Deserialize a JSON file.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| RigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| RigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `value` as pretty JSON, creating parent directories as needed.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let io_err = |source| RigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| RigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)
}

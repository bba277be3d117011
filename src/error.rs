//! Error type shared by rig loading, mapping edits and persistence.
//!
//! Structure detection itself never fails; these errors only come from the
//! surrounding layers (building a skeleton arena, editing or reading a
//! mapping).

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RigError>;

#[derive(Error, Debug)]
pub enum RigError {
    #[error("Duplicate bone name: {0}")]
    DuplicateBone(String),

    #[error("Bone {bone} references unknown parent {parent}")]
    UnknownParent { bone: String, parent: String },

    #[error("Unknown chain key: {0}")]
    UnknownChainKey(String),

    #[error("Chain index {index} out of range ({len} chains)")]
    ChainIndex { index: usize, len: usize },

    #[error("Bone index {index} out of range in chain {chain} ({len} bones)")]
    BoneIndex {
        chain: String,
        index: usize,
        len: usize,
    },

    #[error("No bone name given for chain {0}")]
    EmptyBoneName(String),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

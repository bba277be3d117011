//! Mapping persistence.
//!
//! The file is the pretty-printed JSON form of [`RetargetMapping`]:
//! `src_armature`, `target_armature` and the ordered chain records.
use super::RetargetMapping;
use crate::error::Result;
use crate::skeleton::io::{read_json_file, write_json_file};
use std::path::Path;

pub fn load_mapping(path: &Path) -> Result<RetargetMapping> {
    read_json_file(path)
}

pub fn save_mapping(path: &Path, mapping: &RetargetMapping) -> Result<()> {
    write_json_file(path, mapping)
}

//! Source → target chain mapping.
//!
//! A mapping pairs every detected source chain with the target chain of the
//! same key. Users can then edit it (rename, add or drop chains and bones,
//! toggle per-bone flags) before it is saved or fed to the
//! [retarget planner](crate::retarget). Records keep the order the detector
//! produced; bone lists keep chain order (proximal to distal).

pub mod io;

use crate::error::{Result, RigError};
use crate::skeleton::Skeleton;
use crate::types::StructureMap;
use serde::{Deserialize, Serialize};

/// Name given to chains added by hand.
pub const DEFAULT_CHAIN_NAME: &str = "Chain";

fn enabled_by_default() -> bool {
    true
}

/// One bone entry of a chain record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainBone {
    pub name: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default = "enabled_by_default")]
    pub copy_rot: bool,
    #[serde(default)]
    pub copy_loc: bool,
}

impl ChainBone {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            copy_rot: true,
            copy_loc: false,
        }
    }
}

/// Which rig of the mapping a bone list belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RigSide {
    Source,
    Target,
}

/// Paired bone lists for one chain.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainRecord {
    pub name: String,
    #[serde(default)]
    pub src_bones: Vec<ChainBone>,
    #[serde(default)]
    pub target_bones: Vec<ChainBone>,
}

impl ChainRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn bones(&self, side: RigSide) -> &[ChainBone] {
        match side {
            RigSide::Source => &self.src_bones,
            RigSide::Target => &self.target_bones,
        }
    }

    pub fn bones_mut(&mut self, side: RigSide) -> &mut Vec<ChainBone> {
        match side {
            RigSide::Source => &mut self.src_bones,
            RigSide::Target => &mut self.target_bones,
        }
    }

    /// Append a bone to one side of the chain.
    pub fn add_bone(&mut self, side: RigSide, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(RigError::EmptyBoneName(self.name.clone()));
        }
        self.bones_mut(side).push(ChainBone::new(name));
        Ok(())
    }

    /// Remove and return the bone at `index` on one side.
    pub fn remove_bone(&mut self, side: RigSide, index: usize) -> Result<ChainBone> {
        let chain = self.name.clone();
        let bones = self.bones_mut(side);
        if index >= bones.len() {
            return Err(RigError::BoneIndex {
                chain,
                index,
                len: bones.len(),
            });
        }
        Ok(bones.remove(index))
    }

    /// Enabled bones of one side, in order.
    pub fn enabled(&self, side: RigSide) -> impl Iterator<Item = &ChainBone> {
        self.bones(side).iter().filter(|b| b.enabled)
    }
}

/// Editable mapping between a source and a target rig.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RetargetMapping {
    pub src_armature: String,
    pub target_armature: String,
    #[serde(default)]
    pub chains: Vec<ChainRecord>,
}

impl RetargetMapping {
    pub fn new(src_armature: impl Into<String>, target_armature: impl Into<String>) -> Self {
        Self {
            src_armature: src_armature.into(),
            target_armature: target_armature.into(),
            chains: Vec::new(),
        }
    }

    /// Pair two detection results chain by chain.
    ///
    /// One record per key of the source map, in key order. Target bones come
    /// from the target chain with the same key and stay empty when the target
    /// has no such chain (e.g. no hands found).
    pub fn from_structures(
        source: &Skeleton,
        source_map: &StructureMap,
        target: &Skeleton,
        target_map: &StructureMap,
    ) -> Self {
        let chains = source_map
            .iter()
            .map(|(key, src)| ChainRecord {
                name: key.to_string(),
                src_bones: source.names(src).into_iter().map(ChainBone::new).collect(),
                target_bones: target
                    .names(target_map.chain(key))
                    .into_iter()
                    .map(ChainBone::new)
                    .collect(),
            })
            .collect();
        Self {
            src_armature: source.name().to_string(),
            target_armature: target.name().to_string(),
            chains,
        }
    }

    /// Append an empty chain named [`DEFAULT_CHAIN_NAME`]; returns its index.
    pub fn add_chain(&mut self) -> usize {
        self.add_named_chain(DEFAULT_CHAIN_NAME)
    }

    pub fn add_named_chain(&mut self, name: impl Into<String>) -> usize {
        self.chains.push(ChainRecord::new(name));
        self.chains.len() - 1
    }

    pub fn remove_chain(&mut self, index: usize) -> Result<ChainRecord> {
        if index >= self.chains.len() {
            return Err(RigError::ChainIndex {
                index,
                len: self.chains.len(),
            });
        }
        Ok(self.chains.remove(index))
    }

    /// First chain with the given name.
    pub fn chain(&self, name: &str) -> Option<&ChainRecord> {
        self.chains.iter().find(|c| c.name == name)
    }

    pub fn chain_mut(&mut self, name: &str) -> Option<&mut ChainRecord> {
        self.chains.iter_mut().find(|c| c.name == name)
    }

    pub fn chain_at_mut(&mut self, index: usize) -> Result<&mut ChainRecord> {
        let len = self.chains.len();
        self.chains
            .get_mut(index)
            .ok_or(RigError::ChainIndex { index, len })
    }
}

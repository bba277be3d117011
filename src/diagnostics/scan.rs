use crate::types::Side;
use serde::{Deserialize, Serialize};

/// How the scan treated a bone with three children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SplitRole {
    /// First accepted split: legs branch off, the spine continues.
    Hips,
    /// Second accepted split: arms branch off, the neck continues.
    Shoulders,
    /// Accepted geometrically after both limb splits were already taken.
    Ignored,
    /// Failed the geometric or subtree test.
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitEvent {
    pub bone: String,
    pub role: SplitRole,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandEvent {
    pub side: Side,
    pub hand: String,
    pub fingers: usize,
}

/// What the recursive scan observed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Bones appended to the Spine or Neck chains by the walk.
    pub visited: usize,
    pub splits: Vec<SplitEvent>,
    pub hands: Vec<HandEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    /// Forward axis used to order fingers, when the shoulders were found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<[f32; 3]>,
}

impl ScanStage {
    pub fn split_count(&self, role: SplitRole) -> usize {
        self.splits.iter().filter(|s| s.role == role).count()
    }
}

use crate::error::RigError;
use crate::skeleton::{BoneId, Skeleton};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Number of finger chains a hand carries.
pub const FINGERS_PER_HAND: usize = 5;

/// Lateral side of a limb, from the rig's own point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    fn prefix(self) -> &'static str {
        match self {
            Side::Right => "R",
            Side::Left => "L",
        }
    }
}

/// Fixed semantic chain taxonomy.
///
/// The variant order is the order chains are reported in: base chains first,
/// then right fingers, then left fingers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChainKey {
    Spine,
    RArm,
    LArm,
    LLeg,
    RLeg,
    Neck,
    Head,
    /// Right finger, numbered 1..=5 after sorting.
    RFinger(u8),
    LFinger(u8),
}

impl ChainKey {
    /// Keys present in every structure map.
    pub const BASE: [ChainKey; 7] = [
        ChainKey::Spine,
        ChainKey::RArm,
        ChainKey::LArm,
        ChainKey::LLeg,
        ChainKey::RLeg,
        ChainKey::Neck,
        ChainKey::Head,
    ];

    pub fn arm(side: Side) -> Self {
        match side {
            Side::Right => ChainKey::RArm,
            Side::Left => ChainKey::LArm,
        }
    }

    pub fn leg(side: Side) -> Self {
        match side {
            Side::Right => ChainKey::RLeg,
            Side::Left => ChainKey::LLeg,
        }
    }

    /// `number` is 1-based.
    pub fn finger(side: Side, number: u8) -> Self {
        match side {
            Side::Right => ChainKey::RFinger(number),
            Side::Left => ChainKey::LFinger(number),
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            ChainKey::RArm | ChainKey::RLeg | ChainKey::RFinger(_) => Some(Side::Right),
            ChainKey::LArm | ChainKey::LLeg | ChainKey::LFinger(_) => Some(Side::Left),
            _ => None,
        }
    }

    pub fn is_finger(self) -> bool {
        matches!(self, ChainKey::RFinger(_) | ChainKey::LFinger(_))
    }
}

impl fmt::Display for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainKey::Spine => f.write_str("Spine"),
            ChainKey::Neck => f.write_str("Neck"),
            ChainKey::Head => f.write_str("Head"),
            ChainKey::RArm | ChainKey::LArm => {
                write!(f, "{}_Arm", self.side().map_or("", Side::prefix))
            }
            ChainKey::RLeg | ChainKey::LLeg => {
                write!(f, "{}_Leg", self.side().map_or("", Side::prefix))
            }
            ChainKey::RFinger(n) | ChainKey::LFinger(n) => {
                write!(f, "{}_Finger{n}", self.side().map_or("", Side::prefix))
            }
        }
    }
}

impl FromStr for ChainKey {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "Spine" => ChainKey::Spine,
            "Neck" => ChainKey::Neck,
            "Head" => ChainKey::Head,
            "R_Arm" => ChainKey::RArm,
            "L_Arm" => ChainKey::LArm,
            "R_Leg" => ChainKey::RLeg,
            "L_Leg" => ChainKey::LLeg,
            _ => {
                let finger = |rest: &str| {
                    rest.strip_prefix("_Finger")
                        .and_then(|n| n.parse::<u8>().ok())
                        .filter(|n| (1..=FINGERS_PER_HAND as u8).contains(n))
                };
                let parsed = match (s.strip_prefix('R'), s.strip_prefix('L')) {
                    (Some(rest), _) => finger(rest).map(ChainKey::RFinger),
                    (_, Some(rest)) => finger(rest).map(ChainKey::LFinger),
                    _ => None,
                };
                parsed.ok_or_else(|| RigError::UnknownChainKey(s.to_string()))?
            }
        };
        Ok(key)
    }
}

impl Serialize for ChainKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChainKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered bones of one anatomical segment, proximal to distal.
pub type Chain = Vec<BoneId>;

/// Chain with bone names resolved, as consumed by mapping and reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedChain {
    pub key: ChainKey,
    pub bones: Vec<String>,
}

/// Result of a detection run: chain key → bones.
///
/// The seven [`ChainKey::BASE`] keys are always present, possibly empty.
/// Finger keys only appear once a hand has been found.
#[derive(Clone, Debug, PartialEq)]
pub struct StructureMap {
    chains: BTreeMap<ChainKey, Chain>,
}

impl Default for StructureMap {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureMap {
    pub fn new() -> Self {
        Self {
            chains: ChainKey::BASE.iter().map(|&k| (k, Chain::new())).collect(),
        }
    }

    pub fn get(&self, key: ChainKey) -> Option<&Chain> {
        self.chains.get(&key)
    }

    /// Bones of `key`; empty when the key is absent.
    pub fn chain(&self, key: ChainKey) -> &[BoneId] {
        self.chains.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, key: ChainKey) -> bool {
        self.chains.contains_key(&key)
    }

    pub(crate) fn push(&mut self, key: ChainKey, bone: BoneId) {
        self.chains.entry(key).or_default().push(bone);
    }

    pub(crate) fn set(&mut self, key: ChainKey, chain: Chain) {
        self.chains.insert(key, chain);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChainKey, &[BoneId])> + '_ {
        self.chains.iter().map(|(k, c)| (*k, c.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = ChainKey> + '_ {
        self.chains.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// True when no chain holds a bone.
    pub fn is_empty(&self) -> bool {
        self.chains.values().all(Vec::is_empty)
    }

    pub fn finger_count(&self) -> usize {
        self.chains.keys().filter(|k| k.is_finger()).count()
    }

    /// Resolve bone ids to names against the skeleton the map was built from.
    pub fn to_named(&self, skeleton: &Skeleton) -> Vec<NamedChain> {
        self.iter()
            .map(|(key, bones)| NamedChain {
                key,
                bones: skeleton.names(bones),
            })
            .collect()
    }

    /// Names of the bones in `key`.
    pub fn names(&self, skeleton: &Skeleton, key: ChainKey) -> Vec<String> {
        skeleton.names(self.chain(key))
    }
}

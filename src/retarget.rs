//! Retarget planning.
//!
//! Turns a [`RetargetMapping`] into the list of bone bindings a host needs to
//! wire: for every enabled source/target pair, the target bone copies the
//! transform of a proxy object that follows the source bone. The planner only
//! describes the bindings; creating the follower/proxy objects and the
//! constraints is left to the host.
//!
//! Per chain:
//! - no source or no target bones ⇒ the chain is skipped;
//! - enabled bones are paired in order, up to the shorter side; differing
//!   counts are reported.

use crate::mapping::{RetargetMapping, RigSide};
use crate::skeleton::Skeleton;
use log::warn;
use serde::Serialize;
use std::fmt;

/// Suffix appended to a source bone name to name its proxy.
pub const PROXY_SUFFIX: &str = "T";

/// One source → target bone pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoneBinding {
    pub chain: String,
    pub src_bone: String,
    pub target_bone: String,
    /// Object that follows the source bone (named after it).
    pub follower: String,
    /// Child of the follower the target bone copies from.
    pub proxy: String,
    pub copy_loc: bool,
    pub copy_rot: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PlanWarning {
    EmptyChain {
        chain: String,
    },
    LengthMismatch {
        chain: String,
        src: usize,
        target: usize,
    },
    UnknownBone {
        chain: String,
        armature: String,
        bone: String,
    },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::EmptyChain { chain } => write!(f, "Empty chain {chain}. Skipping"),
            PlanWarning::LengthMismatch { chain, src, target } => write!(
                f,
                "Hierarchy length mismatch for {chain} chain ({src} source, {target} target bones)"
            ),
            PlanWarning::UnknownBone {
                chain,
                armature,
                bone,
            } => write!(f, "Rig {armature} has no bone {bone} (chain {chain})"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RetargetPlan {
    pub bindings: Vec<BoneBinding>,
    pub warnings: Vec<PlanWarning>,
}

impl RetargetPlan {
    /// Distinct follower names in binding order.
    pub fn followers(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for b in &self.bindings {
            if !seen.contains(&b.follower.as_str()) {
                seen.push(b.follower.as_str());
            }
        }
        seen
    }
}

/// Plan the bindings of `mapping`.
///
/// When `rigs` (source, target) is given, pairs naming a bone missing from
/// either rig are dropped and reported.
pub fn plan_retarget(
    mapping: &RetargetMapping,
    rigs: Option<(&Skeleton, &Skeleton)>,
) -> RetargetPlan {
    let mut plan = RetargetPlan::default();
    for chain in &mapping.chains {
        if chain.src_bones.is_empty() || chain.target_bones.is_empty() {
            plan.warnings.push(PlanWarning::EmptyChain {
                chain: chain.name.clone(),
            });
            continue;
        }

        let src: Vec<_> = chain.enabled(RigSide::Source).collect();
        let target: Vec<_> = chain.enabled(RigSide::Target).collect();
        if src.len() != target.len() {
            plan.warnings.push(PlanWarning::LengthMismatch {
                chain: chain.name.clone(),
                src: src.len(),
                target: target.len(),
            });
        }

        for (s, t) in src.iter().zip(&target) {
            if let Some((source_rig, target_rig)) = rigs {
                let missing = [
                    (source_rig, &mapping.src_armature, &s.name),
                    (target_rig, &mapping.target_armature, &t.name),
                ]
                .into_iter()
                .find(|(rig, _, bone)| rig.find(bone).is_none());
                if let Some((_, armature, bone)) = missing {
                    plan.warnings.push(PlanWarning::UnknownBone {
                        chain: chain.name.clone(),
                        armature: armature.clone(),
                        bone: bone.clone(),
                    });
                    continue;
                }
            }
            plan.bindings.push(BoneBinding {
                chain: chain.name.clone(),
                src_bone: s.name.clone(),
                target_bone: t.name.clone(),
                follower: s.name.clone(),
                proxy: format!("{}{PROXY_SUFFIX}", s.name),
                copy_loc: t.copy_loc,
                copy_rot: t.copy_rot,
            });
        }
    }

    for w in &plan.warnings {
        warn!("{w}");
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ChainRecord;

    fn record(name: &str, src: &[&str], target: &[&str]) -> ChainRecord {
        let mut chain = ChainRecord::new(name);
        for s in src {
            chain.add_bone(RigSide::Source, s).unwrap();
        }
        for t in target {
            chain.add_bone(RigSide::Target, t).unwrap();
        }
        chain
    }

    #[test]
    fn pairs_enabled_bones_in_order() {
        let mut mapping = RetargetMapping::new("A", "B");
        mapping.chains.push(record("Spine", &["a0", "a1"], &["b0", "b1"]));
        mapping.chains[0].target_bones[1].copy_loc = true;

        let plan = plan_retarget(&mapping, None);
        assert!(plan.warnings.is_empty());
        assert_eq!(plan.bindings.len(), 2);
        let second = &plan.bindings[1];
        assert_eq!(second.src_bone, "a1");
        assert_eq!(second.target_bone, "b1");
        assert_eq!(second.follower, "a1");
        assert_eq!(second.proxy, "a1T");
        assert!(second.copy_loc && second.copy_rot);
        assert_eq!(plan.followers(), ["a0", "a1"]);
    }

    #[test]
    fn skips_empty_chains() {
        let mut mapping = RetargetMapping::new("A", "B");
        mapping.chains.push(record("Head", &["head"], &[]));
        mapping.chains.push(record("Neck", &[], &[]));
        let plan = plan_retarget(&mapping, None);
        assert!(plan.bindings.is_empty());
        assert_eq!(
            plan.warnings,
            [
                PlanWarning::EmptyChain { chain: "Head".into() },
                PlanWarning::EmptyChain { chain: "Neck".into() }
            ]
        );
    }

    #[test]
    fn mismatch_binds_up_to_shorter_side() {
        let mut mapping = RetargetMapping::new("A", "B");
        mapping
            .chains
            .push(record("L_Arm", &["s0", "s1", "s2"], &["t0", "t1", "t2"]));
        mapping.chains[0].src_bones[1].enabled = false;

        let plan = plan_retarget(&mapping, None);
        let pairs: Vec<(&str, &str)> = plan
            .bindings
            .iter()
            .map(|b| (b.src_bone.as_str(), b.target_bone.as_str()))
            .collect();
        assert_eq!(pairs, [("s0", "t0"), ("s2", "t1")]);
        assert_eq!(
            plan.warnings,
            [PlanWarning::LengthMismatch {
                chain: "L_Arm".into(),
                src: 2,
                target: 3
            }]
        );
    }

    #[test]
    fn drops_bones_missing_from_rigs() {
        let src = Skeleton::builder("A")
            .bone("s0", [0.0; 3], [0.0, 0.0, 1.0], None)
            .build()
            .unwrap();
        let dst = Skeleton::builder("B")
            .bone("t0", [0.0; 3], [0.0, 0.0, 1.0], None)
            .build()
            .unwrap();
        let mut mapping = RetargetMapping::new("A", "B");
        mapping.chains.push(record("Spine", &["s0", "s1"], &["t0", "t1"]));

        let plan = plan_retarget(&mapping, Some((&src, &dst)));
        assert_eq!(plan.bindings.len(), 1);
        assert_eq!(
            plan.warnings,
            [PlanWarning::UnknownBone {
                chain: "Spine".into(),
                armature: "A".into(),
                bone: "s1".into()
            }]
        );
    }
}

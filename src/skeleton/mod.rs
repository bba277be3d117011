//! Skeleton model: an arena of rest-pose bones plus the scalar size used to
//! scale every geometric threshold of the detector.
//!
//! Bones keep the declaration order of the rig description. That order is
//! observable: it decides which parentless bone is the root and which child
//! wins a depth tie in [`longest_chain`](crate::chains::longest_chain).
//!
//! Construction goes through [`RigDef`] (usually read from JSON via
//! [`io::load_rig`]) or the chained [`SkeletonBuilder`]. The loader only
//! rejects what it cannot represent: duplicate names and parents that do not
//! exist. Cycles and disconnected components are accepted as-is.

mod bone;
pub mod io;

pub use bone::{Bone, BoneId};

use crate::error::{Result, RigError};
use crate::geometry::x_extent;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serialized description of one bone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoneDef {
    pub name: String,
    pub head: [f32; 3],
    pub tail: [f32; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Serialized description of a rig.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RigDef {
    #[serde(default)]
    pub name: String,
    /// Span along the left-right axis. Derived from the bones when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default)]
    pub bones: Vec<BoneDef>,
}

/// Immutable bone tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Skeleton {
    name: String,
    bones: Vec<Bone>,
    size: f32,
}

impl Skeleton {
    /// Build the arena from a rig description.
    pub fn from_def(def: RigDef) -> Result<Self> {
        let mut index: HashMap<&str, BoneId> = HashMap::with_capacity(def.bones.len());
        for (id, b) in def.bones.iter().enumerate() {
            if index.insert(b.name.as_str(), id).is_some() {
                return Err(RigError::DuplicateBone(b.name.clone()));
            }
        }

        let mut parents = Vec::with_capacity(def.bones.len());
        for b in &def.bones {
            let parent = match &b.parent {
                Some(p) => Some(*index.get(p.as_str()).ok_or_else(|| RigError::UnknownParent {
                    bone: b.name.clone(),
                    parent: p.clone(),
                })?),
                None => None,
            };
            parents.push(parent);
        }

        let mut bones: Vec<Bone> = def
            .bones
            .iter()
            .zip(&parents)
            .map(|(b, parent)| Bone {
                name: b.name.clone(),
                head: Vector3::from(b.head),
                tail: Vector3::from(b.tail),
                parent: *parent,
                children: Vec::new(),
            })
            .collect();
        for (id, parent) in parents.iter().enumerate() {
            if let Some(p) = parent {
                bones[*p].children.push(id);
            }
        }

        let size = def.size.unwrap_or_else(|| {
            x_extent(bones.iter().flat_map(|b| [&b.head, &b.tail]))
        });

        Ok(Self {
            name: def.name,
            bones,
            size,
        })
    }

    pub fn builder(name: impl Into<String>) -> SkeletonBuilder {
        SkeletonBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference span used to scale the detector thresholds.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Panics if `id` does not belong to this skeleton.
    pub fn bone(&self, id: BoneId) -> &Bone {
        &self.bones[id]
    }

    pub fn get(&self, id: BoneId) -> Option<&Bone> {
        self.bones.get(id)
    }

    pub fn find(&self, name: &str) -> Option<BoneId> {
        self.bones.iter().position(|b| b.name == name)
    }

    /// First parentless bone in declaration order.
    ///
    /// When several bones have no parent the earliest declared one wins; the
    /// rest are never visited by the detector.
    pub fn root(&self) -> Option<BoneId> {
        self.bones.iter().position(|b| b.parent.is_none())
    }

    /// Number of bones below `id` (children, grandchildren, ...).
    pub fn descendant_count(&self, id: BoneId) -> usize {
        let mut count = 0;
        let mut stack: Vec<BoneId> = self.bones[id].children.clone();
        while let Some(b) = stack.pop() {
            count += 1;
            stack.extend_from_slice(&self.bones[b].children);
        }
        count
    }

    /// Names of the given bones, in order.
    pub fn names(&self, ids: &[BoneId]) -> Vec<String> {
        ids.iter().map(|&id| self.bones[id].name.clone()).collect()
    }

    /// Description that rebuilds an equal skeleton.
    pub fn to_def(&self) -> RigDef {
        RigDef {
            name: self.name.clone(),
            size: Some(self.size),
            bones: self
                .bones
                .iter()
                .map(|b| BoneDef {
                    name: b.name.clone(),
                    head: b.head.into(),
                    tail: b.tail.into(),
                    parent: b.parent.map(|p| self.bones[p].name.clone()),
                })
                .collect(),
        }
    }
}

/// Chained construction of a [`Skeleton`], mostly for fixtures and tools.
#[derive(Clone, Debug, Default)]
pub struct SkeletonBuilder {
    def: RigDef,
}

impl SkeletonBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            def: RigDef {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// Override the size derived from the bone extent.
    pub fn size(mut self, size: f32) -> Self {
        self.def.size = Some(size);
        self
    }

    pub fn bone(mut self, name: &str, head: [f32; 3], tail: [f32; 3], parent: Option<&str>) -> Self {
        self.def.bones.push(BoneDef {
            name: name.to_string(),
            head,
            tail,
            parent: parent.map(str::to_string),
        });
        self
    }

    pub fn build(self) -> Result<Skeleton> {
        Skeleton::from_def(self.def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> Skeleton {
        Skeleton::builder("tree")
            .bone("root", [0.0, 0.0, 0.0], [0.0, 0.0, 1.0], None)
            .bone("a", [0.0, 0.0, 1.0], [-1.0, 0.0, 1.0], Some("root"))
            .bone("b", [0.0, 0.0, 1.0], [2.0, 0.0, 1.0], Some("root"))
            .bone("a1", [-1.0, 0.0, 1.0], [-1.0, 0.0, 2.0], Some("a"))
            .build()
            .expect("valid tree")
    }

    #[test]
    fn children_follow_declaration_order() {
        let sk = small_tree();
        let root = sk.root().expect("root");
        assert_eq!(sk.bone(root).name, "root");
        assert_eq!(sk.names(sk.bone(root).children()), vec!["a", "b"]);
        assert_eq!(sk.bone(sk.find("a1").unwrap()).parent(), sk.find("a"));
    }

    #[test]
    fn size_defaults_to_x_extent() {
        let sk = small_tree();
        assert!((sk.size() - 3.0).abs() < 1e-6);
        let sized = Skeleton::builder("s")
            .size(10.0)
            .bone("root", [0.0; 3], [0.0, 0.0, 1.0], None)
            .build()
            .unwrap();
        assert_eq!(sized.size(), 10.0);
    }

    #[test]
    fn descendant_count_covers_subtree() {
        let sk = small_tree();
        assert_eq!(sk.descendant_count(sk.find("root").unwrap()), 3);
        assert_eq!(sk.descendant_count(sk.find("a").unwrap()), 1);
        assert_eq!(sk.descendant_count(sk.find("b").unwrap()), 0);
    }

    #[test]
    fn first_parentless_bone_is_root() {
        let sk = Skeleton::builder("two roots")
            .bone("second", [0.0; 3], [0.0, 0.0, 1.0], None)
            .bone("first", [0.0; 3], [0.0, 0.0, 1.0], None)
            .build()
            .unwrap();
        assert_eq!(sk.root(), Some(0));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Skeleton::builder("dup")
            .bone("x", [0.0; 3], [0.0; 3], None)
            .bone("x", [0.0; 3], [0.0; 3], None)
            .build()
            .unwrap_err();
        assert!(matches!(err, RigError::DuplicateBone(name) if name == "x"));
    }

    #[test]
    fn rejects_unknown_parent() {
        let err = Skeleton::builder("orphan")
            .bone("x", [0.0; 3], [0.0; 3], Some("missing"))
            .build()
            .unwrap_err();
        assert!(matches!(err, RigError::UnknownParent { .. }));
    }

    #[test]
    fn def_round_trip_rebuilds_equal_skeleton() {
        let sk = small_tree();
        let rebuilt = Skeleton::from_def(sk.to_def()).unwrap();
        assert_eq!(sk, rebuilt);
    }
}

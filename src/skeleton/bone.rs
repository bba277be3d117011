use nalgebra::Vector3;
use serde::Serialize;

/// Index of a bone inside its [`Skeleton`](super::Skeleton) arena.
///
/// Ids follow the declaration order of the rig description.
pub type BoneId = usize;

/// Rest-pose bone with its tree links.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bone {
    pub name: String,
    pub head: Vector3<f32>,
    pub tail: Vector3<f32>,
    pub(crate) parent: Option<BoneId>,
    pub(crate) children: Vec<BoneId>,
}

impl Bone {
    /// Midpoint between head and tail.
    #[inline]
    pub fn center(&self) -> Vector3<f32> {
        (self.head + self.tail) * 0.5
    }

    /// Half of the head→tail vector.
    #[inline]
    pub fn half_dir(&self) -> Vector3<f32> {
        (self.tail - self.head) * 0.5
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.tail - self.head).norm()
    }

    pub fn parent(&self) -> Option<BoneId> {
        self.parent
    }

    /// Children in declaration order.
    pub fn children(&self) -> &[BoneId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

//! Finger ordering for a detected hand.

use crate::chains::longest_chain;
use crate::geometry::normalize_or_zero;
use crate::skeleton::{BoneId, Skeleton};
use crate::types::Chain;
use nalgebra::Vector3;
use std::cmp::Ordering;

/// Longest chain of every child of `hand`, sorted by how far forward the
/// first finger bone sits along `forward` (most forward first).
///
/// Equal projections keep the children's declaration order.
pub fn sort_fingers(skeleton: &Skeleton, hand: BoneId, forward: &Vector3<f32>) -> Vec<Chain> {
    let forward = normalize_or_zero(forward);
    let mut fingers: Vec<(f32, Chain)> = skeleton
        .bone(hand)
        .children()
        .iter()
        .map(|&child| {
            let chain = longest_chain(skeleton, child).bones;
            let reach = skeleton.bone(chain[0]).center().dot(&forward);
            (reach, chain)
        })
        .collect();
    fingers.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    fingers.into_iter().map(|(_, chain)| chain).collect()
}

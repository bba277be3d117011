//! Longest-chain extraction.
//!
//! The chain from a bone is the deepest single path below it. When several
//! children reach the same depth the first one in declaration order wins.
//! This is not anatomically motivated (a hand returns its first longest
//! finger) but it is the behaviour existing chain files were authored
//! against, so it must stay first-wins.

use crate::skeleton::{BoneId, Skeleton};
use crate::types::Chain;

/// Deepest path from a start bone, start included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LongestChain {
    pub bones: Chain,
    /// Number of bones on the path (edges + 1).
    pub depth: usize,
}

/// Extract the longest chain starting at `start`.
pub fn longest_chain(skeleton: &Skeleton, start: BoneId) -> LongestChain {
    let mut bones = Vec::new();
    collect_deepest(skeleton, start, &mut bones);
    bones.reverse();
    let depth = bones.len();
    LongestChain { bones, depth }
}

/// Appends the deepest path below `bone` in reverse (tip first, `bone` last)
/// and returns its depth.
fn collect_deepest(skeleton: &Skeleton, bone: BoneId, out: &mut Vec<BoneId>) -> usize {
    let mut best: Vec<BoneId> = Vec::new();
    let mut best_depth = 0;
    for &child in skeleton.bone(bone).children() {
        let mut candidate = Vec::new();
        let depth = collect_deepest(skeleton, child, &mut candidate);
        if depth > best_depth {
            best_depth = depth;
            best = candidate;
        }
    }
    out.extend(best);
    out.push(bone);
    best_depth + 1
}

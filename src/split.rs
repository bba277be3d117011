//! Triple-split classification.
//!
//! A bone with exactly three children may be a hip or shoulder bifurcation:
//! two lateral limbs around a centerline continuation. The children are
//! ordered by the x of their centers (the rig faces −y, so the smallest x is
//! its right side) and the split is accepted only when the extremes sit
//! clearly off the midline, the middle child sits on it, and both extremes
//! carry a real subtree. The last check keeps three-way finger splays from
//! being read as limbs.

use crate::detector::DetectorParams;
use crate::skeleton::{BoneId, Skeleton};
use log::debug;
use std::cmp::Ordering;

/// Minimum number of descendants (exclusive) a limb branch must carry.
const MIN_LIMB_DESCENDANTS: usize = 1;

/// Accepted left/center/right split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TripleSplit {
    pub left: BoneId,
    pub center: BoneId,
    pub right: BoneId,
}

/// Classify the children of `bone`; `None` when it is not a limb split.
pub fn classify_triple_split(
    skeleton: &Skeleton,
    bone: BoneId,
    size: f32,
    params: &DetectorParams,
) -> Option<TripleSplit> {
    let children = skeleton.bone(bone).children();
    if children.len() != 3 {
        return None;
    }

    let mut by_x: Vec<(BoneId, f32)> = children
        .iter()
        .map(|&c| (c, skeleton.bone(c).center().x))
        .collect();
    // Stable: equal x keeps declaration order.
    by_x.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    let [(right, right_x), (center, center_x), (left, left_x)] = [by_x[0], by_x[1], by_x[2]];

    let lateral = params.lateral_limit(size);
    let midline = params.midline_limit(size);
    let name = &skeleton.bone(bone).name;

    if !(right_x < -lateral && center_x.abs() < midline && left_x > lateral) {
        debug!(
            "split {name}: rejected by geometry (x = {right_x:.4}, {center_x:.4}, {left_x:.4}; lateral {lateral:.4}, midline {midline:.4})"
        );
        return None;
    }
    if skeleton.descendant_count(right) <= MIN_LIMB_DESCENDANTS
        || skeleton.descendant_count(left) <= MIN_LIMB_DESCENDANTS
    {
        debug!("split {name}: rejected, lateral branches too short for limbs");
        return None;
    }

    Some(TripleSplit {
        left,
        center,
        right,
    })
}

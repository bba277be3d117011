//! Recursive structure scan.
//!
//! The scan starts at the root on the Spine chain and walks the centerline.
//! Every visited bone is appended to the chain being walked, then:
//!
//! - a leaf ends the branch;
//! - a bone with three children is run through the triple-split classifier.
//!   The first accepted split is read as the hips (legs are extracted as
//!   longest chains, the spine continues through the center child), the
//!   second as the shoulders (arms and fingers are extracted, the neck
//!   continues). A rejected or third split ends the branch;
//! - any other bone on the Spine or Neck chain continues into its midline
//!   children. A midline child whose name carries the head token becomes the
//!   Head chain and ends the whole scan.
//!
//! All mutable state lives in [`Scanner`] and is threaded through `&mut self`.

use super::DetectorParams;
use crate::chains::longest_chain;
use crate::diagnostics::{HandEvent, ScanStage, SplitEvent, SplitRole};
use crate::fingers::sort_fingers;
use crate::geometry::forward_axis;
use crate::skeleton::{BoneId, Skeleton};
use crate::split::{classify_triple_split, TripleSplit};
use crate::types::{ChainKey, Side, StructureMap, FINGERS_PER_HAND};
use log::debug;
use nalgebra::Vector3;

pub(super) struct Scanner<'a> {
    skeleton: &'a Skeleton,
    params: &'a DetectorParams,
    size: f32,
    head_token: String,
    structure: StructureMap,
    triple_splits_seen: usize,
    finished: bool,
    stage: ScanStage,
}

impl<'a> Scanner<'a> {
    pub(super) fn new(skeleton: &'a Skeleton, params: &'a DetectorParams) -> Self {
        Self {
            skeleton,
            params,
            size: skeleton.size(),
            head_token: params.head_token.to_lowercase(),
            structure: StructureMap::new(),
            triple_splits_seen: 0,
            finished: false,
            stage: ScanStage::default(),
        }
    }

    /// Scan from `root` and hand back the filled map and the trace.
    pub(super) fn run(mut self, root: Option<BoneId>) -> (StructureMap, ScanStage) {
        match root {
            Some(root) => {
                self.stage.root = Some(self.skeleton.bone(root).name.clone());
                self.scan(root, ChainKey::Spine);
            }
            None => debug!("scan {}: no parentless bone", self.skeleton.name()),
        }
        (self.structure, self.stage)
    }

    fn scan(&mut self, bone: BoneId, key: ChainKey) {
        if self.finished {
            return;
        }
        self.structure.push(key, bone);
        self.stage.visited += 1;

        match self.skeleton.bone(bone).children().len() {
            0 => {}
            3 => self.scan_triple(bone),
            _ => self.scan_centerline(bone, key),
        }
    }

    fn scan_triple(&mut self, bone: BoneId) {
        let name = self.skeleton.bone(bone).name.clone();
        let Some(split) = classify_triple_split(self.skeleton, bone, self.size, self.params)
        else {
            self.stage.splits.push(SplitEvent {
                bone: name,
                role: SplitRole::Rejected,
            });
            return;
        };

        let role = match self.triple_splits_seen {
            0 => SplitRole::Hips,
            1 => SplitRole::Shoulders,
            _ => SplitRole::Ignored,
        };
        debug!("split {name}: accepted as {role:?}");
        self.stage.splits.push(SplitEvent { bone: name, role });

        match role {
            SplitRole::Hips => {
                self.take_legs(&split);
                self.triple_splits_seen += 1;
                self.scan(split.center, ChainKey::Spine);
            }
            SplitRole::Shoulders => {
                self.take_arms(&split);
                self.triple_splits_seen += 1;
                self.scan(split.center, ChainKey::Neck);
            }
            SplitRole::Ignored | SplitRole::Rejected => {}
        }
    }

    fn take_legs(&mut self, split: &TripleSplit) {
        for (side, start) in [(Side::Right, split.right), (Side::Left, split.left)] {
            let leg = longest_chain(self.skeleton, start);
            self.structure.set(ChainKey::leg(side), leg.bones);
        }
    }

    fn take_arms(&mut self, split: &TripleSplit) {
        let forward = self.spine_forward();
        self.stage.forward = Some(forward.into());
        for (side, start) in [(Side::Right, split.right), (Side::Left, split.left)] {
            self.take_arm(side, start, &forward);
        }
    }

    /// Forward axis from the first and last bones collected on the Spine.
    fn spine_forward(&self) -> Vector3<f32> {
        let spine = self.structure.chain(ChainKey::Spine);
        match (spine.first(), spine.last()) {
            (Some(&first), Some(&last)) => forward_axis(
                &self.skeleton.bone(first).center(),
                &self.skeleton.bone(last).center(),
            ),
            _ => Vector3::zeros(),
        }
    }

    /// Walk the longest chain of an arm up to and including the hand.
    fn take_arm(&mut self, side: Side, start: BoneId, forward: &Vector3<f32>) {
        let skeleton = self.skeleton;
        let arm = longest_chain(skeleton, start);
        for bone in arm.bones {
            self.structure.push(ChainKey::arm(side), bone);
            if skeleton.bone(bone).children().len() != FINGERS_PER_HAND {
                continue;
            }
            let fingers = sort_fingers(skeleton, bone, forward);
            self.stage.hands.push(HandEvent {
                side,
                hand: skeleton.bone(bone).name.clone(),
                fingers: fingers.len(),
            });
            for (number, finger) in (1u8..).zip(fingers) {
                self.structure.set(ChainKey::finger(side, number), finger);
            }
            break;
        }
    }

    fn scan_centerline(&mut self, bone: BoneId, key: ChainKey) {
        if !matches!(key, ChainKey::Spine | ChainKey::Neck) {
            return;
        }
        let skeleton = self.skeleton;
        let midline = self.params.midline_limit(self.size);
        for &child in skeleton.bone(bone).children() {
            if self.finished {
                return;
            }
            let c = skeleton.bone(child);
            if c.center().x.abs() >= midline {
                continue;
            }
            if c.name.to_lowercase().contains(&self.head_token) {
                debug!("head found at {}", c.name);
                self.structure.set(ChainKey::Head, vec![child]);
                self.stage.head = Some(c.name.clone());
                self.finished = true;
                return;
            }
            self.scan(child, key);
        }
    }
}

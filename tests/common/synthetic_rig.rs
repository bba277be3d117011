use rig_structure::skeleton::{BoneDef, RigDef, Skeleton};

/// Finger offsets along y (thumb first) and bones per finger.
pub const FINGER_Y: [f32; 5] = [-0.04, -0.02, 0.0, 0.02, 0.04];
pub const FINGER_NAMES: [&str; 5] = ["Thumb", "Index", "Middle", "Ring", "Pinky"];
pub const FINGER_LEN: [usize; 5] = [2, 3, 3, 3, 3];
/// Declaration order of the fingers under each hand.
pub const FINGER_DECL_ORDER: [usize; 5] = [2, 0, 4, 1, 3];

fn push(def: &mut RigDef, name: &str, head: [f32; 3], tail: [f32; 3], parent: Option<&str>) {
    def.bones.push(BoneDef {
        name: name.to_string(),
        head,
        tail,
        parent: parent.map(str::to_string),
    });
}

/// Humanoid in T-pose facing −y, z up.
///
/// - Spine: Root, Pelvis (hips split), Spine1, Spine2, Chest (shoulder split)
/// - Legs: Thigh, Shin, Foot, Toe per side
/// - Arms: Clavicle, UpperArm, Forearm, Hand per side; five fingers per hand,
///   declared out of anatomical order
/// - Neck, then Head
pub fn t_pose_def() -> RigDef {
    let mut def = RigDef {
        name: "TPose".to_string(),
        ..Default::default()
    };
    push(&mut def, "Root", [0.0, 0.0, 0.9], [0.0, 0.0, 1.0], None);
    push(&mut def, "Pelvis", [0.0, 0.0, 1.0], [0.0, 0.0, 1.1], Some("Root"));

    for (suffix, sx) in [("R", -1.0f32), ("L", 1.0f32)] {
        let x = 0.3 * sx;
        let thigh = format!("Thigh.{suffix}");
        let shin = format!("Shin.{suffix}");
        let foot = format!("Foot.{suffix}");
        let toe = format!("Toe.{suffix}");
        push(&mut def, &thigh, [x, 0.0, 1.0], [x, 0.0, 0.55], Some("Pelvis"));
        push(&mut def, &shin, [x, 0.0, 0.55], [x, 0.0, 0.1], Some(thigh.as_str()));
        push(&mut def, &foot, [x, 0.0, 0.1], [x, -0.15, 0.0], Some(shin.as_str()));
        push(&mut def, &toe, [x, -0.15, 0.0], [x, -0.25, 0.0], Some(foot.as_str()));
        if suffix == "R" {
            push(&mut def, "Spine1", [0.0, 0.0, 1.1], [0.0, 0.0, 1.25], Some("Pelvis"));
        }
    }
    push(&mut def, "Spine2", [0.0, 0.0, 1.25], [0.0, 0.0, 1.4], Some("Spine1"));
    push(&mut def, "Chest", [0.0, 0.0, 1.4], [0.0, 0.0, 1.5], Some("Spine2"));

    for (suffix, sx) in [("R", -1.0f32), ("L", 1.0f32)] {
        let clavicle = format!("Clavicle.{suffix}");
        let upper = format!("UpperArm.{suffix}");
        let fore = format!("Forearm.{suffix}");
        let hand = format!("Hand.{suffix}");
        push(&mut def, &clavicle, [0.05 * sx, 0.0, 1.5], [0.45 * sx, 0.0, 1.5], Some("Chest"));
        push(&mut def, &upper, [0.45 * sx, 0.0, 1.5], [0.7 * sx, 0.0, 1.5], Some(clavicle.as_str()));
        push(&mut def, &fore, [0.7 * sx, 0.0, 1.5], [0.9 * sx, 0.0, 1.5], Some(upper.as_str()));
        push(&mut def, &hand, [0.9 * sx, 0.0, 1.5], [0.95 * sx, 0.0, 1.5], Some(fore.as_str()));
        for &f in &FINGER_DECL_ORDER {
            let y = FINGER_Y[f];
            let mut parent = hand.clone();
            for seg in 0..FINGER_LEN[f] {
                let name = finger_bone(f, seg, suffix);
                let x0 = (0.95 + 0.05 * seg as f32) * sx;
                let x1 = (1.0 + 0.05 * seg as f32) * sx;
                push(&mut def, &name, [x0, y, 1.5], [x1, y, 1.5], Some(parent.as_str()));
                parent = name;
            }
        }
        if suffix == "R" {
            push(&mut def, "Neck", [0.0, 0.0, 1.5], [0.0, 0.0, 1.6], Some("Chest"));
        }
    }
    push(&mut def, "Head", [0.0, 0.0, 1.6], [0.0, 0.0, 1.8], Some("Neck"));
    def
}

/// Name of bone `seg` (0-based) of finger `f` on side `suffix` ("R"/"L").
pub fn finger_bone(f: usize, seg: usize, suffix: &str) -> String {
    format!("{}{}.{suffix}", FINGER_NAMES[f], seg + 1)
}

/// Expected bone names of finger `f`.
pub fn finger_chain(f: usize, suffix: &str) -> Vec<String> {
    (0..FINGER_LEN[f]).map(|seg| finger_bone(f, seg, suffix)).collect()
}

pub fn t_pose() -> Skeleton {
    Skeleton::from_def(t_pose_def()).expect("synthetic rig is valid")
}

/// Mirror a rig description across the x = 0 plane.
pub fn mirror_x(mut def: RigDef) -> RigDef {
    for b in &mut def.bones {
        b.head[0] = -b.head[0];
        b.tail[0] = -b.tail[0];
    }
    def
}

/// Same rig with every bone renamed; the head bone keeps a name carrying
/// the head token.
pub fn renamed(mut def: RigDef, prefix: &str) -> RigDef {
    let rename = |n: &str| {
        if n == "Head" {
            "HeadBone".to_string()
        } else {
            format!("{prefix}{n}")
        }
    };
    for b in &mut def.bones {
        b.name = rename(&b.name);
        b.parent = b.parent.as_deref().map(rename);
    }
    def
}

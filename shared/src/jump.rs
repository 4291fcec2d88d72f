use crate::grounding::GroundingTracker;
use crate::physics::{BodyHandle, RigidBodies, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpOutcome {
    Jumped,
    NotGrounded,
    NoBody,
}

impl JumpOutcome {
    pub fn fired(self) -> bool {
        self == JumpOutcome::Jumped
    }
}

/// React to a jump press edge.
///
/// Fires at most once per grounding acquisition: a successful jump closes the grounding
/// window, so a held key or a second press in mid-air does nothing until the foot sensor
/// enters the ground again.
pub fn try_jump<B: RigidBodies>(
    grounding: &mut GroundingTracker,
    bodies: &mut B,
    body: Option<BodyHandle>,
    jump_impulse: f32,
) -> JumpOutcome {
    let Some(body) = body else {
        return JumpOutcome::NoBody;
    };
    if !grounding.is_jump_allowed() {
        return JumpOutcome::NotGrounded;
    }

    bodies.apply_impulse(body, Vec3::new(0.0, jump_impulse, 0.0));
    grounding.invalidate();
    log::debug!("jump fired (impulse={jump_impulse})");
    JumpOutcome::Jumped
}

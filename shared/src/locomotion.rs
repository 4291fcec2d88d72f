use crate::input::{ActionSet, LogicalAction};
use crate::physics::{BodyHandle, RigidBodies, Vec3};

/// Horizontal impulse for the held move actions.
///
/// Left is −X and right is +X with the same magnitude; holding both cancels out. Never has
/// a Y or Z component.
#[inline]
pub fn horizontal_impulse(actions: ActionSet, magnitude: f32) -> Vec3 {
    let mut x = 0.0;
    if actions.has(LogicalAction::MoveLeft) {
        x -= magnitude;
    }
    if actions.has(LogicalAction::MoveRight) {
        x += magnitude;
    }
    Vec3::new(x, 0.0, 0.0)
}

/// Push the player body for one step.
///
/// Returns the impulse that was applied. The step callback may run before the body is
/// attached, in which case nothing happens.
pub fn apply_locomotion<B: RigidBodies>(
    bodies: &mut B,
    body: Option<BodyHandle>,
    actions: ActionSet,
    magnitude: f32,
) -> Vec3 {
    let Some(body) = body else {
        return Vec3::zeros();
    };

    let impulse = horizontal_impulse(actions, magnitude);
    if impulse.x != 0.0 {
        bodies.apply_impulse(body, impulse);
    }
    impulse
}

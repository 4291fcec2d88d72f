//! The seam between the gameplay core and whatever simulates the bodies.

use rapier3d::na;
use rapier3d::prelude::RigidBodyHandle;

pub type Vec3 = na::Vector3<f32>;

/// Generational index into the collaborator's body table.
///
/// A stale handle (body removed) resolves to nothing, so every operation below is a
/// no-op on it rather than an error.
pub type BodyHandle = RigidBodyHandle;

/// Operations the gameplay core needs from the physics collaborator.
pub trait RigidBodies {
    /// Apply an instantaneous velocity change, scaled by the body's mass properties.
    fn apply_impulse(&mut self, body: BodyHandle, impulse: Vec3);

    /// Teleport a body.
    fn set_translation(&mut self, body: BodyHandle, translation: Vec3, wake: bool);

    /// Override a body's orientation from XYZ euler angles (radians).
    fn set_rotation(&mut self, body: BodyHandle, euler: Vec3, wake: bool);
}

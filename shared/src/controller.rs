use crate::config::PlayerConfig;
use crate::grounding::{GroundingTracker, SensorEvent};
use crate::input::ActionSet;
use crate::jump::{JumpOutcome, try_jump};
use crate::locomotion::apply_locomotion;
use crate::physics::{BodyHandle, RigidBodies, Vec3};

/// Player-side state: tuning magnitudes plus the grounding window.
///
/// The body itself lives in the physics collaborator; callers pass its handle in, and
/// `None` (not spawned yet) makes every operation a no-op.
#[derive(Clone, Debug)]
pub struct PlayerController {
    move_impulse: f32,
    jump_impulse: f32,
    grounding: GroundingTracker,
}

impl PlayerController {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            move_impulse: config.move_impulse,
            jump_impulse: config.jump_impulse,
            grounding: GroundingTracker::new(config.coyote_duration),
        }
    }

    /// Per-step callback: horizontal push from held actions, then grounding decay.
    pub fn step<B: RigidBodies>(
        &mut self,
        bodies: &mut B,
        body: Option<BodyHandle>,
        held: ActionSet,
        dt_seconds: f32,
    ) -> Vec3 {
        let impulse = apply_locomotion(bodies, body, held, self.move_impulse);
        self.grounding.decay(dt_seconds);
        impulse
    }

    /// Jump press edge.
    pub fn on_jump_pressed<B: RigidBodies>(
        &mut self,
        bodies: &mut B,
        body: Option<BodyHandle>,
    ) -> JumpOutcome {
        try_jump(&mut self.grounding, bodies, body, self.jump_impulse)
    }

    pub fn on_foot_sensor(&mut self, event: SensorEvent) {
        self.grounding.on_sensor(event);
    }

    pub fn can_jump(&self) -> bool {
        self.grounding.is_jump_allowed()
    }

    pub fn grounding(&self) -> &GroundingTracker {
        &self.grounding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, map_keys};
    use crate::physics::testing::{RecordingBodies, handle};

    fn controller() -> PlayerController {
        PlayerController::new(&PlayerConfig::default())
    }

    /// Grounded, then the foot sensor exits at t = 0; steps of `dt` until `t`, then press jump.
    fn jump_after_exit(t: f32, dt: f32) -> JumpOutcome {
        let mut pc = controller();
        let mut bodies = RecordingBodies::default();
        let body = Some(handle(0));

        pc.on_foot_sensor(SensorEvent::Enter);
        pc.step(&mut bodies, body, ActionSet::empty(), dt);
        pc.on_foot_sensor(SensorEvent::Exit);

        let steps = (t / dt).round() as usize;
        for _ in 0..steps {
            pc.step(&mut bodies, body, ActionSet::empty(), dt);
        }
        pc.on_jump_pressed(&mut bodies, body)
    }

    #[test]
    fn coyote_scenario_jump_at_50ms_fires() {
        assert_eq!(jump_after_exit(0.05, 0.01), JumpOutcome::Jumped);
        assert_eq!(jump_after_exit(0.05, 0.05), JumpOutcome::Jumped);
    }

    #[test]
    fn coyote_scenario_jump_at_150ms_does_not_fire() {
        assert_eq!(jump_after_exit(0.15, 0.01), JumpOutcome::NotGrounded);
        assert_eq!(jump_after_exit(0.15, 0.05), JumpOutcome::NotGrounded);
    }

    #[test]
    fn jump_window_boundary() {
        for ms in [10, 30, 60, 90] {
            assert!(jump_after_exit(ms as f32 / 1000.0, 0.001).fired(), "{ms}ms");
        }
        for ms in [100, 120, 500] {
            assert!(!jump_after_exit(ms as f32 / 1000.0, 0.001).fired(), "{ms}ms");
        }
    }

    #[test]
    fn held_jump_fires_once_per_landing() {
        let mut pc = controller();
        let mut bodies = RecordingBodies::default();
        let body = Some(handle(0));
        let jump = map_keys([Key::Space]);

        pc.on_foot_sensor(SensorEvent::Enter);
        assert!(pc.on_jump_pressed(&mut bodies, body).fired());
        for _ in 0..10 {
            pc.step(&mut bodies, body, jump, 1.0 / 60.0);
            assert!(!pc.on_jump_pressed(&mut bodies, body).fired());
        }

        let jumps = bodies.impulses().iter().filter(|i| i.y > 0.0).count();
        assert_eq!(jumps, 1);
    }

    #[test]
    fn step_pushes_and_never_adds_vertical_impulse() {
        let mut pc = controller();
        let mut bodies = RecordingBodies::default();
        let body = Some(handle(0));

        for keys in [vec![Key::ArrowLeft], vec![Key::ArrowRight, Key::Space], vec![]] {
            let applied = pc.step(&mut bodies, body, map_keys(keys), 1.0 / 60.0);
            assert_eq!(applied.y, 0.0);
            assert_eq!(applied.z, 0.0);
        }
        assert!(bodies.net_impulse().norm() < 1.0e-6);
    }

    #[test]
    fn no_body_yet_is_harmless() {
        let mut pc = controller();
        let mut bodies = RecordingBodies::default();
        pc.on_foot_sensor(SensorEvent::Enter);
        pc.step(&mut bodies, None, map_keys([Key::ArrowLeft]), 1.0 / 60.0);
        assert_eq!(pc.on_jump_pressed(&mut bodies, None), JumpOutcome::NoBody);
        assert!(bodies.calls.is_empty());
        assert!(pc.can_jump());
    }
}

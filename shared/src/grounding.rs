//! Coyote-time grounding.
//!
//! The foot sensor reports enter/exit. While it touches something walkable the jump window
//! stays full; once the last contact ends the window drains by elapsed step time. A jump
//! spends the window and it stays closed until the sensor enters something again.

use crate::constants::GROUNDING_EPS;

/// Foot-sensor intersection change reported by the physics collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorEvent {
    Enter,
    Exit,
}

#[derive(Clone, Debug)]
pub struct GroundingTracker {
    coyote_duration: f32,
    remaining: f32,
    /// Walkable colliders currently overlapping the foot sensor.
    contacts: u32,
    /// Cleared by a jump, set again by the next sensor enter.
    armed: bool,
}

impl GroundingTracker {
    pub fn new(coyote_duration: f32) -> Self {
        Self {
            coyote_duration,
            remaining: 0.0,
            contacts: 0,
            armed: false,
        }
    }

    pub fn on_sensor(&mut self, event: SensorEvent) {
        match event {
            SensorEvent::Enter => {
                self.contacts += 1;
                self.armed = true;
                self.remaining = self.coyote_duration;
                log::debug!("foot sensor enter (contacts={})", self.contacts);
            }
            SensorEvent::Exit => {
                self.contacts = self.contacts.saturating_sub(1);
                log::debug!("foot sensor exit (contacts={})", self.contacts);
            }
        }
    }

    /// Advance the window by one simulation step.
    pub fn decay(&mut self, dt_seconds: f32) {
        if self.armed && self.contacts > 0 {
            self.remaining = self.coyote_duration;
            return;
        }

        self.remaining = (self.remaining - dt_seconds.max(0.0)).max(0.0);
        if self.remaining < GROUNDING_EPS {
            self.remaining = 0.0;
        }
    }

    pub fn is_jump_allowed(&self) -> bool {
        self.remaining > 0.0
    }

    /// Close the window after a jump.
    pub fn invalidate(&mut self) {
        self.remaining = 0.0;
        self.armed = false;
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_touching(&self) -> bool {
        self.contacts > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COYOTE: f32 = 0.1;

    fn left_ground() -> GroundingTracker {
        let mut g = GroundingTracker::new(COYOTE);
        g.on_sensor(SensorEvent::Enter);
        g.decay(0.016);
        g.on_sensor(SensorEvent::Exit);
        g
    }

    #[test]
    fn starts_without_jump() {
        let g = GroundingTracker::new(COYOTE);
        assert!(!g.is_jump_allowed());
        assert_eq!(g.remaining(), 0.0);
    }

    #[test]
    fn standing_keeps_window_full() {
        let mut g = GroundingTracker::new(COYOTE);
        g.on_sensor(SensorEvent::Enter);
        for _ in 0..100 {
            g.decay(0.016);
        }
        assert!(g.is_jump_allowed());
        assert!((g.remaining() - COYOTE).abs() < 1.0e-6);
    }

    #[test]
    fn jump_within_coyote_window_after_exit() {
        let mut g = left_ground();
        g.decay(0.05);
        assert!(g.is_jump_allowed());
    }

    #[test]
    fn window_expires_after_coyote_duration() {
        let mut g = left_ground();
        g.decay(0.05);
        g.decay(0.05);
        g.decay(0.05);
        assert!(!g.is_jump_allowed());
        assert_eq!(g.remaining(), 0.0);
    }

    #[test]
    fn exact_duration_closes_window() {
        let mut g = left_ground();
        for _ in 0..10 {
            g.decay(0.01);
        }
        assert!(!g.is_jump_allowed());
    }

    #[test]
    fn remaining_never_negative() {
        let mut g = left_ground();
        g.decay(10.0);
        assert_eq!(g.remaining(), 0.0);
        g.decay(-1.0);
        assert_eq!(g.remaining(), 0.0);
    }

    #[test]
    fn invalidate_holds_until_fresh_enter() {
        let mut g = GroundingTracker::new(COYOTE);
        g.on_sensor(SensorEvent::Enter);
        g.invalidate();
        // Still overlapping the floor for a few steps after the impulse.
        g.decay(0.016);
        g.decay(0.016);
        assert!(!g.is_jump_allowed());

        g.on_sensor(SensorEvent::Exit);
        g.decay(0.016);
        assert!(!g.is_jump_allowed());

        g.on_sensor(SensorEvent::Enter);
        assert!(g.is_jump_allowed());
    }

    #[test]
    fn window_drains_only_after_last_contact_leaves() {
        let mut g = GroundingTracker::new(COYOTE);
        g.on_sensor(SensorEvent::Enter);
        g.on_sensor(SensorEvent::Enter);
        g.on_sensor(SensorEvent::Exit);
        g.decay(1.0);
        assert!(g.is_jump_allowed());

        g.on_sensor(SensorEvent::Exit);
        g.decay(1.0);
        assert!(!g.is_jump_allowed());
    }

    #[test]
    fn unmatched_exit_saturates() {
        let mut g = GroundingTracker::new(COYOTE);
        g.on_sensor(SensorEvent::Exit);
        assert!(!g.is_touching());
        g.on_sensor(SensorEvent::Enter);
        assert!(g.is_touching());
    }
}

use crate::constants::{BRUSH_NAME, PLAYER_NAME};

/// Contact or intersection start between two named entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionEvent<'a> {
    pub first: &'a str,
    pub second: &'a str,
}

impl<'a> CollisionEvent<'a> {
    pub fn new(first: &'a str, second: &'a str) -> Self {
        Self { first, second }
    }

    /// True if the event names exactly `a` and `b`, in either order.
    pub fn involves_pair(&self, a: &str, b: &str) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupOutcome {
    /// First player/brush contact. The caller removes the brush from the world.
    Collected,
    Ignored,
}

/// One-way "has the brush" flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct PickupTracker {
    collected: bool,
}

impl PickupTracker {
    pub fn on_contact(&mut self, event: &CollisionEvent<'_>) -> PickupOutcome {
        if self.collected || !event.involves_pair(PLAYER_NAME, BRUSH_NAME) {
            return PickupOutcome::Ignored;
        }

        self.collected = true;
        log::info!("brush collected");
        PickupOutcome::Collected
    }

    pub fn collected(&self) -> bool {
        self.collected
    }
}

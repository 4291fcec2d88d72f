//! Raw keyboard state to logical actions.

use crate::bitmask_flags::BitmaskFlags;
use crate::define_bitmask_flags;

define_bitmask_flags!(LogicalAction, u8, {
    MoveLeft,
    MoveRight,
    Jump,
});

/// The set of logical actions active in one input sample.
pub type ActionSet = BitmaskFlags<u8>;

/// Engine-neutral identifiers for the keys the arena cares about.
///
/// Anything else the platform reports maps to [`Key::Other`] and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    KeyA,
    KeyD,
    KeyW,
    Space,
    Other,
}

/// Fixed key → action table.
///
/// Both the headless mapper and the client's input map are built from this table so the
/// two can never disagree.
pub const BINDINGS: &[(Key, LogicalAction)] = &[
    (Key::ArrowLeft, LogicalAction::MoveLeft),
    (Key::KeyA, LogicalAction::MoveLeft),
    (Key::ArrowRight, LogicalAction::MoveRight),
    (Key::KeyD, LogicalAction::MoveRight),
    (Key::Space, LogicalAction::Jump),
    (Key::ArrowUp, LogicalAction::Jump),
    (Key::KeyW, LogicalAction::Jump),
];

/// Map the currently pressed keys to the active logical actions.
pub fn map_keys<I>(pressed: I) -> ActionSet
where
    I: IntoIterator<Item = Key>,
{
    let mut actions = ActionSet::empty();
    for key in pressed {
        for (bound, action) in BINDINGS {
            if *bound == key {
                actions.add(*action);
            }
        }
    }
    actions
}

/// Edges between two consecutive input samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionEdges {
    pub just_pressed: ActionSet,
    pub just_released: ActionSet,
}

impl ActionEdges {
    pub fn pressed(&self, action: LogicalAction) -> bool {
        self.just_pressed.has(action)
    }
}

/// Remembers the previous sample so press/release edges can be derived from held state.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionSampler {
    previous: ActionSet,
}

impl ActionSampler {
    pub fn sample(&mut self, held: ActionSet) -> ActionEdges {
        let edges = ActionEdges {
            just_pressed: held.difference(self.previous),
            just_released: self.previous.difference(held),
        };
        self.previous = held;
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_letters_map_to_the_same_actions() {
        let arrows = map_keys([Key::ArrowLeft, Key::ArrowUp]);
        let letters = map_keys([Key::KeyA, Key::Space]);
        assert_eq!(arrows, letters);
        assert!(arrows.has(LogicalAction::MoveLeft));
        assert!(arrows.has(LogicalAction::Jump));
        assert!(!arrows.has(LogicalAction::MoveRight));
    }

    #[test]
    fn every_declared_key_but_other_is_bound() {
        assert_eq!(map_keys([Key::KeyW]), map_keys([Key::Space]));
        for key in [
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::ArrowUp,
            Key::KeyA,
            Key::KeyD,
            Key::KeyW,
            Key::Space,
        ] {
            assert!(!map_keys([key]).is_empty(), "{key:?} is unbound");
        }
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert!(map_keys([Key::Other]).is_empty());
        assert!(map_keys(std::iter::empty::<Key>()).is_empty());
    }

    #[test]
    fn sampler_reports_press_once_while_held() {
        let mut sampler = ActionSampler::default();
        let jump = map_keys([Key::Space]);

        assert!(sampler.sample(jump).pressed(LogicalAction::Jump));
        assert!(!sampler.sample(jump).pressed(LogicalAction::Jump));
        assert!(!sampler.sample(jump).pressed(LogicalAction::Jump));

        let released = sampler.sample(ActionSet::empty());
        assert!(released.just_released.has(LogicalAction::Jump));
        assert!(released.just_pressed.is_empty());
        assert!(sampler.sample(jump).pressed(LogicalAction::Jump));
    }
}

use arena_shared::{ActionSet, BINDINGS, Key, LogicalAction};
use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

/// Leafwing mirror of [`LogicalAction`].
#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    MoveLeft,
    MoveRight,
    Jump,
}

impl From<LogicalAction> for PlayerAction {
    fn from(action: LogicalAction) -> Self {
        match action {
            LogicalAction::MoveLeft => PlayerAction::MoveLeft,
            LogicalAction::MoveRight => PlayerAction::MoveRight,
            LogicalAction::Jump => PlayerAction::Jump,
        }
    }
}

impl From<PlayerAction> for LogicalAction {
    fn from(action: PlayerAction) -> Self {
        match action {
            PlayerAction::MoveLeft => LogicalAction::MoveLeft,
            PlayerAction::MoveRight => LogicalAction::MoveRight,
            PlayerAction::Jump => LogicalAction::Jump,
        }
    }
}

fn key_code(key: Key) -> Option<KeyCode> {
    match key {
        Key::ArrowLeft => Some(KeyCode::ArrowLeft),
        Key::ArrowRight => Some(KeyCode::ArrowRight),
        Key::ArrowUp => Some(KeyCode::ArrowUp),
        Key::KeyA => Some(KeyCode::KeyA),
        Key::KeyD => Some(KeyCode::KeyD),
        Key::KeyW => Some(KeyCode::KeyW),
        Key::Space => Some(KeyCode::Space),
        Key::Other => None,
    }
}

/// The single input map for the app, built from the shared binding table.
pub fn input_map() -> InputMap<PlayerAction> {
    let mut input_map = InputMap::<PlayerAction>::default();
    for (key, action) in BINDINGS {
        if let Some(code) = key_code(*key) {
            input_map.insert(PlayerAction::from(*action), code);
        }
    }
    input_map
}

/// Held actions this frame, as the gameplay core expects them.
pub fn held_actions(state: &ActionState<PlayerAction>) -> ActionSet {
    [
        PlayerAction::MoveLeft,
        PlayerAction::MoveRight,
        PlayerAction::Jump,
    ]
    .into_iter()
    .filter(|action| state.pressed(action))
    .map(LogicalAction::from)
    .collect()
}

pub(super) fn plugin(app: &mut App) {
    // Registered once; the plugin polls the keyboard each frame and updates the resource.
    app.add_plugins(InputManagerPlugin::<PlayerAction>::default());

    app.register_type::<PlayerAction>();

    app.insert_resource(input_map());
    app.insert_resource(ActionState::<PlayerAction>::default());
}

/// Entity name carried by the player body and its colliders.
pub const PLAYER_NAME: &str = "player";

/// Entity name carried by the collectible brush.
pub const BRUSH_NAME: &str = "brush";

/// Horizontal impulse applied per step while a move action is held.
pub const DEFAULT_MOVE_IMPULSE: f32 = 0.8;

/// Vertical impulse applied once per jump.
pub const DEFAULT_JUMP_IMPULSE: f32 = 10.0;

/// Grace window (seconds) after leaving the ground during which a jump is still honored.
pub const DEFAULT_COYOTE_DURATION: f32 = 0.1;

/// Gravity along Y in meters per second squared (negative is down).
pub const DEFAULT_GRAVITY_Y: f32 = -9.81;

/// Remaining grounding time below this is treated as expired.
///
/// Repeated `f32` subtraction otherwise leaves a few ulps behind and keeps the window open
/// for one extra step.
pub const GROUNDING_EPS: f32 = 1.0e-6;

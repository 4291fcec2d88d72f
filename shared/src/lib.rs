pub mod bitmask_flags;
pub mod config;
pub mod constants;
pub mod controller;
pub mod grounding;
pub mod input;
pub mod jump;
pub mod locomotion;
pub mod physics;
pub mod pickup;
pub mod rapier_world;
pub mod session;

pub use config::{ArenaConfig, BlockDef, BrushConfig, ConfigError, PlayerConfig};
pub use constants::{
    BRUSH_NAME, DEFAULT_COYOTE_DURATION, DEFAULT_JUMP_IMPULSE, DEFAULT_MOVE_IMPULSE, PLAYER_NAME,
};
pub use controller::PlayerController;
pub use grounding::{GroundingTracker, SensorEvent};
pub use input::{ActionSet, BINDINGS, Key, LogicalAction, map_keys};
pub use physics::{BodyHandle, RigidBodies, Vec3};
pub use pickup::{CollisionEvent, PickupOutcome, PickupTracker};
pub use rapier_world::{ArenaWorld, WorldEvent};
pub use session::{ArenaSession, TickReport};

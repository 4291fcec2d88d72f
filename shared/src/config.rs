/*!
Arena tuning, resolved once at startup.

Every field has a default, so a RON file only needs to name what it overrides:

```ron
(
    player: (move_impulse: 1.2, coyote_duration: 0.15),
)
```

Values are taken as given. Negative sizes or impulses are the caller's problem.
*/

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{
    BRUSH_NAME, DEFAULT_COYOTE_DURATION, DEFAULT_GRAVITY_Y, DEFAULT_JUMP_IMPULSE,
    DEFAULT_MOVE_IMPULSE,
};
use crate::physics::Vec3;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read arena config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse arena config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal impulse per step while a move action is held.
    pub move_impulse: f32,
    /// Vertical impulse per jump.
    pub jump_impulse: f32,
    /// Seconds a jump is still honored after the foot sensor leaves the ground.
    pub coyote_duration: f32,
    pub half_extents: [f32; 3],
    pub spawn: [f32; 3],
    /// Keep the cube upright so the foot sensor always points down.
    pub lock_rotations: bool,
    pub foot_sensor_half_extents: [f32; 3],
    /// Foot sensor center relative to the body center.
    pub foot_sensor_offset: [f32; 3],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_impulse: DEFAULT_MOVE_IMPULSE,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            coyote_duration: DEFAULT_COYOTE_DURATION,
            half_extents: [0.5, 0.5, 0.5],
            spawn: [0.0, 5.0, 0.0],
            lock_rotations: true,
            foot_sensor_half_extents: [0.4, 0.05, 0.4],
            foot_sensor_offset: [0.0, -0.5, 0.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub half_extents: [f32; 3],
    /// Height the idle bob oscillates around.
    pub base_height: f32,
    pub bob_amplitude: f32,
    /// Rotate about all three axes while idle.
    pub spin: bool,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            half_extents: [0.25, 1.0, 0.25],
            base_height: 3.0,
            bob_amplitude: 1.0,
            spin: true,
        }
    }
}

impl BrushConfig {
    /// Idle pose at `elapsed` seconds: `(translation, euler)`.
    pub fn idle_pose(&self, elapsed: f32) -> (Vec3, Vec3) {
        let translation = Vec3::new(0.0, self.bob_amplitude * elapsed.sin() + self.base_height, 0.0);
        let euler = if self.spin {
            Vec3::new(elapsed, elapsed, elapsed)
        } else {
            Vec3::zeros()
        };
        (translation, euler)
    }
}

/// A fixed cuboid of the arena (floor, walls).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BlockDef {
    pub name: String,
    pub translation: [f32; 3],
    pub half_extents: [f32; 3],
}

impl BlockDef {
    pub fn new(name: &str, translation: [f32; 3], half_extents: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            translation,
            half_extents,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub gravity_y: f32,
    pub player: PlayerConfig,
    pub brush: BrushConfig,
    pub blocks: Vec<BlockDef>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            gravity_y: DEFAULT_GRAVITY_Y,
            player: PlayerConfig::default(),
            brush: BrushConfig::default(),
            blocks: default_blocks(),
        }
    }
}

/// 30×30 floor with its top face at y = 0, walled in on all four sides.
pub fn default_blocks() -> Vec<BlockDef> {
    vec![
        BlockDef::new("floor", [0.0, -0.5, 0.0], [15.0, 0.5, 15.0]),
        BlockDef::new("wall", [-15.0, 5.0, 0.0], [0.5, 5.0, 15.0]),
        BlockDef::new("wall", [15.0, 5.0, 0.0], [0.5, 5.0, 15.0]),
        BlockDef::new("wall", [0.0, 5.0, -15.0], [15.0, 5.0, 0.5]),
        BlockDef::new("wall", [0.0, 5.0, 15.0], [15.0, 5.0, 0.5]),
    ]
}

impl ArenaConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = ron::from_str(source)?;
        if config.blocks.iter().any(|b| b.name == BRUSH_NAME) {
            log::warn!("a static block is named {BRUSH_NAME:?}; touching it will not collect anything");
        }
        Ok(config)
    }

    pub fn load_from_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    /// Load `path`, falling back to the defaults when it is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from_ron(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default arena config");
                Self::default()
            }
        }
    }
}

#[inline]
pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ArenaConfig::default();
        assert_eq!(config.player.move_impulse, 0.8);
        assert_eq!(config.player.jump_impulse, 10.0);
        assert_eq!(config.player.coyote_duration, 0.1);
        assert_eq!(config.blocks.len(), 5);
    }

    #[test]
    fn partial_ron_overrides_only_named_fields() {
        let config = ArenaConfig::from_ron_str(
            "(player: (move_impulse: 1.5, coyote_duration: 0.2), gravity_y: -20.0)",
        )
        .unwrap();
        assert_eq!(config.player.move_impulse, 1.5);
        assert_eq!(config.player.coyote_duration, 0.2);
        assert_eq!(config.player.jump_impulse, 10.0);
        assert_eq!(config.gravity_y, -20.0);
        assert_eq!(config.brush, BrushConfig::default());
        assert_eq!(config.blocks, default_blocks());
    }

    #[test]
    fn blocks_can_be_replaced() {
        let config = ArenaConfig::from_ron_str(
            r#"(blocks: [(name: "floor", translation: (0.0, -1.0, 0.0), half_extents: (5.0, 1.0, 5.0))])"#,
        )
        .unwrap();
        assert_eq!(config.blocks.len(), 1);
        assert_eq!(config.blocks[0].half_extents, [5.0, 1.0, 5.0]);
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = ArenaConfig::from_ron_str("(player: (move_impulse: \"fast\"))").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let err = ArenaConfig::load_from_ron("/nonexistent/arena.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert_eq!(
            ArenaConfig::load_or_default("/nonexistent/arena.ron"),
            ArenaConfig::default()
        );
    }

    #[test]
    fn brush_idle_pose_bobs_around_base_height() {
        let brush = BrushConfig::default();
        let (at_rest, euler) = brush.idle_pose(0.0);
        assert!((at_rest.y - 3.0).abs() < 1.0e-6);
        assert_eq!(euler, Vec3::zeros());

        let (peak, euler) = brush.idle_pose(std::f32::consts::FRAC_PI_2);
        assert!((peak.y - 4.0).abs() < 1.0e-5);
        assert!((euler.x - std::f32::consts::FRAC_PI_2).abs() < 1.0e-6);
    }
}

use std::path::PathBuf;

use arena_shared::ArenaConfig;
use bevy::prelude::*;

const ARENA_CONFIG_FILE: &str = "assets/arena.ron";

/// Arena tuning, resolved once at startup and never mutated.
#[derive(Resource, Debug, Clone, Deref)]
pub struct ArenaSettings(pub ArenaConfig);

/// Resolve the config path the same way Bevy resolves its asset root.
fn config_path() -> PathBuf {
    std::env::var_os("BEVY_ASSET_ROOT")
        .or_else(|| std::env::var_os("CARGO_MANIFEST_DIR"))
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(ARENA_CONFIG_FILE)
}

pub(super) fn plugin(app: &mut App) {
    let path = config_path();
    let config = ArenaConfig::load_or_default(&path);
    info!("arena config resolved from {}", path.display());
    app.insert_resource(ArenaSettings(config));
}

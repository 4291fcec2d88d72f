//! Debug/performance tooling for native dev builds.
//!
//! Compiled only behind `dev_native` (see `main.rs`). Adds the perf overlay and draws the
//! player's foot sensor: green while standing, amber inside the coyote window, red once a
//! jump is no longer allowed.

use crate::simulation::ArenaSim;
use arena_shared::GroundingTracker;
use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;

/// Add debug/perf tooling (intended for `dev_native` builds only).
pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.add_systems(Startup, spawn_perf_ui);
    app.add_systems(
        PostUpdate,
        draw_foot_sensor.run_if(resource_exists::<ArenaSim>),
    );
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn(PerfUiAllEntries::default());
}

fn draw_foot_sensor(mut gizmos: Gizmos, sim: Res<ArenaSim>) {
    let Some(player) = sim.0.world().player_translation() else {
        return;
    };
    let config = &sim.0.config().player;
    let offset = Vec3::from_array(config.foot_sensor_offset);
    let size = Vec3::from_array(config.foot_sensor_half_extents) * 2.0;
    let color = sensor_color(
        sim.0.controller().grounding(),
        sim.0.controller().can_jump(),
    );

    let center = Vec3::new(player.x, player.y, player.z) + offset;
    gizmos.cuboid(Transform::from_translation(center).with_scale(size), color);
}

fn sensor_color(grounding: &GroundingTracker, can_jump: bool) -> Color {
    match (grounding.is_touching(), can_jump) {
        (true, true) => Color::srgb(0.2, 0.9, 0.3),
        (false, true) => Color::srgb(0.95, 0.7, 0.1),
        _ => Color::srgb(0.9, 0.2, 0.2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_shared::SensorEvent;

    fn color(grounding: &GroundingTracker) -> Color {
        sensor_color(grounding, grounding.is_jump_allowed())
    }

    #[test]
    fn sensor_color_tracks_grounding() {
        let mut grounding = GroundingTracker::new(0.1);
        assert_eq!(color(&grounding), Color::srgb(0.9, 0.2, 0.2));

        grounding.on_sensor(SensorEvent::Enter);
        assert_eq!(color(&grounding), Color::srgb(0.2, 0.9, 0.3));

        grounding.on_sensor(SensorEvent::Exit);
        grounding.decay(0.05);
        assert_eq!(color(&grounding), Color::srgb(0.95, 0.7, 0.1));
    }
}

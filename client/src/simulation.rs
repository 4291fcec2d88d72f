use crate::{
    input::{PlayerAction, held_actions},
    settings::ArenaSettings,
    world::{BrushMesh, PlayerMesh},
};
use arena_shared::{ArenaSession, rapier_world::rapier3d::na::UnitQuaternion};
use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;

const FIXED_HZ: f64 = 60.0;

/// The headless arena session, stepped on the fixed schedule.
#[derive(Resource)]
pub struct ArenaSim(pub ArenaSession);

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ));
    app.add_systems(Startup, start_session);
    app.add_systems(FixedUpdate, tick.run_if(resource_exists::<ArenaSim>));
    app.add_systems(
        PostUpdate,
        sync_render_transforms.run_if(resource_exists::<ArenaSim>),
    );
}

fn start_session(mut commands: Commands, settings: Res<ArenaSettings>) {
    commands.insert_resource(ArenaSim(ArenaSession::new(settings.0.clone())));
}

fn tick(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    actions: Res<ActionState<PlayerAction>>,
    mut sim: ResMut<ArenaSim>,
    brush: Query<Entity, With<BrushMesh>>,
) {
    let report = sim.0.tick(held_actions(&actions), time.delta_secs());

    if report.jumped {
        debug!("jump at t={:.2}s", sim.0.elapsed());
    }
    if report.collected {
        info!("brush picked up at t={:.2}s", sim.0.elapsed());
        for entity in &brush {
            commands.entity(entity).despawn();
        }
    }
}

fn to_bevy(translation: arena_shared::Vec3, rotation: UnitQuaternion<f32>) -> (Vec3, Quat) {
    let q = rotation.into_inner().coords;
    (
        Vec3::new(translation.x, translation.y, translation.z),
        Quat::from_xyzw(q.x, q.y, q.z, q.w),
    )
}

fn sync_render_transforms(
    sim: Res<ArenaSim>,
    mut player_q: Query<&mut Transform, (With<PlayerMesh>, Without<BrushMesh>)>,
    mut brush_q: Query<&mut Transform, (With<BrushMesh>, Without<PlayerMesh>)>,
) {
    let world = sim.0.world();

    let bodies = [
        (world.player(), player_q.single_mut()),
        (world.brush(), brush_q.single_mut()),
    ];
    for (body, transform) in bodies {
        let (Some(body), Ok(mut transform)) = (body, transform) else {
            continue;
        };
        let Some((translation, rotation)) = world.pose(body) else {
            continue;
        };
        let (translation, rotation) = to_bevy(translation, rotation);
        transform.translation = translation;
        transform.rotation = rotation;
    }
}

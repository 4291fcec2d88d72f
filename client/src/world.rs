use crate::settings::ArenaSettings;
use bevy::prelude::*;

/// Render entity following the physics player body.
#[derive(Component)]
pub struct PlayerMesh;

/// Render entity following the brush; despawned once the brush is collected.
#[derive(Component)]
pub struct BrushMesh;

/// Flat white fill for faces the directional light misses.
const AMBIENT_BRIGHTNESS: f32 = 500.0;

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
    app.add_systems(Startup, setup);
}

fn size(half_extents: [f32; 3]) -> Vec3 {
    Vec3::from_array(half_extents) * 2.0
}

fn setup(
    mut commands: Commands,
    settings: Res<ArenaSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let block_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xf0, 0xf0, 0xf0),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    });

    for block in &settings.blocks {
        let extent = size(block.half_extents);
        commands.spawn((
            Name::new(block.name.clone()),
            Mesh3d(meshes.add(Cuboid::from_size(extent))),
            MeshMaterial3d(block_material.clone()),
            Transform::from_translation(Vec3::from_array(block.translation)),
        ));
    }

    let player = &settings.player;
    commands.spawn((
        Name::new(arena_shared::PLAYER_NAME),
        PlayerMesh,
        Mesh3d(meshes.add(Cuboid::from_size(size(player.half_extents)))),
        MeshMaterial3d(materials.add(Color::BLACK)),
        Transform::from_translation(Vec3::from_array(player.spawn)),
    ));

    let brush = &settings.brush;
    let (start, _) = brush.idle_pose(0.0);
    commands.spawn((
        Name::new(arena_shared::BRUSH_NAME),
        BrushMesh,
        Mesh3d(meshes.add(Cuboid::from_size(size(brush.half_extents)))),
        MeshMaterial3d(materials.add(Color::srgb_u8(0xff, 0x7f, 0x50))),
        Transform::from_xyz(start.x, start.y, start.z),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("arena scene spawned ({} blocks)", settings.blocks.len());
}

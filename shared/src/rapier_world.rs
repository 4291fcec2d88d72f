//! Rapier-backed arena simulation.
//!
//! Owns every Rapier set needed to step a small dynamic scene: fixed arena blocks, a
//! dynamic player cuboid with a foot sensor, and a kinematic brush sensor. Rapier reports
//! collider handles; a tag table turns those into the entity names and roles the gameplay
//! core reasons about.
//!
//! Determinism
//! - Blocks are inserted in config order, then the player, then the brush.
//! - Events are drained in the order Rapier emitted them.

// Re-export Rapier so the client can reach its types without depending on it directly.
pub use rapier3d;

use std::collections::HashMap;
use std::sync::mpsc::channel;

use rapier3d::na::UnitQuaternion;
use rapier3d::prelude::*;

use crate::config::{ArenaConfig, BlockDef, BrushConfig, PlayerConfig, vec3};
use crate::constants::{BRUSH_NAME, PLAYER_NAME};
use crate::grounding::SensorEvent;
use crate::physics::{BodyHandle, RigidBodies, Vec3};

/// What a collider is for, independent of which entity owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColliderRole {
    /// Participates in contact response (blocks, the player's body).
    Solid,
    /// The player's downward-facing grounding sensor.
    FootSensor,
    /// The collectible's sensor.
    Pickup,
}

#[derive(Clone, Debug)]
struct ColliderTag {
    name: String,
    role: ColliderRole,
}

/// Gameplay-relevant outcome of one Rapier collision event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldEvent {
    /// The foot sensor started or stopped overlapping a solid collider.
    FootSensor(SensorEvent),
    /// Two named entities started touching or overlapping.
    Contact { first: String, second: String },
}

pub struct ArenaWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    pipeline: PhysicsPipeline,
    params: IntegrationParameters,
    gravity: Vector<f32>,
    tags: HashMap<ColliderHandle, ColliderTag>,
    player: Option<BodyHandle>,
    brush: Option<BodyHandle>,
}

impl ArenaWorld {
    /// An arena with gravity and nothing in it.
    pub fn empty(gravity_y: f32) -> Self {
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            pipeline: PhysicsPipeline::new(),
            params: IntegrationParameters::default(),
            gravity: Vector::new(0.0, gravity_y, 0.0),
            tags: HashMap::new(),
            player: None,
            brush: None,
        }
    }

    /// Build the full arena described by `config`.
    pub fn build(config: &ArenaConfig) -> Self {
        let mut world = Self::empty(config.gravity_y);
        for block in &config.blocks {
            world.insert_block(block);
        }
        world.insert_player(&config.player);
        world.insert_brush(&config.brush);

        log::info!(
            "arena built: {} blocks, {} bodies, {} colliders",
            config.blocks.len(),
            world.bodies.len(),
            world.colliders.len()
        );
        world
    }

    pub fn insert_block(&mut self, block: &BlockDef) -> BodyHandle {
        let rb = RigidBodyBuilder::fixed()
            .translation(vec3(block.translation))
            .build();
        let handle = self.bodies.insert(rb);

        let [hx, hy, hz] = block.half_extents;
        self.insert_tagged(
            ColliderBuilder::cuboid(hx, hy, hz).build(),
            handle,
            &block.name,
            ColliderRole::Solid,
        );
        handle
    }

    pub fn insert_player(&mut self, player: &PlayerConfig) -> BodyHandle {
        let mut builder = RigidBodyBuilder::dynamic().translation(vec3(player.spawn));
        if player.lock_rotations {
            builder = builder.lock_rotations();
        }
        let handle = self.bodies.insert(builder.build());

        let [hx, hy, hz] = player.half_extents;
        self.insert_tagged(
            ColliderBuilder::cuboid(hx, hy, hz).build(),
            handle,
            PLAYER_NAME,
            ColliderRole::Solid,
        );

        // Massless so it does not shift the body's center of mass.
        let [sx, sy, sz] = player.foot_sensor_half_extents;
        let foot = ColliderBuilder::cuboid(sx, sy, sz)
            .translation(vec3(player.foot_sensor_offset))
            .sensor(true)
            .density(0.0)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        self.insert_tagged(foot, handle, PLAYER_NAME, ColliderRole::FootSensor);

        self.player = Some(handle);
        handle
    }

    pub fn insert_brush(&mut self, brush: &BrushConfig) -> BodyHandle {
        let (translation, _) = brush.idle_pose(0.0);
        let rb = RigidBodyBuilder::kinematic_position_based()
            .translation(translation)
            .build();
        let handle = self.bodies.insert(rb);

        let [hx, hy, hz] = brush.half_extents;
        let sensor = ColliderBuilder::cuboid(hx, hy, hz)
            .sensor(true)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        self.insert_tagged(sensor, handle, BRUSH_NAME, ColliderRole::Pickup);

        self.brush = Some(handle);
        handle
    }

    fn insert_tagged(
        &mut self,
        collider: Collider,
        parent: BodyHandle,
        name: &str,
        role: ColliderRole,
    ) -> ColliderHandle {
        let handle = self
            .colliders
            .insert_with_parent(collider, parent, &mut self.bodies);
        self.tags.insert(
            handle,
            ColliderTag {
                name: name.to_string(),
                role,
            },
        );
        handle
    }

    /// Remove the brush body and its sensor. Returns false if it was already gone.
    pub fn remove_brush(&mut self) -> bool {
        let Some(handle) = self.brush.take() else {
            return false;
        };

        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        self.tags.retain(|_, tag| tag.role != ColliderRole::Pickup);
        log::info!("brush removed from the arena");
        true
    }

    /// Advance the simulation by `dt_seconds` and return what happened, in order.
    ///
    /// A non-positive `dt` does not step.
    pub fn step(&mut self, dt_seconds: f32) -> Vec<WorldEvent> {
        let mut events = Vec::new();
        if dt_seconds <= 0.0 {
            return events;
        }

        // Per-step channels: `ArenaWorld` must stay `Sync` to live in a Bevy resource.
        let (collision_send, collision_recv) = channel();
        let (contact_force_send, _contact_force_recv) = channel();
        let event_collector = ChannelEventCollector::new(collision_send, contact_force_send);

        self.params.dt = dt_seconds;
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &event_collector,
        );

        while let Ok(event) = collision_recv.try_recv() {
            self.translate_event(event, &mut events);
        }

        events
    }

    fn translate_event(&self, event: CollisionEvent, out: &mut Vec<WorldEvent>) {
        let (Some(a), Some(b)) = (
            self.tags.get(&event.collider1()),
            self.tags.get(&event.collider2()),
        ) else {
            return;
        };

        let grounding = matches!(
            (a.role, b.role),
            (ColliderRole::FootSensor, ColliderRole::Solid)
                | (ColliderRole::Solid, ColliderRole::FootSensor)
        );
        if grounding {
            let sensor = if event.started() {
                SensorEvent::Enter
            } else {
                SensorEvent::Exit
            };
            out.push(WorldEvent::FootSensor(sensor));
        }

        if event.started() {
            out.push(WorldEvent::Contact {
                first: a.name.clone(),
                second: b.name.clone(),
            });
        }
    }

    pub fn player(&self) -> Option<BodyHandle> {
        self.player
    }

    pub fn brush(&self) -> Option<BodyHandle> {
        self.brush
    }

    /// World pose of a body, if it still exists.
    pub fn pose(&self, body: BodyHandle) -> Option<(Vec3, UnitQuaternion<f32>)> {
        self.bodies
            .get(body)
            .map(|rb| (*rb.translation(), *rb.rotation()))
    }

    pub fn player_translation(&self) -> Option<Vec3> {
        self.player.and_then(|h| self.pose(h)).map(|(t, _)| t)
    }
}

impl RigidBodies for ArenaWorld {
    fn apply_impulse(&mut self, body: BodyHandle, impulse: Vec3) {
        if let Some(rb) = self.bodies.get_mut(body) {
            rb.apply_impulse(impulse, true);
        }
    }

    // Kinematic bodies are driven through their next pose so the step lands exactly on it.
    fn set_translation(&mut self, body: BodyHandle, translation: Vec3, wake: bool) {
        let Some(rb) = self.bodies.get_mut(body) else {
            return;
        };
        if rb.is_kinematic() {
            rb.set_next_kinematic_translation(translation);
        } else {
            rb.set_translation(translation, wake);
        }
    }

    fn set_rotation(&mut self, body: BodyHandle, euler: Vec3, wake: bool) {
        let Some(rb) = self.bodies.get_mut(body) else {
            return;
        };
        let rotation = UnitQuaternion::from_euler_angles(euler.x, euler.y, euler.z);
        if rb.is_kinematic() {
            rb.set_next_kinematic_rotation(rotation);
        } else {
            rb.set_rotation(rotation, wake);
        }
    }
}

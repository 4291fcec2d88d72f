//! Headless arena loop: the per-step schedule the external engine would otherwise drive.
//!
//! One `tick` runs, in order:
//! 1. input edges; a Jump press edge tries to jump against last step's grounding,
//! 2. locomotion from held actions and grounding decay,
//! 3. brush idle animation,
//! 4. the physics step,
//! 5. event dispatch: foot sensor → grounding, every contact → pickup,
//! 6. brush removal on the first pickup.

use crate::config::ArenaConfig;
use crate::controller::PlayerController;
use crate::input::{ActionSampler, ActionSet, Key, LogicalAction, map_keys};
use crate::physics::RigidBodies;
use crate::pickup::{CollisionEvent, PickupOutcome, PickupTracker};
use crate::rapier_world::{ArenaWorld, WorldEvent};

/// What a tick changed that the presentation layer cares about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub jumped: bool,
    /// The brush was collected (and removed) during this tick.
    pub collected: bool,
}

pub struct ArenaSession {
    config: ArenaConfig,
    world: ArenaWorld,
    controller: PlayerController,
    pickup: PickupTracker,
    sampler: ActionSampler,
    elapsed: f32,
}

impl ArenaSession {
    pub fn new(config: ArenaConfig) -> Self {
        let world = ArenaWorld::build(&config);
        let controller = PlayerController::new(&config.player);
        Self {
            config,
            world,
            controller,
            pickup: PickupTracker::default(),
            sampler: ActionSampler::default(),
            elapsed: 0.0,
        }
    }

    /// Advance one fixed step with the currently pressed keys.
    pub fn tick_keys<I>(&mut self, pressed: I, dt_seconds: f32) -> TickReport
    where
        I: IntoIterator<Item = Key>,
    {
        self.tick(map_keys(pressed), dt_seconds)
    }

    /// Advance one fixed step with the currently held actions.
    pub fn tick(&mut self, held: ActionSet, dt_seconds: f32) -> TickReport {
        let mut report = TickReport::default();
        let player = self.world.player();

        let edges = self.sampler.sample(held);
        if edges.pressed(LogicalAction::Jump) {
            report.jumped = self
                .controller
                .on_jump_pressed(&mut self.world, player)
                .fired();
        }

        self.controller
            .step(&mut self.world, player, held, dt_seconds);

        self.elapsed += dt_seconds.max(0.0);
        self.animate_brush();

        for event in self.world.step(dt_seconds) {
            match event {
                WorldEvent::FootSensor(sensor) => self.controller.on_foot_sensor(sensor),
                WorldEvent::Contact { first, second } => {
                    let contact = CollisionEvent::new(&first, &second);
                    if self.pickup.on_contact(&contact) == PickupOutcome::Collected {
                        report.collected = true;
                    }
                }
            }
        }

        if report.collected {
            self.world.remove_brush();
        }
        report
    }

    fn animate_brush(&mut self) {
        let Some(brush) = self.world.brush() else {
            return;
        };
        let (translation, euler) = self.config.brush.idle_pose(self.elapsed);
        self.world.set_translation(brush, translation, true);
        self.world.set_rotation(brush, euler, true);
    }

    pub fn world(&self) -> &ArenaWorld {
        &self.world
    }

    pub fn controller(&self) -> &PlayerController {
        &self.controller
    }

    pub fn collected(&self) -> bool {
        self.pickup.collected()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }
}

//! Fixed-timestep scheduler
//!
//! [`GameLoop`] batches input polling, registered systems, and per-entity
//! update subscribers into fixed logic ticks. Each frame callback drains
//! whole tick intervals from the accumulator (bounded by the catch-up
//! cap) and, per tick, runs strictly in this order:
//!
//! 1. poll the input source for a fresh snapshot,
//! 2. every registered system, in registration order,
//! 3. every per-entity subscriber, in registration order.
//!
//! After a frame that ran at least one tick, frame observers are notified
//! with a read-only view of the world; this is where the rendering
//! boundary picks up new component values.
//!
//! Teardown is dropping the loop: no further ticks occur, and mutations
//! from the last tick are not rolled back.

use super::{System, World};
use crate::core::config::LoopConfig;
use crate::engine::EngineError;
use crate::foundation::time::FrameClock;
use crate::input::{InputSnapshot, InputSource};
use crate::Entity;

/// Handle for removing a per-entity update subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type SubscriberFn = Box<dyn FnMut(&mut World, Entity, &InputSnapshot, f32)>;

struct Subscriber {
    id: SubscriberId,
    entity: Entity,
    callback: SubscriberFn,
}

/// Fixed-timestep game loop driving systems and subscribers
///
/// The loop owns the system set but not the world; the host injects the
/// world each frame, so isolated worlds and loops can be composed freely
/// in tests.
pub struct GameLoop {
    clock: FrameClock,
    input_source: Box<dyn InputSource>,
    last_input: InputSnapshot,
    systems: Vec<Box<dyn System>>,
    subscribers: Vec<Subscriber>,
    observers: Vec<Box<dyn FnMut(&World)>>,
    next_subscriber_id: u64,
}

impl std::fmt::Debug for GameLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLoop")
            .field("clock", &self.clock)
            .field("systems", &self.systems.len())
            .field("subscribers", &self.subscribers.len())
            .field("observers", &self.observers.len())
            .field("next_subscriber_id", &self.next_subscriber_id)
            .finish_non_exhaustive()
    }
}

impl GameLoop {
    /// Create a loop from a config and an input source
    ///
    /// Rejects a zero tick rate or a zero catch-up cap; both would make
    /// the accumulator policy meaningless.
    pub fn new(
        config: &LoopConfig,
        input_source: Box<dyn InputSource>,
    ) -> Result<Self, EngineError> {
        if config.fps == 0 {
            return Err(EngineError::InvalidConfig("fps must be positive".into()));
        }
        if config.max_catchup_ticks == 0 {
            return Err(EngineError::InvalidConfig(
                "max_catchup_ticks must be positive".into(),
            ));
        }

        Ok(Self {
            clock: FrameClock::new(config.fps, config.max_catchup_ticks),
            input_source,
            last_input: InputSnapshot::default(),
            systems: Vec::new(),
            subscribers: Vec::new(),
            observers: Vec::new(),
            next_subscriber_id: 0,
        })
    }

    /// Duration of one logic tick in milliseconds
    pub fn frame_ms(&self) -> f32 {
        self.clock.frame_ms()
    }

    /// The snapshot consumed by the most recent tick
    pub fn last_input(&self) -> InputSnapshot {
        self.last_input
    }

    /// Register a system; it runs after all previously registered systems
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        log::debug!("registered system {}", system.name());
        self.systems.push(Box::new(system));
    }

    /// Number of registered systems
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Register a per-entity update subscriber
    ///
    /// Subscribers run after all systems each tick and are pruned
    /// automatically once their entity is despawned.
    pub fn subscribe(
        &mut self,
        entity: Entity,
        callback: impl FnMut(&mut World, Entity, &InputSnapshot, f32) + 'static,
    ) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.subscribers.push(Subscriber {
            id,
            entity,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a subscriber; no-op if already gone
    ///
    /// Takes effect before the next tick runs.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        before != self.subscribers.len()
    }

    /// Register a frame observer notified after frames that ticked
    ///
    /// Observers get a read-only world; rendering reads component values
    /// here and never mutates them.
    pub fn observe(&mut self, observer: impl FnMut(&World) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Process one frame callback at timestamp `now_ms`
    ///
    /// Returns the number of logic ticks executed. A frame with no
    /// systems or subscribers still consumes accumulator time with no-op
    /// ticks.
    pub fn frame(&mut self, world: &mut World, now_ms: f64) -> u32 {
        let ticks = self.clock.advance(now_ms);
        let frame_ms = self.clock.frame_ms();

        for _ in 0..ticks {
            // Entities despawned since the last tick drop their
            // subscribers at this boundary.
            self.subscribers.retain(|s| world.contains(s.entity));

            self.last_input = self.input_source.poll();

            for system in &mut self.systems {
                system.run(world, &self.last_input, frame_ms);
            }

            for subscriber in &mut self.subscribers {
                (subscriber.callback)(world, subscriber.entity, &self.last_input, frame_ms);
            }
        }

        if ticks > 0 {
            for observer in &mut self.observers {
                observer(world);
            }
        }

        ticks
    }
}

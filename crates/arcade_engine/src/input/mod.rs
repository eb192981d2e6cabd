//! Input management system
//!
//! The loop consumes one [`InputSnapshot`] per tick, produced by whatever
//! [`InputSource`] the host wires in. Snapshots are replaced wholesale on
//! every poll; systems read the boolean flags and never mutate them.

/// Immutable-per-tick input state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    /// Up direction held
    pub up: bool,

    /// Down direction held
    pub down: bool,

    /// Left direction held
    pub left: bool,

    /// Right direction held
    pub right: bool,

    /// Primary action button held
    pub primary: bool,

    /// Secondary action button held
    pub secondary: bool,
}

impl InputSnapshot {
    /// Whether any directional flag is held
    pub fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Producer of per-tick input snapshots
///
/// The scheduler polls exactly once per tick, before any system runs.
/// Polling must not block; device I/O happens out-of-band and `poll`
/// only snapshots the latest state.
pub trait InputSource {
    /// Produce the snapshot for the tick that is about to run
    fn poll(&mut self) -> InputSnapshot;
}

/// Event-driven keyboard state
///
/// External windowing glue feeds key transitions in as they arrive;
/// `poll` then snapshots whatever is currently held. Nothing is polled
/// from the OS here.
#[derive(Debug, Default)]
pub struct KeyboardState {
    current: InputSnapshot,
}

/// Logical input signals a keyboard maps onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    /// Up direction
    Up,
    /// Down direction
    Down,
    /// Left direction
    Left,
    /// Right direction
    Right,
    /// Primary action
    Primary,
    /// Secondary action
    Secondary,
}

impl KeyboardState {
    /// Create a keyboard state with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition
    pub fn set_pressed(&mut self, signal: InputSignal, pressed: bool) {
        match signal {
            InputSignal::Up => self.current.up = pressed,
            InputSignal::Down => self.current.down = pressed,
            InputSignal::Left => self.current.left = pressed,
            InputSignal::Right => self.current.right = pressed,
            InputSignal::Primary => self.current.primary = pressed,
            InputSignal::Secondary => self.current.secondary = pressed,
        }
    }

    /// Release everything (e.g., on focus loss)
    pub fn clear(&mut self) {
        self.current = InputSnapshot::default();
    }
}

impl InputSource for KeyboardState {
    fn poll(&mut self) -> InputSnapshot {
        self.current
    }
}

/// Scripted input for tests and headless demos
///
/// Pops one queued snapshot per tick; once the queue drains, every later
/// tick sees the configured idle snapshot.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: std::collections::VecDeque<InputSnapshot>,
    idle: InputSnapshot,
}

impl ScriptedInput {
    /// Create an empty script (all ticks idle)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script from a sequence of per-tick snapshots
    pub fn from_snapshots(snapshots: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            queue: snapshots.into_iter().collect(),
            idle: InputSnapshot::default(),
        }
    }

    /// Queue a snapshot for the next unscripted tick
    pub fn push(&mut self, snapshot: InputSnapshot) {
        self.queue.push_back(snapshot);
    }

    /// Remaining scripted ticks
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputSnapshot {
        self.queue.pop_front().unwrap_or(self.idle)
    }
}

//! Frame timing
//!
//! [`FrameClock`] turns a stream of frame timestamps into a bounded number
//! of fixed-duration logic ticks. Elapsed wall time accumulates between
//! frames; each call drains whole frame intervals from the accumulator up
//! to a catch-up cap, so a stalled frame (tab switch, slow device) slows
//! the simulation down instead of replaying an unbounded backlog.

/// Fixed-timestep accumulator clock
///
/// Timestamps are caller-provided milliseconds, which keeps the clock
/// deterministic under test: feed it any sequence of timestamps and it
/// reports exactly how many ticks each frame should run.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_ms: f32,
    max_catchup_ticks: u32,
    accumulator: f64,
    last_time: Option<f64>,
}

impl FrameClock {
    /// Create a clock ticking `fps` times per second
    ///
    /// `fps` must be non-zero; the caller validates before construction.
    pub fn new(fps: u32, max_catchup_ticks: u32) -> Self {
        debug_assert!(fps > 0, "fps must be validated by the caller");
        Self {
            frame_ms: 1000.0 / fps as f32,
            max_catchup_ticks,
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Duration of one logic tick in milliseconds
    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }

    /// Time currently sitting in the accumulator, in milliseconds
    pub fn accumulated_ms(&self) -> f64 {
        self.accumulator
    }

    /// Advance to timestamp `now_ms` and return how many ticks to run
    ///
    /// The first call establishes the epoch and returns zero ticks. Ticks
    /// are `floor(elapsed / frame_ms)` clamped to the catch-up cap; the
    /// remainder (and anything beyond the cap) stays in the accumulator.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_time else {
            self.last_time = Some(now_ms);
            return 0;
        };

        // A timestamp going backwards would poison the accumulator; treat
        // it as a zero-length frame.
        let delta = (now_ms - last).max(0.0);
        self.last_time = Some(now_ms);
        self.accumulator += delta;

        let mut ticks = 0;
        while self.accumulator >= f64::from(self.frame_ms) && ticks < self.max_catchup_ticks {
            self.accumulator -= f64::from(self.frame_ms);
            ticks += 1;
        }

        if ticks == self.max_catchup_ticks && self.accumulator >= f64::from(self.frame_ms) {
            log::debug!(
                "frame stall: {:.0}ms of backlog deferred to later frames",
                self.accumulator
            );
        }

        ticks
    }
}

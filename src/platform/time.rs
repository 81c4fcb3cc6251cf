//! Frame timing and fixed-interval timers
//!
//! Every periodic loop (accrual, spawn, motion, loading) is a
//! `FixedInterval` fed with the frame delta, so all of them share one
//! execution context and one clock. Simulation timers are capped per
//! frame; the accrual timer runs on wall-clock time and catches up on
//! every missed second.

use crate::consts::{MAX_SUBSTEPS, MOTION_DT};

/// Accumulator-based periodic timer
#[derive(Debug, Clone)]
pub struct FixedInterval {
    interval: f32,
    accumulator: f32,
    /// Most fires a single `advance` may report
    max_fires: u32,
}

impl FixedInterval {
    /// Timer capped at `MAX_SUBSTEPS` fires per call
    pub fn new(interval: f32) -> Self {
        debug_assert!(interval > 0.0);
        Self {
            interval,
            accumulator: 0.0,
            max_fires: MAX_SUBSTEPS,
        }
    }

    /// Timer that reports every elapsed interval, however many
    pub fn unbounded(interval: f32) -> Self {
        Self {
            max_fires: u32::MAX,
            ..Self::new(interval)
        }
    }

    /// Add elapsed time and return how many times the timer fires.
    /// Leftover time beyond the cap is carried to the next call.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);

        let mut fires = 0;
        while self.accumulator >= self.interval && fires < self.max_fires {
            self.accumulator -= self.interval;
            fires += 1;
        }
        fires
    }
}

/// Turns animation-frame timestamps (ms) into wall-clock deltas (s)
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous frame, never negative and not clamped,
    /// so a long gap (hidden tab) comes through whole.
    /// The first frame reports one motion tick.
    pub fn delta(&mut self, time_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => MOTION_DT,
        };
        self.last_time = Some(time_ms);
        dt.max(0.0)
    }
}

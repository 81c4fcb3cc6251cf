//! Loading screen
//!
//! Four progress meters creep toward their caps while themed log lines
//! appear once per second. The screen is dismissed after `LOADING_DURATION`.

use serde::Serialize;

use crate::consts::{LOADING_DURATION, LOADING_LOG_INTERVAL, LOADING_STEP_INTERVAL};
use crate::platform::FixedInterval;
use crate::theme::Theme;

/// (step per refresh, cap) for each meter, in theme label order
const METER_STEPS: [(u32, u32); 4] = [(5, 87), (3, 54), (4, 72), (3, 54)];

const MS_PER_DAY: f64 = 86_400_000.0;

/// A percentage meter
#[derive(Debug, Clone, Serialize)]
pub struct Meter {
    pub label: &'static str,
    /// Percent shown, 0..=cap
    pub value: u32,
    step: u32,
    cap: u32,
}

impl Meter {
    fn advance(&mut self) {
        self.value = (self.value + self.step).min(self.cap);
    }

    pub fn cap(&self) -> u32 {
        self.cap
    }
}

/// A timestamped log line
#[derive(Debug, Clone, Serialize)]
pub struct LogLine {
    /// Time of day in milliseconds
    pub time_ms: f64,
    pub message: &'static str,
}

impl LogLine {
    /// `HH:MM:SS.mmm`
    pub fn stamp(&self) -> String {
        let ms = self.time_ms.rem_euclid(MS_PER_DAY) as u64;
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            ms / 3_600_000,
            ms / 60_000 % 60,
            ms / 1000 % 60,
            ms % 1000
        )
    }
}

/// Loading screen model
#[derive(Debug, Clone)]
pub struct LoadingScreen {
    pub meters: [Meter; 4],
    pub logs: Vec<LogLine>,
    messages: &'static [&'static str],
    /// Time of day (ms) the screen appeared
    origin_ms: f64,
    elapsed: f32,
    step_timer: FixedInterval,
    log_timer: FixedInterval,
    done: bool,
}

impl LoadingScreen {
    /// `origin_ms` is the wall-clock time of day used to stamp log lines
    pub fn new(theme: Theme, origin_ms: f64) -> Self {
        let text = theme.text();
        let meters = std::array::from_fn(|i| Meter {
            label: text.meter_labels[i],
            value: 0,
            step: METER_STEPS[i].0,
            cap: METER_STEPS[i].1,
        });

        let mut screen = Self {
            meters,
            logs: Vec::new(),
            messages: &text.loading_logs,
            origin_ms,
            elapsed: 0.0,
            step_timer: FixedInterval::new(LOADING_STEP_INTERVAL),
            log_timer: FixedInterval::new(LOADING_LOG_INTERVAL),
            done: false,
        };
        // First line shows immediately
        screen.push_log();
        screen
    }

    fn push_log(&mut self) {
        if let Some(&message) = self.messages.get(self.logs.len()) {
            self.logs.push(LogLine {
                time_ms: self.origin_ms + self.elapsed as f64 * 1000.0,
                message,
            });
        }
    }

    /// Advance by a frame delta. Returns true once loading has finished.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.done {
            return true;
        }
        self.elapsed += dt;

        for _ in 0..self.step_timer.advance(dt) {
            for meter in &mut self.meters {
                meter.advance();
            }
        }
        for _ in 0..self.log_timer.advance(dt) {
            self.push_log();
        }

        if self.elapsed >= LOADING_DURATION {
            self.done = true;
            log::info!("Loading finished after {:.1}s", self.elapsed);
        }
        self.done
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Skip straight to the main view
    pub fn finish(&mut self) {
        self.done = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_log_is_immediate() {
        let screen = LoadingScreen::new(Theme::Quantum, 0.0);
        assert_eq!(screen.logs.len(), 1);
        assert_eq!(screen.logs[0].message, "Initializing neural architecture...");
        assert!(screen.meters.iter().all(|m| m.value == 0));
    }

    #[test]
    fn test_finishes_after_three_seconds_with_meters_capped() {
        let mut screen = LoadingScreen::new(Theme::Ocean, 0.0);
        for _ in 0..23 {
            assert!(!screen.update(0.125));
        }
        assert_eq!(screen.logs.len(), 3);

        assert!(screen.update(0.125));
        assert_eq!(screen.logs.len(), 4);
        let values: Vec<u32> = screen.meters.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![87, 54, 72, 54]);
        assert_eq!(screen.meters[0].label, "TIDE LEVEL");

        // Further updates are inert
        assert!(screen.update(5.0));
        assert_eq!(screen.logs.len(), 4);
    }

    #[test]
    fn test_meter_steps() {
        let mut screen = LoadingScreen::new(Theme::Quantum, 0.0);
        screen.update(0.1);
        let values: Vec<u32> = screen.meters.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![5, 3, 4, 3]);
    }

    #[test]
    fn test_log_stamp() {
        let line = LogLine {
            time_ms: 13.0 * 3_600_000.0 + 7.0 * 60_000.0 + 5_042.0,
            message: "",
        };
        assert_eq!(line.stamp(), "13:07:05.042");

        let mut screen = LoadingScreen::new(Theme::Quantum, 1_000.0);
        for _ in 0..8 {
            screen.update(0.125);
        }
        assert_eq!(screen.logs[1].stamp(), "00:00:02.000");
    }
}

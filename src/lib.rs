//! Satoverse - themed idle economy with an arcade mini-game
//!
//! Core modules:
//! - `economy`: Building inventory and balance accrual
//! - `sim`: Deterministic mini-game simulation (bullets, enemies, collisions)
//! - `loading`: Loading screen progression
//! - `ui`: Tab and modal view state
//! - `app`: Composition root driving every timer
//! - `renderer`: WebGPU rendering of the mini-game field
//! - `platform`: Frame timing and pointer mapping
//! - `theme`: Cosmetic variants and their static data tables
//! - `settings`: Persisted user preferences
//! - `audio`: Procedural sound cues (WASM only)

pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod economy;
pub mod loading;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod theme;
pub mod ui;

pub use app::App;
pub use settings::Settings;
pub use theme::Theme;

/// Game configuration constants
pub mod consts {
    /// Mini-game motion/collision interval (50 ms)
    pub const MOTION_DT: f32 = 0.05;
    /// Mini-game enemy spawn interval (1000 ms)
    pub const SPAWN_INTERVAL: f32 = 1.0;
    /// Idle accrual interval (1000 ms)
    pub const ACCRUAL_INTERVAL: f32 = 1.0;
    /// Loading meter refresh interval (100 ms)
    pub const LOADING_STEP_INTERVAL: f32 = 0.1;
    /// Loading screen log line interval
    pub const LOADING_LOG_INTERVAL: f32 = 1.0;
    /// Time the loading screen stays up
    pub const LOADING_DURATION: f32 = 3.0;
    /// Longest frame delta fed to the loading and mini-game timers
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Maximum fires of a single timer per frame
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field spans 0..FIELD_SIZE on both axes, y grows downward
    pub const FIELD_SIZE: f32 = 100.0;
    /// Player row
    pub const PLAYER_Y: f32 = 85.0;
    /// Player starting column
    pub const PLAYER_START_X: f32 = 50.0;

    /// Bullet travel per motion tick (upward)
    pub const BULLET_SPEED: f32 = 5.0;
    /// Bullet/enemy hit distance
    pub const HIT_RADIUS: f32 = 5.0;

    /// Live enemy cap checked by the spawn tick
    pub const MAX_ENEMIES: usize = 5;
    /// Points awarded per destroyed enemy
    pub const ENEMY_POINTS: u32 = 10;
    /// Enemy spawn column range: SPAWN_X_MIN..SPAWN_X_MIN + SPAWN_X_SPAN
    pub const SPAWN_X_MIN: f32 = 5.0;
    pub const SPAWN_X_SPAN: f32 = 90.0;
    /// Enemy descent per motion tick: ENEMY_SPEED_MIN..ENEMY_SPEED_MIN + ENEMY_SPEED_SPAN
    pub const ENEMY_SPEED_MIN: f32 = 0.5;
    pub const ENEMY_SPEED_SPAN: f32 = 0.5;
    /// Chance a spawned enemy carries the fast variant tag
    pub const FAST_VARIANT_CHANCE: f64 = 0.2;

    /// Balance on every fresh load
    pub const STARTING_BALANCE: f64 = 10.0;
}

/// Map a fraction of the field width (0-1) to a field column, clamped to the field
#[inline]
pub fn fraction_to_field(fraction: f32) -> f32 {
    (fraction * consts::FIELD_SIZE).clamp(0.0, consts::FIELD_SIZE)
}

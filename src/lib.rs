//! Tank Survivor - a top-down arena tank prototype
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (tank, projectiles, arena bounds)
//! - `renderer`: Draw-list composition for an external rendering backend
//! - `platform`: Input/presentation seams and frame pacing
//! - `game`: The frame loop tying the above together
//! - `settings`: JSON configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

use glam::{IVec2, Vec2};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1600.0;
    pub const ARENA_HEIGHT: f32 = 900.0;

    /// Window caption
    pub const CAPTION: &str = "Tank Survivor";

    /// Tank defaults
    pub const TANK_START: (f32, f32) = (900.0, 400.0);
    /// Bounding box of the tank sprite (fixed for every facing)
    pub const TANK_SIZE: (f32, f32) = (90.0, 90.0);
    /// Speed with the modifier key released
    pub const TANK_BASE_SPEED: f32 = 1.0;
    /// Speed with the modifier key held
    pub const TANK_MODIFIER_SPEED: f32 = 2.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_SIZE: (f32, f32) = (24.0, 24.0);

    /// Wall fill (RGB)
    pub const WALL_COLOR: [u8; 3] = [0, 0, 255];
}

/// Convert a discrete facing into an angle in radians (y axis points down on screen)
#[inline]
pub fn facing_angle(facing: IVec2) -> f32 {
    (-facing.y as f32).atan2(facing.x as f32)
}

/// Convert a screen-space angle back into a unit vector
#[inline]
pub fn angle_to_unit(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), -angle.sin())
}

/// Normalize a discrete facing through its angle, so diagonals land on exact 45° units
#[inline]
pub fn facing_to_unit(facing: IVec2) -> Vec2 {
    angle_to_unit(facing_angle(facing))
}

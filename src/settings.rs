//! Game settings
//!
//! Loaded from `tank_survivor.json` in the working directory when present.
//! Every field has a default, so a partial file only overrides what it names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Arena, Rect};

/// Errors from reading or validating a settings file
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Image files handed to the rendering backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub tank: String,
    pub projectile: String,
    pub background: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            tank: "fig/my_tank.png".to_string(),
            projectile: "fig/bakudan_2.GIF".to_string(),
            background: "fig/pg_bg.jpg".to_string(),
        }
    }
}

/// A wall, laid out by its top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// RGB fill
    #[serde(default = "default_wall_color")]
    pub color: [u8; 3],
}

fn default_wall_color() -> [u8; 3] {
    WALL_COLOR
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub caption: String,
    pub arena_width: f32,
    pub arena_height: f32,
    /// Frame cap; `None` runs as fast as the presenter allows
    pub target_fps: Option<u32>,

    // === Assets ===
    pub assets: AssetPaths,

    // === Tank ===
    pub tank_start: (f32, f32),
    pub tank_size: (f32, f32),
    /// Pixels per frame per held key, modifier released
    pub tank_base_speed: f32,
    /// Pixels per frame per held key, modifier held
    pub tank_modifier_speed: f32,

    // === Projectiles ===
    /// Pixels per frame
    pub projectile_speed: f32,
    pub projectile_size: (f32, f32),

    // === Arena ===
    pub walls: Vec<WallSpec>,
}

impl Default for Settings {
    fn default() -> Self {
        let wall = |x, y, width, height| WallSpec {
            x,
            y,
            width,
            height,
            color: WALL_COLOR,
        };

        Self {
            caption: CAPTION.to_string(),
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            target_fps: None,

            assets: AssetPaths::default(),

            tank_start: TANK_START,
            tank_size: TANK_SIZE,
            tank_base_speed: TANK_BASE_SPEED,
            tank_modifier_speed: TANK_MODIFIER_SPEED,

            projectile_speed: PROJECTILE_SPEED,
            projectile_size: PROJECTILE_SIZE,

            walls: vec![
                wall(200.0, 300.0, 30.0, 300.0),
                wall(300.0, 200.0, 1000.0, 30.0),
                wall(1400.0, 300.0, 30.0, 300.0),
                wall(300.0, 700.0, 1000.0, 30.0),
            ],
        }
    }
}

impl Settings {
    /// Default file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "tank_survivor.json";

    /// Check values the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("tank_size.0", self.tank_size.0),
            ("tank_size.1", self.tank_size.1),
            ("projectile_size.0", self.projectile_size.0),
            ("projectile_size.1", self.projectile_size.1),
            ("tank_base_speed", self.tank_base_speed),
            ("tank_modifier_speed", self.tank_modifier_speed),
            ("projectile_speed", self.projectile_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.target_fps == Some(0) {
            return Err(SettingsError::Invalid("target_fps must be non-zero".into()));
        }

        let arena = Arena::new(self.arena_width, self.arena_height);
        let tank = Rect::from_center(self.tank_start.into(), self.tank_size.into());
        if !arena.contains(&tank) {
            return Err(SettingsError::Invalid(format!(
                "tank start {:?} puts the tank outside the arena",
                self.tank_start
            )));
        }

        Ok(())
    }

    /// Read and validate settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load from the default file, falling back to defaults on any problem
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

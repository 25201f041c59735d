//! Game state and arena contents
//!
//! Everything the frame loop mutates lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Arena, Rect};
use super::projectile::Projectile;
use super::tank::Tank;
use crate::settings::Settings;

/// Static, decorative obstacle. Nothing collides with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub rect: Rect,
    /// RGB fill
    pub color: [u8; 3],
}

impl Wall {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: [u8; 3]) -> Self {
        Self {
            rect: Rect::from_top_left(x, y, width, height),
            color,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Playfield bounds
    pub arena: Arena,
    /// Created once, never change
    pub walls: Vec<Wall>,
    /// The player's tank
    pub tank: Tank,
    /// Live projectiles (sorted by id)
    pub projectiles: Vec<Projectile>,
    /// Frames simulated so far
    pub frame: u64,
    projectile_speed: f32,
    projectile_size: Vec2,
    next_id: u32,
}

impl GameState {
    /// Build the arena, walls and tank from settings
    pub fn new(settings: &Settings) -> Self {
        let walls = settings
            .walls
            .iter()
            .map(|w| Wall::new(w.x, w.y, w.width, w.height, w.color))
            .collect();

        Self {
            arena: Arena::new(settings.arena_width, settings.arena_height),
            walls,
            tank: Tank::new(
                settings.tank_start.into(),
                settings.tank_size.into(),
                settings.tank_base_speed,
                settings.tank_modifier_speed,
            ),
            projectiles: Vec::new(),
            frame: 0,
            projectile_speed: settings.projectile_speed,
            projectile_size: settings.projectile_size.into(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a projectile from the tank's current facing. Returns its id.
    pub fn fire(&mut self) -> u32 {
        let id = self.next_entity_id();
        let projectile =
            Projectile::fire_from(id, &self.tank, self.projectile_speed, self.projectile_size);
        log::debug!(
            "projectile {} fired at ({:.1}, {:.1}) heading ({:.3}, {:.3})",
            id,
            projectile.pos.x,
            projectile.pos.y,
            projectile.vel.x,
            projectile.vel.y
        );
        self.projectiles.push(projectile);
        id
    }

    /// Whether a projectile with this id is still live
    pub fn has_projectile(&self, id: u32) -> bool {
        self.projectiles.iter().any(|p| p.id == id)
    }

    /// Remove a projectile. Removing one that is already gone is a no-op.
    pub fn remove_projectile(&mut self, id: u32) -> bool {
        let before = self.projectiles.len();
        self.projectiles.retain(|p| p.id != id);
        self.projectiles.len() != before
    }

    /// Move every projectile one frame and drop those that left the arena
    pub fn update_projectiles(&mut self) {
        let arena = self.arena;
        self.projectiles.retain_mut(|p| {
            p.advance();
            let live = arena.contains(&p.rect());
            if !live {
                log::debug!("projectile {} left the arena", p.id);
            }
            live
        });
    }
}

//! Projectiles fired by the tank

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::tank::Tank;
use crate::facing_to_unit;

/// A projectile in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// Unit direction, fixed at spawn
    pub vel: Vec2,
    /// Pixels per frame
    pub speed: f32,
    pub size: Vec2,
}

impl Projectile {
    /// Fire from the tank's current facing
    ///
    /// The facing is normalized through its angle so diagonal shots travel at
    /// the same speed as straight ones. The projectile starts at the tank's
    /// edge in the firing direction.
    pub fn fire_from(id: u32, tank: &Tank, speed: f32, size: Vec2) -> Self {
        let vel = facing_to_unit(tank.facing().delta());
        let half = tank.rect().size / 2.0;
        let pos = tank.center() + half * vel;
        Self {
            id,
            pos,
            vel,
            speed,
            size,
        }
    }

    /// Move one frame along the fixed velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel * self.speed;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }
}

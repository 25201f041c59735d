//! The player's tank: keyboard movement, facing, overdrive state

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::direction::{DirectionalSprites, Facing, SpriteTransform};
use super::geom::{Arena, Rect};

/// Keys held down this frame (level-triggered, not edges)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Speed modifier (left shift)
    pub modifier: bool,
}

impl KeyState {
    /// Held movement keys paired with their unit deltas, in evaluation order
    fn movement_deltas(&self) -> impl Iterator<Item = IVec2> {
        [
            (self.up, IVec2::new(0, -1)),
            (self.down, IVec2::new(0, 1)),
            (self.left, IVec2::new(-1, 0)),
            (self.right, IVec2::new(1, 0)),
        ]
        .into_iter()
        .filter_map(|(held, delta)| held.then_some(delta))
    }
}

/// Tank status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TankState {
    #[default]
    Normal,
    /// Temporary powered state; `remaining` is decremented once per frame
    Overdrive { remaining: i32 },
}

/// Post-processing applied to this frame's tank sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpriteEffect {
    #[default]
    None,
    /// Edge-detection (laplacian) filter, shown while in overdrive
    EdgeHighlight,
}

/// What to draw for the tank this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankSprite {
    pub transform: SpriteTransform,
    pub effect: SpriteEffect,
    pub rect: Rect,
}

/// The player-controlled tank
#[derive(Debug, Clone)]
pub struct Tank {
    rect: Rect,
    facing: Facing,
    speed: f32,
    base_speed: f32,
    modifier_speed: f32,
    state: TankState,
    effect: SpriteEffect,
    sprites: DirectionalSprites<SpriteTransform>,
}

impl Tank {
    /// Create a tank centered at `center`, facing right
    pub fn new(center: Vec2, size: Vec2, base_speed: f32, modifier_speed: f32) -> Self {
        Self {
            rect: Rect::from_center(center, size),
            facing: Facing::Right,
            speed: base_speed,
            base_speed,
            modifier_speed,
            state: TankState::Normal,
            effect: SpriteEffect::None,
            sprites: DirectionalSprites::transforms(),
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Speed used on the most recent update
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn state(&self) -> TankState {
        self.state
    }

    /// Switch into overdrive for `duration` frames
    pub fn enter_overdrive(&mut self, duration: i32) {
        self.state = TankState::Overdrive {
            remaining: duration,
        };
    }

    /// Advance one frame from the held keys
    ///
    /// Every held movement key moves the tank immediately, so opposing keys
    /// cancel and diagonals compound. If the result leaves the arena on either
    /// axis the whole frame's movement is undone, not just the offending axis.
    pub fn update(&mut self, keys: &KeyState, arena: &Arena) {
        // Modifier held => modifier speed (2 by default). Mapping kept as shipped.
        self.speed = if keys.modifier {
            self.modifier_speed
        } else {
            self.base_speed
        };

        let before = self.rect.center;
        let mut sum = IVec2::ZERO;
        for delta in keys.movement_deltas() {
            self.rect.translate(delta.as_vec2() * self.speed);
            sum += delta;
        }
        if !arena.contains(&self.rect) {
            self.rect.center = before;
        }

        if let Some(facing) = Facing::from_delta(sum) {
            self.facing = facing;
        }

        self.effect = SpriteEffect::None;
        if let TankState::Overdrive { remaining } = self.state {
            let remaining = remaining.saturating_sub(1);
            if remaining < 0 {
                self.state = TankState::Normal;
            } else {
                self.state = TankState::Overdrive { remaining };
                self.effect = SpriteEffect::EdgeHighlight;
            }
        }
    }

    /// Sprite for the current facing, with this frame's effect
    pub fn sprite(&self) -> TankSprite {
        TankSprite {
            transform: *self.sprites.get(self.facing),
            effect: self.effect,
            rect: self.rect,
        }
    }
}

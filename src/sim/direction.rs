//! Eight-way facing and the per-direction sprite table

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// One of the eight discrete directions a tank can face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Facing {
    /// All directions in table order (counter-clockwise from right)
    pub const ALL: [Facing; 8] = [
        Facing::Right,
        Facing::UpRight,
        Facing::Up,
        Facing::UpLeft,
        Facing::Left,
        Facing::DownLeft,
        Facing::Down,
        Facing::DownRight,
    ];

    /// Summed key delta for this direction (screen space, y down)
    pub fn delta(self) -> IVec2 {
        match self {
            Facing::Right => IVec2::new(1, 0),
            Facing::UpRight => IVec2::new(1, -1),
            Facing::Up => IVec2::new(0, -1),
            Facing::UpLeft => IVec2::new(-1, -1),
            Facing::Left => IVec2::new(-1, 0),
            Facing::DownLeft => IVec2::new(-1, 1),
            Facing::Down => IVec2::new(0, 1),
            Facing::DownRight => IVec2::new(1, 1),
        }
    }

    /// Map a summed key delta back to a direction. `None` for a zero (or out of range) delta.
    pub fn from_delta(delta: IVec2) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.delta() == delta)
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// How this direction's sprite is derived from the prepared base image
    ///
    /// The base art faces left; right-leaning directions start from its mirror.
    pub fn sprite_transform(self) -> SpriteTransform {
        match self {
            Facing::Right => SpriteTransform::mirrored(0.0),
            Facing::UpRight => SpriteTransform::mirrored(45.0),
            Facing::Up => SpriteTransform::mirrored(90.0),
            Facing::UpLeft => SpriteTransform::plain(-45.0),
            Facing::Left => SpriteTransform::plain(0.0),
            Facing::DownLeft => SpriteTransform::plain(45.0),
            Facing::Down => SpriteTransform::mirrored(-90.0),
            Facing::DownRight => SpriteTransform::mirrored(-45.0),
        }
    }
}

/// Rotation (counter-clockwise degrees) and horizontal mirror applied to the base tank image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteTransform {
    pub rotation_deg: f32,
    pub mirrored: bool,
}

impl SpriteTransform {
    /// Rotation applied to the raw asset before any per-direction transform
    pub const BASE_ROTATION_DEG: f32 = 45.0;
    /// Zoom applied to the raw asset before any per-direction transform
    pub const BASE_SCALE: f32 = 2.0;

    pub const fn plain(rotation_deg: f32) -> Self {
        Self {
            rotation_deg,
            mirrored: false,
        }
    }

    pub const fn mirrored(rotation_deg: f32) -> Self {
        Self {
            rotation_deg,
            mirrored: true,
        }
    }
}

/// Fixed lookup table from each `Facing` to a sprite handle, built once
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalSprites<T> {
    table: [T; 8],
}

impl<T> DirectionalSprites<T> {
    /// Build every entry up front from its facing and transform
    pub fn build(mut make: impl FnMut(Facing, SpriteTransform) -> T) -> Self {
        Self {
            table: Facing::ALL.map(|f| make(f, f.sprite_transform())),
        }
    }

    #[inline]
    pub fn get(&self, facing: Facing) -> &T {
        &self.table[facing.index()]
    }
}

impl DirectionalSprites<SpriteTransform> {
    /// Table holding the transforms themselves; a backend pre-renders one texture per entry
    pub fn transforms() -> Self {
        Self::build(|_, transform| transform)
    }
}

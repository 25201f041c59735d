//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. One call to `tick` is one display frame:
//! - Positions are in arena pixels, y grows downward
//! - Stable iteration order (projectiles by id)
//! - No rendering or platform dependencies

pub mod direction;
pub mod geom;
pub mod projectile;
pub mod state;
pub mod tank;
pub mod tick;

pub use direction::{DirectionalSprites, Facing, SpriteTransform};
pub use geom::{Arena, Rect, orientation};
pub use projectile::Projectile;
pub use state::{GameState, Wall};
pub use tank::{KeyState, SpriteEffect, Tank, TankSprite, TankState};
pub use tick::{FrameInput, InputEvent, Key, TickOutcome, tick};

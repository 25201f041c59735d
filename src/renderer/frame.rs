//! Per-frame draw list
//!
//! The backend draws commands in order; later commands paint over earlier ones.

use glam::Vec2;

use super::shapes::rect_batch;
use super::vertex::{Vertex, colors, rgb8};
use crate::sim::{GameState, Rect, SpriteEffect, SpriteTransform};

/// Images the backend loads at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteAsset {
    Background,
    Tank,
    Projectile,
}

/// A single draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the surface to a flat color
    Clear { color: [f32; 4] },
    /// Blit an image with its top-left corner at `top_left`
    Image { asset: SpriteAsset, top_left: Vec2 },
    /// Fill a rectangle with a solid color
    Fill { rect: Rect, color: [f32; 4] },
    /// Blit an oriented sprite into `rect`
    Sprite {
        asset: SpriteAsset,
        rect: Rect,
        transform: SpriteTransform,
        effect: SpriteEffect,
    },
}

/// Everything to present for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Solid fills as triangle-list vertices
    pub fn solid_vertices(&self) -> Vec<Vertex> {
        rect_batch(self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill { rect, color } => Some((rect, *color)),
            _ => None,
        }))
    }

    /// Count of sprite blits using `asset`
    pub fn sprite_count(&self, asset: SpriteAsset) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { asset: a, .. } if *a == asset))
            .count()
    }
}

/// Vertex bytes ready for a GPU buffer upload
pub fn vertex_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Build the draw list for the current state
///
/// Order: background, walls, tank, live projectiles.
pub fn compose(state: &GameState) -> Frame {
    let mut commands = Vec::with_capacity(3 + state.walls.len() + state.projectiles.len());

    commands.push(DrawCommand::Clear {
        color: colors::BACKGROUND,
    });
    commands.push(DrawCommand::Image {
        asset: SpriteAsset::Background,
        top_left: Vec2::ZERO,
    });

    for wall in &state.walls {
        commands.push(DrawCommand::Fill {
            rect: wall.rect,
            color: rgb8(wall.color),
        });
    }

    let tank = state.tank.sprite();
    commands.push(DrawCommand::Sprite {
        asset: SpriteAsset::Tank,
        rect: tank.rect,
        transform: tank.transform,
        effect: tank.effect,
    });

    // Projectile art is pre-rotated to point up; turn it to the flight direction
    for p in &state.projectiles {
        let heading = (-p.vel.y).atan2(p.vel.x).to_degrees();
        commands.push(DrawCommand::Sprite {
            asset: SpriteAsset::Projectile,
            rect: p.rect(),
            transform: SpriteTransform::plain(heading - 90.0),
            effect: SpriteEffect::None,
        });
    }

    Frame { commands }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{FrameInput, KeyState, tick};

    #[test]
    fn test_compose_draw_order() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, &FrameInput::fire(KeyState::default()));

        let frame = compose(&state);
        assert!(matches!(frame.commands[0], DrawCommand::Clear { .. }));
        assert!(matches!(
            frame.commands[1],
            DrawCommand::Image {
                asset: SpriteAsset::Background,
                ..
            }
        ));
        for cmd in &frame.commands[2..6] {
            assert!(matches!(cmd, DrawCommand::Fill { .. }));
        }
        assert!(matches!(
            frame.commands[6],
            DrawCommand::Sprite {
                asset: SpriteAsset::Tank,
                ..
            }
        ));
        assert_eq!(frame.sprite_count(SpriteAsset::Projectile), 1);
        assert_eq!(frame.commands.len(), 8);
    }

    #[test]
    fn test_overdrive_tank_is_edge_highlighted() {
        let mut state = GameState::new(&Settings::default());
        state.tank.enter_overdrive(5);
        tick(&mut state, &FrameInput::default());
        let frame = compose(&state);
        let tank_effect = frame.commands.iter().find_map(|c| match c {
            DrawCommand::Sprite {
                asset: SpriteAsset::Tank,
                effect,
                ..
            } => Some(*effect),
            _ => None,
        });
        assert_eq!(tank_effect, Some(SpriteEffect::EdgeHighlight));
    }

    #[test]
    fn test_wall_vertices_upload() {
        let state = GameState::new(&Settings::default());
        let frame = compose(&state);
        let verts = frame.solid_vertices();
        assert_eq!(verts.len(), 4 * 6);
        assert_eq!(verts[0].color, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(
            vertex_bytes(&verts).len(),
            verts.len() * std::mem::size_of::<Vertex>()
        );
    }
}

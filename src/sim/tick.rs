//! Per-frame simulation step
//!
//! One call advances the game by exactly one display frame.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use super::tank::KeyState;

/// Keys the game distinguishes in press events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Speed modifier (left shift)
    Modifier,
    /// Fire (space)
    Fire,
}

/// Discrete events drained from the platform queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed / quit requested
    Quit,
    /// Key went down this frame (edge-triggered)
    KeyDown(Key),
}

/// Input for a single frame: a held-key snapshot plus the drained event queue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub held: KeyState,
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    /// Frame that only holds keys
    pub fn holding(held: KeyState) -> Self {
        Self {
            held,
            events: Vec::new(),
        }
    }

    /// Frame with a single fire press
    pub fn fire(held: KeyState) -> Self {
        Self {
            held,
            events: vec![InputEvent::KeyDown(Key::Fire)],
        }
    }

    /// Frame carrying a quit request
    pub fn quit() -> Self {
        Self {
            held: KeyState::default(),
            events: vec![InputEvent::Quit],
        }
    }
}

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the game state by one frame
///
/// Events are handled in queue order: a quit stops processing immediately
/// and nothing else in the frame runs; each fire press spawns one projectile
/// from the tank as it stood before this frame's movement.
pub fn tick(state: &mut GameState, input: &FrameInput) -> TickOutcome {
    for event in &input.events {
        match event {
            InputEvent::Quit => return TickOutcome::Quit,
            InputEvent::KeyDown(Key::Fire) => {
                state.fire();
            }
            InputEvent::KeyDown(_) => {}
        }
    }

    state.frame += 1;

    let arena = state.arena;
    state.tank.update(&input.held, &arena);
    state.update_projectiles();

    TickOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(&Settings::default())
    }

    #[test]
    fn test_quit_stops_frame() {
        let mut state = new_state();
        let input = FrameInput {
            held: KeyState {
                right: true,
                ..Default::default()
            },
            events: vec![InputEvent::Quit, InputEvent::KeyDown(Key::Fire)],
        };
        assert_eq!(tick(&mut state, &input), TickOutcome::Quit);
        assert_eq!(state.frame, 0);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.tank.center(), Vec2::new(900.0, 400.0));
    }

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut state = new_state();
        // Holding keys alone never fires
        for _ in 0..5 {
            tick(&mut state, &FrameInput::holding(KeyState::default()));
        }
        assert!(state.projectiles.is_empty());

        tick(&mut state, &FrameInput::fire(KeyState::default()));
        assert_eq!(state.projectiles.len(), 1);

        let double = FrameInput {
            held: KeyState::default(),
            events: vec![
                InputEvent::KeyDown(Key::Fire),
                InputEvent::KeyDown(Key::Up),
                InputEvent::KeyDown(Key::Fire),
            ],
        };
        tick(&mut state, &double);
        assert_eq!(state.projectiles.len(), 3);
    }

    #[test]
    fn test_fire_then_cull_end_to_end() {
        let mut state = new_state();
        let half_width = state.tank.rect().size.x / 2.0;

        let outcome = tick(&mut state, &FrameInput::fire(KeyState::default()));
        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(state.projectiles.len(), 1);
        let id = state.projectiles[0].id;

        // Spawned at the tank's right edge, then moved once this frame
        let speed = state.projectiles[0].speed;
        let expected = Vec2::new(900.0 + half_width + speed, 400.0);
        assert!((state.projectiles[0].pos - expected).length() < 1e-3);
        assert!((state.projectiles[0].vel - Vec2::X).length() < 1e-6);

        let idle = FrameInput::default();
        let mut last_x = state.projectiles[0].pos.x;
        loop {
            tick(&mut state, &idle);
            match state.projectiles.iter().find(|p| p.id == id) {
                Some(p) => {
                    assert!((p.pos.x - (last_x + speed)).abs() < 1e-3);
                    assert!(state.arena.contains(&p.rect()));
                    last_x = p.pos.x;
                }
                None => break,
            }
            assert!(state.frame < 1000, "projectile never culled");
        }

        // Culled on the first frame its rect crossed the right edge
        let size = Settings::default().projectile_size.0;
        assert!(last_x + speed + size / 2.0 > state.arena.width);
        assert!(!state.has_projectile(id));

        // And never comes back
        for _ in 0..10 {
            tick(&mut state, &idle);
        }
        assert!(!state.has_projectile(id));
    }

    #[test]
    fn test_diagonal_shot_moves_at_unit_speed() {
        let mut state = new_state();
        let up_left = KeyState {
            up: true,
            left: true,
            ..Default::default()
        };
        tick(&mut state, &FrameInput::holding(up_left));
        tick(&mut state, &FrameInput::fire(KeyState::default()));

        let p = &state.projectiles[0];
        assert!((p.vel.length() - 1.0).abs() < 1e-6);
        assert!(p.vel.x < 0.0 && p.vel.y < 0.0);
    }

    #[test]
    fn test_tank_stops_at_arena_edge() {
        let mut state = new_state();
        let right = FrameInput::holding(KeyState {
            right: true,
            modifier: true,
            ..Default::default()
        });
        for _ in 0..1000 {
            tick(&mut state, &right);
        }
        let rect = *state.tank.rect();
        assert!(state.arena.contains(&rect));
        assert!(state.arena.width - rect.right() < 2.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = new_state();
        let mut state2 = new_state();

        let inputs = [
            FrameInput::holding(KeyState {
                down: true,
                ..Default::default()
            }),
            FrameInput::fire(KeyState {
                right: true,
                modifier: true,
                ..Default::default()
            }),
            FrameInput::default(),
            FrameInput::fire(KeyState::default()),
        ];

        for input in &inputs {
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.projectiles, state2.projectiles);
        assert_eq!(state1.tank.center(), state2.tank.center());
    }
}

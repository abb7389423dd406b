//! Player input state

use bitflags::bitflags;
use glam::Vec3;

use crate::world::Direction;

bitflags! {
    /// Movement keys currently held down
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HeldDirections: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl From<Direction> for HeldDirections {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => HeldDirections::UP,
            Direction::Down => HeldDirections::DOWN,
            Direction::Left => HeldDirections::LEFT,
            Direction::Right => HeldDirections::RIGHT,
        }
    }
}

/// Map a keyboard code (`KeyboardEvent.code` naming) to a direction
pub fn direction_for_key(code: &str) -> Option<Direction> {
    match code {
        "ArrowUp" | "KeyW" => Some(Direction::Up),
        "ArrowDown" | "KeyS" => Some(Direction::Down),
        "ArrowLeft" | "KeyA" => Some(Direction::Left),
        "ArrowRight" | "KeyD" => Some(Direction::Right),
        _ => None,
    }
}

/// Tracks current input state for window control
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HeldDirections,

    /// Last pointer position in render space, if the pointer is over the world
    pub pointer: Option<Vec3>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, direction: Direction) {
        self.held.insert(direction.into());
    }

    pub fn release(&mut self, direction: Direction) {
        self.held.remove(direction.into());
    }

    /// Handle a key-down event; returns false for keys that do not move
    pub fn key_down(&mut self, code: &str) -> bool {
        match direction_for_key(code) {
            Some(direction) => {
                self.press(direction);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(direction) = direction_for_key(code) {
            self.release(direction);
        }
    }

    pub fn held(&self) -> HeldDirections {
        self.held
    }

    /// The single cardinal move for this tick. With several keys held the
    /// first of up, down, left, right wins.
    pub fn current_direction(&self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.held.contains(direction.into()))
    }

    /// Forget every held key (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held = HeldDirections::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_new() {
        let input = InputState::new();
        assert!(input.held().is_empty());
        assert!(input.pointer.is_none());
        assert_eq!(input.current_direction(), None);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_for_key("KeyW"), Some(Direction::Up));
        assert_eq!(direction_for_key("KeyS"), Some(Direction::Down));
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_for_key("KeyD"), Some(Direction::Right));
        assert_eq!(direction_for_key("Space"), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        assert!(input.key_down("KeyA"));
        assert_eq!(input.current_direction(), Some(Direction::Left));

        input.key_up("KeyA");
        assert_eq!(input.current_direction(), None);

        assert!(!input.key_down("Escape"));
        assert!(input.held().is_empty());
    }

    #[test]
    fn test_priority_resolves_to_one_cardinal_move() {
        let mut input = InputState::new();
        input.press(Direction::Right);
        input.press(Direction::Down);
        assert_eq!(input.current_direction(), Some(Direction::Down));

        input.press(Direction::Up);
        assert_eq!(input.current_direction(), Some(Direction::Up));

        input.release(Direction::Up);
        input.release(Direction::Down);
        assert_eq!(input.current_direction(), Some(Direction::Right));
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::new();
        input.press(Direction::Left);
        input.press(Direction::Up);
        input.clear();
        assert_eq!(input.current_direction(), None);
    }
}

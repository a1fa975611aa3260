//! Grid cells and movement directions.

use bevy::prelude::*;

use super::GRID_SIZE;

/// A cell on the grid. `y` grows downward, so row 0 is the top wall.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Check if this position collides with another position.
    pub fn collides_with(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// The neighbouring cell one step in `direction`.
    pub fn offset(&self, direction: Direction) -> Position {
        match direction {
            Direction::Left => Position::new(self.x - 1, self.y),
            Direction::Right => Position::new(self.x + 1, self.y),
            Direction::Up => Position::new(self.x, self.y - 1),
            Direction::Down => Position::new(self.x, self.y + 1),
        }
    }

    /// True when the cell lies inside the walls, i.e. in `[1, GRID_SIZE - 2]` on both axes.
    pub fn is_interior(&self) -> bool {
        (1..GRID_SIZE - 1).contains(&self.x) && (1..GRID_SIZE - 1).contains(&self.y)
    }

    /// True for the one-cell-wide border of the grid.
    pub fn is_wall(&self) -> bool {
        self.x == 0 || self.y == 0 || self.x == GRID_SIZE - 1 || self.y == GRID_SIZE - 1
    }

    /// Every interior cell, row by row.
    pub fn interior() -> impl Iterator<Item = Position> {
        (1..GRID_SIZE - 1).flat_map(|y| (1..GRID_SIZE - 1).map(move |x| Position::new(x, y)))
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Reads the held keys and returns the requested direction, if any.
    ///
    /// Keys are tried in the order Left, Right, Up, Down. A held key that would reverse
    /// `heading` is skipped so the next held key gets a chance; the first key that is not a
    /// reversal wins, even when it only repeats the current heading.
    pub fn from_input(
        keyboard_input: &ButtonInput<KeyCode>,
        heading: Option<Direction>,
    ) -> Option<Direction> {
        const BINDINGS: [(Direction, KeyCode, KeyCode); 4] = [
            (Direction::Left, KeyCode::ArrowLeft, KeyCode::KeyA),
            (Direction::Right, KeyCode::ArrowRight, KeyCode::KeyD),
            (Direction::Up, KeyCode::ArrowUp, KeyCode::KeyW),
            (Direction::Down, KeyCode::ArrowDown, KeyCode::KeyS),
        ];

        BINDINGS
            .into_iter()
            .filter(|(direction, _, _)| heading != Some(direction.opposite()))
            .find(|(_, arrow, letter)| {
                keyboard_input.pressed(*arrow) || keyboard_input.pressed(*letter)
            })
            .map(|(direction, _, _)| direction)
    }
}

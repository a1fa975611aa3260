//! Fruit placement.

use bevy::log::warn;
use rand::prelude::*;
use std::collections::VecDeque;

use crate::game::{GRID_SIZE, MAX_SPAWN_ATTEMPTS, Position};

/// Picks an interior cell that the snake does not occupy.
///
/// Draws random interior cells first, which almost always succeeds on a sparse board. If every
/// draw lands on the snake, falls back to choosing among the free cells directly, so the search
/// terminates even when the board is nearly full. Returns `None` when no free cell is left.
pub fn spawn_fruit<R: Rng + ?Sized>(snake: &VecDeque<Position>, rng: &mut R) -> Option<Position> {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let position = Position {
            x: rng.random_range(1..GRID_SIZE - 1),
            y: rng.random_range(1..GRID_SIZE - 1),
        };

        if !snake.contains(&position) {
            return Some(position);
        }
    }

    warn!(
        "fruit placement missed {} times, scanning free cells",
        MAX_SPAWN_ATTEMPTS
    );
    let free: Vec<Position> = Position::interior()
        .filter(|cell| !snake.contains(cell))
        .collect();
    free.choose(rng).copied()
}

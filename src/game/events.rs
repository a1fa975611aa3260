//! Game events (messages).

use bevy::prelude::*;

use super::{Outcome, Position};

/// Message triggered when the snake eats the fruit (for visual effects).
#[derive(Message)]
pub struct FruitEaten {
    pub position: Position,
}

/// Message triggered once, on the tick that ends the game by defeat or victory.
#[derive(Message)]
pub struct GameEnded {
    pub outcome: Outcome,
    pub score: u32,
}

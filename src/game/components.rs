//! ECS components for the snake game.

use bevy::prelude::*;

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

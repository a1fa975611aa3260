//! Game constants for grid size, scoring, timing, colors, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

use super::Position;

// Grid dimensions (square, border cells are wall)
pub const GRID_SIZE: i32 = 20;

// Visual settings
pub const TILE_SIZE: f32 = 40.0;
pub const WINDOW_SIZE: u32 = (GRID_SIZE as u32) * (TILE_SIZE as u32);
// Strip above the grid that holds the score label
pub const HUD_HEIGHT: f32 = 40.0;
pub const HUD_FONT_SIZE: f32 = 20.0;
pub const WINDOW_HEIGHT: u32 = WINDOW_SIZE + HUD_HEIGHT as u32;
pub const FRUIT_RADIUS: f32 = 10.0;

// Timing
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);
pub const EAT_FLASH_DURATION: f32 = 0.3;

// Rules
pub const FRUIT_REWARD: u32 = 10;
pub const WIN_LENGTH: usize = 10;
pub const MAX_SPAWN_ATTEMPTS: usize = 64;

// Initial positions
pub const INITIAL_SNAKE_POSITION: Position = Position {
    x: GRID_SIZE / 2,
    y: GRID_SIZE / 2,
};

// Result lines printed when the game ends
pub const DEFEAT_MESSAGE: &str = "OVER : 살아남기 힘들다,,,,";
pub const VICTORY_MESSAGE: &str = "CLEAR : 성체가 되었다!!";

// Colors
pub const WALL_COLOR: Color = Color::WHITE;
pub const SNAKE_HEAD_COLOR: Color = Color::srgb(0.55, 0.95, 0.45);
pub const SNAKE_SEGMENT_COLOR: Color = Color::srgb(0.1, 0.7, 0.2);
pub const FRUIT_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const EAT_FLASH_COLOR: Color = Color::srgba(1.0, 1.0, 0.3, 0.8);
pub const BACKGROUND_COLOR: Color = Color::BLACK;

// Z-index constants for rendering layers
pub const Z_WALL: f32 = 0.0;
pub const Z_FRUIT: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;
pub const Z_EFFECT: f32 = 3.0;

//! Rendering plugin - draws the board from the game state and plays the eat flash.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    Direction, EAT_FLASH_COLOR, EAT_FLASH_DURATION, FRUIT_COLOR, FRUIT_RADIUS, FruitEaten,
    GRID_SIZE, GameState, Position, SNAKE_HEAD_COLOR, SNAKE_SEGMENT_COLOR, TILE_SIZE, WALL_COLOR,
    Z_EFFECT, Z_FRUIT, Z_SNAKE_HEAD, Z_SNAKE_SEGMENT, Z_WALL,
};

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EatFlash>()
            .add_systems(Update, (start_eat_flash, draw_board, draw_eat_flash).chain());
    }
}

/// What occupies a cell when the board is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Head,
    Body,
    Fruit,
}

impl Tile {
    fn color(self) -> Color {
        match self {
            Tile::Wall => WALL_COLOR,
            Tile::Head => SNAKE_HEAD_COLOR,
            Tile::Body => SNAKE_SEGMENT_COLOR,
            Tile::Fruit => FRUIT_COLOR,
        }
    }

    fn z(self) -> f32 {
        match self {
            Tile::Wall => Z_WALL,
            Tile::Fruit => Z_FRUIT,
            Tile::Body => Z_SNAKE_SEGMENT,
            Tile::Head => Z_SNAKE_HEAD,
        }
    }
}

/// Expanding circle shown where the last fruit was eaten.
#[derive(Resource)]
struct EatFlash {
    timer: Timer,
    position: Option<Position>,
}

impl Default for EatFlash {
    fn default() -> Self {
        EatFlash {
            timer: Timer::from_seconds(EAT_FLASH_DURATION, TimerMode::Once),
            position: None,
        }
    }
}

/// Lists every cell that needs drawing, walls first and the head last.
pub fn scene(game_state: &GameState) -> Vec<(Position, Tile)> {
    let walls = (0..GRID_SIZE)
        .flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y)))
        .filter(Position::is_wall)
        .map(|cell| (cell, Tile::Wall));

    let body = game_state
        .snake()
        .iter()
        .skip(1)
        .map(|cell| (*cell, Tile::Body));

    walls
        .chain(game_state.fruit().map(|fruit| (fruit, Tile::Fruit)))
        .chain(body)
        .chain(std::iter::once((game_state.head(), Tile::Head)))
        .collect()
}

/// Centre of a grid cell in world space. The camera looks at the middle of the grid and world
/// `y` points up, so grid rows are flipped.
pub fn cell_to_world(position: Position) -> Vec2 {
    let half = GRID_SIZE as f32 / 2.0;
    Vec2::new(
        (position.x as f32 - half + 0.5) * TILE_SIZE,
        (half - position.y as f32 - 0.5) * TILE_SIZE,
    )
}

/// System to draw walls, snake, and fruit for the current frame.
fn draw_board(mut painter: ShapePainter, game_state: Res<GameState>) {
    for (cell, tile) in scene(&game_state) {
        painter.transform = Transform::from_translation(cell_to_world(cell).extend(tile.z()));
        painter.color = tile.color();

        match tile {
            Tile::Fruit => {
                painter.circle(FRUIT_RADIUS);
            }
            Tile::Head | Tile::Body | Tile::Wall => {
                painter.rect(Vec2::splat(TILE_SIZE));
            }
        }
    }

    draw_eyes(&mut painter, game_state.head(), game_state.heading());
}

/// Two dots on the head, looking along the heading (or at the viewer before the first move).
fn draw_eyes(painter: &mut ShapePainter, head: Position, heading: Option<Direction>) {
    let forward = match heading {
        Some(Direction::Left) => Vec2::NEG_X,
        Some(Direction::Right) => Vec2::X,
        Some(Direction::Up) => Vec2::Y,
        Some(Direction::Down) => Vec2::NEG_Y,
        None => Vec2::ZERO,
    };
    let side = if forward == Vec2::ZERO {
        Vec2::X
    } else {
        forward.perp()
    };
    let centre = cell_to_world(head) + forward * TILE_SIZE * 0.2;

    painter.color = Color::BLACK;
    for offset in [side, -side] {
        let eye = centre + offset * TILE_SIZE * 0.18;
        painter.transform = Transform::from_translation(eye.extend(Z_SNAKE_HEAD + 0.1));
        painter.circle(TILE_SIZE * 0.08);
    }
}

/// System to restart the flash when fruit is eaten.
fn start_eat_flash(mut flash: ResMut<EatFlash>, mut fruit_reader: MessageReader<FruitEaten>) {
    if let Some(eaten) = fruit_reader.read().last() {
        flash.position = Some(eaten.position);
        flash.timer.reset();
    }
}

/// System to draw the flash while its timer runs.
fn draw_eat_flash(mut painter: ShapePainter, time: Res<Time>, mut flash: ResMut<EatFlash>) {
    let Some(position) = flash.position else {
        return;
    };

    flash.timer.tick(time.delta());
    if flash.timer.is_finished() {
        flash.position = None;
        return;
    }

    let progress = flash.timer.fraction();
    painter.transform = Transform::from_translation(cell_to_world(position).extend(Z_EFFECT));
    painter.color = EAT_FLASH_COLOR.with_alpha(0.8 * (1.0 - progress));
    painter.circle(FRUIT_RADIUS * (1.0 + 1.5 * progress));
}

//! UI plugin - camera and score display.

use bevy::prelude::*;

use crate::game::{GameState, HUD_FONT_SIZE, HUD_HEIGHT, ScoreText};

/// Plugin for the camera and HUD.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system)
            .add_systems(Update, update_score_text);
    }
}

/// Camera placement that leaves a `HUD_HEIGHT` strip free above the grid.
///
/// The window is `HUD_HEIGHT` taller than the grid; raising the camera by half of that pushes
/// the grid to the bottom of the window.
pub fn camera_transform() -> Transform {
    Transform::from_xyz(0.0, HUD_HEIGHT / 2.0, 0.0)
}

/// Offset of the score label from the top of the window, centring it in the strip.
fn score_label_top() -> f32 {
    (HUD_HEIGHT - HUD_FONT_SIZE) / 2.0
}

/// Initial setup system - camera and score text.
fn setup_system(mut commands: Commands) {
    commands.spawn((Camera2d, camera_transform()));

    commands.spawn((
        Text::new("Score: 0"),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(score_label_top()),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));
}

/// System to update the score display.
fn update_score_text(game_state: Res<GameState>, mut query: Query<&mut Text, With<ScoreText>>) {
    if !game_state.is_changed() {
        return;
    }

    if let Ok(mut text) = query.single_mut() {
        *text = Text::new(format!("Score: {}", game_state.score()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GRID_SIZE, Position, WINDOW_HEIGHT};
    use crate::rendering::cell_to_world;

    #[test]
    fn score_strip_does_not_cover_the_grid() {
        let camera_y = camera_transform().translation.y;
        let view_top = camera_y + WINDOW_HEIGHT as f32 / 2.0;
        let view_bottom = camera_y - WINDOW_HEIGHT as f32 / 2.0;

        let tile_half = crate::game::TILE_SIZE / 2.0;
        let grid_top = cell_to_world(Position::new(0, 0)).y + tile_half;
        let grid_bottom = cell_to_world(Position::new(0, GRID_SIZE - 1)).y - tile_half;

        // The whole grid is visible and the strip above it is exactly HUD_HEIGHT tall.
        assert_eq!(grid_bottom, view_bottom);
        assert_eq!(view_top - grid_top, HUD_HEIGHT);
        // The label fits inside the strip.
        assert!(score_label_top() >= 0.0);
        assert!(score_label_top() + HUD_FONT_SIZE <= HUD_HEIGHT);
    }
}

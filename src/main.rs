mod food;
mod game;
mod rendering;
mod snake;
mod ui;

use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use game::{BACKGROUND_COLOR, WINDOW_HEIGHT, WINDOW_SIZE};
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(WINDOW_SIZE, WINDOW_HEIGHT),
                    title: "Snake".to_string(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .add_plugins((SnakePlugin, RenderingPlugin, UiPlugin))
        .run();
}

//! Snake plugin - handles input, the logic tick, and reporting the end of the game.

use bevy::prelude::*;

use crate::game::{
    DEFEAT_MESSAGE, Direction, FruitEaten, GameEnded, GamePhase, GameState, InputBuffer,
    Outcome, TickTimer, VICTORY_MESSAGE,
};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameState>()
            .init_resource::<InputBuffer>()
            .init_resource::<TickTimer>()
            .add_message::<FruitEaten>()
            .add_message::<GameEnded>()
            .add_systems(Startup, announce_game)
            .add_systems(
                Update,
                (read_input, advance_game, report_game_end, exit_when_over).chain(),
            );
    }
}

fn announce_game(game_state: Res<GameState>) {
    info!(
        "new game: snake at {:?}, fruit at {:?}",
        game_state.head(),
        game_state.fruit()
    );
}

/// System to read keyboard input and queue a direction change for the next tick.
fn read_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut input_buffer: ResMut<InputBuffer>,
    mut game_state: ResMut<GameState>,
) {
    if game_state.is_over() {
        return;
    }

    if keyboard_input.pressed(KeyCode::KeyX) {
        info!("quit requested, score {}", game_state.score());
        game_state.quit();
        return;
    }

    if let Some(direction) = Direction::from_input(&keyboard_input, game_state.heading())
        && game_state.accepts_turn(direction)
        && input_buffer.last_direction() != Some(direction)
    {
        input_buffer.queue_direction(direction);
    }
}

/// System to run one logic tick whenever the tick timer fires.
fn advance_game(
    time: Res<Time>,
    mut tick_timer: ResMut<TickTimer>,
    mut input_buffer: ResMut<InputBuffer>,
    mut game_state: ResMut<GameState>,
    mut fruit_writer: MessageWriter<FruitEaten>,
    mut end_writer: MessageWriter<GameEnded>,
) {
    if game_state.is_over() || !tick_timer.0.tick(time.delta()).just_finished() {
        return;
    }

    if let Some(direction) = input_buffer.pop_direction()
        && game_state.apply_input(direction)
    {
        debug!("heading {:?}", direction);
    }

    let report = game_state.step(&mut rand::rng());

    if let Some(position) = report.ate_fruit {
        debug!(
            "fruit eaten at {:?}, score {}, next fruit at {:?}",
            position,
            game_state.score(),
            game_state.fruit()
        );
        fruit_writer.write(FruitEaten { position });
    }

    if let Some(outcome) = report.ended {
        end_writer.write(GameEnded {
            outcome,
            score: game_state.score(),
        });
    }
}

/// The fixed line printed under the score, or `None` when nothing is printed.
fn result_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Defeat => Some(DEFEAT_MESSAGE),
        Outcome::Victory => Some(VICTORY_MESSAGE),
        Outcome::Quit => None,
    }
}

/// System to print the result lines when the game is won or lost.
fn report_game_end(mut ended_reader: MessageReader<GameEnded>) {
    for ended in ended_reader.read() {
        let Some(message) = result_message(ended.outcome) else {
            continue;
        };
        info!("game over: {:?} with score {}", ended.outcome, ended.score);
        println!("{}", ended.score);
        println!("{}", message);
    }
}

/// System to close the app once the game has ended.
fn exit_when_over(game_state: Res<GameState>, mut exit: MessageWriter<AppExit>) {
    if let GamePhase::Over(outcome) = game_state.phase() {
        debug!("exiting after {:?}", outcome);
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Position, TICK_INTERVAL};
    use bevy::ecs::message::Messages;
    use std::time::Duration;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn test_app(state: GameState) -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Time>()
            .insert_resource(state)
            .add_plugins(SnakePlugin);
        app
    }

    fn run_frame(app: &mut App, delta: Duration) {
        app.world_mut().resource_mut::<Time>().advance_by(delta);
        app.update();
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    fn release_all(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release_all();
    }

    fn snake(app: &App) -> Vec<Position> {
        app.world()
            .resource::<GameState>()
            .snake()
            .iter()
            .copied()
            .collect()
    }

    #[test]
    fn moves_only_on_tick_boundaries() {
        let mut app = test_app(GameState::with_layout([pos(10, 10)], None, pos(3, 3)));
        press(&mut app, KeyCode::ArrowRight);

        run_frame(&mut app, Duration::from_millis(50));
        assert_eq!(snake(&app), vec![pos(10, 10)]);

        run_frame(&mut app, TICK_INTERVAL - Duration::from_millis(50));
        assert_eq!(snake(&app), vec![pos(11, 10)]);

        run_frame(&mut app, TICK_INTERVAL);
        assert_eq!(snake(&app), vec![pos(12, 10)]);
    }

    #[test]
    fn one_turn_per_tick_and_no_reversal() {
        let mut app = test_app(GameState::with_layout(
            [pos(10, 10)],
            Some(Direction::Right),
            pos(3, 3),
        ));

        press(&mut app, KeyCode::ArrowLeft);
        run_frame(&mut app, TICK_INTERVAL);
        assert_eq!(snake(&app), vec![pos(11, 10)]);
        assert_eq!(
            app.world().resource::<GameState>().heading(),
            Some(Direction::Right)
        );

        release_all(&mut app);
        press(&mut app, KeyCode::ArrowUp);
        run_frame(&mut app, Duration::ZERO);
        release_all(&mut app);
        press(&mut app, KeyCode::ArrowDown);
        run_frame(&mut app, TICK_INTERVAL);

        // Both turns were valid against Right; the later one is applied.
        assert_eq!(snake(&app), vec![pos(11, 11)]);
        assert_eq!(
            app.world().resource::<GameState>().heading(),
            Some(Direction::Down)
        );
    }

    #[test]
    fn held_reversal_yields_to_next_key() {
        let mut app = test_app(GameState::with_layout(
            [pos(10, 10)],
            Some(Direction::Right),
            pos(3, 3),
        ));
        press(&mut app, KeyCode::ArrowLeft);
        press(&mut app, KeyCode::ArrowUp);

        run_frame(&mut app, TICK_INTERVAL);

        assert_eq!(
            app.world().resource::<GameState>().heading(),
            Some(Direction::Up)
        );
        assert_eq!(snake(&app), vec![pos(10, 9)]);
    }

    #[test]
    fn result_lines_are_fixed_literals() {
        assert_eq!(
            result_message(Outcome::Defeat),
            Some("OVER : 살아남기 힘들다,,,,")
        );
        assert_eq!(
            result_message(Outcome::Victory),
            Some("CLEAR : 성체가 되었다!!")
        );
        assert_eq!(result_message(Outcome::Quit), None);
    }

    #[test]
    fn quit_key_ends_the_game_and_exits() {
        let mut app = test_app(GameState::with_layout([pos(10, 10)], None, pos(3, 3)));
        press(&mut app, KeyCode::KeyX);

        run_frame(&mut app, Duration::ZERO);

        assert_eq!(
            app.world().resource::<GameState>().phase(),
            GamePhase::Over(Outcome::Quit)
        );
        assert!(!app.world().resource::<Messages<AppExit>>().is_empty());
        assert!(app.world().resource::<Messages<GameEnded>>().is_empty());
    }

    #[test]
    fn wall_hit_reports_defeat_once() {
        let mut app = test_app(GameState::with_layout(
            [pos(1, 5)],
            Some(Direction::Left),
            pos(3, 3),
        ));

        run_frame(&mut app, TICK_INTERVAL);

        let state = app.world().resource::<GameState>();
        assert_eq!(state.phase(), GamePhase::Over(Outcome::Defeat));
        assert_eq!(app.world().resource::<Messages<GameEnded>>().len(), 1);

        run_frame(&mut app, TICK_INTERVAL);
        run_frame(&mut app, TICK_INTERVAL);

        assert!(app.world().resource::<Messages<GameEnded>>().is_empty());
        assert!(!app.world().resource::<Messages<AppExit>>().is_empty());
    }

    #[test]
    fn eating_fruit_writes_message() {
        let mut app = test_app(GameState::with_layout(
            [pos(5, 5), pos(4, 5)],
            Some(Direction::Right),
            pos(6, 5),
        ));

        run_frame(&mut app, TICK_INTERVAL);

        let state = app.world().resource::<GameState>();
        assert_eq!(state.score(), 10);
        assert_eq!(state.snake().len(), 3);
        assert_eq!(app.world().resource::<Messages<FruitEaten>>().len(), 1);
    }
}

//! Game resources (singleton state).

use bevy::prelude::*;
use rand::Rng;
use std::collections::VecDeque;

use super::{Direction, FRUIT_REWARD, INITIAL_SNAKE_POSITION, Position, TICK_INTERVAL, WIN_LENGTH};
use crate::food::spawn_fruit;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The head hit a wall or the body.
    Defeat,
    /// The snake reached the winning length (or filled the board).
    Victory,
    /// The player pressed the quit key.
    Quit,
}

/// Game phase enum to track which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Running,
    Over(Outcome),
}

/// What happened during a single logic tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Where the fruit was eaten, if it was.
    pub ate_fruit: Option<Position>,
    /// Set only on the tick that moved the game from running to over.
    pub ended: Option<Outcome>,
}

/// Main game state resource.
///
/// The snake is stored head first. The fruit is `None` only after the snake has filled every
/// interior cell. Once the phase is `Over` every mutating method is a no-op,
/// which also makes the end-of-game report in [`TickReport::ended`] fire exactly once.
#[derive(Resource, Debug, Clone)]
pub struct GameState {
    snake: VecDeque<Position>,
    fruit: Option<Position>,
    heading: Option<Direction>,
    score: u32,
    phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(&mut rand::rng())
    }
}

impl GameState {
    /// A fresh game: a one-cell snake in the middle of the grid, standing still, and one fruit.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let snake = VecDeque::from([INITIAL_SNAKE_POSITION]);
        let fruit = spawn_fruit(&snake, rng);

        GameState {
            snake,
            fruit,
            heading: None,
            score: 0,
            phase: GamePhase::Running,
        }
    }

    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn fruit(&self) -> Option<Position> {
        self.fruit
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Running
    }

    /// True when `direction` would be accepted by [`GameState::apply_input`] and change the
    /// heading.
    pub fn accepts_turn(&self, direction: Direction) -> bool {
        !self.is_over()
            && self.heading != Some(direction)
            && self.heading != Some(direction.opposite())
    }

    /// Turns the snake. Reversing onto the current heading is rejected.
    pub fn apply_input(&mut self, direction: Direction) -> bool {
        if self.is_over() || self.heading == Some(direction.opposite()) {
            return false;
        }
        self.heading = Some(direction);
        true
    }

    /// Ends the game immediately without a result.
    pub fn quit(&mut self) {
        if !self.is_over() {
            self.phase = GamePhase::Over(Outcome::Quit);
        }
    }

    /// Advances the game by one tick.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        if self.is_over() {
            return report;
        }
        let Some(heading) = self.heading else {
            return report;
        };

        let new_head = self.head().offset(heading);
        self.snake.push_front(new_head);
        let vacated = self.snake.pop_back();

        if self.fruit == Some(new_head) {
            self.score += FRUIT_REWARD;
            if let Some(tail) = vacated {
                self.snake.push_back(tail);
            }
            report.ate_fruit = self.fruit;
            self.fruit = spawn_fruit(&self.snake, rng);
        }
        let board_full = self.fruit.is_none();

        let hit_body = self.snake.iter().skip(1).any(|segment| segment.collides_with(&new_head));
        let outcome = if !new_head.is_interior() || hit_body {
            Some(Outcome::Defeat)
        } else if self.snake.len() >= WIN_LENGTH || board_full {
            Some(Outcome::Victory)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            self.phase = GamePhase::Over(outcome);
            report.ended = Some(outcome);
        }
        report
    }

    #[cfg(test)]
    pub fn with_layout(
        snake: impl IntoIterator<Item = Position>,
        heading: Option<Direction>,
        fruit: Position,
    ) -> Self {
        let snake: VecDeque<Position> = snake.into_iter().collect();
        assert!(!snake.is_empty());
        GameState {
            snake,
            fruit: Some(fruit),
            heading,
            score: 0,
            phase: GamePhase::Running,
        }
    }
}

/// One-slot buffer for the turn requested since the last tick.
#[derive(Resource, Default)]
pub struct InputBuffer {
    queued_direction: Option<Direction>,
}

impl InputBuffer {
    /// Queue a direction change, replacing any earlier one from the same tick.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.queued_direction = Some(direction);
    }

    /// Take the queued direction, leaving the buffer empty.
    pub fn pop_direction(&mut self) -> Option<Direction> {
        self.queued_direction.take()
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.queued_direction
    }
}

/// Repeating timer that decides which frames run a logic tick.
#[derive(Resource)]
pub struct TickTimer(pub Timer);

impl Default for TickTimer {
    fn default() -> Self {
        TickTimer(Timer::new(TICK_INTERVAL, TimerMode::Repeating))
    }
}

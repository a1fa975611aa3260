//! Core game module containing the grid, game state, components, events, and constants.

mod components;
mod constants;
mod events;
mod grid;
mod resources;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use grid::*;
pub use resources::*;

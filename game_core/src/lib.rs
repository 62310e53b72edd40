//! Simulation core for a timed Pong match against a heuristic AI.
//!
//! Everything runs on frames: speeds are pixels per frame and the match clock
//! counts frames. Window, input, sound and art live behind the traits in
//! [`collaborators`].

pub mod arena;
pub mod collaborators;
pub mod components;
pub mod config;
pub mod match_state;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use arena::*;
pub use collaborators::*;
pub use components::*;
pub use config::*;
pub use match_state::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use systems::*;

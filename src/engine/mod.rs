//! Game of Life core: grid storage, the B3/S23 rule, and deterministic seeding

pub mod grid;
pub mod rng;
pub mod rules;

pub use grid::{EdgeBehavior, Grid, GridError, ALIVE_GLYPH, DEFAULT_BACKGROUND};
pub use rng::Lcg;
pub use rules::LifeRules;

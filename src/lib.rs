//! Blocky engine library.
//!
//! Quadtree board, rasterizer, the perimeter and blob scorers, goal
//! generation, block lookup and the player move policies.

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod goal;
pub mod logic;
pub mod player;
pub mod selfplay;

mod logic_tests;

pub use error::{Error, Result};

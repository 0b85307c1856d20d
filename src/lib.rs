//! # life_check
//!
//! Checks whether one grid is the next generation of another under Conway's Game of Life
//! (B3/S23) with a fixed border: cells outside the grid are dead and never wrap.

pub mod config;
pub mod grid;
pub mod life;
pub mod reader;
pub mod render;
pub mod report;

pub use config::Config;
pub use grid::{Cell, Grid, GridError};
pub use life::{check, next_generation, same_state, Verdict};
pub use reader::{GridReader, ReadError};

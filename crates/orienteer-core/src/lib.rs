//! **orienteer-core** — grid geometry and terrain types.
//!
//! This crate provides the foundational types shared by the *orienteer*
//! crates: integer points, rectangles and headings, plus the [`Terrain`]
//! grid with its ASCII map and obstacle-list parsers.

pub mod geom;
pub mod terrain;

pub use geom::{Direction, Point, Range};
pub use terrain::{Terrain, TerrainError, Tile, parse_obstacles};

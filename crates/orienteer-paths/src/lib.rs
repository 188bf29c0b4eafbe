//! Uniform-cost search over implicit state graphs, with recovery of every
//! cheapest path.
//!
//! - **Engine**: [`min_cost`] answers "how cheap is the goal", while
//!   [`optimal_paths`] also keeps tying predecessors so that
//!   [`OptimalPaths::optimal_positions`] can list every cell on some
//!   cheapest path without enumerating the (possibly exponential) paths.
//! - **State spaces**: [`OrientedMaze`] (position plus heading, with separate
//!   step and turn prices) and [`GridWalk`] (position only, unit steps).
//! - **Barrier search**: [`first_blocking`] drops obstacles onto a terrain
//!   one at a time and reports the first that disconnects start and goal.
//!
//! # Trait seams
//!
//! | Trait | Role |
//! |---|---|
//! | [`StateSpace`] | start state, goal test and weighted successors |
//! | [`Located`] | projects a state onto its grid cell |
//! | [`Frontier`] | min-priority queue driving the search |

mod barrier;
mod frontier;
mod maze;
mod reconstruct;
mod search;
mod space;
mod walk;

pub use barrier::{
    BarrierConfig, BarrierOutcome, ScanStrategy, first_blocking, shortest_steps, with_walls,
};
pub use frontier::{Cost, Frontier, FrontierError, HeapFrontier};
pub use maze::{CostModel, OrientedMaze, Pose};
pub use search::{OptimalPaths, min_cost, min_cost_with, optimal_paths, optimal_paths_with};
pub use space::{Located, StateSpace};
pub use walk::GridWalk;

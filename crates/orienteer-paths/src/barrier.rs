//! Finding the first obstacle that cuts the start off from the goal.
//!
//! Obstacles are dropped onto a terrain one at a time. Walls are never
//! removed, so once the goal becomes unreachable it stays unreachable; the
//! question is which drop is the first to disconnect the two cells.

use std::collections::BTreeSet;

use log::{debug, trace};
use orienteer_core::{Point, Terrain, TerrainError};

use crate::frontier::Cost;
use crate::search::{min_cost, optimal_paths};
use crate::walk::GridWalk;

/// How the obstacle sequence is searched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScanStrategy {
    /// Add obstacles in order on one terrain, searching after each.
    #[default]
    Linear,
    /// Binary search over the number of obstacles dropped, each probe on
    /// its own terrain copy.
    Bisect,
}

/// Settings for [`first_blocking`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarrierConfig {
    pub strategy: ScanStrategy,
    /// Linear scan only: remember the cells of every shortest path from the
    /// last search and skip searching after obstacles that miss them all.
    pub skip_off_path: bool,
}

/// Result of [`first_blocking`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BarrierOutcome {
    /// Obstacle `index` is the first after whose addition the goal is
    /// unreachable.
    Blocked { index: usize, obstacle: Point },
    /// No obstacle leaves the goal unreachable.
    Unblocked,
}

/// Find the first obstacle in `obstacles` after which `goal` can no longer
/// be reached from `start` on `terrain`.
///
/// Start, goal and obstacles must all lie inside the terrain. Only moves
/// *into* a wall are forbidden, so a wall dropped on the start cell does not
/// trap the walker, while one on the goal disconnects it. If the goal is
/// unreachable before anything is dropped, the first obstacle is blamed.
pub fn first_blocking(
    terrain: &Terrain,
    start: Point,
    goal: Point,
    obstacles: &[Point],
    config: &BarrierConfig,
) -> Result<BarrierOutcome, TerrainError> {
    let bounds = terrain.bounds();
    if let Some(&p) = [start, goal]
        .iter()
        .chain(obstacles)
        .find(|p| !bounds.contains(**p))
    {
        return Err(TerrainError::OutOfBounds(p));
    }

    let found = match config.strategy {
        ScanStrategy::Linear => linear_scan(terrain, start, goal, obstacles, config.skip_off_path)?,
        ScanStrategy::Bisect => bisect(terrain, start, goal, obstacles)?,
    };

    Ok(match found {
        Some(index) => {
            debug!("barrier: obstacle #{index} at {} blocks", obstacles[index]);
            BarrierOutcome::Blocked {
                index,
                obstacle: obstacles[index],
            }
        }
        None => {
            debug!("barrier: goal reachable after {} obstacles", obstacles.len());
            BarrierOutcome::Unblocked
        }
    })
}

/// Length of the shortest unit-step walk from `start` to `goal`.
pub fn shortest_steps(terrain: &Terrain, start: Point, goal: Point) -> Option<Cost> {
    min_cost(&GridWalk::new(terrain, start, goal))
}

/// A copy of `base` with every point of `obstacles` walled.
pub fn with_walls(base: &Terrain, obstacles: &[Point]) -> Result<Terrain, TerrainError> {
    let mut terrain = base.clone();
    for &p in obstacles {
        terrain.add_wall(p)?;
    }
    Ok(terrain)
}

fn connected(terrain: &Terrain, start: Point, goal: Point) -> bool {
    shortest_steps(terrain, start, goal).is_some()
}

/// Cells on some shortest walk, or `None` if the goal is unreachable.
fn shortest_cells(terrain: &Terrain, start: Point, goal: Point) -> Option<BTreeSet<Point>> {
    let paths = optimal_paths(&GridWalk::new(terrain, start, goal));
    paths.is_reachable().then(|| paths.optimal_positions())
}

fn linear_scan(
    base: &Terrain,
    start: Point,
    goal: Point,
    obstacles: &[Point],
    skip_off_path: bool,
) -> Result<Option<usize>, TerrainError> {
    let mut terrain = base.clone();

    if !skip_off_path {
        for (i, &p) in obstacles.iter().enumerate() {
            terrain.add_wall(p)?;
            trace!("barrier: probing after #{i} {p}");
            if !connected(&terrain, start, goal) {
                return Ok(Some(i));
            }
        }
        return Ok(None);
    }

    let Some(mut cells) = shortest_cells(&terrain, start, goal) else {
        debug!("barrier: {goal} unreachable from {start} before any obstacle");
        return Ok((!obstacles.is_empty()).then_some(0));
    };
    for (i, &p) in obstacles.iter().enumerate() {
        let changed = terrain.add_wall(p)?;
        if !changed || !cells.contains(&p) {
            continue;
        }
        trace!("barrier: #{i} {p} hits a shortest path, searching again");
        match shortest_cells(&terrain, start, goal) {
            Some(next) => cells = next,
            None => return Ok(Some(i)),
        }
    }
    Ok(None)
}

fn bisect(
    base: &Terrain,
    start: Point,
    goal: Point,
    obstacles: &[Point],
) -> Result<Option<usize>, TerrainError> {
    let blocked_after = |n: usize| -> Result<bool, TerrainError> {
        let snapshot = with_walls(base, &obstacles[..n])?;
        let blocked = !connected(&snapshot, start, goal);
        trace!("barrier: probe with {n} obstacles blocked={blocked}");
        Ok(blocked)
    };

    if obstacles.is_empty() || !blocked_after(obstacles.len())? {
        return Ok(None);
    }
    // Smallest prefix length that blocks; `hi` always blocks.
    let (mut lo, mut hi) = (1, obstacles.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if blocked_after(mid)? {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Ok(Some(lo - 1))
}

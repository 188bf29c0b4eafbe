//! Orientation-aware maze walking.
//!
//! A walker occupies a cell and faces one of the four headings. It may step
//! forward into the next cell or turn in place by 90°, and each action has
//! its own price (by default a step costs 1 and a turn 1000).

use orienteer_core::{Direction, Point, Terrain, TerrainError};

use crate::frontier::Cost;
use crate::space::{Located, StateSpace};

/// A search state in the maze: a cell plus the heading faced there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub pos: Point,
    pub facing: Direction,
}

impl Pose {
    #[inline]
    pub const fn new(pos: Point, facing: Direction) -> Self {
        Self { pos, facing }
    }
}

impl Located for Pose {
    #[inline]
    fn pos(&self) -> Point {
        self.pos
    }
}

/// Prices of the two maze actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostModel {
    /// Cost of moving one cell forward.
    pub step: Cost,
    /// Cost of a 90° turn in place.
    pub turn: Cost,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            step: 1,
            turn: 1000,
        }
    }
}

/// State space of a walker crossing a [`Terrain`] from start to goal.
#[derive(Debug, Clone)]
pub struct OrientedMaze<'a> {
    terrain: &'a Terrain,
    start: Pose,
    goal: Point,
    costs: CostModel,
}

impl<'a> OrientedMaze<'a> {
    /// Build a maze from the start and goal markers of `terrain`. The walker
    /// starts facing east.
    pub fn new(terrain: &'a Terrain, costs: CostModel) -> Result<Self, TerrainError> {
        let start = terrain.start()?;
        let goal = terrain.goal()?;
        Ok(Self::from_points(terrain, start, Direction::East, goal, costs))
    }

    /// Build a maze with explicit endpoints.
    pub fn from_points(
        terrain: &'a Terrain,
        start: Point,
        facing: Direction,
        goal: Point,
        costs: CostModel,
    ) -> Self {
        Self {
            terrain,
            start: Pose::new(start, facing),
            goal,
            costs,
        }
    }

    /// Change the initial heading.
    pub fn with_facing(mut self, facing: Direction) -> Self {
        self.start.facing = facing;
        self
    }

    /// The initial pose.
    #[inline]
    pub fn start_pose(&self) -> Pose {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The action prices in use.
    #[inline]
    pub fn costs(&self) -> CostModel {
        self.costs
    }
}

impl StateSpace for OrientedMaze<'_> {
    type State = Pose;

    fn start(&self) -> Pose {
        self.start
    }

    fn is_goal(&self, state: &Pose) -> bool {
        state.pos == self.goal
    }

    fn successors(&self, state: &Pose, buf: &mut Vec<(Pose, Cost)>) {
        let ahead = state.pos.step(state.facing);
        if self.terrain.is_passable(ahead) {
            buf.push((Pose::new(ahead, state.facing), self.costs.step));
        }
        buf.push((
            Pose::new(state.pos, state.facing.clockwise()),
            self.costs.turn,
        ));
        buf.push((
            Pose::new(state.pos, state.facing.counter_clockwise()),
            self.costs.turn,
        ));
    }
}

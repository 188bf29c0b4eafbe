use std::hash::Hash;

use orienteer_core::Point;

use crate::frontier::Cost;

/// An implicit weighted graph explored by the search engine.
pub trait StateSpace {
    /// A search state. Two states are the same node iff they compare equal.
    type State: Clone + Eq + Hash;

    /// The state the search starts from.
    fn start(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Append the successors of `state` and their edge weights into `buf`.
    /// The caller clears `buf` before calling.
    fn successors(&self, state: &Self::State, buf: &mut Vec<(Self::State, Cost)>);
}

/// States that sit on a grid cell.
pub trait Located {
    /// The grid position of this state.
    fn pos(&self) -> Point;
}

impl Located for Point {
    #[inline]
    fn pos(&self) -> Point {
        *self
    }
}

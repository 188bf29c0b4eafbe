//! Uniform-cost search over a [`StateSpace`].
//!
//! Two modes share the same relaxation loop:
//!
//! - [`min_cost`] stops at the first goal state taken off the frontier and
//!   reports only its cost.
//! - [`optimal_paths`] keeps running until every state that could still tie
//!   the best goal cost has been expanded, recording for every state the
//!   *set* of predecessors that reach it at its best known cost. The result
//!   can then be walked backwards to recover every cell lying on some
//!   cheapest path without enumerating the paths themselves.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use log::debug;

use crate::frontier::{Cost, Frontier, HeapFrontier};
use crate::space::StateSpace;

/// Search tables left behind by [`optimal_paths`].
#[derive(Debug, Clone)]
pub struct OptimalPaths<T> {
    pub(crate) min_cost: Option<Cost>,
    pub(crate) goal_states: Vec<T>,
    pub(crate) distances: HashMap<T, Cost>,
    pub(crate) predecessors: HashMap<T, HashSet<T>>,
    pub(crate) expanded: usize,
}

impl<T: Eq + Hash> OptimalPaths<T> {
    /// Cheapest cost of reaching a goal state, or `None` if no goal state is
    /// reachable.
    #[inline]
    pub fn min_cost(&self) -> Option<Cost> {
        self.min_cost
    }

    /// Whether some goal state was reached.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.min_cost.is_some()
    }

    /// Every goal state reached at [`min_cost`](Self::min_cost), in the
    /// order they were finalized.
    #[inline]
    pub fn goal_states(&self) -> &[T] {
        &self.goal_states
    }

    /// Best known cost of `state`. Exact for every state that was expanded
    /// or that lies on a cheapest path.
    #[inline]
    pub fn distance(&self, state: &T) -> Option<Cost> {
        self.distances.get(state).copied()
    }

    /// Predecessors reaching `state` at its best known cost.
    pub fn predecessors(&self, state: &T) -> impl Iterator<Item = &T> + '_ {
        self.predecessors.get(state).into_iter().flatten()
    }

    /// Number of states taken off the frontier and expanded.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

/// Cheapest cost from the start state to any goal state, using a
/// [`HeapFrontier`].
pub fn min_cost<S: StateSpace>(space: &S) -> Option<Cost> {
    min_cost_with::<S, HeapFrontier<S::State>>(space)
}

/// [`min_cost`] with an explicit frontier type.
pub fn min_cost_with<S, F>(space: &S) -> Option<Cost>
where
    S: StateSpace,
    F: Frontier<S::State> + Default,
{
    let start = space.start();
    let mut distances: HashMap<S::State, Cost> = HashMap::new();
    distances.insert(start.clone(), 0);

    let mut frontier = F::default();
    frontier.push(start, 0);

    let mut buf = Vec::new();
    let mut expanded = 0usize;

    while !frontier.is_empty() {
        let (current, cost) = pop_live(&mut frontier);
        // Skip stale entries.
        if distances.get(&current) != Some(&cost) {
            continue;
        }
        if space.is_goal(&current) {
            debug!("min_cost: reached goal at cost {cost} after {expanded} expansions");
            return Some(cost);
        }
        expanded += 1;

        buf.clear();
        space.successors(&current, &mut buf);
        for (next, weight) in buf.drain(..) {
            let tentative = cost.saturating_add(weight);
            if distances.get(&next).is_none_or(|&d| tentative < d) {
                distances.insert(next.clone(), tentative);
                frontier.push(next, tentative);
            }
        }
    }

    debug!("min_cost: goal unreachable after {expanded} expansions");
    None
}

/// Run the search to completion, keeping every tying predecessor, using a
/// [`HeapFrontier`].
pub fn optimal_paths<S: StateSpace>(space: &S) -> OptimalPaths<S::State> {
    optimal_paths_with::<S, HeapFrontier<S::State>>(space)
}

/// [`optimal_paths`] with an explicit frontier type.
pub fn optimal_paths_with<S, F>(space: &S) -> OptimalPaths<S::State>
where
    S: StateSpace,
    F: Frontier<S::State> + Default,
{
    let mut out = OptimalPaths {
        min_cost: None,
        goal_states: Vec::new(),
        distances: HashMap::new(),
        predecessors: HashMap::new(),
        expanded: 0,
    };

    let start = space.start();
    out.distances.insert(start.clone(), 0);

    let mut frontier = F::default();
    frontier.push(start, 0);

    let mut buf = Vec::new();

    while !frontier.is_empty() {
        let (current, cost) = pop_live(&mut frontier);
        if out.distances.get(&current) != Some(&cost) {
            continue;
        }

        if space.is_goal(&current) {
            match out.min_cost {
                Some(best) if cost > best => {}
                Some(best) if cost == best => out.goal_states.push(current),
                _ => {
                    out.min_cost = Some(cost);
                    out.goal_states.clear();
                    out.goal_states.push(current);
                }
            }
            // Goal states are never expanded.
            continue;
        }

        if out.min_cost.is_some_and(|best| cost > best) {
            continue;
        }
        out.expanded += 1;

        buf.clear();
        space.successors(&current, &mut buf);
        for (next, weight) in buf.drain(..) {
            let tentative = cost.saturating_add(weight);
            match out.distances.get(&next).copied() {
                Some(known) if tentative > known => {}
                Some(known) if tentative == known => {
                    out.predecessors
                        .entry(next)
                        .or_default()
                        .insert(current.clone());
                }
                _ => {
                    out.distances.insert(next.clone(), tentative);
                    let preds = out.predecessors.entry(next.clone()).or_default();
                    preds.clear();
                    preds.insert(current.clone());
                    frontier.push(next, tentative);
                }
            }
        }
    }

    debug!(
        "optimal_paths: cost {:?}, {} goal state(s), {} expansions, {} states reached",
        out.min_cost,
        out.goal_states.len(),
        out.expanded,
        out.distances.len()
    );
    out
}

/// Pop from a frontier the caller has just checked to be non-empty.
fn pop_live<T, F: Frontier<T>>(frontier: &mut F) -> (T, Cost) {
    match frontier.pop() {
        Ok(entry) => entry,
        Err(e) => unreachable!("{e} after a non-empty check"),
    }
}

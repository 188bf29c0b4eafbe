//! Recovering every cheapest path from the predecessor sets.

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use orienteer_core::Point;

use crate::search::OptimalPaths;
use crate::space::Located;

impl<T: Clone + Eq + Hash> OptimalPaths<T> {
    /// Every state lying on at least one cheapest path to a goal.
    ///
    /// Walks the predecessor sets backwards from each goal state with an
    /// explicit stack; each state is visited once however many cheapest
    /// paths run through it. Empty when the goal is unreachable.
    pub fn optimal_states(&self) -> HashSet<T> {
        let mut visited: HashSet<T> = HashSet::new();
        let mut stack: Vec<&T> = self.goal_states.iter().collect();

        while let Some(state) = stack.pop() {
            if !visited.insert(state.clone()) {
                continue;
            }
            if let Some(preds) = self.predecessors.get(state) {
                stack.extend(preds.iter().filter(|p| !visited.contains(*p)));
            }
        }
        visited
    }

    /// Grid cells covered by [`optimal_states`](Self::optimal_states).
    pub fn optimal_positions(&self) -> BTreeSet<Point>
    where
        T: Located,
    {
        self.optimal_states().iter().map(Located::pos).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::frontier::Cost;
    use crate::search::optimal_paths;
    use crate::space::StateSpace;
    use orienteer_core::Point;

    /// A ladder of `rungs` diamonds: every diamond doubles the number of
    /// cheapest paths while adding only three cells.
    struct Ladder {
        rungs: i32,
    }

    impl StateSpace for Ladder {
        type State = Point;

        fn start(&self) -> Point {
            Point::new(0, 0)
        }

        fn is_goal(&self, s: &Point) -> bool {
            *s == Point::new(2 * self.rungs, 0)
        }

        fn successors(&self, s: &Point, buf: &mut Vec<(Point, Cost)>) {
            if s.x >= 2 * self.rungs {
                return;
            }
            if s.x % 2 == 0 {
                buf.push((Point::new(s.x + 1, -1), 1));
                buf.push((Point::new(s.x + 1, 1), 1));
            } else {
                buf.push((Point::new(s.x + 1, 0), 1));
            }
        }
    }

    #[test]
    fn exponentially_many_paths_stay_linear() {
        let r = optimal_paths(&Ladder { rungs: 40 });
        assert_eq!(r.min_cost(), Some(80));
        // 2^40 cheapest paths, but only 41 + 2 * 40 cells.
        assert_eq!(r.optimal_positions().len(), 121);
    }

    #[test]
    fn off_path_states_are_excluded() {
        // A dead end branching off the start is reached but never on a path.
        struct Spur;
        impl StateSpace for Spur {
            type State = Point;
            fn start(&self) -> Point {
                Point::new(0, 0)
            }
            fn is_goal(&self, s: &Point) -> bool {
                *s == Point::new(2, 0)
            }
            fn successors(&self, s: &Point, buf: &mut Vec<(Point, Cost)>) {
                if *s == Point::new(0, 0) {
                    buf.push((Point::new(1, 0), 1));
                    buf.push((Point::new(0, 1), 1));
                } else if *s == Point::new(1, 0) {
                    buf.push((Point::new(2, 0), 1));
                }
            }
        }
        let r = optimal_paths(&Spur);
        assert_eq!(r.distance(&Point::new(0, 1)), Some(1));
        let cells: Vec<Point> = r.optimal_positions().into_iter().collect();
        assert_eq!(cells, vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
    }

    #[test]
    fn unreachable_goal_has_no_states() {
        struct Island;
        impl StateSpace for Island {
            type State = Point;
            fn start(&self) -> Point {
                Point::ZERO
            }
            fn is_goal(&self, _: &Point) -> bool {
                false
            }
            fn successors(&self, _: &Point, _: &mut Vec<(Point, Cost)>) {}
        }
        let r = optimal_paths(&Island);
        assert!(r.optimal_states().is_empty());
        assert!(r.optimal_positions().is_empty());
    }
}

use orienteer_core::{Point, Terrain};

use crate::frontier::Cost;
use crate::space::StateSpace;

/// Position-only walk across a [`Terrain`]: unit-cost moves to any of the
/// four passable neighbours, no heading.
#[derive(Debug, Clone, Copy)]
pub struct GridWalk<'a> {
    terrain: &'a Terrain,
    start: Point,
    goal: Point,
}

impl<'a> GridWalk<'a> {
    pub fn new(terrain: &'a Terrain, start: Point, goal: Point) -> Self {
        Self {
            terrain,
            start,
            goal,
        }
    }
}

impl StateSpace for GridWalk<'_> {
    type State = Point;

    fn start(&self) -> Point {
        self.start
    }

    fn is_goal(&self, p: &Point) -> bool {
        *p == self.goal
    }

    fn successors(&self, p: &Point, buf: &mut Vec<(Point, Cost)>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.terrain.is_passable(n))
                .map(|n| (n, 1)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{min_cost, optimal_paths};
    use orienteer_core::Tile;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::{BTreeSet, HashMap, VecDeque};

    /// Plain breadth-first distances from `from` over passable cells.
    fn bfs(terrain: &Terrain, from: Point) -> HashMap<Point, u64> {
        let mut dist = HashMap::new();
        if !terrain.is_passable(from) {
            return dist;
        }
        let mut queue = VecDeque::from([from]);
        dist.insert(from, 0);
        while let Some(p) = queue.pop_front() {
            let d = dist[&p];
            for n in p.neighbors_4() {
                if terrain.is_passable(n) && !dist.contains_key(&n) {
                    dist.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        dist
    }

    #[test]
    fn open_grid_is_manhattan() {
        let terrain = Terrain::new(7, 7);
        let walk = GridWalk::new(&terrain, Point::new(0, 0), Point::new(6, 6));
        assert_eq!(min_cost(&walk), Some(12));
        // Every cell of the square lies on some monotone path.
        assert_eq!(optimal_paths(&walk).optimal_positions().len(), 49);
    }

    #[test]
    fn walls_force_detours() {
        let terrain = Terrain::parse(
            "\
.#...
.#.#.
...#.",
        )
        .unwrap();
        let walk = GridWalk::new(&terrain, Point::new(0, 0), Point::new(4, 0));
        assert_eq!(min_cost(&walk), Some(8));
    }

    #[test]
    fn walled_start_can_still_leave() {
        // Only the cell being entered has to be passable.
        let mut terrain = Terrain::new(3, 1);
        terrain.add_wall(Point::new(0, 0)).unwrap();
        let walk = GridWalk::new(&terrain, Point::new(0, 0), Point::new(2, 0));
        assert_eq!(min_cost(&walk), Some(2));
        assert_eq!(optimal_paths(&walk).optimal_positions().len(), 3);

        // A walled goal is never entered.
        let walk = GridWalk::new(&terrain, Point::new(2, 0), Point::new(0, 0));
        assert_eq!(min_cost(&walk), None);
    }

    #[test]
    fn optimal_cells_match_two_sided_bfs() {
        // A cell lies on a shortest walk iff its distances from both ends
        // add up to the shortest length.
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..60 {
            let (w, h) = (rng.random_range(2..8), rng.random_range(2..8));
            let mut terrain = Terrain::new(w, h);
            for p in terrain.bounds() {
                if rng.random_bool(0.3) {
                    terrain.set(p, Tile::Wall).unwrap();
                }
            }
            let start = Point::new(0, 0);
            let goal = Point::new(w - 1, h - 1);
            terrain.set(start, Tile::Open).unwrap();
            terrain.set(goal, Tile::Open).unwrap();

            let from_start = bfs(&terrain, start);
            let from_goal = bfs(&terrain, goal);
            let best = from_start.get(&goal).copied();

            let walk = GridWalk::new(&terrain, start, goal);
            let r = optimal_paths(&walk);
            assert_eq!(r.min_cost(), best);
            assert_eq!(min_cost(&walk), best);

            let expected: BTreeSet<Point> = match best {
                Some(best) => from_start
                    .iter()
                    .filter(|&(p, &d)| from_goal.get(p).is_some_and(|&g| d + g == best))
                    .map(|(&p, _)| p)
                    .collect(),
                None => BTreeSet::new(),
            };
            assert_eq!(r.optimal_positions(), expected);
        }
    }
}

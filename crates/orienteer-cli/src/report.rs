//! Runs a command on already-read input and formats its output.

use log::{info, warn};
use orienteer_core::{Point, Terrain, TerrainError, parse_obstacles};
use orienteer_paths::{
    BarrierConfig, BarrierOutcome, CostModel, OrientedMaze, first_blocking, optimal_paths,
    shortest_steps, with_walls,
};

/// Cheapest cost through `text` and the number of cells on any cheapest route.
pub fn maze(text: &str, costs: CostModel, render: bool) -> Result<String, TerrainError> {
    let terrain = Terrain::parse(text)?;
    let maze = OrientedMaze::new(&terrain, costs)?;
    info!(
        "maze: {}x{} from {} to {}",
        terrain.width(),
        terrain.height(),
        maze.start_pose().pos,
        maze.goal()
    );

    let paths = optimal_paths(&maze);
    let cells = paths.optimal_positions();

    let mut out = String::new();
    match paths.min_cost() {
        Some(cost) => out.push_str(&format!("cost: {cost}\n")),
        None => out.push_str("cost: unreachable\n"),
    }
    out.push_str(&format!("tiles: {}\n", cells.len()));
    if render {
        out.push_str(&terrain.render_with(&cells, 'O'));
        out.push('\n');
    }
    Ok(out)
}

/// Shortest walk after `take` obstacles (if asked) and the first obstacle
/// that disconnects the corners of a `width`×`height` grid.
pub fn barrier(
    text: &str,
    width: i32,
    height: i32,
    take: Option<usize>,
    config: &BarrierConfig,
) -> Result<String, TerrainError> {
    let obstacles = parse_obstacles(text)?;
    let terrain = Terrain::new(width, height);
    let start = Point::ZERO;
    let goal = Point::new(width - 1, height - 1);
    info!("barrier: {} obstacles on a {width}x{height} grid", obstacles.len());

    let mut out = String::new();
    if let Some(take) = take {
        if take > obstacles.len() {
            warn!("barrier: only {} obstacles, cannot take {take}", obstacles.len());
        }
        let dropped = with_walls(&terrain, &obstacles[..take.min(obstacles.len())])?;
        match shortest_steps(&dropped, start, goal) {
            Some(steps) => out.push_str(&format!("steps: {steps}\n")),
            None => out.push_str("steps: unreachable\n"),
        }
    }

    match first_blocking(&terrain, start, goal, &obstacles, config)? {
        BarrierOutcome::Blocked { obstacle, .. } => {
            out.push_str(&format!("blocker: {},{}\n", obstacle.x, obstacle.y));
        }
        BarrierOutcome::Unblocked => out.push_str("blocker: none\n"),
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
#######
#....E#
#.###.#
#S....#
#######";

    #[test]
    fn maze_report() {
        let out = maze(MAZE, CostModel::default(), false).unwrap();
        assert_eq!(out, "cost: 1006\ntiles: 7\n");
    }

    #[test]
    fn maze_render() {
        let out = maze(MAZE, CostModel::default(), true).unwrap();
        let expected = "\
cost: 1006
tiles: 7
#######
#....E#
#.###O#
#SOOOO#
#######
";
        assert_eq!(out, expected);
    }

    #[test]
    fn maze_without_goal_is_an_error() {
        let err = maze("#S.#", CostModel::default(), false).unwrap_err();
        assert_eq!(err, TerrainError::MissingGoal);
    }

    #[test]
    fn maze_unreachable() {
        let out = maze("S#E", CostModel::default(), false).unwrap();
        assert_eq!(out, "cost: unreachable\ntiles: 0\n");
    }

    #[test]
    fn barrier_report() {
        let text = "1,0\n1,1\n0,2\n1,2";
        let out = barrier(text, 3, 3, Some(2), &BarrierConfig::default()).unwrap();
        assert_eq!(out, "steps: 4\nblocker: 0,2\n");
    }

    #[test]
    fn barrier_take_beyond_list() {
        let out = barrier("1,1", 3, 3, Some(10), &BarrierConfig::default()).unwrap();
        assert_eq!(out, "steps: 4\nblocker: none\n");
    }

    #[test]
    fn barrier_with_wall_on_start() {
        let out = barrier("0,0\n2,2", 3, 3, Some(1), &BarrierConfig::default()).unwrap();
        assert_eq!(out, "steps: 4\nblocker: 2,2\n");
    }

    #[test]
    fn barrier_rejects_bad_lines() {
        let err = barrier("1,1\nnope", 3, 3, None, &BarrierConfig::default()).unwrap_err();
        assert!(matches!(err, TerrainError::InvalidCoordinate { line: 2, .. }));
    }
}

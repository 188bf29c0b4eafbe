//! Terrain grids and their text formats.
//!
//! A [`Terrain`] is a rectangular grid of [`Tile`]s anchored at (0, 0). It is
//! built either from an ASCII map (`#` walls, `.` floor, `S` start, `E` goal)
//! or as an empty grid that walls are dropped onto one at a time.

use std::collections::BTreeSet;
use std::fmt;

use crate::geom::{Point, Range};

/// The content of a single terrain cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
    Start,
    Goal,
}

impl Tile {
    /// Map a map character to a tile.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Open),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::Goal),
            _ => None,
        }
    }

    /// The map character for this tile.
    pub fn to_char(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Goal => 'E',
        }
    }
}

/// A rectangular grid of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

impl Terrain {
    /// Create an all-open terrain. Negative sizes are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            tiles: vec![Tile::Open; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Parse an ASCII map.
    ///
    /// Surrounding whitespace is trimmed from the whole text and a trailing
    /// `\r` from each line. Every line must have the same width and there
    /// may be at most one start and one goal marker; whether they are
    /// present is checked later by [`start`](Self::start) and
    /// [`goal`](Self::goal).
    pub fn parse(s: &str) -> Result<Self, TerrainError> {
        let s = s.trim();
        let mut tiles = Vec::new();
        let mut width: i32 = -1;
        let mut height: i32 = 0;
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;

        if s.is_empty() {
            return Ok(Self::new(0, 0));
        }

        for (y, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut x: i32 = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y as i32);
                let tile = Tile::from_char(ch).ok_or(TerrainError::InvalidTile { ch, pos })?;
                let marker = match tile {
                    Tile::Start => Some(&mut start),
                    Tile::Goal => Some(&mut goal),
                    _ => None,
                };
                if let Some(slot) = marker {
                    if let Some(first) = *slot {
                        return Err(TerrainError::DuplicateMarker {
                            tile,
                            first,
                            second: pos,
                        });
                    }
                    *slot = Some(pos);
                }
                tiles.push(tile);
                x += 1;
            }
            if width >= 0 && x != width {
                return Err(TerrainError::InconsistentSize {
                    line: y + 1,
                    expected: width as usize,
                    found: x as usize,
                });
            }
            width = x;
            height += 1;
        }

        Ok(Self {
            tiles,
            width: width.max(0),
            height,
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The range covered by this terrain.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Overwrite the tile at `p`.
    pub fn set(&mut self, p: Point, tile: Tile) -> Result<(), TerrainError> {
        let i = self.index(p).ok_or(TerrainError::OutOfBounds(p))?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Whether `p` is inside the terrain and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        matches!(self.at(p), Some(t) if t != Tile::Wall)
    }

    /// Turn the cell at `p` into a wall. Returns whether the cell changed.
    ///
    /// Walls are never removed again, so repeated calls only ever shrink
    /// the passable area.
    pub fn add_wall(&mut self, p: Point) -> Result<bool, TerrainError> {
        let i = self.index(p).ok_or(TerrainError::OutOfBounds(p))?;
        let changed = self.tiles[i] != Tile::Wall;
        self.tiles[i] = Tile::Wall;
        Ok(changed)
    }

    /// Position of the first tile equal to `tile`, in row-major order.
    pub fn find(&self, tile: Tile) -> Option<Point> {
        self.bounds()
            .iter()
            .zip(self.tiles.iter())
            .find_map(|(p, &t)| (t == tile).then_some(p))
    }

    /// Position of the start marker.
    pub fn start(&self) -> Result<Point, TerrainError> {
        self.find(Tile::Start).ok_or(TerrainError::MissingStart)
    }

    /// Position of the goal marker.
    pub fn goal(&self) -> Result<Point, TerrainError> {
        self.find(Tile::Goal).ok_or(TerrainError::MissingGoal)
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Render the map with `mark` drawn over every point of `marks` that
    /// is not a start or goal marker.
    pub fn render_with(&self, marks: &BTreeSet<Point>, mark: char) -> String {
        let mut out = String::with_capacity(self.tiles.len() + self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(x, y);
                let tile = self.at(p).unwrap_or_default();
                let ch = match tile {
                    Tile::Open | Tile::Wall if marks.contains(&p) => mark,
                    _ => tile.to_char(),
                };
                out.push(ch);
            }
            if y + 1 < self.height {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&BTreeSet::new(), ' '))
    }
}

/// Parse an obstacle list: one `x,y` pair per non-empty line.
pub fn parse_obstacles(s: &str) -> Result<Vec<Point>, TerrainError> {
    let mut points = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let invalid = || TerrainError::InvalidCoordinate {
            line: i + 1,
            text: line.to_string(),
        };
        let (x, y) = line.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i32>().map_err(|_| invalid())?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Errors raised while building or querying a terrain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// A map line has a different width from the first one.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a known tile.
    InvalidTile { ch: char, pos: Point },
    /// A start or goal marker appears twice.
    DuplicateMarker {
        tile: Tile,
        first: Point,
        second: Point,
    },
    /// The map has no start marker.
    MissingStart,
    /// The map has no goal marker.
    MissingGoal,
    /// A coordinate outside the terrain.
    OutOfBounds(Point),
    /// An obstacle line that is not an `x,y` pair.
    InvalidCoordinate { line: usize, text: String },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "terrain: line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidTile { ch, pos } => {
                write!(f, "terrain: invalid tile \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker {
                tile,
                first,
                second,
            } => write!(
                f,
                "terrain: marker \u{201c}{}\u{201d} at {second} duplicates the one at {first}",
                tile.to_char()
            ),
            Self::MissingStart => f.write_str("terrain: no start marker"),
            Self::MissingGoal => f.write_str("terrain: no goal marker"),
            Self::OutOfBounds(p) => write!(f, "terrain: {p} is out of bounds"),
            Self::InvalidCoordinate { line, text } => {
                write!(f, "obstacles: line {line}: expected \u{201c}x,y\u{201d}, got {text:?}")
            }
        }
    }
}

impl std::error::Error for TerrainError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
#####
#..E#
#.#.#
#S..#
#####";

    #[test]
    fn parse_and_locate_markers() {
        let t = Terrain::parse(MAZE).unwrap();
        assert_eq!(t.width(), 5);
        assert_eq!(t.height(), 5);
        assert_eq!(t.start(), Ok(Point::new(1, 3)));
        assert_eq!(t.goal(), Ok(Point::new(3, 1)));
        assert_eq!(t.at(Point::new(2, 2)), Some(Tile::Wall));
        assert_eq!(t.at(Point::new(5, 0)), None);
        assert_eq!(t.count(Tile::Wall), 17);
    }

    #[test]
    fn display_round_trips_text() {
        let t = Terrain::parse(MAZE).unwrap();
        assert_eq!(t.to_string(), MAZE);
    }

    #[test]
    fn passability() {
        let t = Terrain::parse(MAZE).unwrap();
        assert!(t.is_passable(Point::new(1, 1)));
        assert!(t.is_passable(Point::new(1, 3)));
        assert!(!t.is_passable(Point::new(0, 0)));
        assert!(!t.is_passable(Point::new(-1, 1)));
        assert!(!t.is_passable(Point::new(1, 5)));
    }

    #[test]
    fn crlf_lines_accepted() {
        let t = Terrain::parse("S.\r\n.E\r\n").unwrap();
        assert_eq!(t.width(), 2);
        assert_eq!(t.goal(), Ok(Point::new(1, 1)));
    }

    #[test]
    fn inconsistent_size_error() {
        let err = Terrain::parse("S..\n.E").unwrap_err();
        assert_eq!(
            err,
            TerrainError::InconsistentSize {
                line: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn invalid_tile_error() {
        let err = Terrain::parse("S.\n.X").unwrap_err();
        assert_eq!(
            err,
            TerrainError::InvalidTile {
                ch: 'X',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn duplicate_marker_error() {
        let err = Terrain::parse("S.S\n..E").unwrap_err();
        assert!(matches!(
            err,
            TerrainError::DuplicateMarker {
                tile: Tile::Start,
                ..
            }
        ));
    }

    #[test]
    fn missing_markers_reported() {
        let t = Terrain::parse("...\n.#.").unwrap();
        assert_eq!(t.start(), Err(TerrainError::MissingStart));
        assert_eq!(t.goal(), Err(TerrainError::MissingGoal));
        let empty = Terrain::parse("  \n ").unwrap();
        assert_eq!(empty.bounds().len(), 0);
        assert_eq!(empty.start(), Err(TerrainError::MissingStart));
    }

    #[test]
    fn add_wall_is_monotone() {
        let mut t = Terrain::new(3, 3);
        let p = Point::new(1, 1);
        assert_eq!(t.add_wall(p), Ok(true));
        assert_eq!(t.add_wall(p), Ok(false));
        assert!(!t.is_passable(p));
        assert_eq!(
            t.add_wall(Point::new(3, 0)),
            Err(TerrainError::OutOfBounds(Point::new(3, 0)))
        );
    }

    #[test]
    fn render_marks_skip_markers() {
        let t = Terrain::parse("S..E").unwrap();
        let marks: BTreeSet<Point> = (0..4).map(|x| Point::new(x, 0)).collect();
        assert_eq!(t.render_with(&marks, 'O'), "SOOE");
    }

    #[test]
    fn obstacles_parse() {
        let pts = parse_obstacles("5,4\n 4,2 \n\n4,5\n").unwrap();
        assert_eq!(pts, vec![Point::new(5, 4), Point::new(4, 2), Point::new(4, 5)]);
    }

    #[test]
    fn obstacles_reject_garbage() {
        let err = parse_obstacles("1,2\n3;4").unwrap_err();
        assert_eq!(
            err,
            TerrainError::InvalidCoordinate {
                line: 2,
                text: "3;4".to_string()
            }
        );
        assert!(parse_obstacles("1,x").is_err());
    }
}

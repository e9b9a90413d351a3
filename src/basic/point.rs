use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};

use super::dir::Dir;

/// A cell on the play grid, equality is exact
#[derive(Eq, PartialEq, Copy, Clone, Default, Hash, Add, Sub, AddAssign, SubAssign, Neg)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx * dist,
            y: self.y + dy * dist,
        }
    }

    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether the two cells share an edge
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

// row-major, bottom row first
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[test]
fn test_translate() {
    let p = Point::new(2, -1);
    assert_eq!(p.translate(Dir::L, 1), Point::new(1, -1));
    assert_eq!(p.translate(Dir::U, 3), Point::new(2, 2));
    assert_eq!(p.translate(Dir::R, -2), Point::new(0, -1));
    assert_eq!(p + Point::new(1, 1) - Point::new(3, 0), Point::new(0, 0));
}

#[test]
fn test_adjacency() {
    let p = Point::ORIGIN;
    assert!(Dir::iter().all(|dir| p.is_adjacent(p.translate(dir, 1))));
    assert!(!p.is_adjacent(Point::new(1, 1)));
    assert!(!p.is_adjacent(p));
}

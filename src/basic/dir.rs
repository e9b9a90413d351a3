use std::ops::Neg;

use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Axis {
    Horizontal, // -
    Vertical,   // |
}

impl Axis {
    pub fn other(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    pub fn axis(self) -> Axis {
        match self {
            U | D => Axis::Vertical,
            L | R => Axis::Horizontal,
        }
    }

    /// The direction along `axis` pointing towards the sign of `sign`,
    /// `None` for a zero sign
    pub fn from_axis(axis: Axis, sign: i32) -> Option<Self> {
        match (axis, sign.signum()) {
            (_, 0) => None,
            (Axis::Horizontal, 1) => Some(R),
            (Axis::Horizontal, _) => Some(L),
            (Axis::Vertical, 1) => Some(U),
            (Axis::Vertical, _) => Some(D),
        }
    }

    /// Unit step on the grid, y grows upwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            U => (0, 1),
            R => (1, 0),
            D => (0, -1),
            L => (-1, 0),
        }
    }

    pub fn is_opposite(self, other: Self) -> bool {
        other == -self
    }

    pub fn perpendicular(self) -> [Self; 2] {
        match self.axis() {
            Axis::Vertical => [R, L],
            Axis::Horizontal => [U, D],
        }
    }
}

#[test]
fn test_dir_neg() {
    for (dir, opposite) in [(U, D), (R, L), (D, U), (L, R)] {
        assert_eq!(-dir, opposite);
        assert!(dir.is_opposite(opposite));
        assert!(!dir.is_opposite(dir));
    }
}

#[test]
fn test_from_axis() {
    assert_eq!(Dir::from_axis(Axis::Horizontal, -1), Some(L));
    assert_eq!(Dir::from_axis(Axis::Horizontal, 3), Some(R));
    assert_eq!(Dir::from_axis(Axis::Vertical, 1), Some(U));
    assert_eq!(Dir::from_axis(Axis::Vertical, -2), Some(D));
    assert_eq!(Dir::from_axis(Axis::Vertical, 0), None);
}

#[test]
fn test_perpendicular_axis() {
    for dir in Dir::iter() {
        for turn in dir.perpendicular() {
            assert_eq!(turn.axis(), dir.axis().other());
        }
    }
}

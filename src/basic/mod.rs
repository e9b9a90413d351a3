pub use board::Board;
pub use dir::{Axis, Dir};
pub use point::Point;

pub mod board;
mod dir;
mod point;

/// Seconds, as handed to the engine by the game loop
pub type Seconds = f32;

/// A turn request from the input collaborator: which axis and which way
/// along it (only the sign of `sign` matters, zero means no request)
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TurnRequest {
    pub axis: Axis,
    pub sign: i32,
}

impl TurnRequest {
    pub fn dir(self) -> Option<Dir> {
        Dir::from_axis(self.axis, self.sign)
    }
}

impl From<Dir> for TurnRequest {
    fn from(dir: Dir) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            axis: dir.axis(),
            sign: dx + dy,
        }
    }
}

#[test]
fn test_turn_request_from_dir() {
    for dir in Dir::iter() {
        assert_eq!(TurnRequest::from(dir).dir(), Some(dir));
    }
}

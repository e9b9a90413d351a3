use crate::basic::{Axis, Dir, TurnRequest};
use crate::food::Food;
use crate::snake::SegmentChain;

mod keyboard;
pub mod seeker;

pub use keyboard::Keyboard;
pub use seeker::Seeker;

/// Which turns a player controller accepts
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TurnPolicy {
    /// Only turns onto the other axis, one per move
    Perpendicular,
    /// Any turn that isn't a reversal, one per move
    Buffered,
    /// Like `Perpendicular`, but after a turn the snake has to go
    /// straight for another move before it can turn again
    Debounced,
}

/// Which axis a seeker closes the distance on first
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AxisPriority {
    VerticalFirst,
    HorizontalFirst,
}

impl AxisPriority {
    pub fn axes(self) -> [Axis; 2] {
        match self {
            AxisPriority::VerticalFirst => [Axis::Vertical, Axis::Horizontal],
            AxisPriority::HorizontalFirst => [Axis::Horizontal, Axis::Vertical],
        }
    }
}

#[derive(Clone, Debug)]
pub enum Template {
    Player(TurnPolicy),
    Seeker(AxisPriority),
}

pub trait Controller {
    /// Direction for the upcoming move, `None` keeps the current one.
    /// Called once per move, right before the chain advances.
    fn next_dir(&mut self, body: &SegmentChain, dir: Dir, target: Option<&Food>) -> Option<Dir>;

    /// Called after the chain has advanced
    fn move_completed(&mut self) {}

    fn reset(&mut self, _dir: Dir) {}

    // only meaningful for player controllers
    fn turn_requested(&mut self, _request: TurnRequest) {}
}

impl Template {
    pub fn into_controller(self, start_dir: Dir) -> Box<dyn Controller> {
        match self {
            Template::Player(policy) => Box::new(Keyboard::new(policy, start_dir)),
            Template::Seeker(priority) => Box::new(Seeker::new(priority)),
        }
    }
}

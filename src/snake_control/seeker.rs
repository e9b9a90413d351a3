use crate::basic::{Axis, Dir, Point};
use crate::food::Food;
use crate::snake::SegmentChain;
use crate::snake_control::{AxisPriority, Controller};

/// Heads straight for the targeted food, one axis at a time. Never
/// proposes a reversal: food straight behind is approached by turning aside.
pub struct Seeker {
    priority: AxisPriority,
}

impl Seeker {
    /// Direction taken while there is nothing to chase
    pub const IDLE_DIR: Dir = Dir::R;

    pub fn new(priority: AxisPriority) -> Self {
        Self { priority }
    }
}

fn towards(head: Point, target: Point, axis: Axis) -> Option<Dir> {
    match axis {
        Axis::Horizontal => Dir::from_axis(axis, target.x - head.x),
        Axis::Vertical => Dir::from_axis(axis, target.y - head.y),
    }
}

/// Directions that bring `head` closer to `target`, most preferred first.
/// Empty when the head is on the target.
pub fn preferred_dirs(head: Point, target: Point, priority: AxisPriority) -> impl Iterator<Item = Dir> {
    priority
        .axes()
        .into_iter()
        .filter_map(move |axis| towards(head, target, axis))
}

impl Controller for Seeker {
    fn next_dir(&mut self, body: &SegmentChain, dir: Dir, target: Option<&Food>) -> Option<Dir> {
        let head = body.head()?;
        let Some(target) = target else {
            return Some(Self::IDLE_DIR).filter(|idle| !idle.is_opposite(dir));
        };

        let mut preferred = preferred_dirs(head, target.pos, self.priority).peekable();
        preferred.peek()?;
        preferred
            .find(|d| !d.is_opposite(dir))
            // the food is straight behind, go around it
            .or_else(|| dir.perpendicular().first().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::FoodType;
    use itertools::Itertools;
    use Dir::*;

    fn food(x: i32, y: i32) -> Food {
        Food::new(Point::new(x, y), FoodType::Common)
    }

    fn chain(dir: Dir) -> SegmentChain {
        SegmentChain::straight(Point::ORIGIN, dir, 3)
    }

    #[test]
    fn vertical_first_closes_y_then_x() {
        let mut seeker = Seeker::new(AxisPriority::VerticalFirst);
        assert_eq!(seeker.next_dir(&chain(L), L, Some(&food(-5, 3))), Some(U));
        assert_eq!(seeker.next_dir(&chain(L), L, Some(&food(-5, 0))), Some(L));
    }

    #[test]
    fn horizontal_first_closes_x_then_y() {
        let mut seeker = Seeker::new(AxisPriority::HorizontalFirst);
        assert_eq!(seeker.next_dir(&chain(U), U, Some(&food(4, 3))), Some(R));
        assert_eq!(seeker.next_dir(&chain(U), U, Some(&food(0, 3))), Some(U));
    }

    #[test]
    fn never_reverses() {
        let mut seeker = Seeker::new(AxisPriority::VerticalFirst);
        // target is below but the snake goes up: take the horizontal option
        assert_eq!(seeker.next_dir(&chain(U), U, Some(&food(-2, -4))), Some(L));
        // straight behind: go sideways
        assert_eq!(seeker.next_dir(&chain(U), U, Some(&food(0, -4))), Some(R));
    }

    #[test]
    fn idle_without_target() {
        let mut seeker = Seeker::new(AxisPriority::VerticalFirst);
        assert_eq!(seeker.next_dir(&chain(U), U, None), Some(Seeker::IDLE_DIR));
        assert_eq!(seeker.next_dir(&chain(L), L, None), None);
    }

    #[test]
    fn preferred_dirs_is_empty_on_target() {
        let p = Point::new(3, 3);
        assert_eq!(preferred_dirs(p, p, AxisPriority::HorizontalFirst).count(), 0);
        assert_eq!(
            preferred_dirs(p, Point::new(0, 5), AxisPriority::HorizontalFirst).collect_vec(),
            vec![L, U]
        );
    }
}

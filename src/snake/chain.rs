use std::collections::VecDeque;

use itertools::Itertools;

use crate::basic::{Dir, Point};

/// Ordered cells of a snake, index 0 is the head
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SegmentChain {
    segments: VecDeque<Point>,
}

impl SegmentChain {
    /// A straight chain of `len` cells with the head at `head`,
    /// the body trailing behind it (opposite to `dir`)
    pub fn straight(head: Point, dir: Dir, len: usize) -> Self {
        Self {
            segments: (0..len as i32).map(|i| head.translate(-dir, i)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn head(&self) -> Option<Point> {
        self.segments.front().copied()
    }

    pub fn tail(&self) -> Option<Point> {
        self.segments.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().copied()
    }

    /// Every segment except the head
    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().skip(1)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.segments.contains(&p)
    }

    /// Moves the head one cell in `dir`, every other segment takes the
    /// place of the one in front of it. Returns the cell the tail left.
    pub fn advance(&mut self, dir: Dir) -> Point {
        let head = self.head().expect("called advance() on an empty chain");
        // taking the tail off the back and putting a new head on the front
        // is the same as shifting every segment forward by one
        let last_tail = self
            .segments
            .pop_back()
            .expect("chain cannot be empty after reading its head");
        self.segments.push_front(head.translate(dir, 1));
        last_tail
    }

    /// Appends a segment behind the tail, normally where the tail just was
    pub fn grow(&mut self, at: Point) {
        self.segments.push_back(at);
    }

    pub fn shrink(&mut self) -> Option<Point> {
        self.segments.pop_back()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Whether each segment shares an edge with the next one
    pub fn is_contiguous(&self) -> bool {
        self.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn chain() -> SegmentChain {
        SegmentChain::straight(Point::ORIGIN, Dir::L, 3)
    }

    #[test]
    fn straight_chain_trails_behind_head() {
        assert_eq!(
            chain().iter().collect_vec(),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
        assert!(chain().is_contiguous());
    }

    #[test]
    fn advance_follows_the_leader() {
        let mut chain = chain();
        let before = chain.iter().collect_vec();
        let vacated = chain.advance(Dir::L);

        assert_eq!(vacated, Point::new(2, 0));
        assert_eq!(chain.len(), before.len());
        assert_eq!(chain.head(), Some(Point::new(-1, 0)));
        for (i, seg) in chain.body().enumerate() {
            assert_eq!(seg, before[i]);
        }
        assert!(chain.is_contiguous());
    }

    #[test]
    fn contiguity_survives_turns() {
        let mut chain = SegmentChain::straight(Point::ORIGIN, Dir::R, 5);
        for dir in [Dir::R, Dir::U, Dir::U, Dir::L, Dir::D, Dir::L, Dir::L] {
            chain.advance(dir);
            assert!(chain.is_contiguous());
            assert_eq!(chain.len(), 5);
        }
    }

    #[test]
    fn grow_and_shrink_change_length_by_one() {
        let mut chain = chain();
        let vacated = chain.advance(Dir::L);
        chain.grow(vacated);
        assert_eq!(chain.len(), 4);
        assert_eq!(chain.tail(), Some(vacated));
        assert!(chain.is_contiguous());

        assert_eq!(chain.shrink(), Some(vacated));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    #[should_panic]
    fn advance_on_empty_chain_panics() {
        SegmentChain::default().advance(Dir::U);
    }
}

use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::Point;

/// Inclusive rectangle of playable cells, anything outside is wall
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub min: Point,
    pub max: Point,
}

impl Board {
    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    pub fn width(&self) -> usize {
        (self.max.x - self.min.x + 1).max(0) as usize
    }

    pub fn height(&self) -> usize {
        (self.max.y - self.min.y + 1).max(0) as usize
    }

    pub fn cells(&self) -> usize {
        self.width() * self.height()
    }

    fn index_of(&self, p: Point) -> usize {
        (p.y - self.min.y) as usize * self.width() + (p.x - self.min.x) as usize
    }

    fn point_at(&self, idx: usize) -> Point {
        Point {
            x: self.min.x + (idx % self.width()) as i32,
            y: self.min.y + (idx / self.width()) as i32,
        }
    }
}

/// Sorted, deduplicated list of the cells inside `board` that are taken
pub fn get_occupied_cells(board: Board, taken: impl IntoIterator<Item = Point>) -> Vec<Point> {
    let mut occupied_cells: Vec<_> = taken.into_iter().filter(|p| board.contains(*p)).collect();
    occupied_cells.sort_unstable();
    occupied_cells.dedup();
    occupied_cells
}

/// Uniformly random cell of `board` not in `occupied_cells`,
/// which must be sorted and deduplicated (see `get_occupied_cells`)
pub fn random_free_spot(occupied_cells: &[Point], board: Board, rng: &mut impl Rng) -> Option<Point> {
    let free_spaces = board.cells().checked_sub(occupied_cells.len())?;
    if free_spaces == 0 {
        return None;
    }

    let mut new_idx = (0..free_spaces).sample_single(rng);
    for p in occupied_cells {
        if board.index_of(*p) <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < board.cells());
    Some(board.point_at(new_idx))
}

#[test]
fn test_random_free_spot_fills_board() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let board = Board {
        min: Point::new(-1, -1),
        max: Point::new(1, 1),
    };
    let mut rng = StdRng::seed_from_u64(7);
    let mut taken = vec![];
    for _ in 0..board.cells() {
        let occupied = get_occupied_cells(board, taken.iter().copied());
        let spot = random_free_spot(&occupied, board, &mut rng).expect("board has space left");
        assert!(board.contains(spot));
        assert!(!taken.contains(&spot));
        taken.push(spot);
    }

    let occupied = get_occupied_cells(board, taken);
    assert_eq!(random_free_spot(&occupied, board, &mut rng), None);
}

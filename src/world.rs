use crate::basic::{Board, Point};
use crate::food::Food;
use crate::snake::eat_mechanics::Contact;
use crate::snake::SegmentChain;

/// Whatever owns the board and the food, as seen by a moving snake
pub trait World {
    /// What occupies `pos`, not counting the asking snake itself
    fn contact_at(&self, pos: Point) -> Contact;

    /// Called when the snake has eaten the food at `pos`
    fn consume_food(&mut self, pos: Point);
}

/// A borrowed view of the game for one snake's move: the board, the
/// current food slot and the other snake
pub struct Arena<'a> {
    pub board: Board,
    pub food: &'a mut Option<Food>,
    pub opponent: Option<&'a SegmentChain>,
}

impl World for Arena<'_> {
    fn contact_at(&self, pos: Point) -> Contact {
        if !self.board.contains(pos) {
            return Contact::Boundary;
        }
        match *self.food {
            Some(food) if food.pos == pos => Contact::Food(food.food_type),
            _ if self.opponent.map_or(false, |chain| chain.contains(pos)) => Contact::OpposingBody,
            _ => Contact::Nothing,
        }
    }

    fn consume_food(&mut self, pos: Point) {
        if matches!(*self.food, Some(food) if food.pos == pos) {
            *self.food = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Dir;
    use crate::food::FoodType;

    fn board() -> Board {
        Board {
            min: Point::new(-3, -3),
            max: Point::new(3, 3),
        }
    }

    #[test]
    fn classifies_cells() {
        let mut food = Some(Food::new(Point::new(1, 1), FoodType::Life));
        let opponent = SegmentChain::straight(Point::new(-1, 0), Dir::U, 3);
        let arena = Arena {
            board: board(),
            food: &mut food,
            opponent: Some(&opponent),
        };

        assert_eq!(arena.contact_at(Point::new(4, 0)), Contact::Boundary);
        assert_eq!(arena.contact_at(Point::new(1, 1)), Contact::Food(FoodType::Life));
        assert_eq!(arena.contact_at(Point::new(-1, -2)), Contact::OpposingBody);
        assert_eq!(arena.contact_at(Point::new(2, 2)), Contact::Nothing);
    }

    #[test]
    fn consuming_empties_the_slot() {
        let mut food = Some(Food::new(Point::new(1, 1), FoodType::Common));
        let mut arena = Arena {
            board: board(),
            food: &mut food,
            opponent: None,
        };
        arena.consume_food(Point::new(0, 0));
        assert!(arena.food.is_some());
        arena.consume_food(Point::new(1, 1));
        assert!(food.is_none());
    }
}

use crate::basic::Point;

pub mod spawn;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FoodType {
    Common,
    /// Speeds the snake up
    Speed,
    /// Grants an extra life to snakes that can hold them
    Life,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Food {
    pub pos: Point,
    pub food_type: FoodType,
}

impl Food {
    pub fn new(pos: Point, food_type: FoodType) -> Self {
        Self { pos, food_type }
    }
}

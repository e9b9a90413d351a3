use log::warn;
use rand::Rng;

use crate::basic::board::{get_occupied_cells, random_free_spot};
use crate::basic::{Board, Point};
use crate::food::{Food, FoodType};
use crate::prefs::Prefs;

macro_rules! float_sum {
    () => { 0. };
    ($x:expr) => { $x };
    ($x:expr, $( $rest:tt )*) => { $x + float_sum!($( $rest )*) };
}

// randomly choose one of a number of options with a given probability each
// and with a catch-all option
macro_rules! choose {
    ($rand:ident ;; $( $probs:expr ),* ;; $prob:expr => $then:expr, $( $rest:tt )*) => {
        if $rand < float_sum!($( $probs ),*, $prob) {
            $then
        } else {
            choose!($rand ;; $( $probs ),*, $prob ;; $( $rest )*)
        }
    };
    ($_rand:ident ;; $( $_probs:expr ),* ;; $otherwise:expr $( , )?) => {
        {
            $otherwise
        }
    };
    (let $rand:ident: f64 <- $rng:expr; $( $tokens:tt )*) => {
        {
            let $rand = $rng.gen::<f64>();
            choose!($rand ;; 0. ;; $( $tokens )*)
        }
    };
}

pub fn generate_food_type(prefs: &Prefs, rng: &mut impl Rng) -> FoodType {
    choose! {
        let rand: f64 <- rng;
        prefs.prob_speed_food => FoodType::Speed,
        prefs.prob_life_food => FoodType::Life,
        FoodType::Common,
    }
}

pub enum SpawnPolicy {
    /// Uniformly random free cell, type drawn from the food probabilities
    Random,
    /// Cycles through a fixed list, used for demos and tests
    Scheduled { schedule: Vec<Food>, next_index: usize },
}

impl SpawnPolicy {
    pub fn scheduled(schedule: Vec<Food>) -> Self {
        assert!(!schedule.is_empty(), "empty food schedule");
        SpawnPolicy::Scheduled { schedule, next_index: 0 }
    }

    pub fn reset(&mut self) {
        match self {
            SpawnPolicy::Random => {}
            SpawnPolicy::Scheduled { next_index, .. } => *next_index = 0,
        }
    }

    /// Produces the next food item, `None` when the board is full
    pub fn next_food(
        &mut self,
        prefs: &Prefs,
        board: Board,
        taken: impl IntoIterator<Item = Point>,
        rng: &mut impl Rng,
    ) -> Option<Food> {
        match self {
            SpawnPolicy::Random => {
                let occupied_cells = get_occupied_cells(board, taken);
                let Some(pos) = random_free_spot(&occupied_cells, board, rng) else {
                    warn!("no space left for new food");
                    return None;
                };
                Some(Food::new(pos, generate_food_type(prefs, rng)))
            }
            SpawnPolicy::Scheduled { schedule, next_index } => {
                let food = schedule[*next_index];
                *next_index = (*next_index + 1) % schedule.len();
                Some(food)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn food_type_follows_probabilities_at_the_edges() {
        let mut rng = StdRng::seed_from_u64(1);
        let all_speed = Prefs::default().food_probabilities(1., 0.);
        let all_life = Prefs::default().food_probabilities(0., 1.);
        let all_common = Prefs::default().food_probabilities(0., 0.);
        for _ in 0..32 {
            assert_eq!(generate_food_type(&all_speed, &mut rng), FoodType::Speed);
            assert_eq!(generate_food_type(&all_life, &mut rng), FoodType::Life);
            assert_eq!(generate_food_type(&all_common, &mut rng), FoodType::Common);
        }
    }

    #[test]
    fn random_food_avoids_taken_cells() {
        let prefs = Prefs::default();
        let board = Board {
            min: Point::new(0, 0),
            max: Point::new(1, 0),
        };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..16 {
            let food = SpawnPolicy::Random
                .next_food(&prefs, board, [Point::new(0, 0)], &mut rng)
                .expect("one free cell");
            assert_eq!(food.pos, Point::new(1, 0));
        }
        let full = SpawnPolicy::Random.next_food(
            &prefs,
            board,
            [Point::new(0, 0), Point::new(1, 0)],
            &mut rng,
        );
        assert_eq!(full, None);
    }

    #[test]
    fn schedule_cycles() {
        let a = Food::new(Point::new(1, 1), FoodType::Common);
        let b = Food::new(Point::new(2, 2), FoodType::Speed);
        let mut policy = SpawnPolicy::scheduled(vec![a, b]);
        let mut rng = StdRng::seed_from_u64(0);
        let prefs = Prefs::default();
        let mut next = || policy.next_food(&prefs, prefs.board, Vec::<Point>::new(), &mut rng);
        assert_eq!(next(), Some(a));
        assert_eq!(next(), Some(b));
        assert_eq!(next(), Some(a));
    }
}

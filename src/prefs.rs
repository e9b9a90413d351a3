use static_assertions::const_assert;

use crate::basic::{Board, Dir, Point, Seconds};

pub const DEFAULT_INTERVAL: Seconds = 0.2;
pub const NORMAL_FOOD_DELTA: Seconds = 0.02;
pub const SPEED_FOOD_DELTA: Seconds = 0.04;
pub const MIN_INTERVAL: Seconds = 0.05;
pub const MAX_EXTRA_LIVES: u8 = 3;

const_assert!(MAX_EXTRA_LIVES > 0);
const_assert!(MIN_INTERVAL > 0. && MIN_INTERVAL < DEFAULT_INTERVAL);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, Error)]
pub enum PrefsError {
    #[display(fmt = "base interval must be positive")]
    NonPositiveInterval,
    #[display(fmt = "interval floor must be positive and not above the base interval")]
    InvalidFloor,
    #[display(fmt = "food deltas must not be negative")]
    NegativeDelta,
    #[display(fmt = "a snake needs at least one segment")]
    EmptySnake,
    #[display(fmt = "food probabilities must be within [0, 1] and sum to at most 1")]
    InvalidProbability,
    #[display(fmt = "spawn point lies outside the board")]
    SpawnOutsideBoard,
    #[display(fmt = "a snake can hold at most 3 extra lives")]
    TooManyLives,
}

#[derive(Copy, Clone, Debug)]
pub struct Prefs {
    pub base_interval: Seconds,
    pub normal_food_delta: Seconds,
    pub speed_food_delta: Seconds,
    pub min_interval: Seconds,
    pub max_extra_lives: u8,

    pub initial_len: usize,
    pub player_spawn: Point,
    pub player_dir: Dir,
    pub enemy_spawn: Point,
    pub enemy_dir: Dir,

    pub board: Board,
    pub prob_speed_food: f64,
    pub prob_life_food: f64,

    pub enemy_enabled: bool,
    pub enemy_respawns: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            base_interval: DEFAULT_INTERVAL,
            normal_food_delta: NORMAL_FOOD_DELTA,
            speed_food_delta: SPEED_FOOD_DELTA,
            min_interval: MIN_INTERVAL,
            max_extra_lives: MAX_EXTRA_LIVES,

            initial_len: 3,
            player_spawn: Point::ORIGIN,
            player_dir: Dir::L,
            enemy_spawn: Point::new(-20, -10),
            enemy_dir: Dir::R,

            board: Board {
                min: Point::new(-24, -13),
                max: Point::new(24, 13),
            },
            prob_speed_food: 0.1,
            prob_life_food: 0.05,

            enemy_enabled: true,
            enemy_respawns: true,
        }
    }
}

// builder
impl Prefs {
    pub fn base_interval(mut self, interval: Seconds) -> Self {
        self.base_interval = interval;
        self
    }

    pub fn min_interval(mut self, interval: Seconds) -> Self {
        self.min_interval = interval;
        self
    }

    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn food_probabilities(mut self, speed: f64, life: f64) -> Self {
        self.prob_speed_food = speed;
        self.prob_life_food = life;
        self
    }

    pub fn enemy_enabled(mut self, enabled: bool) -> Self {
        self.enemy_enabled = enabled;
        self
    }

    pub fn enemy_respawns(mut self, respawns: bool) -> Self {
        self.enemy_respawns = respawns;
        self
    }

    pub fn player_spawn(mut self, pos: Point, dir: Dir) -> Self {
        self.player_spawn = pos;
        self.player_dir = dir;
        self
    }

    pub fn enemy_spawn(mut self, pos: Point, dir: Dir) -> Self {
        self.enemy_spawn = pos;
        self.enemy_dir = dir;
        self
    }

    pub fn validate(&self) -> Result<(), PrefsError> {
        use PrefsError::*;

        if self.base_interval <= 0. {
            return Err(NonPositiveInterval);
        }
        if self.min_interval <= 0. || self.min_interval > self.base_interval {
            return Err(InvalidFloor);
        }
        if self.normal_food_delta < 0. || self.speed_food_delta < 0. {
            return Err(NegativeDelta);
        }
        if self.initial_len == 0 {
            return Err(EmptySnake);
        }
        if self.max_extra_lives > MAX_EXTRA_LIVES {
            return Err(TooManyLives);
        }
        let probs = [self.prob_speed_food, self.prob_life_food];
        if probs.iter().any(|p| !(0. ..=1.).contains(p)) || probs.iter().sum::<f64>() > 1. {
            return Err(InvalidProbability);
        }
        let mut spawns = vec![self.player_spawn];
        if self.enemy_enabled {
            spawns.push(self.enemy_spawn);
        }
        if spawns.into_iter().any(|p| !self.board.contains(p)) {
            return Err(SpawnOutsideBoard);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefs_are_valid() {
        assert_eq!(Prefs::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            Prefs::default().base_interval(0.).validate(),
            Err(PrefsError::NonPositiveInterval)
        );
        assert_eq!(
            Prefs::default().min_interval(0.5).validate(),
            Err(PrefsError::InvalidFloor)
        );
        assert_eq!(
            Prefs::default().food_probabilities(0.7, 0.7).validate(),
            Err(PrefsError::InvalidProbability)
        );
        assert_eq!(
            Prefs::default().player_spawn(Point::new(100, 0), Dir::L).validate(),
            Err(PrefsError::SpawnOutsideBoard)
        );
        let prefs = Prefs {
            max_extra_lives: MAX_EXTRA_LIVES + 1,
            ..Prefs::default()
        };
        assert_eq!(prefs.validate(), Err(PrefsError::TooManyLives));
    }

    #[test]
    fn disabled_enemy_spawn_is_not_checked() {
        let prefs = Prefs::default()
            .enemy_enabled(false)
            .enemy_spawn(Point::new(500, 500), Dir::R);
        assert_eq!(prefs.validate(), Ok(()));
    }
}

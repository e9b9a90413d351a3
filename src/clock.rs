use crate::basic::Seconds;
use crate::food::FoodType;
use crate::prefs::{DEFAULT_INTERVAL, MIN_INTERVAL, NORMAL_FOOD_DELTA, SPEED_FOOD_DELTA};

/// How eating changes the move interval
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveTiming {
    pub base: Seconds,
    /// Added for common (and life) food, slows the snake down
    pub normal_delta: Seconds,
    /// Subtracted for speed food
    pub speed_delta: Seconds,
    /// The interval never goes below this
    pub floor: Seconds,
}

impl Default for MoveTiming {
    fn default() -> Self {
        Self {
            base: DEFAULT_INTERVAL,
            normal_delta: NORMAL_FOOD_DELTA,
            speed_delta: SPEED_FOOD_DELTA,
            floor: MIN_INTERVAL,
        }
    }
}

impl MoveTiming {
    pub fn after_eating(&self, interval: Seconds, food_type: FoodType) -> Seconds {
        match food_type {
            FoodType::Speed => (interval - self.speed_delta).max(self.floor),
            FoodType::Common | FoodType::Life => interval + self.normal_delta,
        }
    }
}

/// Turns frame time into discrete move ticks.
///
/// The accumulator restarts from zero whenever a tick fires (the remainder
/// is dropped), so the snake moves at most once per update and a long
/// frame only delays the next move.
#[derive(Copy, Clone, Debug)]
pub struct MoveClock {
    interval: Seconds,
    elapsed: Seconds,
}

impl MoveClock {
    pub fn new(interval: Seconds) -> Self {
        assert!(interval > 0., "move interval must be positive, got {interval}");
        Self { interval, elapsed: 0. }
    }

    pub fn interval(&self) -> Seconds {
        self.interval
    }

    /// Takes effect on the next scheduled tick, time already
    /// accumulated is kept
    pub fn set_interval(&mut self, interval: Seconds) {
        assert!(interval > 0., "move interval must be positive, got {interval}");
        self.interval = interval;
    }

    /// Returns whether the snake should move now
    pub fn tick(&mut self, delta: Seconds) -> bool {
        self.elapsed += delta;
        if self.elapsed >= self.interval {
            self.elapsed = 0.;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, interval: Seconds) {
        self.set_interval(interval);
        self.elapsed = 0.;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut clock = MoveClock::new(0.25);
        let fired = (0..12).filter(|_| clock.tick(0.0625)).count();
        assert_eq!(fired, 3);
    }

    #[test]
    fn long_frame_fires_once_and_drops_remainder() {
        let mut clock = MoveClock::new(0.25);
        assert!(clock.tick(0.75));
        assert!(!clock.tick(0.125));
        assert!(clock.tick(0.125));
    }

    #[test]
    fn new_interval_applies_to_next_tick() {
        let mut clock = MoveClock::new(0.5);
        assert!(!clock.tick(0.25));
        clock.set_interval(0.375);
        assert!(!clock.tick(0.0625));
        assert!(clock.tick(0.0625));
    }

    #[test]
    fn speed_food_stops_at_the_floor() {
        let timing = MoveTiming::default();
        let mut interval = timing.base;
        let mut seen = vec![interval];
        for _ in 0..10 {
            interval = timing.after_eating(interval, FoodType::Speed);
            seen.push(interval);
        }
        assert!((seen[1] - 0.16).abs() < 1e-6);
        assert!((seen[3] - 0.08).abs() < 1e-6);
        assert_eq!(*seen.last().unwrap(), timing.floor);
        assert!(seen.iter().all(|i| *i >= timing.floor));
    }

    #[test]
    fn common_and_life_food_slow_down() {
        let timing = MoveTiming::default();
        let slower = timing.after_eating(timing.base, FoodType::Common);
        assert!((slower - 0.22).abs() < 1e-6);
        let slower = timing.after_eating(slower, FoodType::Life);
        assert!((slower - 0.24).abs() < 1e-6);
    }

    #[test]
    #[should_panic]
    fn rejects_non_positive_interval() {
        let mut clock = MoveClock::new(0.2);
        clock.set_interval(0.);
    }
}

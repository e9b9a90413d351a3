use std::fmt::{Display, Formatter};

use super::*;
use crate::basic::{Dir, Point};
use crate::clock::{MoveClock, MoveTiming};
use crate::prefs::Prefs;
use crate::snake_control::{self, AxisPriority, TurnPolicy};

#[derive(Debug, Error)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        writeln!(f, "builder: {:?}", self.0)
    }
}

#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub name: Option<&'static str>,
    pub pos: Option<Point>,
    pub dir: Option<Dir>,
    pub len: Option<usize>,
    pub timing: Option<MoveTiming>,

    pub controller: Option<snake_control::Template>,
    pub collision_policy: Option<CollisionPolicy>,
    pub max_extra_lives: Option<u8>,
}

impl Builder {
    #[inline(always)]
    #[must_use]
    pub fn name(mut self, value: &'static str) -> Self {
        self.name = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn pos(mut self, value: Point) -> Self {
        self.pos = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn len(mut self, value: usize) -> Self {
        self.len = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn timing(mut self, value: MoveTiming) -> Self {
        self.timing = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn controller(mut self, value: snake_control::Template) -> Self {
        self.controller = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn collision_policy(mut self, value: CollisionPolicy) -> Self {
        self.collision_policy = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn max_extra_lives(mut self, value: u8) -> Self {
        self.max_extra_lives = Some(value);
        self
    }

    fn error(&self, msg: &'static str) -> BuilderError {
        BuilderError(Box::new(self.clone()), msg)
    }

    /// The snake starts out inactive, call `Snake::spawn` to put it on
    /// the board
    pub fn build(&self) -> Result<Snake, BuilderError> {
        let pos = self.pos.ok_or_else(|| self.error("missing field `pos`"))?;
        let dir = self.dir.ok_or_else(|| self.error("missing field `dir`"))?;
        let controller = self
            .controller
            .clone()
            .ok_or_else(|| self.error("missing field `controller`"))?;

        let initial_len = self.len.unwrap_or(3);
        if initial_len == 0 {
            return Err(self.error("a snake needs at least one segment"));
        }

        let timing = self.timing.unwrap_or_default();
        if timing.base <= 0. {
            return Err(self.error("base interval must be positive"));
        }
        if timing.floor <= 0. || timing.floor > timing.base {
            return Err(self.error("interval floor must be positive and not above the base interval"));
        }

        let collision_policy = self.collision_policy.clone().unwrap_or_else(CollisionPolicy::fatal);
        // lives are only worth keeping if the policy can spend them
        let max_extra_lives = self.max_extra_lives.unwrap_or(if collision_policy.uses_lives() {
            crate::prefs::MAX_EXTRA_LIVES
        } else {
            0
        });
        if max_extra_lives > crate::prefs::MAX_EXTRA_LIVES {
            return Err(self.error("a snake can hold at most 3 extra lives"));
        }

        Ok(Snake {
            name: self.name.unwrap_or("snake"),
            spawn_pos: pos,
            spawn_dir: dir,
            initial_len,
            timing,
            collision_policy,
            max_extra_lives,

            state: State::Inactive,
            chain: SegmentChain::default(),
            dir,
            clock: MoveClock::new(timing.base),
            extra_lives: 0,
            target: None,

            controller: controller.into_controller(dir),
            listeners: Listeners::default(),
        })
    }
}

fn timing_from(prefs: &Prefs) -> MoveTiming {
    MoveTiming {
        base: prefs.base_interval,
        normal_delta: prefs.normal_food_delta,
        speed_delta: prefs.speed_food_delta,
        floor: prefs.min_interval,
    }
}

impl Snake {
    /// Keyboard controlled, survives running into the enemy while it
    /// has extra lives
    pub fn player(prefs: &Prefs) -> Result<Self, BuilderError> {
        Builder::default()
            .name("player")
            .pos(prefs.player_spawn)
            .dir(prefs.player_dir)
            .len(prefs.initial_len)
            .timing(timing_from(prefs))
            .controller(snake_control::Template::Player(TurnPolicy::Perpendicular))
            .collision_policy(CollisionPolicy::buffered_lives())
            .max_extra_lives(prefs.max_extra_lives)
            .build()
    }

    /// Chases the food and ignores the player
    pub fn enemy(prefs: &Prefs) -> Result<Self, BuilderError> {
        Builder::default()
            .name("enemy")
            .pos(prefs.enemy_spawn)
            .dir(prefs.enemy_dir)
            .len(prefs.initial_len)
            .timing(timing_from(prefs))
            .controller(snake_control::Template::Seeker(AxisPriority::VerticalFirst))
            .collision_policy(CollisionPolicy::ignore_opponent())
            .max_extra_lives(0)
            .build()
    }
}

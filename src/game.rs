use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::basic::{Seconds, TurnRequest};
use crate::error::{Error, ErrorConversion, Result};
use crate::food::spawn::SpawnPolicy;
use crate::food::Food;
use crate::prefs::Prefs;
use crate::snake::{Event, Snake};
use crate::world::Arena;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Menu,
    Running,
    Over,
}

/// Owns both snakes and the food, keeps score and reacts to what the
/// snakes report
pub struct Game {
    prefs: Prefs,
    state: State,
    score: u32,

    player: Snake,
    enemy: Snake,
    food: Option<Food>,

    spawn_policy: SpawnPolicy,
    rng: StdRng,
}

impl Game {
    pub fn new(prefs: Prefs) -> Result<Self> {
        Self::with_spawn_policy(prefs, SpawnPolicy::Random, StdRng::from_entropy())
    }

    pub fn with_spawn_policy(prefs: Prefs, spawn_policy: SpawnPolicy, rng: StdRng) -> Result<Self> {
        prefs
            .validate()
            .map_err(Error::from)
            .with_trace_step("Prefs::validate")?;
        let player = Snake::player(&prefs)
            .map_err(Error::from)
            .with_trace_step("Snake::player")?;
        let enemy = Snake::enemy(&prefs)
            .map_err(Error::from)
            .with_trace_step("Snake::enemy")?;

        Ok(Self {
            prefs,
            state: State::Menu,
            score: 0,
            player,
            enemy,
            food: None,
            spawn_policy,
            rng,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn score_text(&self) -> String {
        format!("{:04}", self.score)
    }

    pub fn player(&self) -> &Snake {
        &self.player
    }

    pub fn enemy(&self) -> &Snake {
        &self.enemy
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn start(&mut self) {
        info!("game started");
        self.state = State::Running;
        self.player.spawn();
        if self.prefs.enemy_enabled {
            self.enemy.spawn();
        }
        // food goes on a cell neither snake occupies
        self.spawn_food();
    }

    pub fn restart(&mut self) {
        self.score = 0;
        self.player.despawn();
        self.enemy.despawn();
        self.spawn_policy.reset();
        self.start();
    }

    pub fn request_turn(&mut self, request: TurnRequest) {
        if self.state == State::Running {
            self.player.request_turn(request);
        }
    }

    /// One frame: the player moves first, then the enemy
    pub fn update(&mut self, delta: Seconds) {
        if self.state != State::Running {
            return;
        }

        let events = self.player.update(
            delta,
            &mut Arena {
                board: self.prefs.board,
                food: &mut self.food,
                opponent: self.enemy.is_active().then_some(self.enemy.chain()),
            },
        );
        for event in events {
            self.on_player_event(event);
        }
        if self.state != State::Running {
            return;
        }

        let events = self.enemy.update(
            delta,
            &mut Arena {
                board: self.prefs.board,
                food: &mut self.food,
                opponent: self.player.is_active().then_some(self.player.chain()),
            },
        );
        for event in events {
            self.on_enemy_event(event);
        }
    }

    fn on_player_event(&mut self, event: Event) {
        match event {
            Event::FoodEaten(_) => {
                self.score += 1;
                self.spawn_food();
            }
            Event::SnakeDied => self.end(),
            Event::LifeGained(lives) | Event::LifeLost(lives) => {
                info!("player has {} extra lives", lives)
            }
        }
    }

    fn on_enemy_event(&mut self, event: Event) {
        match event {
            Event::FoodEaten(_) => self.spawn_food(),
            Event::SnakeDied if self.prefs.enemy_respawns => self.enemy.spawn(),
            _ => {}
        }
    }

    fn spawn_food(&mut self) {
        let taken = self.player.chain().iter().chain(self.enemy.chain().iter());
        self.food = self
            .spawn_policy
            .next_food(&self.prefs, self.prefs.board, taken, &mut self.rng);
        match self.food {
            Some(food) => self.enemy.set_food_target(food),
            None => self.enemy.clear_food_target(),
        }
    }

    fn end(&mut self) {
        info!("game over, score {}", self.score_text());
        self.player.despawn();
        self.enemy.despawn();
        self.food = None;
        self.enemy.clear_food_target();
        self.state = State::Over;
    }
}

use log::{debug, info, warn};

use crate::basic::{Dir, Point, Seconds, TurnRequest};
use crate::clock::{MoveClock, MoveTiming};
use crate::food::{Food, FoodType};
use crate::snake::eat_mechanics::{resolve, CollisionPolicy, Contact, Outcome};
use crate::snake_control::Controller;
use crate::world::World;

pub use builder::{Builder, BuilderError};
pub use chain::SegmentChain;
pub use events::{Event, EventKind, Listener, Listeners, Reaction};

pub mod builder;
mod chain;
pub mod eat_mechanics;
pub mod events;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Inactive,
    Active,
}

pub struct Snake {
    pub name: &'static str,

    spawn_pos: Point,
    spawn_dir: Dir,
    initial_len: usize,
    timing: MoveTiming,
    collision_policy: CollisionPolicy,
    max_extra_lives: u8,

    state: State,
    chain: SegmentChain,
    dir: Dir,
    clock: MoveClock,
    extra_lives: u8,
    target: Option<Food>,

    controller: Box<dyn Controller>,
    listeners: Listeners,
}

impl Snake {
    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == State::Active
    }

    pub fn chain(&self) -> &SegmentChain {
        &self.chain
    }

    pub fn head(&self) -> Option<Point> {
        self.chain.head()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn interval(&self) -> Seconds {
        self.clock.interval()
    }

    pub fn extra_lives(&self) -> u8 {
        self.extra_lives
    }

    pub fn max_extra_lives(&self) -> u8 {
        self.max_extra_lives
    }

    pub fn target(&self) -> Option<&Food> {
        self.target.as_ref()
    }

    pub fn collision_policy(&self) -> &CollisionPolicy {
        &self.collision_policy
    }

    /// Registers `listener` for `kind`, replacing any previous one
    pub fn set_listener(&mut self, kind: EventKind, listener: impl FnMut(&Event) -> Reaction + 'static) {
        self.listeners.set(kind, Box::new(listener));
    }

    /// Puts a fresh snake on its spawn point, whatever state it was in
    pub fn spawn(&mut self) {
        self.chain = SegmentChain::straight(self.spawn_pos, self.spawn_dir, self.initial_len);
        self.dir = self.spawn_dir;
        self.clock.reset(self.timing.base);
        self.extra_lives = 0;
        self.controller.reset(self.spawn_dir);
        self.state = State::Active;
        debug!(
            "{} spawned at {:?} going {:?} with {} segments",
            self.name, self.spawn_pos, self.spawn_dir, self.initial_len
        );
    }

    pub fn despawn(&mut self) {
        if self.state == State::Inactive && self.chain.is_empty() {
            return;
        }
        self.chain.clear();
        self.extra_lives = 0;
        self.state = State::Inactive;
        debug!("{} despawned", self.name);
    }

    pub fn set_food_target(&mut self, food: Food) {
        self.target = Some(food);
    }

    pub fn clear_food_target(&mut self) {
        self.target = None;
    }

    /// Forwards player input to the controller, ignored while inactive
    pub fn request_turn(&mut self, request: TurnRequest) {
        if self.is_active() {
            self.controller.turn_requested(request);
        }
    }

    /// Advances the clock by `delta` and moves the snake if a move is due.
    /// Returns the events fired during this update, in order.
    pub fn update(&mut self, delta: Seconds, world: &mut impl World) -> Vec<Event> {
        if !self.is_active() || !self.clock.tick(delta) {
            return vec![];
        }
        self.step(world)
    }

    /// A single move regardless of the clock
    pub fn step(&mut self, world: &mut impl World) -> Vec<Event> {
        let mut events = vec![];
        if !self.is_active() {
            return events;
        }

        self.update_dir();
        let last_tail = self.chain.advance(self.dir);
        self.controller.move_completed();

        let Some(head) = self.chain.head() else {
            return events;
        };
        let contact = if self.chain.body().any(|seg| seg == head) {
            Contact::OwnBody
        } else {
            world.contact_at(head)
        };

        match resolve(contact, &self.collision_policy, self.extra_lives) {
            Outcome::AteFood(food_type) => {
                world.consume_food(head);
                self.chain.grow(last_tail);
                self.clock
                    .set_interval(self.timing.after_eating(self.clock.interval(), food_type));
                debug!(
                    "{} ate {:?} food, length {}, interval {:.3}s",
                    self.name,
                    food_type,
                    self.chain.len(),
                    self.clock.interval()
                );

                if !self.emit(Event::FoodEaten(food_type), &mut events) {
                    return events;
                }
                if food_type == FoodType::Life && self.extra_lives < self.max_extra_lives {
                    self.extra_lives += 1;
                    self.emit(Event::LifeGained(self.extra_lives), &mut events);
                }
            }
            Outcome::LostLife { lives_left } => {
                self.extra_lives = lives_left;
                self.chain.shrink();
                debug!("{} lost a life on {:?}, {} left", self.name, contact, lives_left);
                self.emit(Event::LifeLost(lives_left), &mut events);
            }
            Outcome::Died => {
                info!("{} died on {:?} at {:?}", self.name, contact, head);
                self.despawn();
                self.emit(Event::SnakeDied, &mut events);
            }
            Outcome::Unharmed => {}
        }

        events
    }

    fn update_dir(&mut self) {
        let new_dir = self
            .controller
            .next_dir(&self.chain, self.dir, self.target.as_ref());

        match new_dir {
            Some(dir) if dir.is_opposite(self.dir) && self.chain.len() > 1 => {
                warn!(
                    "{}: controller tried to perform a 180° turn {:?} -> {:?}",
                    self.name, self.dir, dir
                );
            }
            Some(dir) if dir != self.dir => {
                debug!("{} turned {:?} -> {:?}", self.name, self.dir, dir);
                self.dir = dir;
            }
            _ => {}
        }
    }

    /// Records the event and hands it to its listener. Returns whether the
    /// rest of the move should still be applied.
    fn emit(&mut self, event: Event, events: &mut Vec<Event>) -> bool {
        events.push(event);
        match self.listeners.fire(&event) {
            Reaction::Continue => self.is_active(),
            Reaction::Despawn => {
                self.despawn();
                false
            }
            Reaction::Respawn => {
                self.spawn();
                false
            }
        }
    }
}

//! Movement, growth and collision simulation for grid snakes.
//!
//! A [`Snake`](snake::Snake) advances one cell per tick of its
//! [`MoveClock`](clock::MoveClock), asks its controller where to go, and
//! reports what its head ran into through single-slot listeners. The board
//! and the food live outside the snake behind the [`World`](world::World)
//! trait; [`Game`](game::Game) is a headless owner of both that keeps
//! score.

#[macro_use]
extern crate derive_more;

#[macro_use]
pub mod support;

pub mod basic;
pub mod clock;
pub mod error;
pub mod food;
pub mod game;
pub mod prefs;
pub mod snake;
pub mod snake_control;
pub mod world;

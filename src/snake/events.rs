use std::collections::HashMap;
use std::fmt;

use crate::food::FoodType;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Event {
    FoodEaten(FoodType),
    /// Carries the extra life count after the gain
    LifeGained(u8),
    /// Carries the extra life count after the loss
    LifeLost(u8),
    SnakeDied,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EventKind {
    FoodEaten,
    LifeGained,
    LifeLost,
    SnakeDied,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::FoodEaten(_) => EventKind::FoodEaten,
            Event::LifeGained(_) => EventKind::LifeGained,
            Event::LifeLost(_) => EventKind::LifeLost,
            Event::SnakeDied => EventKind::SnakeDied,
        }
    }
}

/// What a listener wants done to the snake that fired the event, applied
/// as soon as the listener returns
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Reaction {
    #[default]
    Continue,
    Despawn,
    Respawn,
}

pub type Listener = Box<dyn FnMut(&Event) -> Reaction>;

/// One listener per event kind, registering again replaces the
/// previous one
#[derive(Default)]
pub struct Listeners {
    slots: HashMap<EventKind, Listener>,
}

impl Listeners {
    pub fn set(&mut self, kind: EventKind, listener: Listener) {
        self.slots.insert(kind, listener);
    }

    pub fn fire(&mut self, event: &Event) -> Reaction {
        match self.slots.get_mut(&event.kind()) {
            Some(listener) => listener(event),
            None => Reaction::Continue,
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.slots.keys()).finish()
    }
}

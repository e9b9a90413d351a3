use crate::food::FoodType;
use crate::support::map_with_default::HashMapWithDefault;

/// What the head of a snake ran into after a move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Contact {
    Food(FoodType),
    OwnBody,
    OpposingBody,
    /// Outside the board
    Boundary,
    /// Anything else the world considers solid
    Obstacle,
    Nothing,
}

/// The non-food contacts a policy decides about
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ContactKind {
    OwnBody,
    OpposingBody,
    Boundary,
    Obstacle,
}

impl Contact {
    pub fn kind(self) -> Option<ContactKind> {
        match self {
            Contact::OwnBody => Some(ContactKind::OwnBody),
            Contact::OpposingBody => Some(ContactKind::OpposingBody),
            Contact::Boundary => Some(ContactKind::Boundary),
            Contact::Obstacle => Some(ContactKind::Obstacle),
            Contact::Food(_) | Contact::Nothing => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Behavior {
    Die,
    /// Spend an extra life and lose a tail segment, die if none are left
    Absorb,
    PassThrough,
}

#[derive(Clone, Debug)]
pub struct CollisionPolicy {
    behavior: HashMapWithDefault<ContactKind, Behavior>,
}

impl CollisionPolicy {
    pub fn always(behavior: Behavior) -> Self {
        Self {
            behavior: HashMapWithDefault::new(behavior),
        }
    }

    /// Anything that isn't food kills
    pub fn fatal() -> Self {
        Self::always(Behavior::Die)
    }

    /// Running into the other snake costs a life instead of the game
    pub fn buffered_lives() -> Self {
        Self {
            behavior: hash_map_with_default! {
                default => Behavior::Die,
                ContactKind::OpposingBody => Behavior::Absorb,
            },
        }
    }

    /// The other snake is not an obstacle
    pub fn ignore_opponent() -> Self {
        Self {
            behavior: hash_map_with_default! {
                default => Behavior::Die,
                ContactKind::OpposingBody => Behavior::PassThrough,
            },
        }
    }

    #[must_use]
    pub fn with(mut self, kind: ContactKind, behavior: Behavior) -> Self {
        self.behavior = self.behavior.with(kind, behavior);
        self
    }

    pub fn behavior(&self, kind: ContactKind) -> Behavior {
        self.behavior[&kind]
    }

    /// Whether the policy ever consumes extra lives
    pub fn uses_lives(&self) -> bool {
        *self.behavior.default_value() == Behavior::Absorb
            || self.behavior.values().any(|b| *b == Behavior::Absorb)
    }
}

/// Result of classifying a contact, before any state is touched
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    AteFood(FoodType),
    /// A life was spent, `lives_left` is the buffer after the decrement
    LostLife { lives_left: u8 },
    Died,
    Unharmed,
}

pub fn resolve(contact: Contact, policy: &CollisionPolicy, extra_lives: u8) -> Outcome {
    let kind = match contact {
        Contact::Food(food_type) => return Outcome::AteFood(food_type),
        Contact::Nothing => return Outcome::Unharmed,
        other => other.kind().expect("food and nothing are handled above"),
    };

    match policy.behavior(kind) {
        Behavior::Die => Outcome::Died,
        Behavior::Absorb if extra_lives > 0 => Outcome::LostLife {
            lives_left: extra_lives - 1,
        },
        Behavior::Absorb => Outcome::Died,
        Behavior::PassThrough => Outcome::Unharmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn food_is_always_eaten() {
        for policy in [CollisionPolicy::fatal(), CollisionPolicy::always(Behavior::PassThrough)] {
            assert_eq!(
                resolve(Contact::Food(FoodType::Speed), &policy, 0),
                Outcome::AteFood(FoodType::Speed)
            );
        }
    }

    #[test]
    fn buffered_lives_absorb_only_the_opponent() {
        let policy = CollisionPolicy::buffered_lives();
        assert_eq!(
            resolve(Contact::OpposingBody, &policy, 2),
            Outcome::LostLife { lives_left: 1 }
        );
        assert_eq!(resolve(Contact::OpposingBody, &policy, 0), Outcome::Died);
        assert_eq!(resolve(Contact::Boundary, &policy, 3), Outcome::Died);
        assert_eq!(resolve(Contact::OwnBody, &policy, 3), Outcome::Died);
        assert!(policy.uses_lives());
    }

    #[test]
    fn enemy_passes_through_the_player() {
        let policy = CollisionPolicy::ignore_opponent();
        assert_eq!(resolve(Contact::OpposingBody, &policy, 0), Outcome::Unharmed);
        assert_eq!(resolve(Contact::Obstacle, &policy, 0), Outcome::Died);
        assert!(!policy.uses_lives());
    }

    #[test]
    fn self_collision_is_configurable() {
        let policy = CollisionPolicy::fatal().with(ContactKind::OwnBody, Behavior::PassThrough);
        assert_eq!(resolve(Contact::OwnBody, &policy, 0), Outcome::Unharmed);
        assert_eq!(resolve(Contact::Nothing, &policy, 0), Outcome::Unharmed);
    }
}

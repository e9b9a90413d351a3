use log::trace;

use crate::basic::{Dir, TurnRequest};
use crate::food::Food;
use crate::snake::SegmentChain;
use crate::snake_control::{Controller, TurnPolicy};

/// Player controller, turns on request. At most one turn is latched
/// between two moves, everything else is dropped.
pub struct Keyboard {
    policy: TurnPolicy,
    dir: Dir,
    pending: Option<Dir>,
    // cleared when a turn is accepted, set again once the snake has moved
    can_turn: bool,
    moves_since_turn: u32,
}

impl Keyboard {
    /// Moves that have to complete after a turn before `Debounced`
    /// accepts the next one
    pub const DEBOUNCE_MOVES: u32 = 2;

    pub fn new(policy: TurnPolicy, start_dir: Dir) -> Self {
        Self {
            policy,
            dir: start_dir,
            pending: None,
            can_turn: true,
            moves_since_turn: Self::DEBOUNCE_MOVES,
        }
    }

    fn accepts(&self, new_dir: Dir) -> bool {
        if !self.can_turn {
            return false;
        }
        match self.policy {
            TurnPolicy::Perpendicular => new_dir.axis() != self.dir.axis(),
            TurnPolicy::Buffered => new_dir != self.dir && !new_dir.is_opposite(self.dir),
            TurnPolicy::Debounced => {
                new_dir.axis() != self.dir.axis() && self.moves_since_turn >= Self::DEBOUNCE_MOVES
            }
        }
    }
}

impl Controller for Keyboard {
    fn next_dir(&mut self, _: &SegmentChain, dir: Dir, _: Option<&Food>) -> Option<Dir> {
        self.dir = dir;
        let new_dir = self.pending.take()?;
        self.dir = new_dir;
        self.moves_since_turn = 0;
        Some(new_dir)
    }

    fn move_completed(&mut self) {
        self.can_turn = true;
        self.moves_since_turn = self.moves_since_turn.saturating_add(1);
    }

    fn reset(&mut self, dir: Dir) {
        *self = Self::new(self.policy, dir);
    }

    fn turn_requested(&mut self, request: TurnRequest) {
        let Some(new_dir) = request.dir() else {
            return;
        };
        if self.accepts(new_dir) {
            trace!("turn {:?} -> {:?} latched", self.dir, new_dir);
            self.pending = Some(new_dir);
            self.can_turn = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Point;
    use Dir::*;

    fn body() -> SegmentChain {
        SegmentChain::straight(Point::ORIGIN, L, 3)
    }

    // one full move: ask for a direction, then report the move as done
    fn step(kb: &mut Keyboard, dir: Dir) -> Dir {
        let new_dir = kb.next_dir(&body(), dir, None).unwrap_or(dir);
        kb.move_completed();
        new_dir
    }

    #[test]
    fn perpendicular_rejects_same_axis() {
        let mut kb = Keyboard::new(TurnPolicy::Perpendicular, L);
        kb.turn_requested(R.into());
        kb.turn_requested(L.into());
        assert_eq!(kb.next_dir(&body(), L, None), None);
        kb.turn_requested(U.into());
        assert_eq!(kb.next_dir(&body(), L, None), Some(U));
    }

    #[test]
    fn only_one_turn_per_move() {
        let mut kb = Keyboard::new(TurnPolicy::Perpendicular, L);
        kb.turn_requested(U.into());
        // would be legal after the U turn, but the latch is closed
        kb.turn_requested(R.into());
        assert_eq!(step(&mut kb, L), U);
        assert_eq!(step(&mut kb, U), U);

        kb.turn_requested(R.into());
        assert_eq!(step(&mut kb, U), R);
    }

    #[test]
    fn buffered_rejects_only_reversal() {
        let mut kb = Keyboard::new(TurnPolicy::Buffered, U);
        kb.turn_requested(D.into());
        assert_eq!(kb.next_dir(&body(), U, None), None);
        kb.turn_requested(U.into());
        assert_eq!(kb.next_dir(&body(), U, None), None);
        kb.turn_requested(L.into());
        assert_eq!(kb.next_dir(&body(), U, None), Some(L));
    }

    #[test]
    fn debounced_waits_an_extra_move() {
        let mut kb = Keyboard::new(TurnPolicy::Debounced, L);
        kb.turn_requested(U.into());
        assert_eq!(step(&mut kb, L), U);

        // one move after the turn: still locked
        kb.turn_requested(R.into());
        assert_eq!(step(&mut kb, U), U);

        // two moves after the turn
        kb.turn_requested(R.into());
        assert_eq!(step(&mut kb, U), R);
    }

    #[test]
    fn zero_sign_is_ignored() {
        let mut kb = Keyboard::new(TurnPolicy::Buffered, L);
        kb.turn_requested(TurnRequest {
            axis: crate::basic::Axis::Vertical,
            sign: 0,
        });
        kb.turn_requested(U.into());
        assert_eq!(kb.next_dir(&body(), L, None), Some(U));
    }

    #[test]
    fn reset_drops_pending_turn() {
        let mut kb = Keyboard::new(TurnPolicy::Perpendicular, L);
        kb.turn_requested(U.into());
        kb.reset(R);
        assert_eq!(kb.next_dir(&body(), R, None), None);
        kb.turn_requested(D.into());
        assert_eq!(kb.next_dir(&body(), R, None), Some(D));
    }
}

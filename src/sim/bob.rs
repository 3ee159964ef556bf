//! Triangle-wave vertical bob
//!
//! Used by the obstacle blocks (affects hit tests) and the water backdrop
//! (visual only). Rises to `BOB_HIGH`, falls to `BOB_LOW`, repeats.

use crate::consts::{BOB_HIGH, BOB_LOW};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bob {
    /// Current vertical offset
    pub offset: f32,
    /// True while heading down toward `BOB_LOW`
    pub falling: bool,
    /// Units per second
    pub rate: f32,
}

impl Bob {
    pub fn new(offset: f32, rate: f32) -> Self {
        Self {
            offset,
            falling: false,
            rate,
        }
    }

    /// Advance by `dt` seconds, reflecting at both ends
    pub fn advance(&mut self, dt: f32) {
        let span = BOB_HIGH - BOB_LOW;
        // A full round trip lands back in the same state
        let mut remaining = (self.rate * dt) % (2.0 * span);
        while remaining > 0.0 {
            if self.falling {
                let room = (self.offset - BOB_LOW).max(0.0);
                if remaining < room {
                    self.offset -= remaining;
                    return;
                }
                self.offset = BOB_LOW;
                self.falling = false;
                remaining -= room;
            } else {
                let room = (BOB_HIGH - self.offset).max(0.0);
                if remaining < room {
                    self.offset += remaining;
                    return;
                }
                self.offset = BOB_HIGH;
                self.falling = true;
                remaining -= room;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rises_then_falls() {
        let mut bob = Bob::new(0.0, 1.0);
        bob.advance(0.5);
        assert!((bob.offset - 0.5).abs() < 1e-5);
        assert!(!bob.falling);

        // 0.5 up to the top, then 0.5 back down
        bob.advance(1.0);
        assert!(bob.falling);
        assert!((bob.offset - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_turns_at_bottom() {
        let mut bob = Bob::new(-2.5, 1.0);
        bob.falling = true;
        bob.advance(1.0);
        assert!(!bob.falling);
        assert!((bob.offset - (-2.5)).abs() < 1e-5);
    }

    #[test]
    fn test_stays_in_band() {
        let mut bob = Bob::new(0.0, 0.3);
        for _ in 0..10_000 {
            bob.advance(1.0 / 60.0);
            assert!(bob.offset >= BOB_LOW - 1e-4 && bob.offset <= BOB_HIGH + 1e-4);
        }
    }

    #[test]
    fn test_large_step_terminates() {
        let mut bob = Bob::new(0.0, 1.0);
        bob.advance(1000.0);
        assert!(bob.offset >= BOB_LOW && bob.offset <= BOB_HIGH);
    }
}

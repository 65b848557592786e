//! Scheduled auto-advance events.
//!
//! Every timer the session starts is described by a [`ScheduledAdvance`]. The
//! token it carries is the session generation at scheduling time; the session
//! ignores a firing whose token is no longer current. [`AdvanceQueue`] is a
//! virtual clock that lets callers step time forward deterministically.
use crate::session::Screen;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Cancellation token for one scheduled advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AdvanceToken(u64);

impl AdvanceToken {
    #[must_use]
    pub const fn new(generation: u64) -> Self {
        Self(generation)
    }

    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AdvanceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledAdvance {
    pub token: AdvanceToken,
    pub delay: Duration,
    pub target: Screen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    due: Duration,
    seq: u64,
    advance: ScheduledAdvance,
}

/// Virtual clock holding advances that have not fired yet.
#[derive(Debug, Clone, Default)]
pub struct AdvanceQueue {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
}

impl AdvanceQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Queue an advance to fire `advance.delay` after the current time.
    pub fn push(&mut self, advance: ScheduledAdvance) {
        let due = self.now.saturating_add(advance.delay);
        self.pending.push(Pending {
            due,
            seq: self.seq,
            advance,
        });
        self.seq += 1;
    }

    /// Move the clock forward and return every advance that came due, in
    /// firing order. Advances due at the same instant fire in push order.
    pub fn advance_by(&mut self, step: Duration) -> Vec<ScheduledAdvance> {
        self.now = self.now.saturating_add(step);
        let now = self.now;
        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.due, p.seq));
        due.into_iter().map(|p| p.advance).collect()
    }

    /// Jump straight to the next due advance, if any.
    pub fn advance_to_next(&mut self) -> Option<ScheduledAdvance> {
        let next = self.pending.iter().map(|p| p.due).min()?;
        let step = next.saturating_sub(self.now);
        let mut fired = self.advance_by(step);
        if fired.is_empty() {
            return None;
        }
        let first = fired.remove(0);
        // re-queue anything else that was due at the same instant
        for advance in fired {
            self.pending.push(Pending {
                due: self.now,
                seq: self.seq,
                advance: ScheduledAdvance {
                    delay: Duration::ZERO,
                    ..advance
                },
            });
            self.seq += 1;
        }
        Some(first)
    }

    /// Time until the next advance fires.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.due.saturating_sub(self.now))
            .min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adv(token: u64, ms: u64, target: Screen) -> ScheduledAdvance {
        ScheduledAdvance {
            token: AdvanceToken::new(token),
            delay: Duration::from_millis(ms),
            target,
        }
    }

    #[test]
    fn advances_fire_once_due() {
        let mut queue = AdvanceQueue::new();
        queue.push(adv(1, 1_500, Screen::Planning));
        assert!(queue.advance_by(Duration::from_millis(1_499)).is_empty());
        let fired = queue.advance_by(Duration::from_millis(1));
        assert_eq!(fired, vec![adv(1, 1_500, Screen::Planning)]);
        assert!(queue.is_empty());
        assert_eq!(queue.now(), Duration::from_millis(1_500));
    }

    #[test]
    fn fired_in_due_order() {
        let mut queue = AdvanceQueue::new();
        queue.push(adv(1, 2_500, Screen::Summary));
        queue.push(adv(2, 1_000, Screen::Planning));
        let fired = queue.advance_by(Duration::from_secs(3));
        let tokens: Vec<u64> = fired.iter().map(|a| a.token.generation()).collect();
        assert_eq!(tokens, vec![2, 1]);
    }

    #[test]
    fn next_due_and_jump() {
        let mut queue = AdvanceQueue::new();
        queue.push(adv(4, 1_000, Screen::Planning));
        queue.advance_by(Duration::from_millis(400));
        assert_eq!(queue.next_due_in(), Some(Duration::from_millis(600)));
        let fired = queue.advance_to_next().unwrap();
        assert_eq!(fired.token, AdvanceToken::new(4));
        assert_eq!(queue.now(), Duration::from_millis(1_000));
        assert!(queue.advance_to_next().is_none());
    }
}

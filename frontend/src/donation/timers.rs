//! Cancellation tokens for the delayed transitions of the donation widget.
//!
//! Every delayed action is armed through [`PendingTimers`], which hands out a
//! fresh [`TimerToken`] and remembers it as the only live token of its kind.
//! When a timeout fires, its token is checked against the live one; anything
//! older was superseded and is dropped on the floor.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    AutoOpen,
    AutoClose,
    HoverGrace,
    FeedbackClear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerToken {
    kind: TimerKind,
    seq: u64,
}

impl TimerToken {
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

/// Side effects the view layer has to carry out for the state machines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Schedule { token: TimerToken, delay_ms: u32 },
    Cancel(TimerToken),
    AcquireOutsideListener,
    ReleaseOutsideListener,
}

#[derive(Debug, Default)]
pub struct PendingTimers {
    next_seq: u64,
    live: HashMap<TimerKind, TimerToken>,
}

impl PendingTimers {
    /// Arms a timer of `kind`, cancelling the one already pending.
    pub fn arm(&mut self, kind: TimerKind, delay_ms: u32, effects: &mut Vec<Effect>) {
        self.disarm(kind, effects);
        self.next_seq += 1;
        let token = TimerToken { kind, seq: self.next_seq };
        self.live.insert(kind, token);
        effects.push(Effect::Schedule { token, delay_ms });
    }

    pub fn disarm(&mut self, kind: TimerKind, effects: &mut Vec<Effect>) {
        if let Some(token) = self.live.remove(&kind) {
            effects.push(Effect::Cancel(token));
        }
    }

    pub fn disarm_all(&mut self, effects: &mut Vec<Effect>) {
        // Fixed order keeps the emitted effects deterministic.
        for kind in [
            TimerKind::AutoOpen,
            TimerKind::AutoClose,
            TimerKind::HoverGrace,
            TimerKind::FeedbackClear,
        ] {
            self.disarm(kind, effects);
        }
    }

    /// Consumes `token` if it is still the live one of its kind.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.live.get(&token.kind) {
            Some(live) if *live == token => {
                self.live.remove(&token.kind);
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.live.contains_key(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(effects: &[Effect]) -> Vec<TimerToken> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Schedule { token, .. } => Some(*token),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn rearming_cancels_the_previous_token() {
        let mut timers = PendingTimers::default();
        let mut effects = Vec::new();
        timers.arm(TimerKind::HoverGrace, 2000, &mut effects);
        let first = scheduled(&effects)[0];

        effects.clear();
        timers.arm(TimerKind::HoverGrace, 2000, &mut effects);
        assert_eq!(effects[0], Effect::Cancel(first));
        let second = scheduled(&effects)[0];

        assert!(!timers.fire(first));
        assert!(timers.fire(second));
        assert!(!timers.is_pending(TimerKind::HoverGrace));
    }

    #[test]
    fn tokens_only_fire_once() {
        let mut timers = PendingTimers::default();
        let mut effects = Vec::new();
        timers.arm(TimerKind::AutoOpen, 10, &mut effects);
        let token = scheduled(&effects)[0];
        assert!(timers.fire(token));
        assert!(!timers.fire(token));
    }

    #[test]
    fn kinds_are_independent() {
        let mut timers = PendingTimers::default();
        let mut effects = Vec::new();
        timers.arm(TimerKind::AutoOpen, 10, &mut effects);
        timers.arm(TimerKind::FeedbackClear, 10, &mut effects);
        assert_eq!(scheduled(&effects).len(), 2);
        assert!(!effects.iter().any(|e| matches!(e, Effect::Cancel(_))));

        effects.clear();
        timers.disarm_all(&mut effects);
        assert_eq!(effects.len(), 2);
        assert!(!timers.is_pending(TimerKind::AutoOpen));
        assert!(!timers.is_pending(TimerKind::FeedbackClear));
    }
}

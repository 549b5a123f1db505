use std::collections::BTreeMap;

use crate::{engine::bubble::BubbleId, foundation::core::Millis};

/// What a per-bubble timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// End of lifespan: start the pop animation.
    Expiry,
    /// End of the pop animation: remove the bubble (and maybe replace it).
    PopComplete,
}

/// One armed timer: what fires and when.
#[derive(Clone, Copy, Debug)]
#[allow(missing_docs)]
pub struct ArmedTimer {
    pub kind: TimerKind,
    pub due: Millis,
}

/// Owned table of every outstanding timer, keyed by bubble id, plus the one
/// global drift deadline.
///
/// A bubble holds at most one timer at a time (expiry while live, pop-complete
/// while popping). Keeping them in a single table means teardown and
/// active-set changes can invalidate wholesale instead of chasing scattered
/// handles.
#[derive(Debug, Default)]
pub struct TimerTable {
    per_bubble: BTreeMap<BubbleId, ArmedTimer>,
    drift_due: Option<Millis>,
}

/// A timer that became due and was removed from the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueTimer {
    /// A per-bubble timer fired.
    Bubble(BubbleId, TimerKind),
    /// The global drift deadline fired.
    Drift,
}

impl TimerTable {
    /// Arm (or re-arm) the timer for one bubble.
    pub fn arm(&mut self, id: BubbleId, kind: TimerKind, due: Millis) {
        self.per_bubble.insert(id, ArmedTimer { kind, due });
    }

    /// Cancel the timer for one bubble, if any.
    pub fn cancel(&mut self, id: BubbleId) {
        self.per_bubble.remove(&id);
    }

    /// Drop every expiry timer, leaving pop-complete timers armed.
    ///
    /// Used by the re-arming rule: expiry deadlines are recomputed from
    /// bubble state whenever the active set changes, but an in-flight pop
    /// animation keeps its removal deadline.
    pub fn clear_expiries(&mut self) {
        self.per_bubble.retain(|_, t| t.kind != TimerKind::Expiry);
    }

    /// Arm the global drift deadline.
    pub fn arm_drift(&mut self, due: Millis) {
        self.drift_due = Some(due);
    }

    /// Disarm the global drift deadline.
    pub fn cancel_drift(&mut self) {
        self.drift_due = None;
    }

    /// Whether a drift deadline is currently armed.
    pub fn drift_armed(&self) -> bool {
        self.drift_due.is_some()
    }

    /// Cancel everything. Teardown path.
    pub fn clear(&mut self) {
        self.per_bubble.clear();
        self.drift_due = None;
    }

    /// The timer currently armed for `id`, if any.
    pub fn armed(&self, id: BubbleId) -> Option<ArmedTimer> {
        self.per_bubble.get(&id).copied()
    }

    /// True when no timer of any kind is armed.
    pub fn is_empty(&self) -> bool {
        self.per_bubble.is_empty() && self.drift_due.is_none()
    }

    /// Remove and return the earliest timer with `due <= now`, if any.
    ///
    /// Ties between bubble timers break toward the lowest id, and bubble
    /// timers fire before a drift due at the same instant, so a full drain
    /// is deterministic.
    pub fn pop_due(&mut self, now: Millis) -> Option<DueTimer> {
        let best_bubble = self
            .per_bubble
            .iter()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|&(id, t)| (t.due, *id))
            .map(|(id, t)| (*id, t.kind, t.due));

        match (best_bubble, self.drift_due) {
            (Some((_, _, due)), Some(drift)) if drift <= now && drift < due => {
                self.drift_due = None;
                Some(DueTimer::Drift)
            }
            (Some((id, kind, _)), _) => {
                self.per_bubble.remove(&id);
                Some(DueTimer::Bubble(id, kind))
            }
            (None, Some(drift)) if drift <= now => {
                self.drift_due = None;
                Some(DueTimer::Drift)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/timers.rs"]
mod tests;

// SPDX-License-Identifier: MIT
//! Short visual pulse shown when a button is activated.
//!
//! Every pulsable button runs a two-state machine. Activation moves it to
//! `Pulsed` with a deadline; the periodic tick moves it back to `Idle` once
//! the deadline has passed. Activating an already pulsed button only pushes
//! its deadline back, so there is never more than one pending restore per
//! button. The resting style itself is not stored here: the view derives it
//! from the current slot state when the button is idle.

use super::categories::CategoryIndex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Buttons that flash on activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackTarget {
    SelectFolder,
    Reset,
    Previous,
    Next,
    Category(CategoryIndex),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PulseState {
    #[default]
    Idle,
    Pulsed {
        until: Instant,
    },
}

impl PulseState {
    fn activate(&mut self, now: Instant, duration: Duration) {
        *self = PulseState::Pulsed {
            until: now + duration,
        };
    }

    /// Returns `true` when this call restored the resting state.
    fn advance(&mut self, now: Instant) -> bool {
        match *self {
            PulseState::Pulsed { until } if now >= until => {
                *self = PulseState::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Pulse state for every button that has ever been activated.
#[derive(Debug, Clone)]
pub struct FeedbackPulses {
    duration: Duration,
    states: HashMap<FeedbackTarget, PulseState>,
}

impl FeedbackPulses {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            states: HashMap::new(),
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Starts (or restarts) the pulse of `target`.
    pub fn trigger(&mut self, target: FeedbackTarget, now: Instant) {
        self.states
            .entry(target)
            .or_default()
            .activate(now, self.duration);
    }

    #[must_use]
    pub fn state(&self, target: FeedbackTarget) -> PulseState {
        self.states.get(&target).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_pulsed(&self, target: FeedbackTarget) -> bool {
        matches!(self.state(target), PulseState::Pulsed { .. })
    }

    /// Number of buttons waiting for their restore.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.states
            .values()
            .filter(|state| matches!(state, PulseState::Pulsed { .. }))
            .count()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending() > 0
    }

    /// Restores every pulse whose deadline has passed and returns the
    /// buttons that went back to rest.
    pub fn tick(&mut self, now: Instant) -> Vec<FeedbackTarget> {
        let mut restored = Vec::new();
        for (target, state) in &mut self.states {
            if state.advance(now) {
                restored.push(*target);
            }
        }
        self.states.retain(|_, state| *state != PulseState::Idle);
        restored
    }
}

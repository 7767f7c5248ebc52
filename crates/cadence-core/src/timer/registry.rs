// Copyright 2026 the cadence authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The timer registry and its recurrence evaluator.

use std::collections::HashMap;

use super::identity::SiteId;

/// Per-site timing state: the instant (in host seconds) at which the
/// current period began.
#[derive(Debug, Clone, Copy)]
struct TimerState {
    start: f64,
}

/// Registry of recurring timers keyed by [`SiteId`].
///
/// The registry owns all per-site timing state. An entry is created the
/// first time an identity is seen and lives for the registry's lifetime;
/// there is no eviction, so a call site that is queried once and never
/// again still leaves its entry behind. [`clear`](TimerRegistry::clear)
/// exists for callers that want an explicit reset.
///
/// Time is supplied by the caller as monotonically non-decreasing f64
/// seconds from an arbitrary epoch ([`FrameClock`](super::FrameClock) is
/// one such source); the registry never reads a clock itself.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    timers: HashMap<SiteId, TimerState>,
}

impl TimerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timers: HashMap::new(),
        }
    }

    /// Returns `true` once every `interval_secs` for the timer named `id`.
    ///
    /// The first call for an identity arms the timer and returns `false`
    /// (the period begins at that call's `now_secs`). Once armed:
    ///
    /// - While less than `interval_secs` has elapsed since the period
    ///   began, returns `false` without touching the state.
    /// - When the period has elapsed, returns `true` and re-arms. If at
    ///   most one interval was overshot, the new period begins exactly one
    ///   interval after the old one, so fire instants stay on the
    ///   progression `start + k * interval` instead of drifting with
    ///   polling jitter. If the check ran so late that more than one full
    ///   interval was missed (a stalled host loop), the phase is dropped
    ///   and restarted at `now_secs` -- one `true`, not a burst of
    ///   catch-up fires.
    ///
    /// A non-positive `interval_secs` is always elapsed: every call
    /// returns `true` and re-arms at `now_secs`.
    pub fn every(&mut self, id: SiteId, interval_secs: f64, now_secs: f64) -> bool {
        let state = self.get_or_create(id, now_secs);
        let remaining = (state.start + interval_secs) - now_secs;
        if remaining > 0.0 {
            return false;
        }
        if -remaining > interval_secs {
            // Stalled past a full extra interval: drop missed cycles.
            state.start = now_secs;
        } else {
            // Advance exactly one interval, preserving the phase.
            state.start = now_secs + remaining;
        }
        true
    }

    /// [`every`](TimerRegistry::every) keyed by the caller's source
    /// location, captured at compile time.
    ///
    /// ```rust
    /// # use cadence_core::timer::TimerRegistry;
    /// # let mut timers = TimerRegistry::new();
    /// # let now = 0.0;
    /// if timers.every_here(10.0, now) {
    ///     println!("10 seconds have passed!");
    /// }
    /// ```
    #[track_caller]
    pub fn every_here(&mut self, interval_secs: f64, now_secs: f64) -> bool {
        self.every(SiteId::here(0), interval_secs, now_secs)
    }

    /// [`every_here`](TimerRegistry::every_here) with a salt, for call
    /// sites that run in a loop and need one timer per iteration.
    ///
    /// ```rust
    /// # use cadence_core::timer::TimerRegistry;
    /// # let mut timers = TimerRegistry::new();
    /// # let now = 0.0;
    /// for i in 0..4u64 {
    ///     if timers.every_here_with(1.0 + i as f64, now, i) {
    ///         println!("timer {i} fired");
    ///     }
    /// }
    /// ```
    #[track_caller]
    pub fn every_here_with(&mut self, interval_secs: f64, now_secs: f64, salt: u64) -> bool {
        self.every(SiteId::here(salt), interval_secs, now_secs)
    }

    /// Returns the instant at which `id`'s current period began, if the
    /// identity has been seen.
    #[must_use]
    pub fn phase_start(&self, id: SiteId) -> Option<f64> {
        self.timers.get(&id).map(|state| state.start)
    }

    /// Returns `true` if an entry exists for `id`.
    #[must_use]
    pub fn contains(&self, id: SiteId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Returns the number of tracked timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Returns `true` if no timers are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Drops all timer state. Every identity re-arms on its next check.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Looks up `id`, inserting a fresh entry armed at `now_secs` if the
    /// identity has not been seen before.
    fn get_or_create(&mut self, id: SiteId, now_secs: f64) -> &mut TimerState {
        self.timers.entry(id).or_insert_with(|| {
            log::debug!("arming recurring timer {:#018x}", id.as_u64());
            TimerState { start: now_secs }
        })
    }
}

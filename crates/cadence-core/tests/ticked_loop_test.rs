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

//! Drives the timer registry the way a host loop would: a fixed tick
//! advancing simulated time, with the fire schedule checked against the
//! expected arithmetic progression.

use approx::assert_relative_eq;
use cadence_core::timer::{SharedTimers, SiteId, TimerRegistry};

/// A 60 Hz loop polling a 0.5s timer: fires stay on the half-second
/// progression even though 0.5 is not a multiple of the tick step.
#[test]
fn fires_track_the_phase_progression_under_jitter() {
    let mut timers = TimerRegistry::new();
    let id = SiteId::derive(b"tests/ticked_loop.rs:heartbeat", 0);
    let step = 1.0 / 60.0;

    let mut fires = Vec::new();
    for tick in 0..600 {
        let now = tick as f64 * step;
        if timers.every(id, 0.5, now) {
            fires.push(now);
        }
    }

    // 10 simulated seconds, armed at 0: fires at ~0.5, 1.0, ... 9.5.
    assert_eq!(fires.len(), 19);
    for (k, fired_at) in fires.iter().enumerate() {
        let deadline = 0.5 * (k + 1) as f64;
        // Each fire lands within one tick after its deadline, and the lag
        // never accumulates across periods. The 1e-9 slack covers the tick
        // grid itself being inexact in binary.
        assert!(*fired_at >= deadline - 1e-9);
        assert!(
            *fired_at < deadline + step + 1e-9,
            "fire {k} drifted: {fired_at} vs deadline {deadline}"
        );
    }
    // The phase stays on the progression to within float rounding.
    assert_relative_eq!(timers.phase_start(id).unwrap(), 9.5, epsilon = 1e-9);
}

/// A stalled loop (one giant frame) produces a single fire and a clean
/// restart, never a burst of catch-up fires.
#[test]
fn stall_produces_one_fire_and_restarts_clean() {
    let mut timers = TimerRegistry::new();
    let id = SiteId::derive(b"tests/ticked_loop.rs:stall", 0);

    assert!(!timers.every(id, 1.0, 0.0));
    assert!(timers.every(id, 1.0, 1.0));

    // The host hangs for 7.3 seconds, missing six deadlines.
    let mut fires = 0;
    for tick in 0..10 {
        let now = 8.3 + tick as f64 * 0.01;
        if timers.every(id, 1.0, now) {
            fires += 1;
        }
    }
    assert_eq!(fires, 1, "missed cycles must be dropped, not replayed");
    assert_eq!(timers.phase_start(id), Some(8.3));
    // Normal cadence resumes from the restart point.
    assert!(!timers.every(id, 1.0, 9.0));
    assert!(timers.every(id, 1.0, 9.3));
}

/// Two salted timers derived from one context run on fully independent
/// schedules inside the same registry.
#[test]
fn salted_timers_run_independent_schedules() {
    let timers = SharedTimers::new();
    let ctx = b"tests/ticked_loop.rs:wave_spawner";
    let fast = SiteId::derive(ctx, 1);
    let slow = SiteId::derive(ctx, 2);

    let mut fast_fires = 0;
    let mut slow_fires = 0;
    for tick in 0..=100 {
        let now = tick as f64 * 0.1;
        if timers.every(fast, 1.0, now) {
            fast_fires += 1;
        }
        if timers.every(slow, 2.5, now) {
            slow_fires += 1;
        }
    }

    // 10 seconds: the 1s timer fires at 1..=10, the 2.5s timer at
    // 2.5, 5.0, 7.5, 10.0.
    assert_eq!(fast_fires, 10);
    assert_eq!(slow_fires, 4);
    assert_eq!(timers.with_registry(|reg| reg.len()), 2);
}

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

//! A small ticked loop showing the timer registry in use.
//!
//! Run with `RUST_LOG=info cargo run -p sandbox`.

use std::thread;
use std::time::Duration;

use cadence_core::{FrameClock, SchmittTrigger, TimerRegistry};

fn main() {
    env_logger::init();

    let clock = FrameClock::new();
    let mut timers = TimerRegistry::new();
    let mut signal_high = SchmittTrigger::new(0.7, 0.3);

    log::info!("sandbox loop starting (runs for ~6 seconds)");

    loop {
        let now = clock.now_secs();
        if now > 6.0 {
            break;
        }

        // No timer variable anywhere: this call site *is* the timer.
        if timers.every_here(2.0, now) {
            log::info!("[{now:5.2}] two seconds have passed");
        }

        // One textual call site, split into per-iteration timers by salt.
        for i in 1..=3u64 {
            if timers.every_here_with(i as f64, now, i) {
                log::info!("[{now:5.2}] loop timer {i} fired ({i}s period)");
            }
        }

        // A slow sine wave through the hysteresis filter: state changes
        // only on real threshold crossings, not on every wobble.
        let wave = 0.5 + 0.5 * (now * std::f64::consts::TAU / 3.0).sin();
        let was_high = signal_high.is_high();
        let is_high = signal_high.update(wave as f32).is_high();
        if is_high != was_high {
            log::info!("[{now:5.2}] signal went {}", if is_high { "high" } else { "low" });
        }

        thread::sleep(Duration::from_millis(16));
    }

    log::info!("tracked {} timers at shutdown", timers.len());
}

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

//! Host-side time source for the timer registry.

use std::time::Instant;

/// Monotonic seconds-since-creation clock.
///
/// [`TimerRegistry`](super::TimerRegistry) never reads a clock; the host
/// supplies `now` with every check. `FrameClock` is the usual source: read
/// [`now_secs`](FrameClock::now_secs) once at the top of the tick and pass
/// that value to every check made during the tick, so all timers in a
/// frame agree on what "now" is.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    /// Creates a clock whose epoch is the moment of creation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock was created.
    ///
    /// Monotonically non-decreasing across calls on the same clock.
    #[must_use]
    pub fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    /// Moves the epoch to the present instant, restarting from zero.
    pub fn restart(&mut self) {
        self.origin = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn starts_near_zero() {
        let clock = FrameClock::new();
        assert!(clock.now_secs() < 0.1, "fresh clock should read near zero");
    }

    #[test]
    fn is_monotonic() {
        let clock = FrameClock::new();
        let mut previous = clock.now_secs();
        for _ in 0..100 {
            let current = clock.now_secs();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn advances_with_real_time() {
        let clock = FrameClock::new();
        thread::sleep(Duration::from_millis(50));
        assert!(clock.now_secs() >= 0.05);
    }

    #[test]
    fn restart_rewinds_to_zero() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(20));
        clock.restart();
        assert!(clock.now_secs() < 0.02);
    }
}

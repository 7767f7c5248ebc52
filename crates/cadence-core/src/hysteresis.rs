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

//! Two-threshold hysteresis filter, after the Schmitt trigger circuit.
//!
//! Converts a noisy float signal into a stable boolean: the output only
//! goes high once the input rises above the upper bound, and only goes low
//! once it falls below the lower bound. Between the bounds the previous
//! output latches, which suppresses chatter from a signal hovering near a
//! single threshold.

use serde::{Deserialize, Serialize};

/// Threshold-based float-to-bool converter with hysteresis.
///
/// ```rust
/// use cadence_core::SchmittTrigger;
///
/// let mut landed = SchmittTrigger::new(0.9, 0.1);
/// assert!(!landed.update(0.5).is_high()); // dead band, still low
/// assert!(landed.update(0.95).is_high()); // crossed the upper bound
/// assert!(landed.update(0.5).is_high());  // dead band, stays high
/// assert!(!landed.update(0.05).is_high()); // crossed the lower bound
/// ```
///
/// Constructing with `upper < lower` swaps the bounds and inverts the
/// output, turning the trigger into a "goes high when the signal drops"
/// detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchmittTrigger {
    upper_bound: f32,
    lower_bound: f32,
    value: bool,
    invert: bool,
}

impl SchmittTrigger {
    /// Creates a trigger with the given bounds, output initially low.
    #[must_use]
    pub fn new(upper_bound: f32, lower_bound: f32) -> Self {
        let invert = upper_bound < lower_bound;
        let (upper_bound, lower_bound) = if invert {
            (lower_bound, upper_bound)
        } else {
            (upper_bound, lower_bound)
        };
        Self {
            upper_bound,
            lower_bound,
            value: false,
            invert,
        }
    }

    /// Feeds a sample through the trigger.
    ///
    /// A sample above the upper bound drives the output high, one below
    /// the lower bound drives it low (both inverted for a reversed-bounds
    /// trigger); anything in between leaves the output latched. Returns
    /// `self` so a tick can update and test in one expression.
    pub fn update(&mut self, sample: f32) -> &mut Self {
        if sample > self.upper_bound {
            self.value = !self.invert;
        } else if sample < self.lower_bound {
            self.value = self.invert;
        }
        self
    }

    /// Current boolean state.
    #[must_use]
    pub fn is_high(&self) -> bool {
        self.value
    }

    /// Upper bound of the dead band.
    #[must_use]
    pub fn upper_bound(&self) -> f32 {
        self.upper_bound
    }

    /// Lower bound of the dead band.
    #[must_use]
    pub fn lower_bound(&self) -> f32 {
        self.lower_bound
    }
}

impl From<SchmittTrigger> for bool {
    fn from(trigger: SchmittTrigger) -> bool {
        trigger.is_high()
    }
}

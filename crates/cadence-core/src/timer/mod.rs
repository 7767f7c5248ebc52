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

//! Recurring timers keyed by call-site identity.
//!
//! A [`TimerRegistry`] lets any call site in a ticked loop ask "has N
//! seconds passed?" without declaring a timer variable:
//!
//! ```rust
//! use cadence_core::timer::{FrameClock, TimerRegistry};
//!
//! let clock = FrameClock::new();
//! let mut timers = TimerRegistry::new();
//!
//! // Inside the host tick:
//! let now = clock.now_secs();
//! if timers.every_here(10.0, now) {
//!     println!("10 seconds have passed!");
//! }
//! ```
//!
//! The timer is identified by the call site itself: [`every_here`] captures
//! the caller's source location at compile time and hashes it (plus an
//! optional salt) into a [`SiteId`], which keys the per-site timing state
//! inside the registry. A salt disambiguates a single call site running in
//! a loop, where the location alone would name one timer for all
//! iterations.
//!
//! Firing is phase-preserving: fire instants stay on the arithmetic
//! progression `start + k * interval` regardless of polling jitter, and a
//! stall longer than one full interval drops the missed cycles instead of
//! bursting. See [`TimerRegistry::every`] for the exact policy.
//!
//! [`every_here`]: TimerRegistry::every_here

pub mod clock;
pub mod identity;
pub mod registry;
pub mod shared;

pub use self::clock::FrameClock;
pub use self::identity::{Blake3Site, SiteHasher, SiteId};
pub use self::registry::TimerRegistry;
pub use self::shared::SharedTimers;

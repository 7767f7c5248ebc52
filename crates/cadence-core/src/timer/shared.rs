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

//! A clonable, thread-safe handle to a [`TimerRegistry`].

use std::sync::{Arc, Mutex, PoisonError};

use super::identity::SiteId;
use super::registry::TimerRegistry;

/// Shared handle to a [`TimerRegistry`].
///
/// [`TimerRegistry`] itself is single-threaded (`&mut self`); this wrapper
/// is for hosts whose ticks may run on more than one thread, or that want
/// one registry reachable from many systems without threading `&mut`
/// through all of them. Each scheduling check runs the whole
/// lookup-evaluate-re-arm sequence under one mutex acquisition, so a check
/// for a given identity always observes a consistent prior period start.
///
/// Callers wanting process-wide convenience hold one `SharedTimers` in
/// their own context object, created at startup and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct SharedTimers {
    inner: Arc<Mutex<TimerRegistry>>,
}

impl SharedTimers {
    /// Creates a handle to a fresh, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Thread-safe [`TimerRegistry::every`].
    pub fn every(&self, id: SiteId, interval_secs: f64, now_secs: f64) -> bool {
        self.lock().every(id, interval_secs, now_secs)
    }

    /// Thread-safe [`TimerRegistry::every_here`].
    #[track_caller]
    pub fn every_here(&self, interval_secs: f64, now_secs: f64) -> bool {
        self.every(SiteId::here(0), interval_secs, now_secs)
    }

    /// Thread-safe [`TimerRegistry::every_here_with`].
    #[track_caller]
    pub fn every_here_with(&self, interval_secs: f64, now_secs: f64, salt: u64) -> bool {
        self.every(SiteId::here(salt), interval_secs, now_secs)
    }

    /// Runs `f` with exclusive access to the underlying registry, for
    /// inspection or bulk operations.
    pub fn with_registry<R>(&self, f: impl FnOnce(&mut TimerRegistry) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TimerRegistry> {
        // Timer state stays coherent even if a holder panicked mid-tick,
        // so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

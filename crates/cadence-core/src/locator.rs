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

//! A type-keyed registry of lazily created shared instances.
//!
//! [`InstanceRegistry`] gives "one instance per type, created on first
//! use" semantics without hidden global state: the registry is an explicit
//! object with an owner and a lifetime. A host typically creates one at
//! startup, hands it (or a shared reference) to its systems, and drops it
//! at shutdown.
//!
//! # Design
//!
//! This is a **Service Locator** keyed by [`TypeId`]: each consumer
//! fetches only the instances it needs, and registering a new instance
//! type never changes the registry's interface.

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// A registry holding at most one instance of each type, created lazily.
///
/// # Example
///
/// ```rust
/// use cadence_core::locator::InstanceRegistry;
///
/// #[derive(Default)]
/// struct AudioMixer { volume: f32 }
///
/// let mut registry = InstanceRegistry::new();
/// let mixer = registry.get_or_default::<AudioMixer>();
/// assert_eq!(mixer.volume, 0.0);
/// ```
#[derive(Default)]
pub struct InstanceRegistry {
    instances: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl InstanceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    /// Returns the instance of `T`, running `init` to create it if this is
    /// the first request. `init` runs at most once per type per registry.
    pub fn get_or_init<T: Send + Sync + 'static>(&mut self, init: impl FnOnce() -> T) -> &T {
        let boxed = self
            .instances
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(init()));
        match boxed.downcast_ref::<T>() {
            Some(instance) => instance,
            // The entry under TypeId::of::<T>() holds a T by construction.
            None => unreachable!("instance registry entry has the wrong type"),
        }
    }

    /// [`get_or_init`](InstanceRegistry::get_or_init) with
    /// [`Default::default`] as the initializer.
    pub fn get_or_default<T: Default + Send + Sync + 'static>(&mut self) -> &T {
        self.get_or_init(T::default)
    }

    /// Returns a mutable reference to the instance of `T`, creating it
    /// with `init` if absent.
    pub fn get_or_init_mut<T: Send + Sync + 'static>(
        &mut self,
        init: impl FnOnce() -> T,
    ) -> &mut T {
        let boxed = self
            .instances
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(init()));
        match boxed.downcast_mut::<T>() {
            Some(instance) => instance,
            None => unreachable!("instance registry entry has the wrong type"),
        }
    }

    /// Inserts an already-built instance, replacing any existing one of
    /// the same type.
    pub fn insert<T: Send + Sync + 'static>(&mut self, instance: T) {
        self.instances.insert(TypeId::of::<T>(), Box::new(instance));
    }

    /// Retrieves the instance of `T`, if one exists, without creating it.
    #[must_use]
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.instances
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// Returns `true` if an instance of `T` exists.
    #[must_use]
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.instances.contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of held instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if no instances are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

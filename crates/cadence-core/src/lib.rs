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

//! # Cadence Core
//!
//! Small utilities for periodically-ticked host loops, centered on a
//! recurring timer keyed by call-site identity: any call site can ask
//! "has N seconds passed?" every tick without declaring timer state,
//! because the timer is identified by where in the program it is asked.

#![warn(missing_docs)]

pub mod hysteresis;
pub mod locator;
pub mod settings;
pub mod timer;
pub mod version;

pub use hysteresis::SchmittTrigger;
pub use locator::InstanceRegistry;
pub use timer::{FrameClock, SharedTimers, SiteId, TimerRegistry};
pub use version::{ReleaseType, Version};

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

//! Typed settings persisted as JSON files.
//!
//! A settings type declares its own file path; [`load`] reads and
//! deserializes it, falling back to [`Default`] when the file does not
//! exist yet, and [`save`] writes it back (creating parent directories).
//! [`InstanceRegistry::settings`] combines loading with the locator so a
//! settings struct behaves like a lazily loaded shared instance.
//!
//! ```rust,no_run
//! use cadence_core::settings::{self, Settings};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct GraphicsSettings {
//!     resolution_scale: f32,
//!     vsync: bool,
//! }
//!
//! impl Settings for GraphicsSettings {
//!     const PATH: &'static str = "settings/graphics.json";
//! }
//!
//! let graphics: GraphicsSettings = settings::load()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::locator::InstanceRegistry;

/// A settings struct with an associated file location.
pub trait Settings: Serialize + DeserializeOwned + Default + Send + Sync + 'static {
    /// Path of the JSON file backing this type, relative to the working
    /// directory unless absolute.
    const PATH: &'static str;

    /// Hook run after a value is loaded (or defaulted), for derived or
    /// migrated fields. The default does nothing.
    fn on_load(&mut self) {}
}

/// Loads `T` from [`Settings::PATH`].
///
/// A missing file is not an error: the default value is returned, matching
/// first-run behavior where the file has never been written. A file that
/// exists but cannot be read or parsed is an error.
pub fn load<T: Settings>() -> Result<T> {
    load_from_path(Path::new(T::PATH))
}

/// Saves `value` to [`Settings::PATH`] as pretty-printed JSON, creating
/// parent directories as needed.
pub fn save<T: Settings>(value: &T) -> Result<()> {
    save_to_path(value, Path::new(T::PATH))
}

/// [`load`] from an explicit path.
pub fn load_from_path<T: Settings>(path: &Path) -> Result<T> {
    if !path.exists() {
        let mut value = T::default();
        value.on_load();
        return Ok(value);
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading settings file {}", path.display()))?;
    let mut value: T = serde_json::from_str(&text)
        .with_context(|| format!("parsing settings file {}", path.display()))?;
    value.on_load();
    Ok(value)
}

/// [`save`] to an explicit path.
pub fn save_to_path<T: Settings>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating settings directory {}", parent.display()))?;
        }
    }
    let text = serde_json::to_string_pretty(value).context("serializing settings")?;
    fs::write(path, text).with_context(|| format!("writing settings file {}", path.display()))?;
    Ok(())
}

impl InstanceRegistry {
    /// Returns the shared settings instance of `T`, loading it from
    /// [`Settings::PATH`] on first request.
    ///
    /// A load failure is logged and replaced with the default value, so a
    /// corrupt settings file degrades to first-run behavior instead of
    /// taking the host down.
    pub fn settings<T: Settings>(&mut self) -> &T {
        self.get_or_init(|| {
            load::<T>().unwrap_or_else(|err| {
                log::warn!("falling back to default settings: {err:#}");
                let mut value = T::default();
                value.on_load();
                value
            })
        })
    }
}

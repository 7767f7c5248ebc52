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

//! Build version value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Development era of a build.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum ReleaseType {
    /// Feature complete.
    Alpha,
    /// Content complete.
    Beta,
    /// Production.
    #[default]
    Release,
}

/// Versioning information, displayed as `X.Y.Z` with an `a ` or `b `
/// prefix for alpha and beta builds.
///
/// Ordering is hierarchical: major, then minor, then revision, then
/// release type, so `a 2.0.0` sorts after `1.9.9` and `2.0.0` sorts after
/// `b 2.0.0`. The field order makes the derived [`Ord`] implement exactly
/// that comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Version {
    /// Major version: X in X.Y.Z.
    pub major: u32,
    /// Minor version: Y in X.Y.Z.
    pub minor: u32,
    /// Revision: Z in X.Y.Z.
    pub revision: u32,
    /// Development era of this version.
    pub release: ReleaseType,
}

impl Version {
    /// A production version.
    #[must_use]
    pub const fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self::pre(ReleaseType::Release, major, minor, revision)
    }

    /// A version in an explicit development era.
    #[must_use]
    pub const fn pre(release: ReleaseType, major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
            release,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.release {
            ReleaseType::Alpha => "a ",
            ReleaseType::Beta => "b ",
            ReleaseType::Release => "",
        };
        write!(f, "{prefix}{}.{}.{}", self.major, self.minor, self.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_release_prefix() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(
            Version::pre(ReleaseType::Alpha, 0, 4, 0).to_string(),
            "a 0.4.0"
        );
        assert_eq!(
            Version::pre(ReleaseType::Beta, 2, 0, 1).to_string(),
            "b 2.0.1"
        );
    }

    #[test]
    fn orders_hierarchically() {
        assert!(Version::new(2, 0, 0) > Version::new(1, 9, 9));
        assert!(Version::new(1, 2, 0) > Version::new(1, 1, 9));
        assert!(Version::new(1, 1, 2) > Version::new(1, 1, 1));
        // Numbers dominate the release type...
        assert!(Version::pre(ReleaseType::Alpha, 2, 0, 0) > Version::new(1, 9, 9));
        // ...which only breaks ties.
        assert!(Version::new(2, 0, 0) > Version::pre(ReleaseType::Beta, 2, 0, 0));
        assert!(Version::pre(ReleaseType::Beta, 2, 0, 0) > Version::pre(ReleaseType::Alpha, 2, 0, 0));
    }

    #[test]
    fn equality_requires_all_fields() {
        assert_eq!(Version::new(1, 0, 0), Version::new(1, 0, 0));
        assert_ne!(Version::new(1, 0, 0), Version::pre(ReleaseType::Beta, 1, 0, 0));
    }

    #[test]
    fn survives_serde_round_trip() {
        let version = Version::pre(ReleaseType::Beta, 3, 1, 4);
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(serde_json::from_str::<Version>(&json).unwrap(), version);
    }
}

/*
 * mod.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of mbfast, a native mailbox indexing fast path.
 *
 * mbfast is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * mbfast is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with mbfast.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Platform identification: a small record describing the host, used by hosts as a
//! sanity check that the native binding loaded on the platform they expect.

use serde::Serialize;

use crate::version::BINDING_VERSION;

#[cfg(not(unix))]
mod consts;
#[cfg(unix)]
mod uname;

#[cfg(not(unix))]
pub use consts::ConstsProvider;
#[cfg(unix)]
pub use uname::UnameProvider;

/// Host identification. `version` is the binding's version, not the OS release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    /// Operating system family name (e.g. Darwin, Linux).
    pub platform: String,
    /// Machine architecture (e.g. arm64, x86_64).
    pub arch: String,
    pub version: String,
}

impl PlatformInfo {
    /// Build a record from the OS reply. Returns None if either field is blank,
    /// since a record with empty fields is no use as a sanity check.
    pub fn from_parts(platform: impl Into<String>, arch: impl Into<String>) -> Option<Self> {
        let platform = platform.into();
        let arch = arch.into();
        if platform.trim().is_empty() || arch.trim().is_empty() {
            return None;
        }
        Some(Self {
            platform,
            arch,
            version: BINDING_VERSION.to_string(),
        })
    }

    /// JSON object with the keys platform, arch, version.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Source of host identification. One implementation per supported host platform.
pub trait PlatformInfoProvider: Send + Sync {
    /// Query the host. None means the query failed; callers treat that as the
    /// normal no-data case, not as an error.
    fn platform_info(&self) -> Option<PlatformInfo>;
}

/// Provider for the platform this crate was compiled for.
pub fn host_provider() -> &'static dyn PlatformInfoProvider {
    #[cfg(unix)]
    {
        &UnameProvider
    }
    #[cfg(not(unix))]
    {
        &ConstsProvider
    }
}

/// Identify the host using the compiled-in provider.
pub fn osx_info() -> Option<PlatformInfo> {
    host_provider().platform_info()
}

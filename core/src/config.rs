/*
 * config.rs
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

//! Runtime settings. The binding reads nothing from disk; the only tunable is the
//! log filter, taken from MBFAST_LOG, then RUST_LOG, then DEFAULT_LOG_FILTER.

use std::env;

/// Environment variable consulted first for the log filter.
pub const LOG_ENV_VAR: &str = "MBFAST_LOG";

/// Standard tracing filter variable, consulted when LOG_ENV_VAR is unset.
pub const RUST_LOG_ENV_VAR: &str = "RUST_LOG";

/// Filter used when neither variable is set. Quiet by default: a host process
/// loading the binding should not see output unless it asks for it.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings resolved once when logging is initialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(env::var(LOG_ENV_VAR).ok(), env::var(RUST_LOG_ENV_VAR).ok())
    }

    /// Resolve settings from explicit values. Blank values count as unset.
    pub fn resolve(mbfast_log: Option<String>, rust_log: Option<String>) -> Self {
        let log_filter = [mbfast_log, rust_log]
            .into_iter()
            .flatten()
            .map(|s| s.trim().to_string())
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self { log_filter }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

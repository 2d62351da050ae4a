/*
 * logging.rs
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

//! Structured logging via tracing. Output goes to stderr.
//!
//! The binding lives inside someone else's process, so initialisation is explicit
//! (the host asks for it) and happens at most once. If the host has already
//! installed a global subscriber, that one is kept.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;

static INIT: OnceCell<bool> = OnceCell::new();

/// Install the stderr subscriber. `filter` overrides the filter from Settings::from_env.
/// Returns true if this call (or an earlier one) installed our subscriber, false if
/// another subscriber was already in place.
pub fn init(filter: Option<&str>) -> bool {
    *INIT.get_or_init(|| {
        let directives = match filter {
            Some(f) if !f.trim().is_empty() => f.trim().to_string(),
            _ => Settings::from_env().log_filter,
        };
        let env_filter = EnvFilter::try_new(&directives)
            .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true)
            .compact()
            .finish();
        // Only the tracing dispatcher is touched; a host's `log` logger is not our concern.
        let installed = tracing::subscriber::set_global_default(subscriber).is_ok();
        if installed {
            tracing::debug!(
                version = crate::version::BINDING_VERSION,
                filter = %directives,
                "logging initialised"
            );
        }
        installed
    })
}

/*
 * error.rs
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

//! Binding and platform errors.

use std::io;
use thiserror::Error;

/// Errors raised at the host boundary when a call is made with bad arguments.
/// These indicate a programming error at the call site, not a runtime condition.
#[derive(Debug, Error)]
pub enum BindingError {
    /// A required argument was not supplied (NULL on the C surface).
    #[error("{name} is required")]
    MissingArgument { name: &'static str },

    /// The argument was supplied but is not a string (not valid UTF-8 on the C surface).
    #[error("{name} must be a string")]
    NotAString { name: &'static str },
}

/// Failures of the OS identification query. Never surfaced to the host;
/// the diagnostic call reports them as an absent result.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("uname failed: {0}")]
    Uname(#[source] io::Error),

    #[error("uname returned an unusable {field} field")]
    InvalidField { field: &'static str },
}

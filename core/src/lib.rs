/*
 * lib.rs
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

//! Core of the mbfast binding: platform identification and the mailbox index fast path.
//! Everything here is plain Rust; the host-callable surface lives in the ffi crate.

pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod platform;
pub mod version;

pub use error::{BindingError, PlatformError};
pub use index::{index, PathIndexer, StubIndexer};
pub use platform::{host_provider, osx_info, PlatformInfo, PlatformInfoProvider};
pub use version::BINDING_VERSION;

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

//! Mailbox index fast path. Only the call surface exists so far: StubIndexer accepts
//! any path and produces nothing. A real indexer (filesystem change notification,
//! metadata extraction) is a separate PathIndexer implementation.

use std::convert::Infallible;
use std::path::Path;

/// Indexes the mailbox data found under a path.
pub trait PathIndexer: Send + Sync {
    /// What a successful index run yields.
    type Output;

    /// Index `path`. The path is opaque: no validation, no existence check.
    /// None means there is no result.
    fn index(&self, path: &Path) -> Option<Self::Output>;
}

/// Placeholder indexer. Its output type is uninhabited, so it can only ever
/// report that there is no result.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubIndexer;

impl PathIndexer for StubIndexer {
    type Output = Infallible;

    fn index(&self, path: &Path) -> Option<Infallible> {
        tracing::trace!(path = %path.display(), "index fast path not implemented");
        None
    }
}

/// Run the compiled-in indexer on `path`.
pub fn index(path: impl AsRef<Path>) -> Option<Infallible> {
    StubIndexer.index(path.as_ref())
}

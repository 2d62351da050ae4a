/*
 * consts.rs
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

//! Non-unix hosts: identification from the compile-time target constants.

use super::{PlatformInfo, PlatformInfoProvider};

#[derive(Debug, Default, Clone, Copy)]
pub struct ConstsProvider;

impl PlatformInfoProvider for ConstsProvider {
    fn platform_info(&self) -> Option<PlatformInfo> {
        PlatformInfo::from_parts(std::env::consts::OS, std::env::consts::ARCH)
    }
}

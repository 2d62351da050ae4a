/*
 * uname.rs
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

//! Unix hosts (macOS included): identification from uname(2).

use std::ffi::CStr;
use std::io;

use libc::c_char;

use super::{PlatformInfo, PlatformInfoProvider};
use crate::error::PlatformError;

/// Reads sysname and machine from uname(2).
#[derive(Debug, Default, Clone, Copy)]
pub struct UnameProvider;

impl UnameProvider {
    fn query(&self) -> Result<PlatformInfo, PlatformError> {
        let mut u: libc::utsname = unsafe { std::mem::zeroed() };
        if unsafe { libc::uname(&mut u) } != 0 {
            return Err(PlatformError::Uname(io::Error::last_os_error()));
        }
        let platform = field_to_string(&u.sysname, "sysname")?;
        let arch = field_to_string(&u.machine, "machine")?;
        PlatformInfo::from_parts(platform, arch).ok_or(PlatformError::InvalidField {
            field: "sysname/machine",
        })
    }
}

impl PlatformInfoProvider for UnameProvider {
    fn platform_info(&self) -> Option<PlatformInfo> {
        match self.query() {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::debug!(error = %e, "platform query failed");
                None
            }
        }
    }
}

/// utsname fields are NUL-terminated within their fixed-size arrays.
fn field_to_string(field: &[c_char], name: &'static str) -> Result<String, PlatformError> {
    if !field.contains(&0) {
        return Err(PlatformError::InvalidField { field: name });
    }
    let s = unsafe { CStr::from_ptr(field.as_ptr()) };
    s.to_str()
        .map(|s| s.to_string())
        .map_err(|_| PlatformError::InvalidField { field: name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uname_provider() {
        let info = UnameProvider.platform_info().expect("uname should succeed on unix");
        assert!(!info.platform.is_empty());
        assert!(!info.arch.is_empty());
        assert_eq!(info.version, "0.1.0");
        #[cfg(target_os = "macos")]
        {
            assert_eq!(info.platform, "Darwin");
            assert!(["arm64", "x86_64"].contains(&info.arch.as_str()), "unexpected arch {}", info.arch);
        }
        #[cfg(target_os = "linux")]
        assert_eq!(info.platform, "Linux");
    }

    #[test]
    fn test_field_to_string() {
        let mut buf = [0 as c_char; 8];
        for (i, b) in b"arm64".iter().enumerate() {
            buf[i] = *b as c_char;
        }
        assert_eq!(field_to_string(&buf, "machine").unwrap(), "arm64");
    }

    #[test]
    fn test_field_without_terminator() {
        let buf = [b'x' as c_char; 4];
        assert!(matches!(
            field_to_string(&buf, "machine"),
            Err(PlatformError::InvalidField { field: "machine" })
        ));
    }
}

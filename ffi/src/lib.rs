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

//! C FFI for mbfast core: platform identification and the mailbox index fast path.
//! Returned strings are newly allocated (free with mbfast_free_string) unless noted.
//! All string parameters are UTF-8 NUL-terminated.
//! Calls that can fail on bad arguments return MBFAST_OK or MBFAST_ERR_ARGUMENT and
//! leave a message for mbfast_last_error.

use libc::{c_char, c_int};
use mbfast_core::{BindingError, PathIndexer, StubIndexer, BINDING_VERSION};
use std::ffi::{CStr, CString};
use std::path::Path;
use std::ptr;

#[cfg(feature = "python")]
mod python;

/// Success.
pub const MBFAST_OK: c_int = 0;

/// A required argument was NULL or not a valid UTF-8 string.
pub const MBFAST_ERR_ARGUMENT: c_int = -1;

thread_local! {
    static LAST_ERROR: std::cell::RefCell<Option<CString>> = std::cell::RefCell::new(None);
}

fn set_last_error(err: &BindingError) {
    let msg = CString::new(err.to_string()).unwrap_or_default();
    LAST_ERROR.with(|e| *e.borrow_mut() = Some(msg));
}

fn clear_last_error() {
    LAST_ERROR.with(|e| *e.borrow_mut() = None);
}

/// Borrow a C string argument as &str. NULL is a missing argument; bytes that are not
/// UTF-8 are not a string.
unsafe fn arg_str<'a>(ptr: *const c_char, name: &'static str) -> Result<&'a str, BindingError> {
    if ptr.is_null() {
        return Err(BindingError::MissingArgument { name });
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| BindingError::NotAString { name })
}

fn to_c_string(s: &str) -> *mut c_char {
    CString::new(s).map(CString::into_raw).unwrap_or(ptr::null_mut())
}

/// C struct for host identification. Caller frees with mbfast_free_platform_info.
#[repr(C)]
pub struct MbfastPlatformInfo {
    pub platform: *mut c_char,
    pub arch: *mut c_char,
    pub version: *mut c_char,
}

static VERSION_C: once_cell::sync::Lazy<CString> =
    once_cell::sync::Lazy::new(|| CString::new(BINDING_VERSION).unwrap_or_default());

/// Binding version string (static, do not free).
#[no_mangle]
pub extern "C" fn mbfast_version() -> *const c_char {
    VERSION_C.as_ptr()
}

/// Last error message from a failed call on this thread. Valid until next FFI call. Do not free.
#[no_mangle]
pub extern "C" fn mbfast_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Free a string returned by mbfast_osx_info. No-op if ptr is NULL.
#[no_mangle]
pub unsafe extern "C" fn mbfast_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = CString::from_raw(ptr);
    }
}

/// Install the stderr log subscriber. filter: tracing filter directives, or NULL to read
/// MBFAST_LOG / RUST_LOG. Only the first call has any effect.
#[no_mangle]
pub unsafe extern "C" fn mbfast_init_logging(filter: *const c_char) -> c_int {
    let filter = if filter.is_null() {
        None
    } else {
        match arg_str(filter, "filter") {
            Ok(s) => Some(s),
            Err(e) => {
                set_last_error(&e);
                return MBFAST_ERR_ARGUMENT;
            }
        }
    };
    mbfast_core::logging::init(filter);
    clear_last_error();
    MBFAST_OK
}

// ---------- Platform ----------

/// Host identification as a JSON object with keys "platform", "arch", "version".
/// Returns NULL if the OS query fails; that is not an error and leaves no last error.
#[no_mangle]
pub extern "C" fn mbfast_osx_info() -> *mut c_char {
    clear_last_error();
    match mbfast_core::osx_info() {
        Some(info) => match info.to_json() {
            Ok(json) => to_c_string(&json),
            Err(e) => {
                tracing::debug!(error = %e, "failed to encode platform info");
                ptr::null_mut()
            }
        },
        None => ptr::null_mut(),
    }
}

/// Host identification as a struct. Returns NULL if the OS query fails.
/// Caller frees with mbfast_free_platform_info.
#[no_mangle]
pub extern "C" fn mbfast_platform_info() -> *mut MbfastPlatformInfo {
    clear_last_error();
    match mbfast_core::osx_info() {
        Some(info) => Box::into_raw(Box::new(MbfastPlatformInfo {
            platform: to_c_string(&info.platform),
            arch: to_c_string(&info.arch),
            version: to_c_string(&info.version),
        })),
        None => ptr::null_mut(),
    }
}

/// Free a struct returned by mbfast_platform_info and the strings inside. No-op if NULL.
#[no_mangle]
pub unsafe extern "C" fn mbfast_free_platform_info(info: *mut MbfastPlatformInfo) {
    if info.is_null() {
        return;
    }
    let info = Box::from_raw(info);
    mbfast_free_string(info.platform);
    mbfast_free_string(info.arch);
    mbfast_free_string(info.version);
}

// ---------- Index ----------

/// Mailbox index fast path. path: filesystem path (not validated, need not exist).
/// out_result (optional): receives the result, currently always NULL (no result).
/// Returns MBFAST_OK, or MBFAST_ERR_ARGUMENT if path is NULL or not valid UTF-8.
#[no_mangle]
pub unsafe extern "C" fn mbfast_index(path: *const c_char, out_result: *mut *mut c_char) -> c_int {
    if !out_result.is_null() {
        *out_result = ptr::null_mut();
    }
    let path = match arg_str(path, "path") {
        Ok(s) => s,
        Err(e) => {
            set_last_error(&e);
            return MBFAST_ERR_ARGUMENT;
        }
    };
    // StubIndexer's output is uninhabited, so the Some arm cannot be reached.
    if let Some(never) = StubIndexer.index(Path::new(path)) {
        match never {}
    }
    clear_last_error();
    MBFAST_OK
}

/// Same as mbfast_index, under the name hosts re-export it as.
#[no_mangle]
pub unsafe extern "C" fn mbfast_mailbox_index(path: *const c_char, out_result: *mut *mut c_char) -> c_int {
    mbfast_index(path, out_result)
}

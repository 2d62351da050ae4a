/*
 * fastpath_integration.rs
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

//! End-to-end checks of the public core API as a host binding would use it.

use mbfast_core::{index, osx_info, PlatformInfo, BINDING_VERSION};

#[test]
fn diagnostic_then_index() {
    let info: Option<PlatformInfo> = osx_info();
    #[cfg(unix)]
    {
        let info = info.expect("uname available on unix hosts");
        let json: serde_json::Value = serde_json::from_str(&info.to_json().unwrap()).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["arch", "platform", "version"]);
        assert_eq!(json["version"], BINDING_VERSION);
    }
    #[cfg(not(unix))]
    let _ = info;

    assert!(index("/tmp").is_none());
}

#[test]
fn repeated_calls_are_stable() {
    let first = osx_info();
    for _ in 0..10 {
        assert_eq!(osx_info(), first);
        assert!(index("/tmp/test").is_none());
    }
}

#[test]
fn calls_from_many_threads() {
    let expected = osx_info();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let path = format!("/tmp/mailbox-{}", i);
                (osx_info(), index(&path).is_none())
            })
        })
        .collect();
    for h in handles {
        let (info, absent) = h.join().unwrap();
        assert_eq!(info, expected);
        assert!(absent);
    }
}

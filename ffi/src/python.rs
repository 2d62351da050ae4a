/*
 * python.rs
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

//! Python extension module `_mbfast`. Argument checking is pyo3's: a missing or
//! non-str path raises TypeError before any of our code runs.
//! Build with the `extension-module` feature for an importable library; `python`
//! alone links libpython, which the tests need.

use std::path::Path;

use mbfast_core::{PathIndexer, StubIndexer, BINDING_VERSION};
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Return basic platform info for sanity checks, or None if the OS query fails.
/// Keys are inserted as platform, arch, version.
#[pyfunction]
fn osx_info(py: Python<'_>) -> PyResult<Option<Bound<'_, PyDict>>> {
    let Some(info) = mbfast_core::osx_info() else {
        return Ok(None);
    };
    let dict = PyDict::new_bound(py);
    dict.set_item("platform", info.platform)?;
    dict.set_item("arch", info.arch)?;
    dict.set_item("version", info.version)?;
    Ok(Some(dict))
}

/// Mailbox index fast path (stub). Always returns None.
#[pyfunction]
fn index(path: &str) {
    if let Some(never) = StubIndexer.index(Path::new(path)) {
        match never {}
    }
}

/// Alias of index.
#[pyfunction]
fn mailbox_index(path: &str) {
    index(path)
}

#[pymodule]
#[pyo3(name = "_mbfast")]
fn mbfast_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(osx_info, m)?)?;
    m.add_function(wrap_pyfunction!(index, m)?)?;
    m.add_function(wrap_pyfunction!(mailbox_index, m)?)?;
    m.add("__version__", BINDING_VERSION)?;
    m.add("__all__", vec!["osx_info", "index", "mailbox_index"])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::exceptions::PyTypeError;
    use pyo3::types::PyBytes;

    fn with_module<F: FnOnce(Python<'_>, &Bound<'_, PyModule>)>(f: F) {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let m = PyModule::new_bound(py, "_mbfast").unwrap();
            mbfast_python(&m).unwrap();
            f(py, &m);
        });
    }

    #[test]
    fn test_osx_info_dict() {
        with_module(|_py, m| {
            let result = m.getattr("osx_info").unwrap().call0().unwrap();
            if result.is_none() {
                return;
            }
            let dict = result.downcast::<PyDict>().unwrap();
            let keys: Vec<String> = dict.keys().extract().unwrap();
            assert_eq!(keys, ["platform", "arch", "version"]);
            let version: String = dict.get_item("version").unwrap().unwrap().extract().unwrap();
            assert_eq!(version, "0.1.0");
            let platform: String = dict.get_item("platform").unwrap().unwrap().extract().unwrap();
            assert!(!platform.is_empty());
            #[cfg(target_os = "macos")]
            {
                assert_eq!(platform, "Darwin");
                let arch: String = dict.get_item("arch").unwrap().unwrap().extract().unwrap();
                assert!(["arm64", "x86_64"].contains(&arch.as_str()));
            }
        });
    }

    #[test]
    fn test_index_returns_none_for_any_string() {
        with_module(|_py, m| {
            for name in ["index", "mailbox_index"] {
                let f = m.getattr(name).unwrap();
                for p in ["/tmp", "/tmp/test", "", "/nonexistent/path"] {
                    assert!(f.call1((p,)).unwrap().is_none(), "{}({:?})", name, p);
                }
            }
        });
    }

    #[test]
    fn test_index_rejects_missing_or_non_str_path() {
        with_module(|py, m| {
            for name in ["index", "mailbox_index"] {
                let f = m.getattr(name).unwrap();
                let errs = [
                    f.call0().unwrap_err(),
                    f.call1((1,)).unwrap_err(),
                    f.call1((PyBytes::new_bound(py, b"/tmp"),)).unwrap_err(),
                    f.call1((py.None(),)).unwrap_err(),
                ];
                for err in errs {
                    assert!(err.is_instance_of::<PyTypeError>(py), "{}: {}", name, err);
                }
            }
        });
    }

    #[test]
    fn test_module_attributes() {
        with_module(|_py, m| {
            let all: Vec<String> = m.getattr("__all__").unwrap().extract().unwrap();
            assert_eq!(all, ["osx_info", "index", "mailbox_index"]);
            for name in &all {
                assert!(m.getattr(name.as_str()).unwrap().is_callable());
            }
            let version: String = m.getattr("__version__").unwrap().extract().unwrap();
            assert_eq!(version, "0.1.0");
        });
    }
}

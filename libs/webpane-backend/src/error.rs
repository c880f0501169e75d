// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Error types for backend selection.

use std::path::PathBuf;

use thiserror::Error;

use crate::backend::{feature_list, Backend};
use crate::target::TargetOs;

/// Errors raised while resolving the backend selection for a build.
///
/// Every variant is fatal: `webpane-sys/build.rs` reports it and the build
/// stops before any compiler or linker invocation. There is no default
/// backend and no fallback chain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// No `backend-*` feature was enabled for the build.
    #[error("no webview backend selected; enable exactly one of: {}", feature_list(&Backend::ALL))]
    NoBackendSelected,

    /// More than one `backend-*` feature was enabled for the same build.
    #[error("conflicting webview backends selected ({}); exactly one backend links into a binary", feature_list(.selected))]
    AmbiguousBackendSelection { selected: Vec<Backend> },

    /// The selected backend does not build for the target OS.
    #[error("`{backend}` does not build for target OS `{target_os}`")]
    BackendNotSupportedOnTarget {
        backend: Backend,
        target_os: TargetOs,
    },

    /// The target OS is outside the supported set.
    #[error("target OS `{target_os}` has no webview backend")]
    UnsupportedTarget { target_os: String },

    /// `CARGO_CFG_TARGET_OS` was absent from the environment.
    #[error("CARGO_CFG_TARGET_OS is not set; backend selection only runs under a Cargo build script")]
    TargetOsUnset,

    /// A vendored native source required by the selected backend is absent.
    #[error("missing native dependency: {what} not found at `{}`; run `cargo xtask vendor sync` or point WEBPANE_VENDOR_DIR at a populated tree", .path.display())]
    MissingNativeDependency { what: &'static str, path: PathBuf },
}

/// Result type alias for selection operations.
pub type Result<T> = std::result::Result<T, SelectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_backend_message_names_every_feature() {
        let message = SelectError::NoBackendSelected.to_string();
        for backend in Backend::ALL {
            assert!(message.contains(backend.feature()), "{message}");
        }
    }

    #[test]
    fn test_ambiguous_message_names_the_conflict() {
        let err = SelectError::AmbiguousBackendSelection {
            selected: vec![Backend::Gtk3WebKitGtk401, Backend::Gtk4WebKitGtk600],
        };
        let message = err.to_string();
        assert!(message.contains("backend-gtk3-webkitgtk401"));
        assert!(message.contains("backend-gtk4-webkitgtk600"));
    }

    #[test]
    fn test_missing_dependency_message_names_path_and_remedy() {
        let err = SelectError::MissingNativeDependency {
            what: "webview.h header",
            path: PathBuf::from("/tmp/vendor/webview/include/webview.h"),
        };
        let message = err.to_string();
        assert!(message.contains("webview.h header"));
        assert!(message.contains("/tmp/vendor/webview/include/webview.h"));
        assert!(message.contains("cargo xtask vendor sync"));
    }
}

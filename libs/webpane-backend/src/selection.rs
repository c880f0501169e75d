// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Resolution of (target OS, enabled backend features) into one backend.

use tracing::debug;

use crate::backend::Backend;
use crate::error::{Result, SelectError};
use crate::plan::LinkPlan;
use crate::target::TargetOs;
use crate::vendor::VendorTree;

/// A validated (target, backend) pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub target: TargetOs,
    pub backend: Backend,
}

impl Selection {
    /// Compiler and linker configuration for this backend against `vendor`.
    pub fn link_plan(&self, vendor: &VendorTree) -> LinkPlan {
        LinkPlan::for_selection(self, vendor)
    }
}

/// Resolve the backend for `target` from the set of enabled backend features.
///
/// Exactly one enabled backend is accepted. Conflicts are rejected before the
/// platform gate, so enabling two backends reports the conflict even when
/// only one of them would have passed the gate; the gate itself fires before
/// any toolchain invocation.
pub fn select(target: TargetOs, enabled: &[Backend]) -> Result<Selection> {
    let mut enabled = enabled.to_vec();
    enabled.sort_unstable();
    enabled.dedup();

    match enabled.as_slice() {
        [] => Err(SelectError::NoBackendSelected),
        [backend] => {
            let backend = *backend;
            if !backend.supported_on(target) {
                return Err(SelectError::BackendNotSupportedOnTarget {
                    backend,
                    target_os: target,
                });
            }
            debug!(backend = backend.feature(), target_os = target.as_str(), "webview backend selected");
            Ok(Selection { target, backend })
        }
        many => Err(SelectError::AmbiguousBackendSelection {
            selected: many.to_vec(),
        }),
    }
}

/// Resolve the selection from the environment Cargo hands a build script.
///
/// Reads `CARGO_CFG_TARGET_OS` and the `CARGO_FEATURE_BACKEND_*` flags out of
/// `vars`; build scripts pass `std::env::vars()`. Features other than the
/// backend flags are ignored.
pub fn select_from_cargo_env<I, K, V>(vars: I) -> Result<Selection>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut target_os = None;
    let mut enabled = Vec::new();

    for (key, value) in vars {
        let key = key.as_ref();
        if key == "CARGO_CFG_TARGET_OS" {
            target_os = Some(value.as_ref().to_owned());
        } else if let Some(suffix) = key.strip_prefix("CARGO_FEATURE_") {
            if let Some(backend) = Backend::from_cargo_env_suffix(suffix) {
                enabled.push(backend);
            }
        }
    }

    let target_os = target_os.ok_or(SelectError::TargetOsUnset)?;
    let target = TargetOs::from_cargo(&target_os)?;
    select(target, &enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported_pairs() -> Vec<(TargetOs, Backend)> {
        let mut pairs = vec![
            (TargetOs::MacOs, Backend::CocoaWebKit),
            (TargetOs::Windows, Backend::Win32Edge),
        ];
        for os in [
            TargetOs::Linux,
            TargetOs::OpenBsd,
            TargetOs::FreeBsd,
            TargetOs::NetBsd,
        ] {
            pairs.push((os, Backend::Gtk3WebKitGtk401));
            pairs.push((os, Backend::Gtk4WebKitGtk600));
        }
        pairs
    }

    #[test]
    fn test_select_accepts_every_supported_pair() {
        for (target, backend) in supported_pairs() {
            let selection = select(target, &[backend]).unwrap();
            assert_eq!(selection, Selection { target, backend });
        }
    }

    #[test]
    fn test_select_rejects_empty_selection() {
        for target in TargetOs::ALL {
            assert_eq!(select(target, &[]).unwrap_err(), SelectError::NoBackendSelected);
        }
    }

    #[test]
    fn test_select_rejects_conflicting_backends() {
        let err = select(
            TargetOs::Linux,
            &[Backend::Gtk4WebKitGtk600, Backend::Gtk3WebKitGtk401],
        )
        .unwrap_err();
        assert_eq!(
            err,
            SelectError::AmbiguousBackendSelection {
                selected: vec![Backend::Gtk3WebKitGtk401, Backend::Gtk4WebKitGtk600],
            }
        );
    }

    #[test]
    fn test_conflict_reported_before_platform_gate() {
        // Only one of the two would pass the linux gate; the conflict still
        // wins so the fix (drop a feature) is unambiguous.
        let err = select(
            TargetOs::Linux,
            &[Backend::Win32Edge, Backend::Gtk3WebKitGtk401],
        )
        .unwrap_err();
        assert!(matches!(err, SelectError::AmbiguousBackendSelection { .. }));
    }

    #[test]
    fn test_select_rejects_platform_mismatch() {
        let err = select(TargetOs::Linux, &[Backend::Win32Edge]).unwrap_err();
        assert_eq!(
            err,
            SelectError::BackendNotSupportedOnTarget {
                backend: Backend::Win32Edge,
                target_os: TargetOs::Linux,
            }
        );

        let err = select(TargetOs::Windows, &[Backend::CocoaWebKit]).unwrap_err();
        assert_eq!(
            err,
            SelectError::BackendNotSupportedOnTarget {
                backend: Backend::CocoaWebKit,
                target_os: TargetOs::Windows,
            }
        );
    }

    #[test]
    fn test_duplicate_flags_are_not_a_conflict() {
        let selection = select(
            TargetOs::MacOs,
            &[Backend::CocoaWebKit, Backend::CocoaWebKit],
        )
        .unwrap();
        assert_eq!(selection.backend, Backend::CocoaWebKit);
    }

    #[test]
    fn test_select_from_cargo_env() {
        let selection = select_from_cargo_env([
            ("CARGO_CFG_TARGET_OS", "linux"),
            ("CARGO_FEATURE_BACKEND_GTK3_WEBKITGTK401", "1"),
            // Unrelated features are ignored.
            ("CARGO_FEATURE_DEFAULT", "1"),
            ("CARGO_MANIFEST_DIR", "/work/webpane-sys"),
        ])
        .unwrap();
        assert_eq!(
            selection,
            Selection {
                target: TargetOs::Linux,
                backend: Backend::Gtk3WebKitGtk401,
            }
        );
    }

    #[test]
    fn test_select_from_cargo_env_requires_target_os() {
        let err = select_from_cargo_env([("CARGO_FEATURE_BACKEND_WIN32_EDGE", "1")]).unwrap_err();
        assert_eq!(err, SelectError::TargetOsUnset);
    }

    #[test]
    fn test_select_from_cargo_env_unsupported_target() {
        let err = select_from_cargo_env([
            ("CARGO_CFG_TARGET_OS", "android"),
            ("CARGO_FEATURE_BACKEND_GTK4_WEBKITGTK600", "1"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SelectError::UnsupportedTarget {
                target_os: "android".to_string()
            }
        );
    }

    #[test]
    fn test_select_from_cargo_env_conflict() {
        let err = select_from_cargo_env([
            ("CARGO_CFG_TARGET_OS", "macos"),
            ("CARGO_FEATURE_BACKEND_COCOA_WEBKIT", "1"),
            ("CARGO_FEATURE_BACKEND_WIN32_EDGE", "1"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SelectError::AmbiguousBackendSelection {
                selected: vec![Backend::CocoaWebKit, Backend::Win32Edge],
            }
        );
    }
}

// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! The native webview backend variants.

use std::fmt;

use crate::target::TargetOs;

/// One native webview backend variant.
///
/// Each variant maps 1:1 to a Cargo feature on `webpane-sys`. Exactly one
/// must be enabled per build; the variants are mutually exclusive at build
/// time, never a runtime choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Backend {
    /// Cocoa window hosting WebKit.framework (macOS).
    CocoaWebKit,
    /// GTK 3 window hosting WebKitGTK 4.1 (Linux and the BSDs).
    Gtk3WebKitGtk401,
    /// GTK 4 window hosting WebKitGTK 6.0 (Linux and the BSDs).
    Gtk4WebKitGtk600,
    /// Win32 window hosting Microsoft Edge WebView2 (Windows).
    Win32Edge,
}

impl Backend {
    pub const ALL: [Backend; 4] = [
        Backend::CocoaWebKit,
        Backend::Gtk3WebKitGtk401,
        Backend::Gtk4WebKitGtk600,
        Backend::Win32Edge,
    ];

    /// Cargo feature name that selects this backend.
    pub fn feature(self) -> &'static str {
        match self {
            Backend::CocoaWebKit => "backend-cocoa-webkit",
            Backend::Gtk3WebKitGtk401 => "backend-gtk3-webkitgtk401",
            Backend::Gtk4WebKitGtk600 => "backend-gtk4-webkitgtk600",
            Backend::Win32Edge => "backend-win32-edge",
        }
    }

    /// Inverse of [`Backend::feature`] for the suffix Cargo appends to
    /// `CARGO_FEATURE_` (upper-cased, dashes to underscores).
    pub fn from_cargo_env_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "BACKEND_COCOA_WEBKIT" => Some(Backend::CocoaWebKit),
            "BACKEND_GTK3_WEBKITGTK401" => Some(Backend::Gtk3WebKitGtk401),
            "BACKEND_GTK4_WEBKITGTK600" => Some(Backend::Gtk4WebKitGtk600),
            "BACKEND_WIN32_EDGE" => Some(Backend::Win32Edge),
            _ => None,
        }
    }

    /// Whether this backend builds for `target`.
    pub fn supported_on(self, target: TargetOs) -> bool {
        match self {
            Backend::CocoaWebKit => target == TargetOs::MacOs,
            Backend::Gtk3WebKitGtk401 | Backend::Gtk4WebKitGtk600 => target.is_gtk_family(),
            Backend::Win32Edge => target == TargetOs::Windows,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feature())
    }
}

/// Comma-joined feature names, for diagnostics.
pub(crate) fn feature_list(backends: &[Backend]) -> String {
    backends
        .iter()
        .map(|b| b.feature())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_env_suffix_roundtrip() {
        for backend in Backend::ALL {
            let suffix = backend.feature().to_uppercase().replace('-', "_");
            assert_eq!(Backend::from_cargo_env_suffix(&suffix), Some(backend));
        }
        assert_eq!(Backend::from_cargo_env_suffix("BACKEND_QT_BLINK"), None);
        assert_eq!(Backend::from_cargo_env_suffix("DEFAULT"), None);
    }

    #[test]
    fn test_platform_gates() {
        assert!(Backend::CocoaWebKit.supported_on(TargetOs::MacOs));
        assert!(!Backend::CocoaWebKit.supported_on(TargetOs::Linux));

        for os in [
            TargetOs::Linux,
            TargetOs::OpenBsd,
            TargetOs::FreeBsd,
            TargetOs::NetBsd,
        ] {
            assert!(Backend::Gtk3WebKitGtk401.supported_on(os));
            assert!(Backend::Gtk4WebKitGtk600.supported_on(os));
        }
        assert!(!Backend::Gtk3WebKitGtk401.supported_on(TargetOs::Windows));
        assert!(!Backend::Gtk4WebKitGtk600.supported_on(TargetOs::MacOs));

        assert!(Backend::Win32Edge.supported_on(TargetOs::Windows));
        assert!(!Backend::Win32Edge.supported_on(TargetOs::Linux));
    }

    #[test]
    fn test_feature_list_formatting() {
        assert_eq!(
            feature_list(&[Backend::CocoaWebKit, Backend::Win32Edge]),
            "backend-cocoa-webkit, backend-win32-edge"
        );
    }
}

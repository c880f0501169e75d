// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Per-backend compiler and linker configuration.

use std::path::PathBuf;

use crate::backend::Backend;
use crate::selection::Selection;
use crate::vendor::VendorTree;

/// System libraries the Edge backend links on Windows.
const WIN32_EDGE_LIBS: &[&str] = &[
    "advapi32", "ole32", "shell32", "shlwapi", "user32", "version",
];

/// Everything `webpane-sys/build.rs` feeds to cc, pkg-config, and the linker
/// for one backend.
///
/// Plain data, computed from (backend, vendor paths) alone: computing it
/// twice for the same selection yields identical plans, so two builds of the
/// same pair configure the toolchain identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPlan {
    pub backend: Backend,
    /// Directories on the C++ include path.
    pub include_dirs: Vec<PathBuf>,
    /// Preprocessor defines; value-less entries carry `None`.
    pub defines: Vec<(&'static str, Option<&'static str>)>,
    /// C++ language standard for the amalgamation unit.
    pub cxx_std: &'static str,
    /// Packages resolved through the host's pkg-config database. Probe
    /// failure is a fatal build error, not a fallback.
    pub pkg_config: &'static [&'static str],
    /// System libraries linked by name.
    pub link_libs: &'static [&'static str],
    /// Apple frameworks linked by name.
    pub frameworks: &'static [&'static str],
    /// Link the static C runtime (Windows only).
    pub static_crt: bool,
}

impl LinkPlan {
    pub(crate) fn for_selection(selection: &Selection, vendor: &VendorTree) -> LinkPlan {
        match selection.backend {
            Backend::CocoaWebKit => LinkPlan {
                backend: Backend::CocoaWebKit,
                include_dirs: vec![vendor.webview_include()],
                defines: vec![("WEBVIEW_STATIC", None), ("WEBVIEW_COCOA", None)],
                cxx_std: "c++11",
                pkg_config: &[],
                link_libs: &["dl"],
                frameworks: &["WebKit"],
                static_crt: false,
            },
            Backend::Gtk3WebKitGtk401 => LinkPlan {
                backend: Backend::Gtk3WebKitGtk401,
                include_dirs: vec![vendor.webview_include()],
                defines: vec![("WEBVIEW_STATIC", None), ("WEBVIEW_GTK", None)],
                cxx_std: "c++11",
                pkg_config: &["gtk+-3.0", "webkit2gtk-4.1"],
                link_libs: &["dl"],
                frameworks: &[],
                static_crt: false,
            },
            Backend::Gtk4WebKitGtk600 => LinkPlan {
                backend: Backend::Gtk4WebKitGtk600,
                include_dirs: vec![vendor.webview_include()],
                defines: vec![("WEBVIEW_STATIC", None), ("WEBVIEW_GTK", None)],
                cxx_std: "c++11",
                pkg_config: &["gtk4", "webkitgtk-6.0"],
                link_libs: &["dl"],
                frameworks: &[],
                static_crt: false,
            },
            Backend::Win32Edge => LinkPlan {
                backend: Backend::Win32Edge,
                include_dirs: vec![vendor.webview_include(), vendor.mswebview2_include()],
                defines: vec![("WEBVIEW_STATIC", None), ("WEBVIEW_EDGE", None)],
                cxx_std: "c++14",
                pkg_config: &[],
                link_libs: WIN32_EDGE_LIBS,
                frameworks: &[],
                static_crt: true,
            },
        }
    }
}

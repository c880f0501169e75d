// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Location and presence checks for the vendored native sources.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::backend::Backend;
use crate::error::{Result, SelectError};
use crate::selection::Selection;

/// Root of the vendored native library trees.
///
/// Defaults to `vendor/` at the workspace root (two levels above the crate
/// manifest under `libs/`); [`VendorTree::ENV_OVERRIDE`] points builds at an
/// external checkout instead. The manifests under `vendor/*/meta.toml` pin
/// what belongs here; `cargo xtask vendor sync` materializes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorTree {
    root: PathBuf,
}

impl VendorTree {
    /// Environment variable overriding the vendor root.
    pub const ENV_OVERRIDE: &'static str = "WEBPANE_VENDOR_DIR";

    /// Resolve the vendor root for a crate at `manifest_dir`.
    pub fn locate(manifest_dir: &Path, override_dir: Option<PathBuf>) -> VendorTree {
        let root = override_dir.unwrap_or_else(|| manifest_dir.join("../../vendor"));
        debug!(root = %root.display(), "vendor tree located");
        VendorTree { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Include directory of the vendored webview library.
    pub fn webview_include(&self) -> PathBuf {
        self.root.join("webview").join("include")
    }

    /// The single C++ translation unit every backend compiles.
    pub fn webview_amalgamation(&self) -> PathBuf {
        self.root.join("webview").join("src").join("webview.cc")
    }

    /// Include directory of the vendored Edge WebView2 headers.
    pub fn mswebview2_include(&self) -> PathBuf {
        self.root.join("mswebview2").join("include")
    }

    /// Check that every native source the selected backend compiles against
    /// is present. Absence is the fatal missing-dependency build failure; the
    /// error names the path so two builds against the same tree fail the same
    /// way.
    pub fn verify(&self, selection: &Selection) -> Result<()> {
        require("webview.h header", &self.webview_include().join("webview.h"))?;
        require("webview amalgamation", &self.webview_amalgamation())?;
        if selection.backend == Backend::Win32Edge {
            require("WebView2.h header", &self.mswebview2_include().join("WebView2.h"))?;
        }
        Ok(())
    }
}

fn require(what: &'static str, path: &Path) -> Result<()> {
    if path.is_file() {
        debug!(path = %path.display(), "native dependency present");
        Ok(())
    } else {
        Err(SelectError::MissingNativeDependency {
            what,
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::select;
    use crate::target::TargetOs;
    use std::fs;

    fn populate_webview(root: &Path) {
        fs::create_dir_all(root.join("webview/include")).unwrap();
        fs::create_dir_all(root.join("webview/src")).unwrap();
        fs::write(root.join("webview/include/webview.h"), "// header\n").unwrap();
        fs::write(root.join("webview/src/webview.cc"), "// impl\n").unwrap();
    }

    #[test]
    fn test_locate_default_is_workspace_vendor() {
        let tree = VendorTree::locate(Path::new("/work/webpane/libs/webpane-sys"), None);
        assert_eq!(
            tree.root(),
            Path::new("/work/webpane/libs/webpane-sys/../../vendor")
        );
    }

    #[test]
    fn test_locate_env_override_wins() {
        let tree = VendorTree::locate(
            Path::new("/work/webpane/libs/webpane-sys"),
            Some(PathBuf::from("/opt/webview-src")),
        );
        assert_eq!(tree.root(), Path::new("/opt/webview-src"));
    }

    #[test]
    fn test_verify_reports_missing_header() {
        let dir = tempfile::tempdir().unwrap();
        let tree = VendorTree::locate(dir.path(), Some(dir.path().to_path_buf()));
        let selection = select(TargetOs::Linux, &[Backend::Gtk3WebKitGtk401]).unwrap();

        let err = tree.verify(&selection).unwrap_err();
        assert_eq!(
            err,
            SelectError::MissingNativeDependency {
                what: "webview.h header",
                path: dir.path().join("webview/include/webview.h"),
            }
        );
    }

    #[test]
    fn test_verify_accepts_populated_tree() {
        let dir = tempfile::tempdir().unwrap();
        populate_webview(dir.path());
        let tree = VendorTree::locate(dir.path(), Some(dir.path().to_path_buf()));

        let selection = select(TargetOs::Linux, &[Backend::Gtk3WebKitGtk401]).unwrap();
        tree.verify(&selection).unwrap();
    }

    #[test]
    fn test_verify_edge_requires_webview2_headers() {
        let dir = tempfile::tempdir().unwrap();
        populate_webview(dir.path());
        let tree = VendorTree::locate(dir.path(), Some(dir.path().to_path_buf()));
        let selection = select(TargetOs::Windows, &[Backend::Win32Edge]).unwrap();

        // The shared webview tree alone is not enough for the Edge backend.
        let err = tree.verify(&selection).unwrap_err();
        assert!(matches!(
            err,
            SelectError::MissingNativeDependency {
                what: "WebView2.h header",
                ..
            }
        ));

        fs::create_dir_all(dir.path().join("mswebview2/include")).unwrap();
        fs::write(dir.path().join("mswebview2/include/WebView2.h"), "// sdk\n").unwrap();
        tree.verify(&selection).unwrap();
    }
}

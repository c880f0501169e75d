// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Raw FFI bindings to the webview C API.
//!
//! One native backend is compiled per build, selected by exactly one
//! `backend-*` Cargo feature. The symbol set declared here is identical on
//! every backend; no backend-specific symbol leaks through this crate.
//! Prefer the `webpane` crate unless raw bindings are required.

#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_int, c_uint, c_void};

// build.rs is the authoritative gate and reports selection errors before the
// toolchain runs. These guards restate the contract for any path that
// compiles the crate without going through its build script.
#[cfg(not(any(
    feature = "backend-cocoa-webkit",
    feature = "backend-gtk3-webkitgtk401",
    feature = "backend-gtk4-webkitgtk600",
    feature = "backend-win32-edge",
)))]
compile_error!(
    "no webview backend selected; enable exactly one of: backend-cocoa-webkit, backend-gtk3-webkitgtk401, backend-gtk4-webkitgtk600, backend-win32-edge"
);

#[cfg(any(
    all(feature = "backend-cocoa-webkit", feature = "backend-gtk3-webkitgtk401"),
    all(feature = "backend-cocoa-webkit", feature = "backend-gtk4-webkitgtk600"),
    all(feature = "backend-cocoa-webkit", feature = "backend-win32-edge"),
    all(
        feature = "backend-gtk3-webkitgtk401",
        feature = "backend-gtk4-webkitgtk600"
    ),
    all(feature = "backend-gtk3-webkitgtk401", feature = "backend-win32-edge"),
    all(feature = "backend-gtk4-webkitgtk600", feature = "backend-win32-edge"),
))]
compile_error!(
    "conflicting webview backends selected; exactly one backend-* feature links into a binary"
);

#[cfg(all(feature = "backend-cocoa-webkit", not(target_os = "macos")))]
compile_error!("backend-cocoa-webkit only builds for macOS targets");

#[cfg(all(
    any(
        feature = "backend-gtk3-webkitgtk401",
        feature = "backend-gtk4-webkitgtk600"
    ),
    not(any(
        target_os = "linux",
        target_os = "openbsd",
        target_os = "freebsd",
        target_os = "netbsd",
    ))
))]
compile_error!("the GTK backends only build for Linux and BSD targets");

#[cfg(all(feature = "backend-win32-edge", not(target_os = "windows")))]
compile_error!("backend-win32-edge only builds for Windows targets");

/// Opaque webview instance handle.
pub type webview_t = *mut c_void;

/// Width and height are default size hints.
pub const WEBVIEW_HINT_NONE: c_int = 0;
/// Width and height are minimum bounds.
pub const WEBVIEW_HINT_MIN: c_int = 1;
/// Width and height are maximum bounds.
pub const WEBVIEW_HINT_MAX: c_int = 2;
/// Window size cannot be changed by the user.
pub const WEBVIEW_HINT_FIXED: c_int = 3;

/// Callback invoked on the UI thread by [`webview_dispatch`].
pub type webview_dispatch_fn_t = unsafe extern "C" fn(w: webview_t, arg: *mut c_void);

/// Callback invoked when bound JavaScript calls into native code.
///
/// `seq` identifies the request for [`webview_return`]; `req` is a JSON
/// array of the call's arguments.
pub type webview_bind_fn_t =
    unsafe extern "C" fn(seq: *const c_char, req: *const c_char, arg: *mut c_void);

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct webview_version_t {
    pub major: c_uint,
    pub minor: c_uint,
    pub patch: c_uint,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct webview_version_info_t {
    pub version: webview_version_t,
    /// SemVer version string in `X.Y.Z` form.
    pub version_number: [c_char; 32],
    /// SemVer pre-release label, empty when none.
    pub pre_release: [c_char; 48],
    /// SemVer build metadata, empty when none.
    pub build_metadata: [c_char; 48],
}

unsafe extern "C" {
    /// Create a new webview instance. `debug` enables developer tools where
    /// the backend supports them; `window` optionally embeds into an existing
    /// native window handle instead of creating one.
    ///
    /// Returns null on failure.
    pub fn webview_create(debug: c_int, window: *mut c_void) -> webview_t;

    /// Destroy the instance and close the window it created.
    pub fn webview_destroy(w: webview_t);

    /// Run the UI loop until the window closes or [`webview_terminate`].
    pub fn webview_run(w: webview_t);

    /// Stop the UI loop. Safe to call from a dispatched callback.
    pub fn webview_terminate(w: webview_t);

    /// Schedule `f(w, arg)` on the UI thread. The only entry point that may
    /// be called from other threads.
    pub fn webview_dispatch(w: webview_t, f: webview_dispatch_fn_t, arg: *mut c_void);

    /// The native window handle (NSWindow, GtkWindow, or HWND).
    pub fn webview_get_window(w: webview_t) -> *mut c_void;

    pub fn webview_set_title(w: webview_t, title: *const c_char);

    pub fn webview_set_size(w: webview_t, width: c_int, height: c_int, hints: c_int);

    pub fn webview_navigate(w: webview_t, url: *const c_char);

    pub fn webview_set_html(w: webview_t, html: *const c_char);

    /// Inject JavaScript evaluated before every page load.
    pub fn webview_init(w: webview_t, js: *const c_char);

    /// Evaluate JavaScript in the current page.
    pub fn webview_eval(w: webview_t, js: *const c_char);

    /// Register a native callback reachable from JavaScript as a global
    /// function `name`.
    pub fn webview_bind(w: webview_t, name: *const c_char, f: webview_bind_fn_t, arg: *mut c_void);

    /// Remove a callback registered with [`webview_bind`].
    pub fn webview_unbind(w: webview_t, name: *const c_char);

    /// Complete a bound call: `status` 0 resolves the JavaScript promise with
    /// `result` (JSON), non-zero rejects it.
    pub fn webview_return(
        w: webview_t,
        seq: *const c_char,
        status: c_int,
        result: *const c_char,
    );

    /// Version of the underlying webview library.
    pub fn webview_version() -> *const webview_version_info_t;
}

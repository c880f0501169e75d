// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Thin safe wrapper over the webview C API.
//!
//! The native backend is chosen at build time by exactly one `backend-*`
//! Cargo feature (see `webpane-sys`); the surface here is identical on every
//! backend. This crate only adds ownership, string conversion, and closure
//! trampolines on top of the C entry points. Windowing, rendering, and the
//! JavaScript bridge protocol all live in the native library.
//!
//! A [`WebView`] must stay on the thread that created it (the handle is
//! neither `Send` nor `Sync`); [`WebView::dispatch`] schedules work onto the
//! UI thread.
//!
//! # Example
//!
//! ```ignore
//! use webpane::{SizeHint, WebView};
//!
//! let mut view = WebView::builder().debug(true).build()?;
//! view.set_title("webpane")?;
//! view.set_size(800, 600, SizeHint::None);
//! view.navigate("https://example.com")?;
//! view.run();
//! ```

use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_void};

use tracing::debug;

use webpane_sys as sys;

pub mod error;

pub use error::{Result, WebpaneError};

/// Window size hint passed to [`WebView::set_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeHint {
    /// Width and height are the default size.
    #[default]
    None,
    /// Width and height are minimum bounds.
    Min,
    /// Width and height are maximum bounds.
    Max,
    /// Window size cannot be changed by the user.
    Fixed,
}

impl SizeHint {
    fn as_raw(self) -> c_int {
        match self {
            SizeHint::None => sys::WEBVIEW_HINT_NONE,
            SizeHint::Min => sys::WEBVIEW_HINT_MIN,
            SizeHint::Max => sys::WEBVIEW_HINT_MAX,
            SizeHint::Fixed => sys::WEBVIEW_HINT_FIXED,
        }
    }
}

type BindHandler = Box<dyn FnMut(&str, &str)>;

/// Builder for [`WebView`].
#[derive(Debug, Default)]
pub struct WebViewBuilder {
    debug: bool,
    window: Option<*mut c_void>,
}

impl WebViewBuilder {
    /// Enable developer tools where the backend supports them.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Embed into an existing native window (NSWindow, GtkWindow, or HWND)
    /// instead of creating one. The pointer must be a valid window handle of
    /// the selected backend's toolkit and must outlive the webview.
    pub fn parent_window(mut self, window: *mut c_void) -> Self {
        self.window = Some(window);
        self
    }

    pub fn build(self) -> Result<WebView> {
        let window = self.window.unwrap_or(std::ptr::null_mut());
        let raw = unsafe { sys::webview_create(self.debug as c_int, window) };
        if raw.is_null() {
            return Err(WebpaneError::CreateFailed);
        }
        debug!(debug = self.debug, embedded = !window.is_null(), "webview created");
        Ok(WebView {
            raw,
            bindings: HashMap::new(),
        })
    }
}

/// An owned webview instance.
///
/// Dropping it unbinds every callback and destroys the native instance.
pub struct WebView {
    raw: sys::webview_t,
    bindings: HashMap<String, *mut BindHandler>,
}

impl WebView {
    pub fn builder() -> WebViewBuilder {
        WebViewBuilder::default()
    }

    /// Shorthand for `builder().debug(debug).build()`.
    pub fn new(debug: bool) -> Result<Self> {
        WebView::builder().debug(debug).build()
    }

    /// The raw instance handle, for mixing with `webpane-sys` calls.
    pub fn as_raw(&self) -> sys::webview_t {
        self.raw
    }

    /// The native window handle (NSWindow, GtkWindow, or HWND).
    pub fn window(&self) -> *mut c_void {
        unsafe { sys::webview_get_window(self.raw) }
    }

    pub fn set_title(&self, title: &str) -> Result<()> {
        let title = CString::new(title)?;
        unsafe { sys::webview_set_title(self.raw, title.as_ptr()) };
        Ok(())
    }

    pub fn set_size(&self, width: i32, height: i32, hint: SizeHint) {
        unsafe { sys::webview_set_size(self.raw, width, height, hint.as_raw()) };
    }

    pub fn navigate(&self, url: &str) -> Result<()> {
        debug!(url, "navigate");
        let url = CString::new(url)?;
        unsafe { sys::webview_navigate(self.raw, url.as_ptr()) };
        Ok(())
    }

    pub fn set_html(&self, html: &str) -> Result<()> {
        let html = CString::new(html)?;
        unsafe { sys::webview_set_html(self.raw, html.as_ptr()) };
        Ok(())
    }

    /// Inject JavaScript evaluated before every page load.
    pub fn init(&self, js: &str) -> Result<()> {
        let js = CString::new(js)?;
        unsafe { sys::webview_init(self.raw, js.as_ptr()) };
        Ok(())
    }

    /// Evaluate JavaScript in the current page.
    pub fn eval(&self, js: &str) -> Result<()> {
        let js = CString::new(js)?;
        unsafe { sys::webview_eval(self.raw, js.as_ptr()) };
        Ok(())
    }

    /// Schedule `f` on the UI thread.
    pub fn dispatch<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let boxed: Box<Box<dyn FnOnce()>> = Box::new(Box::new(f));
        unsafe {
            sys::webview_dispatch(self.raw, dispatch_trampoline, Box::into_raw(boxed).cast());
        }
    }

    /// Expose `handler` to JavaScript as a global function `name`.
    ///
    /// The handler receives the request sequence id and a JSON array of call
    /// arguments; completing the call is a separate [`WebView::resolve`],
    /// typically issued from a [`WebView::dispatch`] callback.
    pub fn bind<F>(&mut self, name: &str, handler: F) -> Result<()>
    where
        F: FnMut(&str, &str) + 'static,
    {
        if self.bindings.contains_key(name) {
            return Err(WebpaneError::AlreadyBound {
                name: name.to_string(),
            });
        }
        let c_name = CString::new(name)?;
        let handler: *mut BindHandler = Box::into_raw(Box::new(Box::new(handler)));
        unsafe {
            sys::webview_bind(self.raw, c_name.as_ptr(), bind_trampoline, handler.cast());
        }
        self.bindings.insert(name.to_string(), handler);
        debug!(name, "callback bound");
        Ok(())
    }

    /// Remove a callback registered with [`WebView::bind`].
    pub fn unbind(&mut self, name: &str) -> Result<()> {
        if let Some(handler) = self.bindings.remove(name) {
            let c_name = CString::new(name)?;
            unsafe {
                sys::webview_unbind(self.raw, c_name.as_ptr());
                drop(Box::from_raw(handler));
            }
        }
        Ok(())
    }

    /// Complete a bound call: status 0 resolves the JavaScript promise with
    /// `result` (JSON), non-zero rejects it.
    pub fn resolve(&self, seq: &str, status: i32, result: &str) -> Result<()> {
        let seq = CString::new(seq)?;
        let result = CString::new(result)?;
        unsafe { sys::webview_return(self.raw, seq.as_ptr(), status, result.as_ptr()) };
        Ok(())
    }

    /// Run the UI loop until the window closes or [`WebView::terminate`].
    pub fn run(&mut self) {
        unsafe { sys::webview_run(self.raw) };
    }

    /// Stop the UI loop. Safe to call from a dispatched callback.
    pub fn terminate(&self) {
        unsafe { sys::webview_terminate(self.raw) };
    }
}

impl Drop for WebView {
    fn drop(&mut self) {
        for (name, handler) in self.bindings.drain() {
            if let Ok(c_name) = CString::new(name) {
                unsafe { sys::webview_unbind(self.raw, c_name.as_ptr()) };
            }
            unsafe { drop(Box::from_raw(handler)) };
        }
        unsafe { sys::webview_destroy(self.raw) };
        debug!("webview destroyed");
    }
}

/// Version of the underlying webview library as (major, minor, patch).
pub fn native_version() -> (u32, u32, u32) {
    let info = unsafe { &*sys::webview_version() };
    (info.version.major, info.version.minor, info.version.patch)
}

unsafe extern "C" fn dispatch_trampoline(_w: sys::webview_t, arg: *mut c_void) {
    let f = unsafe { Box::from_raw(arg as *mut Box<dyn FnOnce()>) };
    f();
}

unsafe extern "C" fn bind_trampoline(seq: *const c_char, req: *const c_char, arg: *mut c_void) {
    // The handler box stays owned by the WebView; only borrow it here.
    let handler = unsafe { &mut *(arg as *mut BindHandler) };
    let seq = unsafe { CStr::from_ptr(seq) }.to_string_lossy();
    let req = unsafe { CStr::from_ptr(req) }.to_string_lossy();
    handler(&seq, &req);
}

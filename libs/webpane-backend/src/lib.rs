// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Backend selection and link-plan computation for the webpane native build.
//!
//! This crate is the build-support half of `webpane-sys`. It decides which
//! native webview backend a build compiles (exactly one per binary) and what
//! compiler and linker configuration that backend needs:
//!
//! - [`select`] / [`select_from_cargo_env`]: validate the (target OS,
//!   enabled backend features) pairing
//! - [`LinkPlan`]: includes, defines, C++ standard, pkg-config queries, and
//!   link libraries for the selected backend
//! - [`VendorTree`]: location and presence checks for the vendored native
//!   sources
//!
//! Nothing here runs at application runtime. `webpane-sys/build.rs` is the
//! only production caller; every failure is a fatal build error with no
//! fallback between backends.
//!
//! # Example
//!
//! ```
//! use webpane_backend::{select, Backend, TargetOs};
//!
//! let selection = select(TargetOs::Linux, &[Backend::Gtk3WebKitGtk401]).unwrap();
//! assert_eq!(selection.backend, Backend::Gtk3WebKitGtk401);
//! ```

pub mod backend;
pub mod error;
pub mod plan;
pub mod selection;
pub mod target;
pub mod vendor;

pub use backend::Backend;
pub use error::{Result, SelectError};
pub use plan::LinkPlan;
pub use selection::{select, select_from_cargo_env, Selection};
pub use target::TargetOs;
pub use vendor::VendorTree;

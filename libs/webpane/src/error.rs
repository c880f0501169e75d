// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Error types for the safe wrapper.

use thiserror::Error;

/// Errors from the safe wrapper.
///
/// The C API reports nothing richer than a null instance handle; string
/// conversion and binding bookkeeping are the only other failure points.
#[derive(Debug, Error)]
pub enum WebpaneError {
    /// The native library returned a null instance handle.
    #[error("failed to create webview instance (backend returned null)")]
    CreateFailed,

    /// A string crossing the FFI boundary contained an interior NUL byte.
    #[error("string contains an interior NUL byte: {0}")]
    Nul(#[from] std::ffi::NulError),

    /// A callback name is already bound on this instance.
    #[error("callback `{name}` is already bound")]
    AlreadyBound { name: String },
}

/// Result type alias for wrapper operations.
pub type Result<T> = std::result::Result<T, WebpaneError>;

// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Vendored native library management.
//!
//! Each directory under `vendor/` carries a `meta.toml` pinning where its
//! files come from:
//!
//! ```toml
//! [meta]
//! name = "webview"
//! version = "0.12.0"
//!
//! [github]
//! repository = "webview/webview"
//!
//! [check]
//! "include/webview.h" = "core/include/webview.h"
//! ```
//!
//! `check` compares every local file byte-for-byte against the pinned
//! upstream; `sync` materializes the files. GitHub libraries resolve each
//! remote path against raw.githubusercontent.com at the pinned version;
//! NuGet libraries download the versioned package once and read the entries
//! out of the zip.

use std::collections::BTreeMap;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

// ============================================================================
// Manifest
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LibMeta {
    pub meta: MetaSection,
    pub github: Option<GithubSource>,
    pub nuget: Option<NugetSource>,
    /// Local path (relative to the library directory) to remote path.
    #[serde(default)]
    pub check: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct MetaSection {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubSource {
    /// `owner/repo` on github.com.
    pub repository: String,
}

#[derive(Debug, Deserialize)]
pub struct NugetSource {
    /// Package id on nuget.org.
    pub package: String,
}

impl LibMeta {
    pub fn parse(text: &str) -> Result<Self> {
        let meta: LibMeta = toml::from_str(text).context("invalid meta.toml")?;
        match (&meta.github, &meta.nuget) {
            (None, None) => bail!(
                "meta.toml for '{}' names no remote source ([github] or [nuget])",
                meta.meta.name
            ),
            (Some(_), Some(_)) => bail!(
                "meta.toml for '{}' names two remote sources; pick [github] or [nuget]",
                meta.meta.name
            ),
            _ => Ok(meta),
        }
    }

    fn load(dir: &Path) -> Result<Self> {
        let path = dir.join("meta.toml");
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Verify every vendored file against its pinned upstream.
pub fn check(root: &Path, only: Option<&str>) -> Result<()> {
    for dir in vendor_dirs(root, only)? {
        let meta = LibMeta::load(&dir)?;
        info!(name = %meta.meta.name, version = %meta.meta.version, "checking vendored library");

        let remote = remote_files(&meta)?;
        for (local_rel, remote_bytes) in &remote {
            let local_path = dir.join(local_rel);
            let local_bytes = fs::read(&local_path).with_context(|| {
                format!(
                    "missing vendored file '{}'; run `cargo xtask vendor sync`",
                    local_path.display()
                )
            })?;
            if &local_bytes != remote_bytes {
                bail!(
                    "vendored file '{}' does not match {} {} upstream",
                    local_path.display(),
                    meta.meta.name,
                    meta.meta.version
                );
            }
            debug!(file = %local_rel, "matches upstream");
        }
        println!(
            "{} {}: {} file(s) match upstream",
            meta.meta.name,
            meta.meta.version,
            remote.len()
        );
    }
    Ok(())
}

/// Materialize every vendored file from its pinned upstream.
pub fn sync(root: &Path, only: Option<&str>) -> Result<()> {
    for dir in vendor_dirs(root, only)? {
        let meta = LibMeta::load(&dir)?;
        info!(name = %meta.meta.name, version = %meta.meta.version, "syncing vendored library");

        let remote = remote_files(&meta)?;
        for (local_rel, remote_bytes) in &remote {
            let local_path = dir.join(local_rel);
            if let Some(parent) = local_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&local_path, remote_bytes)
                .with_context(|| format!("Failed to write {}", local_path.display()))?;
            debug!(file = %local_rel, bytes = remote_bytes.len(), "written");
        }
        println!(
            "{} {}: {} file(s) synced",
            meta.meta.name,
            meta.meta.version,
            remote.len()
        );
    }
    Ok(())
}

/// Library directories under `vendor/` that carry a manifest.
fn vendor_dirs(root: &Path, only: Option<&str>) -> Result<Vec<PathBuf>> {
    let vendor = root.join("vendor");
    let mut dirs = Vec::new();
    for entry in fs::read_dir(&vendor)
        .with_context(|| format!("Failed to read {}", vendor.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(only) = only {
            if entry.file_name().to_string_lossy() != only {
                continue;
            }
        }
        if entry.path().join("meta.toml").is_file() {
            dirs.push(entry.path());
        }
    }
    if dirs.is_empty() {
        match only {
            Some(only) => bail!("no vendored library named '{only}' under {}", vendor.display()),
            None => bail!("no vendored libraries under {}", vendor.display()),
        }
    }
    dirs.sort();
    Ok(dirs)
}

// ============================================================================
// Remote fetch
// ============================================================================

/// Fetch the upstream content for every `[check]` entry, keyed by local path.
fn remote_files(meta: &LibMeta) -> Result<BTreeMap<String, Vec<u8>>> {
    let mut files = BTreeMap::new();
    if let Some(github) = &meta.github {
        for (local, remote) in &meta.check {
            let url = format!(
                "https://raw.githubusercontent.com/{}/{}/{}",
                github.repository, meta.meta.version, remote
            );
            files.insert(local.clone(), http_get(&url)?);
        }
    } else if let Some(nuget) = &meta.nuget {
        let url = format!(
            "https://www.nuget.org/api/v2/package/{}/{}",
            nuget.package, meta.meta.version
        );
        let package = http_get(&url)?;
        let mut archive = zip::ZipArchive::new(Cursor::new(package))
            .with_context(|| format!("invalid NuGet package for '{}'", meta.meta.name))?;
        for (local, remote) in &meta.check {
            let mut entry = archive
                .by_name(remote)
                .with_context(|| format!("'{remote}' not present in NuGet package"))?;
            let mut bytes = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut bytes)?;
            files.insert(local.clone(), bytes);
        }
    }
    Ok(files)
}

fn http_get(url: &str) -> Result<Vec<u8>> {
    debug!(%url, "fetching");
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("Failed to fetch {url}"))?;
    let bytes = response
        .bytes()
        .with_context(|| format!("Failed to read body of {url}"))?;
    Ok(bytes.to_vec())
}

// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

// Build scripts speak to Cargo over stdout.
#![allow(clippy::disallowed_macros)]

use std::env;
use std::error::Error;
use std::path::PathBuf;

use webpane_backend::{select_from_cargo_env, VendorTree};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-env-changed={}", VendorTree::ENV_OVERRIDE);

    // Selection errors (no backend, conflicting backends, platform mismatch)
    // abort here, before cc or pkg-config ever run.
    let selection = select_from_cargo_env(env::vars())?;

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let vendor = VendorTree::locate(
        &manifest_dir,
        env::var_os(VendorTree::ENV_OVERRIDE).map(PathBuf::from),
    );
    vendor.verify(&selection)?;

    let plan = selection.link_plan(&vendor);

    println!(
        "cargo:rerun-if-changed={}",
        vendor.webview_amalgamation().display()
    );
    println!(
        "cargo:rerun-if-changed={}",
        vendor.webview_include().join("webview.h").display()
    );

    let mut build = cc::Build::new();
    build
        .cpp(true)
        .std(plan.cxx_std)
        .file(vendor.webview_amalgamation());
    for dir in &plan.include_dirs {
        build.include(dir);
    }
    for (name, value) in &plan.defines {
        build.define(name, *value);
    }
    if plan.static_crt {
        build.static_crt(true);
    }

    // pkg-config emits its own cargo:rustc-link-* directives. A missing
    // package surfaces as the probe's diagnostic and stops the build; there
    // is no fallback to another backend.
    for package in plan.pkg_config {
        let found = pkg_config::Config::new().probe(package)?;
        for dir in &found.include_paths {
            build.include(dir);
        }
    }

    build.compile("webview");

    for lib in plan.link_libs {
        println!("cargo:rustc-link-lib={lib}");
    }
    for framework in plan.frameworks {
        println!("cargo:rustc-link-lib=framework={framework}");
    }

    Ok(())
}

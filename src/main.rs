//! Zellij plugin entry point.
//!
//! The plugin only exists on the wasm target; the Zellij integration lives in
//! `shim.rs`. A native build produces a binary that explains how to load the
//! plugin instead.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`, subscribe to `Key`, `WebRequestResult`
//!    and `PermissionRequestResult`
//! 3. **Mount**: Once access is granted, fetch the employee collection
//! 4. **Update**: Map Zellij events to library events, execute resulting actions
//! 5. **Render**: Call the library render function

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
mod shim;

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(shim::State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!(
        "staffboard {} is a Zellij plugin: build it with `cargo build --target wasm32-wasip1` \
         and load the resulting staffboard.wasm from a layout",
        env!("CARGO_PKG_VERSION")
    );
}

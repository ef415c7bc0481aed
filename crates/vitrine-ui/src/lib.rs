#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::redundant_pub_crate)]
//! Vitrine web view layer.
//! Turns carousel render descriptions into DOM and feeds pointer input back to the controller.

pub mod classes;
pub mod styles;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
mod prefetch;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

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
#![allow(clippy::redundant_pub_crate)]

//! Native host that replays scripted carousel interactions.
//!
//! Layout:
//! - `cli.rs`: argument parsing, error mapping and command dispatch
//! - `script.rs`: script format and replay through the controller
//! - `output.rs`: frame and geometry renderers
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod cli;
pub(crate) mod output;
pub mod script;

pub use cli::{run, run_with_writer};

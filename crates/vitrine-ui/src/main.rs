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
//! Vitrine demo page entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    vitrine_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    stderr.write_all(
        b"The vitrine-ui binary targets wasm32; build with `trunk build` or `cargo build --target wasm32-unknown-unknown`. Use the `vitrine` CLI to replay carousel sessions natively.\n",
    )?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_main_writes_notice() -> std::io::Result<()> {
        main()
    }
}

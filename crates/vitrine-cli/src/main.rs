//! `vitrine` binary entry point.

use std::process;

fn main() {
    let code = vitrine_cli::run(std::env::args_os());
    if code != 0 {
        process::exit(code);
    }
}

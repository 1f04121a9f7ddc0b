//! `avl-menu`: interactive AVL tree console.
//!
//! Usage:
//!   avl-menu [--quiet]
//!
//! Commands are read from stdin, one per line. `--quiet` hides the menu so
//! the tool can be driven by a script.

use avl_index_cli::Session;
use std::io;

fn main() {
    let quiet = std::env::args().skip(1).any(|arg| arg == "--quiet");

    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock());
    if quiet {
        session = session.quiet();
    }

    if let Err(e) = session.run(io::stdin().lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

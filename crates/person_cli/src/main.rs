/* 📖 # Why does the CLI take no arguments?

The binary always runs the same walkthrough: print John, rename him to Jane aged 43,
print again, then greet. There is nothing to configure apart from `RUST_LOG`,
which only affects diagnostics on stderr.

Exit codes:
- 0: Success (all three lines written)
- 1: Error (tracing setup failed or stdout could not be written)
*/

use std::io;
use std::process;

use person_base::tracing::init_tracing;
use person_model::run_demo;

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = run_demo(&mut stdout) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

use pmdash::cli::{exit_with_error, run};

fn main() {
    if let Err(e) = run() {
        exit_with_error(&e);
    }
}

// Error handling utilities for consistent error messages and exit codes

use crate::data::{ConfigError, DataError};
use std::process;

/// Exit code for bad input: missing or malformed data file, bad rc file
pub const EXIT_USER_ERROR: i32 = 1;
/// Exit code for unexpected failures
pub const EXIT_INTERNAL_ERROR: i32 = 2;

/// Whether an error was caused by the user's data or configuration
pub fn is_user_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<DataError>().is_some() || err.downcast_ref::<ConfigError>().is_some()
}

/// Print an error and exit with the code matching its kind
pub fn exit_with_error(err: &anyhow::Error) -> ! {
    if is_user_error(err) {
        eprintln!("Error: {:#}", err);
        process::exit(EXIT_USER_ERROR);
    }

    eprintln!("Internal error: {}", err);
    let mut source = err.source();
    if source.is_some() {
        eprintln!("\nCaused by:");
        let mut indent = 1;
        while let Some(cause) = source {
            eprintln!("{:indent$}  {}", "", cause);
            source = cause.source();
            indent += 1;
        }
    }
    process::exit(EXIT_INTERNAL_ERROR);
}

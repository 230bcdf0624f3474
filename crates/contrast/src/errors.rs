//! Error handling and exit codes.

use contrast_core::constants::exit_codes;
use contrast_core::records::RosterError;
use contrast_core::strategy::FibError;

/// Map a demo error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::TooDeep { .. } | FibError::Overflow { .. } => exit_codes::ERROR_GENERIC,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any error surfaced by `app::run`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(fib) = err.downcast_ref::<FibError>() {
        return handle_error(fib);
    }
    if err.downcast_ref::<RosterError>().is_some() {
        return exit_codes::ERROR_CONFIG;
    }
    exit_codes::ERROR_GENERIC
}

//! Error handling and exit codes.

use fibtext_core::FibError;
use fibtext_text::TextError;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, unreadable input).
    pub const ERROR_GENERIC: i32 = 1;
    /// A checked calculation overflowed.
    pub const ERROR_OVERFLOW: i32 = 2;
    /// Unknown transliterator or charset, or data the charset cannot carry.
    pub const ERROR_INVALID_REQUEST: i32 = 3;
    /// Invalid configuration (backend, policy, range).
    pub const ERROR_CONFIG: i32 = 4;
    /// The selected backend lacks the capability.
    pub const ERROR_UNAVAILABLE: i32 = 5;
}

/// Exit code for a calculation error.
pub fn handle_fib_error(err: &FibError) -> i32 {
    match err {
        FibError::Overflow { .. } => exit_codes::ERROR_OVERFLOW,
        FibError::IndexOutOfRange { .. }
        | FibError::InvalidRange { .. }
        | FibError::UnknownPolicy(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for a text error.
pub fn handle_text_error(err: &TextError) -> i32 {
    match err {
        TextError::Unavailable(_) => exit_codes::ERROR_UNAVAILABLE,
        TextError::UnknownBackend(_) => exit_codes::ERROR_CONFIG,
        e if e.is_invalid_request() => exit_codes::ERROR_INVALID_REQUEST,
        _ => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<FibError>() {
        handle_fib_error(e)
    } else if let Some(e) = err.downcast_ref::<TextError>() {
        handle_text_error(e)
    } else {
        exit_codes::ERROR_GENERIC
    }
}

//! Varg Runtime - Checked variadic argument cursors
//!
//! This module provides:
//! - Tagged argument values (int, double, text) for open-ended argument lists
//! - Call activations that own one argument sequence for the duration of a call
//! - Cursors with typed extraction, duplication and restart
//! - A two-pass statistics consumer built on cursor duplication

use thiserror::Error;

pub mod activation;
pub mod cursor;
pub mod stats;
pub mod value;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VarargError {
    #[error("out of arguments: slot {index} requested but only {supplied} supplied")]
    OutOfArguments { index: usize, supplied: usize },

    #[error("type mismatch at slot {index}: expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        expected: ArgKind,
        found: ArgKind,
    },

    #[error("{kind} {value} at slot {index} does not fit {target}")]
    OutOfRange {
        index: usize,
        kind: ArgKind,
        value: String,
        target: &'static str,
    },

    #[error("cursor cannot be restarted on a different activation")]
    ForeignActivation,

    #[error("invalid argument count {count}: must be positive")]
    InvalidArgumentCount { count: i64 },

    #[error("{}", malformed_message(.position, .directive))]
    MalformedDirective {
        position: usize,
        directive: Option<char>,
    },
}

fn malformed_message(position: &usize, directive: &Option<char>) -> String {
    match directive {
        Some(ch) => format!("unknown directive `%{}` at byte {}", ch, position),
        None => format!("dangling `%` at byte {}", position),
    }
}

/// Result type for cursor and consumer operations
pub type VarargResult<T> = Result<T, VarargError>;

pub use activation::Activation;
pub use cursor::Cursor;
pub use stats::{sample_mean, sample_stddev};
pub use value::{ArgKind, ArgValue, FromArg};

/// Package trailing arguments into an [`Activation`] at a call site.
///
/// ```
/// use varg_runtime::varargs;
///
/// let va = varargs!["box", 3, 2.5];
/// assert_eq!(va.len(), 3);
/// ```
#[macro_export]
macro_rules! varargs {
    () => {
        $crate::Activation::new(::std::vec::Vec::new())
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Activation::new(::std::vec![$($crate::ArgValue::from($arg)),+])
    };
}

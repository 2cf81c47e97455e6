use std::io;
use thiserror::Error;

use crate::compression::CodecError;

/// Top-level harness error covering codec failures, failed checks,
/// configuration, and report output.
/// - `From<T>` impls enable `?` from codec calls and I/O.
/// - Every variant renders to the single line printed for a failed codec.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("{0}")]
    Codec(#[from] CodecError),

    /// A verification check did not hold.
    #[error("{file}: {line}: assertion `{expr}` failed: {detail}")]
    Assertion {
        expr: &'static str,
        file: &'static str,
        line: u32,
        detail: String,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("report error: {0}")]
    Report(#[from] serde_json::Error),
}

impl HarnessError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, HarnessError::Codec(e) if e.is_unsupported())
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, HarnessError::Assertion { .. })
    }
}

/// Return `HarnessError::Assertion` from the enclosing function unless `cond` holds.
#[macro_export]
macro_rules! verify {
    ($cond:expr) => {
        $crate::verify!($cond, "")
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::types::HarnessError::Assertion {
                expr: stringify!($cond),
                file: file!(),
                line: line!(),
                detail: format!($($arg)+),
            });
        }
    };
}

//! Crate error type.
//!
//! The core interpreter itself never fails: undocumented opcodes execute as
//! NOP, and all arithmetic wraps silently. The only fallible boundaries are
//! the by-name register/memory introspection edge (used by debugging
//! harnesses) and the disassembler's file I/O.

use std::fmt;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A caller passed an unknown register name, or a value out of range
    /// for the register/memory cell being written.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// Disassembler (or any other) file I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Public so binaries (the disassembler CLI, debugging harnesses) can
    /// construct the same variant the by-name introspection edge returns.
    pub fn invalid_argument(argument: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Error::InvalidArgument {
            argument: argument.to_string(),
            reason: reason.to_string(),
        }
    }
}

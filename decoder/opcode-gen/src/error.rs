//! Errors raised while compiling and emitting opcode tables.

use std::path::PathBuf;

/// Why a single bit template could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternFault {
    #[error("expected {expected} bits, found {found}")]
    LengthMismatch { expected: u32, found: usize },

    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("malformed pattern #{index} {template:?} in table {table}: {fault}")]
    MalformedPattern {
        table: Box<str>,
        index: usize,
        template: Box<str>,
        #[source]
        fault: PatternFault,
    },

    #[error("table {table} declares unsupported width {width} (expected 1..={max})")]
    UnsupportedWidth { table: Box<str>, width: u32, max: u32 },

    #[error("{name:?} is not a valid identifier in table {table}")]
    InvalidIdentifier { table: Box<str>, name: Box<str> },

    #[error("name {name} is declared by more than one table")]
    DuplicateName { name: Box<str> },

    #[error("generated output for table {table} does not parse: {message}")]
    InvalidOutput { table: Box<str>, message: String },

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GenResult<T> = Result<T, GenError>;

//! Compiles declarative bit-pattern rules into specificity-ordered opcode
//! dispatch tables and renders them in a pluggable target syntax.

pub mod compiler;
pub mod config;
pub mod emitter;
pub mod error;
pub mod ir;
pub mod order;
pub mod registry;
pub mod table;
pub mod tables;

pub use emitter::strategies::{listing::ListingSyntax, rust::RustSyntax};
pub use emitter::traits::TableSyntax;
pub use emitter::{emit, generate, Artifact};
pub use error::{GenError, GenResult, PatternFault};
pub use table::CompiledTable;

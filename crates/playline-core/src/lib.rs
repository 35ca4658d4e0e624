#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the Playline dialogue pipeline.
//!
//! - [`types`]: declared value types and their resolution
//! - [`program`]: compiled program IR (nodes, instructions, operands)
//! - [`compilation`]: the job sent to the compiler and the result it returns
//! - [`flatten`]: scalar rendering of operands and opcodes

pub mod colors;
pub mod compilation;
pub mod flatten;
pub mod program;
pub mod types;

#[cfg(test)]
mod types_tests;

pub use colors::Colors;
pub use compilation::{
    CompilationJob, CompilationResult, Diagnostic, FunctionDeclaration, Position, Range, Severity,
    StringTableEntry,
};
pub use flatten::{Flatten, Scalar};
pub use program::{Header, Instruction, Node, OpCode, Operand, Program};
pub use types::{Type, UnknownType};

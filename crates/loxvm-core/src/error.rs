//! error.rs — runtime error taxonomy (spec.md §7).
//!
//! One variant per trigger spec.md §7 lists: type errors on
//! arithmetic/comparison/negation/call, undefined global read or
//! assignment, arity mismatch, stack overflow, calling a non-callable.
//! `Display` renders the exact wording the spec mandates so the dispatch
//! loop's stack-trace printer (spec.md §4.5) can interpolate it verbatim.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VmError {
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,

    #[error("Operand must be a number.")]
    OperandMustBeNumber,

    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings,

    #[error("Undefined variable '{0}'.")]
    UndefinedVariable(String),

    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch { expected: u8, got: u8 },

    #[error("Stack overflow.")]
    StackOverflow,

    #[error("Can only call functions and classes.")]
    NotCallable,
}

/// The outcome the driver observes (spec.md §6), mirroring clox's
/// `InterpretResult` enum exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretResult {
    Ok,
    CompileError,
    RuntimeError,
}

pub type VmResult<T> = Result<T, VmError>;

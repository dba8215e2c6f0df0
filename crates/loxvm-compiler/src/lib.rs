//! loxvm-compiler: turns source text into a `loxvm_core::Chunk` the
//! engine can run. Single-pass lexer + Pratt-parser compiler, no
//! separate AST — every construct is lowered directly to bytecode as
//! it's parsed, in the tradition of the reference implementation.

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::CompileError;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::compile;

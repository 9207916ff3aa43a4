/*!
# BIT Language Module

Lexical scanning and parsing of the BIT language.

*/

#[macro_use]
mod error;
mod parse;
mod scan;
mod token;

pub use error::Error;
pub use error::ErrorKind;
pub use parse::parse;
pub use scan::Scanner;
pub use token::Symbol;

pub mod ast;

pub type LineNumber = i64;
pub type Address = i64;
pub type Position = usize;

/// Reserved address of the jump register, one below the ordinary
/// address space.
pub const JUMP_REGISTER: Address = -1;

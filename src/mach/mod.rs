/*!
## BIT Machine Module

Memory, bit I/O, and the tree-walking runtime for parsed BIT programs.

*/

mod io;
mod memory;
mod runtime;
mod val;

pub use io::BitSink;
pub use io::BitSource;
pub use io::ByteSink;
pub use io::DigitSink;
pub use io::TextSource;
pub use memory::Memory;
pub use runtime::evaluate;
pub use runtime::Runtime;
pub use val::Val;
pub use val::ValKind;

use bit::lang::{parse, Error};
use bit::mach::Runtime;
use std::collections::VecDeque;

/// Parses and runs a program against buffer-backed bit I/O, returning
/// the emitted bits.
pub fn run(source: &str, input: &[i64]) -> Result<Vec<i64>, Error> {
    let program = parse(source)?;
    let input: VecDeque<i64> = input.iter().copied().collect();
    let mut runtime = Runtime::new(input, Vec::new());
    runtime.run(&program)?;
    Ok(runtime.into_output())
}

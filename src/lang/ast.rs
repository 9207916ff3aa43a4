use super::{Address, LineNumber};
use std::collections::BTreeMap;

/// A parsed program: a map of numbered lines plus the entry line. The
/// entry is the first line parsed, which is not necessarily the lowest
/// line number.
#[derive(Debug, PartialEq)]
pub struct Program {
    lines: BTreeMap<LineNumber, Line>,
    entry: LineNumber,
}

impl Program {
    pub(crate) fn new(entry: LineNumber, line: Line) -> Program {
        let mut lines = BTreeMap::new();
        lines.insert(entry, line);
        Program { lines, entry }
    }

    pub(crate) fn insert(&mut self, number: LineNumber, line: Line) {
        debug_assert!(!self.contains(number));
        self.lines.insert(number, line);
    }

    pub fn entry(&self) -> LineNumber {
        self.entry
    }

    pub fn get(&self, number: LineNumber) -> Option<&Line> {
        self.lines.get(&number)
    }

    pub fn contains(&self, number: LineNumber) -> bool {
        self.lines.contains_key(&number)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = (&LineNumber, &Line)> {
        self.lines.iter()
    }
}

/// One addressable unit of execution. Immutable once parsed.
#[derive(Debug, PartialEq)]
pub struct Line {
    pub instruction: Instruction,
    pub branch: Option<Goto>,
}

#[derive(Debug, PartialEq)]
pub enum Instruction {
    /// Emit a constant bit.
    Print(i64),
    /// Read one bit into the jump register.
    Read,
    /// Evaluate an expression and store it.
    Let(Store, Expression),
}

/// Assignment target. `Computed` carries an expression whose payload is
/// the write address, permitting indirect writes.
#[derive(Debug, PartialEq)]
pub enum Store {
    Direct(Address),
    Computed(Expression),
}

/// Where a goto leads. `Indirect` jumps to the line number stored in
/// memory at the given address rather than to the address itself.
#[derive(Debug, PartialEq)]
pub enum Target {
    Line(LineNumber),
    Indirect(Address),
}

#[derive(Debug, PartialEq)]
pub enum Goto {
    Jump(Target),
    /// Conditional arms keyed by the jump register. At least one arm is
    /// present; the parser rejects two arms guarding the same bit.
    Branch {
        on_zero: Option<Target>,
        on_one: Option<Target>,
    },
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Nand(Box<Expression>, Box<Expression>),
    AddressOf(Box<Expression>),
    ValueBeyond(Box<Expression>),
    ValueAt(Box<Expression>),
    Variable(Address),
    Constant(i64),
}

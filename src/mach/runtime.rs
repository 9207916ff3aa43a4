use super::io::{BitSink, BitSource};
use super::memory::Memory;
use super::val::{Val, ValKind};
use crate::lang::ast::{Expression, Goto, Instruction, Program, Store, Target};
use crate::lang::{Error, LineNumber, JUMP_REGISTER};
use crate::runtime_error;
use log::trace;

/// Evaluates an expression against the given memory. Reading a cell
/// materializes it, so evaluation takes the memory mutably.
pub fn evaluate(memory: &mut Memory, expression: &Expression) -> Result<Val, Error> {
    match expression {
        Expression::Nand(left, right) => {
            let left = evaluate(memory, left)?;
            let right = evaluate(memory, right)?;
            if left.kind != ValKind::Bit || right.kind != ValKind::Bit {
                return Err(runtime_error!("The NAND operator requires bit values."));
            }
            Ok(Val::bit(1 - (left.payload & right.payload)))
        }
        Expression::AddressOf(child) => {
            if let Expression::Variable(JUMP_REGISTER) = **child {
                return Err(runtime_error!(
                    "The THE ADDRESS OF operator can't be used with the jump register."
                ));
            }
            let value = evaluate(memory, child)?;
            if value.kind == ValKind::AddressOfBit {
                return Err(runtime_error!(
                    "The THE ADDRESS OF operator requires a bit value."
                ));
            }
            if value.payload < JUMP_REGISTER {
                return Err(runtime_error!("Invalid memory address: {}.", value.payload));
            }
            if value.payload == JUMP_REGISTER {
                return Err(runtime_error!(
                    "The THE ADDRESS OF operator can't be used with the jump register."
                ));
            }
            Ok(Val::address(value.payload))
        }
        Expression::ValueBeyond(child) => dereference(memory, child, 1, "THE VALUE BEYOND"),
        Expression::ValueAt(child) => dereference(memory, child, 0, "THE VALUE AT"),
        Expression::Variable(address) => {
            if *address >= JUMP_REGISTER {
                memory.read(*address)
            } else {
                Err(runtime_error!("Illegal address: {}.", address))
            }
        }
        Expression::Constant(payload) => Ok(Val::undefined(*payload)),
    }
}

fn dereference(
    memory: &mut Memory,
    child: &Expression,
    offset: i64,
    operator: &str,
) -> Result<Val, Error> {
    let value = evaluate(memory, child)?;
    if value.kind == ValKind::Bit {
        return Err(runtime_error!(
            "The {} operator requires an address-of-a-bit value.",
            operator
        ));
    }
    if value.payload < 0 {
        return Err(runtime_error!("Invalid memory address: {}.", value.payload));
    }
    let result = memory.read(value.payload + offset)?;
    if result.kind == ValKind::AddressOfBit {
        return Err(runtime_error!("Variable must contain a bit value."));
    }
    Ok(result)
}

/// Drives one program from its entry line until no further goto resolves.
/// The interpreter owns its memory; each run starts from a cleared state.
/// There is no step limit, a looping program runs until the host stops it.
pub struct Runtime<R, W> {
    memory: Memory,
    input: R,
    output: W,
}

impl<R: BitSource, W: BitSink> Runtime<R, W> {
    pub fn new(input: R, output: W) -> Runtime<R, W> {
        Runtime {
            memory: Memory::new(),
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, program: &Program) -> Result<(), Error> {
        self.memory.clear();
        let mut number = program.entry();
        loop {
            let line = match program.get(number) {
                Some(line) => line,
                None => return Err(runtime_error!("No line exists with number {}.", number)),
            };
            trace!("line {}", number);
            self.execute(&line.instruction)?;
            match &line.branch {
                None => break,
                Some(goto) => match self.resolve(goto)? {
                    Some(next) => number = next,
                    None => break,
                },
            }
        }
        self.output.finish()
    }

    fn execute(&mut self, instruction: &Instruction) -> Result<(), Error> {
        match instruction {
            Instruction::Print(bit) => self.output.write_bit(*bit),
            Instruction::Read => {
                let bit = self.input.read_bit()?;
                if bit != 0 && bit != 1 {
                    return Err(runtime_error!("Invalid value read."));
                }
                self.memory.write(JUMP_REGISTER, Val::bit(bit))
            }
            Instruction::Let(store, expression) => {
                let address = match store {
                    Store::Direct(address) => *address,
                    Store::Computed(expression) => {
                        evaluate(&mut self.memory, expression)?.payload
                    }
                };
                let value = evaluate(&mut self.memory, expression)?;
                self.memory.write(address, value)
            }
        }
    }

    fn resolve(&mut self, goto: &Goto) -> Result<Option<LineNumber>, Error> {
        match goto {
            Goto::Jump(target) => Ok(Some(self.follow(target)?)),
            Goto::Branch { on_zero, on_one } => {
                let arm = match self.memory.jump_register() {
                    0 => on_zero,
                    _ => on_one,
                };
                match arm {
                    Some(target) => Ok(Some(self.follow(target)?)),
                    None => Ok(None),
                }
            }
        }
    }

    fn follow(&mut self, target: &Target) -> Result<LineNumber, Error> {
        match target {
            Target::Line(number) => Ok(*number),
            Target::Indirect(address) => Ok(self.memory.read(*address)?.payload),
        }
    }
}

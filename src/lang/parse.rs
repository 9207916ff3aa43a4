use super::ast::*;
use super::scan::Scanner;
use super::token::Symbol;
use super::{Address, Error, LineNumber, JUMP_REGISTER};

type Result<T> = std::result::Result<T, Error>;

/// Parses a complete program. All failures are fatal; no partial program
/// is returned.
pub fn parse(source: &str) -> Result<Program> {
    Parser {
        scan: Scanner::new(source),
    }
    .program()
}

struct Parser {
    scan: Scanner,
}

impl Parser {
    fn program(&mut self) -> Result<Program> {
        let (number, line) = self.line()?;
        let mut program = Program::new(number, line);
        while self.scan.check(Symbol::LineNumber) {
            let (number, line) = self.line()?;
            if program.contains(number) {
                return Err(self
                    .scan
                    .error(format!("Line number {} is already defined.", number)));
            }
            program.insert(number, line);
        }
        Ok(program)
    }

    fn line(&mut self) -> Result<(LineNumber, Line)> {
        self.scan.consume(Symbol::LineNumber)?;
        let number = self.bits()?;
        self.scan.consume(Symbol::Code)?;
        let instruction = self.instruction()?;
        let branch = if self.scan.check(Symbol::Goto) {
            Some(self.goto()?)
        } else {
            None
        };
        Ok((number, Line {
            instruction,
            branch,
        }))
    }

    fn instruction(&mut self) -> Result<Instruction> {
        if self.scan.check(Symbol::Print) {
            self.scan.consume(Symbol::Print)?;
            return Ok(Instruction::Print(self.bit()?));
        }
        if self.scan.check(Symbol::Read) {
            self.scan.consume(Symbol::Read)?;
            return Ok(Instruction::Read);
        }
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Instruction> {
        let store =
            if self.scan.check(Symbol::Variable) || self.scan.check(Symbol::TheJumpRegister) {
                Store::Direct(self.variable()?)
            } else {
                Store::Computed(self.expression()?)
            };
        self.scan.consume(Symbol::Equals)?;
        Ok(Instruction::Let(store, self.expression()?))
    }

    fn goto(&mut self) -> Result<Goto> {
        self.scan.consume(Symbol::Goto)?;
        let target = self.target()?;
        if !self.scan.check(Symbol::IfTheJumpRegisterIs) {
            return Ok(Goto::Jump(target));
        }
        let first = self.guard()?;
        let mut on_zero = None;
        let mut on_one = None;
        match first {
            0 => on_zero = Some(target),
            _ => on_one = Some(target),
        }
        if self.scan.check(Symbol::Goto) {
            self.scan.consume(Symbol::Goto)?;
            let target = self.target()?;
            let second = self.guard()?;
            if second == first {
                return Err(self.scan.error(
                    "Illegal symbol found. Conditional goto with different bit constant was expected.",
                ));
            }
            match second {
                0 => on_zero = Some(target),
                _ => on_one = Some(target),
            }
        }
        Ok(Goto::Branch { on_zero, on_one })
    }

    fn guard(&mut self) -> Result<i64> {
        self.scan.consume(Symbol::IfTheJumpRegisterIs)?;
        if self.scan.check(Symbol::EqualTo) {
            self.scan.consume(Symbol::EqualTo)?;
        }
        self.bit()
    }

    fn target(&mut self) -> Result<Target> {
        if self.scan.check(Symbol::Variable) {
            self.scan.consume(Symbol::Variable)?;
            Ok(Target::Indirect(self.bits()?))
        } else {
            Ok(Target::Line(self.bits()?))
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        let left = self.expression2()?;
        if self.scan.check(Symbol::Nand) {
            self.scan.consume(Symbol::Nand)?;
            let right = self.expression2()?;
            return Ok(Expression::Nand(Box::new(left), Box::new(right)));
        }
        Ok(left)
    }

    fn expression2(&mut self) -> Result<Expression> {
        if self.scan.check(Symbol::TheAddressOf) {
            self.scan.consume(Symbol::TheAddressOf)?;
            return Ok(Expression::AddressOf(Box::new(self.expression3()?)));
        }
        self.expression3()
    }

    fn expression3(&mut self) -> Result<Expression> {
        if self.scan.check(Symbol::TheValueBeyond) {
            self.scan.consume(Symbol::TheValueBeyond)?;
            return Ok(Expression::ValueBeyond(Box::new(self.expression4()?)));
        }
        self.expression4()
    }

    fn expression4(&mut self) -> Result<Expression> {
        if self.scan.check(Symbol::TheValueAt) {
            self.scan.consume(Symbol::TheValueAt)?;
            return Ok(Expression::ValueAt(Box::new(self.expression5()?)));
        }
        self.expression5()
    }

    fn expression5(&mut self) -> Result<Expression> {
        if self.scan.check(Symbol::Variable) || self.scan.check(Symbol::TheJumpRegister) {
            return Ok(Expression::Variable(self.variable()?));
        }
        if self.scan.check(Symbol::Zero) || self.scan.check(Symbol::One) {
            return Ok(Expression::Constant(self.bits()?));
        }
        if self.scan.check(Symbol::OpenParenthesis) {
            self.scan.consume(Symbol::OpenParenthesis)?;
            let expression = self.expression()?;
            self.scan.consume(Symbol::CloseParenthesis)?;
            return Ok(expression);
        }
        Err(self
            .scan
            .error("Illegal symbol found. Expression was expected."))
    }

    fn variable(&mut self) -> Result<Address> {
        if self.scan.check(Symbol::Variable) {
            self.scan.consume(Symbol::Variable)?;
            return self.bits();
        }
        self.scan.consume(Symbol::TheJumpRegister)?;
        Ok(JUMP_REGISTER)
    }

    /// One or more bits folded into an integer, most significant first.
    fn bits(&mut self) -> Result<i64> {
        let mut bits = self.bit()?;
        while self.scan.check(Symbol::Zero) || self.scan.check(Symbol::One) {
            bits = (bits << 1) | self.bit()?;
        }
        Ok(bits)
    }

    fn bit(&mut self) -> Result<i64> {
        if self.scan.check(Symbol::Zero) {
            self.scan.consume(Symbol::Zero)?;
            return Ok(0);
        }
        if self.scan.check(Symbol::One) {
            self.scan.consume(Symbol::One)?;
            return Ok(1);
        }
        Err(self
            .scan
            .error("Illegal symbol found. Bit constant was expected."))
    }
}

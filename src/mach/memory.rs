use super::val::{Val, ValKind};
use crate::lang::{Address, Error, JUMP_REGISTER};
use crate::runtime_error;
use std::collections::HashMap;

/// Sparse address space keyed by signed integer, plus the jump register
/// at its reserved address. Owned by one runtime and cleared before each
/// run; nothing here is shared between executions.
pub struct Memory {
    cells: HashMap<Address, Val>,
    jump_register: i64,
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            cells: HashMap::new(),
            jump_register: 0,
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.jump_register = 0;
    }

    pub fn jump_register(&self) -> i64 {
        self.jump_register
    }

    /// Reads a cell, materializing an undefined entry for an address
    /// that was never written.
    pub fn read(&mut self, address: Address) -> Result<Val, Error> {
        if address == JUMP_REGISTER {
            return Ok(Val::bit(self.jump_register));
        }
        if address < JUMP_REGISTER {
            return Err(runtime_error!("Invalid memory address: {}.", address));
        }
        Ok(*self.cells.entry(address).or_insert_with(|| Val::undefined(0)))
    }

    /// Writes a cell. The jump register rejects address-of-a-bit values
    /// and any payload outside {0,1}; everywhere else a `Bit` value must
    /// carry a legal bit payload.
    pub fn write(&mut self, address: Address, value: Val) -> Result<(), Error> {
        if value.kind == ValKind::Bit && value.payload != 0 && value.payload != 1 {
            return Err(runtime_error!("Illegal value: {}.", value.payload));
        }
        if address == JUMP_REGISTER {
            if value.kind == ValKind::AddressOfBit {
                return Err(runtime_error!(
                    "The jump register can't store address-of-a-bit values."
                ));
            }
            if value.payload != 0 && value.payload != 1 {
                return Err(runtime_error!("Illegal value: {}.", value.payload));
            }
            self.jump_register = value.payload;
            return Ok(());
        }
        if address < JUMP_REGISTER {
            return Err(runtime_error!("Invalid memory address: {}.", address));
        }
        self.cells.insert(address, value);
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cell_reads_undefined() {
        let mut memory = Memory::new();
        assert_eq!(memory.read(5).unwrap(), Val::undefined(0));
    }

    #[test]
    fn test_write_then_read() {
        let mut memory = Memory::new();
        memory.write(3, Val::bit(1)).unwrap();
        assert_eq!(memory.read(3).unwrap(), Val::bit(1));
        memory.write(3, Val::address(7)).unwrap();
        assert_eq!(memory.read(3).unwrap(), Val::address(7));
    }

    #[test]
    fn test_address_below_reserved_minimum() {
        let mut memory = Memory::new();
        assert!(memory.read(-2).is_err());
        assert!(memory.write(-2, Val::bit(0)).is_err());
    }

    #[test]
    fn test_jump_register_holds_bits_only() {
        let mut memory = Memory::new();
        memory.write(JUMP_REGISTER, Val::bit(1)).unwrap();
        assert_eq!(memory.jump_register(), 1);
        assert_eq!(memory.read(JUMP_REGISTER).unwrap(), Val::bit(1));
        assert!(memory.write(JUMP_REGISTER, Val::address(2)).is_err());
        assert!(memory.write(JUMP_REGISTER, Val::undefined(5)).is_err());
        memory.write(JUMP_REGISTER, Val::undefined(0)).unwrap();
        assert_eq!(memory.jump_register(), 0);
    }

    #[test]
    fn test_illegal_bit_payload() {
        let mut memory = Memory::new();
        let illegal = Val {
            payload: 2,
            kind: ValKind::Bit,
        };
        assert!(memory.write(4, illegal).is_err());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut memory = Memory::new();
        memory.write(0, Val::bit(1)).unwrap();
        memory.write(JUMP_REGISTER, Val::bit(1)).unwrap();
        memory.clear();
        assert_eq!(memory.jump_register(), 0);
        assert_eq!(memory.read(0).unwrap(), Val::undefined(0));
    }
}

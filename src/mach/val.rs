/// A scalar machine value: an integer payload with a kind tag. A cell
/// that was never written reads as `Undefined` with payload 0; the kind
/// is only checked by the operation that consumes the value.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Val {
    pub payload: i64,
    pub kind: ValKind,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValKind {
    Undefined,
    Bit,
    AddressOfBit,
}

impl Val {
    pub fn undefined(payload: i64) -> Val {
        Val {
            payload,
            kind: ValKind::Undefined,
        }
    }

    pub fn bit(payload: i64) -> Val {
        debug_assert!(payload == 0 || payload == 1);
        Val {
            payload,
            kind: ValKind::Bit,
        }
    }

    pub fn address(payload: i64) -> Val {
        Val {
            payload,
            kind: ValKind::AddressOfBit,
        }
    }
}

//! # Addressing Modes and Operand Locations
//!
//! The 6800 has four memory addressing modes (immediate, direct, indexed,
//! extended). The descriptor table adds two stack modes so that push and pull
//! instructions can share the ordinary move routine, and an empty mode for
//! inherent instructions.

/// How an instruction computes the effective address of its memory operand.
///
/// # Operand Sizes
///
/// - **0 bytes**: None, Push, Pull
/// - **1 byte**: Direct, Indexed, Immediate (8-bit operations)
/// - **2 bytes**: Extended, Immediate (16-bit operations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No memory operand (inherent and accumulator instructions).
    ///
    /// Examples: NOP, TAB, INCA
    None,

    /// The operand follows the opcode in the instruction stream.
    ///
    /// Example: LDAA #$10, LDX #$1234
    Immediate,

    /// One-byte address in page zero ($0000-$00FF).
    ///
    /// Example: LDAA $80 (load from address 0x0080)
    Direct,

    /// Unsigned one-byte offset added to the index register.
    ///
    /// Example: LDAA 5,X (load from IX + 5, wrapping at 0xFFFF)
    Indexed,

    /// Full 16-bit big-endian address.
    ///
    /// Example: JMP $E0D0
    Extended,

    /// Pre-decrement the stack pointer by the operand width.
    ///
    /// The operand is written at SP+1, i.e. at the old stack pointer.
    /// Example: PSHA
    Push,

    /// Post-increment the stack pointer by the operand width.
    ///
    /// The operand is read from SP+1. Example: PULA
    Pull,
}

impl AddressingMode {
    /// Number of instruction-stream bytes consumed for an operand of `width` bytes.
    pub const fn operand_bytes(self, width: u8) -> u8 {
        match self {
            AddressingMode::None | AddressingMode::Push | AddressingMode::Pull => 0,
            AddressingMode::Immediate => width,
            AddressingMode::Direct | AddressingMode::Indexed => 1,
            AddressingMode::Extended => 2,
        }
    }

    /// Three-bit field value used by the packed descriptor form.
    pub const fn code(self) -> u32 {
        match self {
            AddressingMode::None => 0,
            AddressingMode::Immediate => 1,
            AddressingMode::Direct => 2,
            AddressingMode::Indexed => 3,
            AddressingMode::Extended => 4,
            AddressingMode::Push => 5,
            AddressingMode::Pull => 6,
        }
    }
}

/// A source or destination named by an instruction descriptor.
///
/// `Zero` and `One` are synthetic sources used to express instructions such as
/// CLR (move zero), INC (add one) and TST (subtract zero). Storing to `Zero`
/// discards the result, which is how compare and bit-test instructions work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Accumulator A (8-bit).
    AccA,
    /// Accumulator B (8-bit).
    AccB,
    /// Condition code register (8-bit).
    ConditionCodes,
    /// Index register (16-bit).
    IndexReg,
    /// Stack pointer (16-bit).
    StackReg,
    /// The effective address computed by the addressing mode.
    Memory,
    /// Constant 0 as a source; discard as a destination.
    Zero,
    /// Constant 1 as a source; never a destination.
    One,
}

impl Operand {
    /// Whether the operand may appear in an 8-bit operation.
    pub const fn is_8bit(self) -> bool {
        !matches!(self, Operand::IndexReg | Operand::StackReg)
    }

    /// Whether the operand may appear in a 16-bit operation.
    pub const fn is_16bit(self) -> bool {
        !matches!(self, Operand::AccA | Operand::AccB | Operand::ConditionCodes)
    }

    /// Three-bit field value used by the packed descriptor form.
    pub const fn code(self) -> u32 {
        match self {
            Operand::AccA => 0,
            Operand::AccB => 1,
            Operand::ConditionCodes => 2,
            Operand::IndexReg => 3,
            Operand::StackReg => 4,
            Operand::Memory => 5,
            Operand::Zero => 6,
            Operand::One => 7,
        }
    }
}

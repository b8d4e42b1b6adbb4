//! # Instruction Descriptor Table
//!
//! This module contains the complete 256-entry descriptor table that serves as the
//! single source of truth for all 6800 instruction information.
//!
//! The table covers:
//! - **197 documented instructions** - The standard MC6800 opcode map
//! - **59 illegal opcodes** - Marked with `Operation::Illegal` and a "???" mnemonic
//!
//! Each descriptor records:
//! - Mnemonic (instruction name, with the accumulator suffix where there is one)
//! - Operation kind dispatched by the CPU
//! - Two source operands and one destination
//! - Addressing mode of the memory operand
//! - Condition-code bits the instruction may change, and fixed values for some
//! - Base cycle count from the MC6800 datasheet

use crate::addressing::{AddressingMode, Operand};
use crate::flags::ConditionCodes;

/// Condition test performed by a conditional branch.
///
/// The test reads the condition code register `cc` as follows:
///
/// ```text
/// res = (mask & cc) != 0
/// if (invert & cc) != 0 { res = !res }
/// if (force & cc) != 0  { res = true }
/// taken = (res == expect)
/// ```
///
/// With every mask empty `res` is always false, so BRA is encoded with
/// `expect == false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchTest {
    /// Bits whose OR forms the initial result.
    pub mask: ConditionCodes,
    /// Bits that invert the result when set.
    pub invert: ConditionCodes,
    /// Bits that force the result to true when set.
    pub force: ConditionCodes,
    /// Required value of the result for the branch to be taken.
    pub expect: bool,
}

impl BranchTest {
    const fn new(mask: ConditionCodes, invert: ConditionCodes, force: ConditionCodes, expect: bool) -> Self {
        Self {
            mask,
            invert,
            force,
            expect,
        }
    }

    const NONE: ConditionCodes = ConditionCodes::empty();

    /// BRA: always taken.
    pub const ALWAYS: Self = Self::new(Self::NONE, Self::NONE, Self::NONE, false);
    /// BHI: C + Z = 0.
    pub const HI: Self = Self::new(ConditionCodes::C, Self::NONE, ConditionCodes::Z, false);
    /// BLS: C + Z = 1.
    pub const LS: Self = Self::new(ConditionCodes::C, Self::NONE, ConditionCodes::Z, true);
    /// BCC: C = 0.
    pub const CC: Self = Self::new(ConditionCodes::C, Self::NONE, Self::NONE, false);
    /// BCS: C = 1.
    pub const CS: Self = Self::new(ConditionCodes::C, Self::NONE, Self::NONE, true);
    /// BNE: Z = 0.
    pub const NE: Self = Self::new(ConditionCodes::Z, Self::NONE, Self::NONE, false);
    /// BEQ: Z = 1.
    pub const EQ: Self = Self::new(ConditionCodes::Z, Self::NONE, Self::NONE, true);
    /// BVC: V = 0.
    pub const VC: Self = Self::new(ConditionCodes::V, Self::NONE, Self::NONE, false);
    /// BVS: V = 1.
    pub const VS: Self = Self::new(ConditionCodes::V, Self::NONE, Self::NONE, true);
    /// BPL: N = 0.
    pub const PL: Self = Self::new(ConditionCodes::N, Self::NONE, Self::NONE, false);
    /// BMI: N = 1.
    pub const MI: Self = Self::new(ConditionCodes::N, Self::NONE, Self::NONE, true);
    /// BGE: N ^ V = 0.
    pub const GE: Self = Self::new(ConditionCodes::N, ConditionCodes::V, Self::NONE, false);
    /// BLT: N ^ V = 1.
    pub const LT: Self = Self::new(ConditionCodes::N, ConditionCodes::V, Self::NONE, true);
    /// BGT: Z + (N ^ V) = 0.
    pub const GT: Self = Self::new(ConditionCodes::N, ConditionCodes::V, ConditionCodes::Z, false);
    /// BLE: Z + (N ^ V) = 1.
    pub const LE: Self = Self::new(ConditionCodes::N, ConditionCodes::V, ConditionCodes::Z, true);

    /// Evaluates the test against a condition code register.
    ///
    /// # Examples
    ///
    /// ```
    /// use mc6800::{BranchTest, ConditionCodes};
    ///
    /// assert!(BranchTest::EQ.is_taken(ConditionCodes::Z));
    /// assert!(!BranchTest::NE.is_taken(ConditionCodes::Z));
    /// assert!(BranchTest::LT.is_taken(ConditionCodes::V));
    /// assert!(BranchTest::ALWAYS.is_taken(ConditionCodes::all()));
    /// ```
    pub fn is_taken(&self, cc: ConditionCodes) -> bool {
        let mut res = self.mask.intersects(cc);
        if self.invert.intersects(cc) {
            res = !res;
        }
        if self.force.intersects(cc) {
            res = true;
        }
        res == self.expect
    }
}

/// The kind of work an instruction performs.
///
/// Add-with-carry and subtract-with-carry are not separate kinds: they are
/// `Add`/`Sub` descriptors whose `cc_value` contains `C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Not a 6800 instruction.
    Illegal,
    Nop,
    /// 8-bit transfer, load, store, push, pull and clear.
    Move8,
    Add,
    Sub,
    Complement,
    Negate,
    And,
    Eor,
    Ora,
    RotateLeft,
    RotateRight,
    /// ASL
    ShiftLeft,
    /// ASR
    ShiftRightArithmetic,
    /// LSR
    ShiftRightLogical,
    /// DAA, always on accumulator A.
    DecimalAdjust,
    /// 16-bit load, store and register transfer.
    Move16,
    Add16,
    Sub16,
    /// Conditional or unconditional relative branch.
    Branch(BranchTest),
    BranchSubroutine,
    Jump,
    JumpSubroutine,
    ReturnSubroutine,
    SoftwareInterrupt,
    ReturnInterrupt,
    WaitForInterrupt,
    /// CLC/SEC, CLV/SEV, CLI/SEI.
    ModifyConditionCodes,
}

impl Operation {
    /// Five-bit field value used by the packed descriptor form.
    pub const fn code(self) -> u32 {
        match self {
            Operation::Illegal => 0,
            Operation::Nop => 1,
            Operation::Move8 => 2,
            Operation::Add => 3,
            Operation::Sub => 4,
            Operation::Complement => 5,
            Operation::Negate => 6,
            Operation::And => 7,
            Operation::Eor => 8,
            Operation::Ora => 9,
            Operation::RotateLeft => 10,
            Operation::RotateRight => 11,
            Operation::ShiftLeft => 12,
            Operation::ShiftRightArithmetic => 13,
            Operation::ShiftRightLogical => 14,
            Operation::DecimalAdjust => 15,
            Operation::Move16 => 16,
            Operation::Add16 => 17,
            Operation::Sub16 => 18,
            Operation::Branch(_) => 19,
            Operation::BranchSubroutine => 20,
            Operation::Jump => 21,
            Operation::JumpSubroutine => 22,
            Operation::ReturnSubroutine => 23,
            Operation::SoftwareInterrupt => 24,
            Operation::ReturnInterrupt => 25,
            Operation::WaitForInterrupt => 26,
            Operation::ModifyConditionCodes => 27,
        }
    }

    /// Whether the operation works on 16-bit quantities.
    pub const fn is_16bit(self) -> bool {
        matches!(self, Operation::Move16 | Operation::Add16 | Operation::Sub16)
    }
}

/// Static description of one opcode.
///
/// # Examples
///
/// ```
/// use mc6800::{decode, AddressingMode, Operand, Operation};
///
/// // LDAA immediate (opcode 0x86)
/// let ldaa = decode(0x86);
/// assert_eq!(ldaa.mnemonic, "LDAA");
/// assert_eq!(ldaa.operation, Operation::Move8);
/// assert_eq!(ldaa.src1, Operand::Memory);
/// assert_eq!(ldaa.dst, Operand::AccA);
/// assert_eq!(ldaa.mode, AddressingMode::Immediate);
/// assert_eq!(ldaa.cycles, 2);
/// assert_eq!(ldaa.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Instruction mnemonic ("???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// What the CPU does with the operands.
    pub operation: Operation,

    /// First source operand.
    pub src1: Operand,

    /// Second source operand (`Zero` when unused).
    pub src2: Operand,

    /// Destination operand. `Zero` discards the result (CMP, BIT, TST, CPX).
    pub dst: Operand,

    /// Addressing mode for the `Memory` operand.
    pub mode: AddressingMode,

    /// Condition code bits the instruction may change.
    pub affects: ConditionCodes,

    /// Fixed flag values.
    ///
    /// For CLx/SEx this is the value written under `affects`. For `Add` and
    /// `Sub` a set `C` means the current carry is folded in (ADC, SBC).
    pub cc_value: ConditionCodes,

    /// Base cycle count.
    pub cycles: u8,
}

const ACCA: Operand = Operand::AccA;
const ACCB: Operand = Operand::AccB;
const CCR: Operand = Operand::ConditionCodes;
const IX: Operand = Operand::IndexReg;
const SP: Operand = Operand::StackReg;
const MEM: Operand = Operand::Memory;
const ZERO: Operand = Operand::Zero;
const ONE: Operand = Operand::One;

const INH: AddressingMode = AddressingMode::None;
const IMM: AddressingMode = AddressingMode::Immediate;
const DIR: AddressingMode = AddressingMode::Direct;
const IDX: AddressingMode = AddressingMode::Indexed;
const EXT: AddressingMode = AddressingMode::Extended;
const PSH: AddressingMode = AddressingMode::Push;
const PUL: AddressingMode = AddressingMode::Pull;

const NONE: ConditionCodes = ConditionCodes::empty();
const Z_ONLY: ConditionCodes = ConditionCodes::Z;
const NZV: ConditionCodes = ConditionCodes::NZV;
const NZVC: ConditionCodes = ConditionCodes::NZVC;
const HNZVC: ConditionCodes = ConditionCodes::HNZVC;

impl Descriptor {
    /// Descriptor shared by every illegal opcode.
    pub const ILLEGAL: Self = Self::new("???", Operation::Illegal, ZERO, ZERO, ZERO, INH, NONE, 2);

    #[allow(clippy::too_many_arguments)]
    const fn new(
        mnemonic: &'static str,
        operation: Operation,
        src1: Operand,
        src2: Operand,
        dst: Operand,
        mode: AddressingMode,
        affects: ConditionCodes,
        cycles: u8,
    ) -> Self {
        Self {
            mnemonic,
            operation,
            src1,
            src2,
            dst,
            mode,
            affects,
            cc_value: NONE,
            cycles,
        }
    }

    const fn with_carry(mut self) -> Self {
        self.cc_value = ConditionCodes::C;
        self
    }

    const fn modify_cc(mnemonic: &'static str, affects: ConditionCodes, value: ConditionCodes) -> Self {
        let mut desc = Self::new(mnemonic, Operation::ModifyConditionCodes, ZERO, ZERO, ZERO, INH, affects, 2);
        desc.cc_value = value;
        desc
    }

    const fn branch(mnemonic: &'static str, test: BranchTest) -> Self {
        Self::new(mnemonic, Operation::Branch(test), ZERO, ZERO, ZERO, INH, NONE, 4)
    }

    const fn control(mnemonic: &'static str, operation: Operation, mode: AddressingMode, cycles: u8) -> Self {
        Self::new(mnemonic, operation, ZERO, ZERO, ZERO, mode, NONE, cycles)
    }

    /// Whether this descriptor is a documented instruction.
    pub fn is_legal(&self) -> bool {
        self.operation != Operation::Illegal
    }

    /// Whether the instruction takes a signed 8-bit relative offset (Bcc, BSR).
    pub fn is_relative(&self) -> bool {
        matches!(self.operation, Operation::Branch(_) | Operation::BranchSubroutine)
    }

    /// Width in bytes of the data the instruction moves (1 or 2).
    pub fn width(&self) -> u8 {
        if self.operation.is_16bit() {
            2
        } else {
            1
        }
    }

    /// Total instruction size in bytes, opcode included.
    pub fn size_bytes(&self) -> u8 {
        if self.is_relative() {
            2
        } else {
            1 + self.mode.operand_bytes(self.width())
        }
    }

    /// Packs the descriptor into a single 32-bit word.
    ///
    /// ```text
    /// bits  0..5   operation
    /// bits  5..8   src1       (branches: mask   bits  5..11)
    /// bits  8..11  src2       (branches: invert bits 11..17)
    /// bits 11..14  dst        (branches: force  bits 17..23)
    /// bits 14..17  addressing (branches: expect bit  23)
    /// bits 17..23  affected condition codes
    /// bits 23..29  condition code values
    /// ```
    pub fn pack(&self) -> u32 {
        let op = self.operation.code();
        if let Operation::Branch(test) = self.operation {
            return op
                | (test.mask.bits() as u32) << 5
                | (test.invert.bits() as u32) << 11
                | (test.force.bits() as u32) << 17
                | (test.expect as u32) << 23;
        }
        op | self.src1.code() << 5
            | self.src2.code() << 8
            | self.dst.code() << 11
            | self.mode.code() << 14
            | (self.affects.bits() as u32) << 17
            | (self.cc_value.bits() as u32) << 23
    }
}

/// Looks up the descriptor for an opcode.
///
/// Total over all 256 byte values; illegal opcodes return [`Descriptor::ILLEGAL`].
pub fn decode(opcode: u8) -> &'static Descriptor {
    &DESCRIPTOR_TABLE[opcode as usize]
}

/// Complete 256-entry descriptor table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use mc6800::{DESCRIPTOR_TABLE, Operation};
///
/// let legal = DESCRIPTOR_TABLE.iter().filter(|d| d.is_legal()).count();
/// assert_eq!(legal, 197);
/// assert_eq!(DESCRIPTOR_TABLE[0x00].operation, Operation::Illegal);
/// assert_eq!(DESCRIPTOR_TABLE[0x01].mnemonic, "NOP");
/// ```
pub static DESCRIPTOR_TABLE: [Descriptor; 256] = [
    // 0x00
    Descriptor::ILLEGAL,
    // 0x01
    Descriptor::new("NOP", Operation::Nop, ZERO, ZERO, ZERO, INH, NONE, 2),
    // 0x02
    Descriptor::ILLEGAL,
    // 0x03
    Descriptor::ILLEGAL,
    // 0x04
    Descriptor::ILLEGAL,
    // 0x05
    Descriptor::ILLEGAL,
    // 0x06
    Descriptor::new("TAP", Operation::Move8, ACCA, ZERO, CCR, INH, NONE, 2),
    // 0x07
    Descriptor::new("TPA", Operation::Move8, CCR, ZERO, ACCA, INH, NONE, 2),
    // 0x08
    Descriptor::new("INX", Operation::Add16, IX, ONE, IX, INH, Z_ONLY, 4),
    // 0x09
    Descriptor::new("DEX", Operation::Sub16, IX, ONE, IX, INH, Z_ONLY, 4),
    // 0x0A
    Descriptor::modify_cc("CLV", ConditionCodes::V, NONE),
    // 0x0B
    Descriptor::modify_cc("SEV", ConditionCodes::V, ConditionCodes::V),
    // 0x0C
    Descriptor::modify_cc("CLC", ConditionCodes::C, NONE),
    // 0x0D
    Descriptor::modify_cc("SEC", ConditionCodes::C, ConditionCodes::C),
    // 0x0E
    Descriptor::modify_cc("CLI", ConditionCodes::I, NONE),
    // 0x0F
    Descriptor::modify_cc("SEI", ConditionCodes::I, ConditionCodes::I),
    // 0x10
    Descriptor::new("SBA", Operation::Sub, ACCA, ACCB, ACCA, INH, NZVC, 2),
    // 0x11
    Descriptor::new("CBA", Operation::Sub, ACCA, ACCB, ZERO, INH, NZVC, 2),
    // 0x12
    Descriptor::ILLEGAL,
    // 0x13
    Descriptor::ILLEGAL,
    // 0x14
    Descriptor::ILLEGAL,
    // 0x15
    Descriptor::ILLEGAL,
    // 0x16
    Descriptor::new("TAB", Operation::Move8, ACCA, ZERO, ACCB, INH, NZV, 2),
    // 0x17
    Descriptor::new("TBA", Operation::Move8, ACCB, ZERO, ACCA, INH, NZV, 2),
    // 0x18
    Descriptor::ILLEGAL,
    // 0x19
    Descriptor::new("DAA", Operation::DecimalAdjust, ACCA, ZERO, ACCA, INH, NONE, 2),
    // 0x1A
    Descriptor::ILLEGAL,
    // 0x1B
    Descriptor::new("ABA", Operation::Add, ACCA, ACCB, ACCA, INH, HNZVC, 2),
    // 0x1C
    Descriptor::ILLEGAL,
    // 0x1D
    Descriptor::ILLEGAL,
    // 0x1E
    Descriptor::ILLEGAL,
    // 0x1F
    Descriptor::ILLEGAL,
    // 0x20
    Descriptor::branch("BRA", BranchTest::ALWAYS),
    // 0x21
    Descriptor::ILLEGAL,
    // 0x22
    Descriptor::branch("BHI", BranchTest::HI),
    // 0x23
    Descriptor::branch("BLS", BranchTest::LS),
    // 0x24
    Descriptor::branch("BCC", BranchTest::CC),
    // 0x25
    Descriptor::branch("BCS", BranchTest::CS),
    // 0x26
    Descriptor::branch("BNE", BranchTest::NE),
    // 0x27
    Descriptor::branch("BEQ", BranchTest::EQ),
    // 0x28
    Descriptor::branch("BVC", BranchTest::VC),
    // 0x29
    Descriptor::branch("BVS", BranchTest::VS),
    // 0x2A
    Descriptor::branch("BPL", BranchTest::PL),
    // 0x2B
    Descriptor::branch("BMI", BranchTest::MI),
    // 0x2C
    Descriptor::branch("BGE", BranchTest::GE),
    // 0x2D
    Descriptor::branch("BLT", BranchTest::LT),
    // 0x2E
    Descriptor::branch("BGT", BranchTest::GT),
    // 0x2F
    Descriptor::branch("BLE", BranchTest::LE),
    // 0x30
    Descriptor::new("TSX", Operation::Add16, SP, ONE, IX, INH, NONE, 4),
    // 0x31
    Descriptor::new("INS", Operation::Add16, SP, ONE, SP, INH, NONE, 4),
    // 0x32
    Descriptor::new("PULA", Operation::Move8, MEM, ZERO, ACCA, PUL, NONE, 4),
    // 0x33
    Descriptor::new("PULB", Operation::Move8, MEM, ZERO, ACCB, PUL, NONE, 4),
    // 0x34
    Descriptor::new("DES", Operation::Sub16, SP, ONE, SP, INH, NONE, 4),
    // 0x35
    Descriptor::new("TXS", Operation::Sub16, IX, ONE, SP, INH, NONE, 4),
    // 0x36
    Descriptor::new("PSHA", Operation::Move8, ACCA, ZERO, MEM, PSH, NONE, 4),
    // 0x37
    Descriptor::new("PSHB", Operation::Move8, ACCB, ZERO, MEM, PSH, NONE, 4),
    // 0x38
    Descriptor::ILLEGAL,
    // 0x39
    Descriptor::control("RTS", Operation::ReturnSubroutine, INH, 5),
    // 0x3A
    Descriptor::ILLEGAL,
    // 0x3B
    Descriptor::control("RTI", Operation::ReturnInterrupt, INH, 10),
    // 0x3C
    Descriptor::ILLEGAL,
    // 0x3D
    Descriptor::ILLEGAL,
    // 0x3E
    Descriptor::control("WAI", Operation::WaitForInterrupt, INH, 9),
    // 0x3F
    Descriptor::control("SWI", Operation::SoftwareInterrupt, INH, 12),
    // 0x40
    Descriptor::new("NEGA", Operation::Negate, ACCA, ZERO, ACCA, INH, NZVC, 2),
    // 0x41
    Descriptor::ILLEGAL,
    // 0x42
    Descriptor::ILLEGAL,
    // 0x43
    Descriptor::new("COMA", Operation::Complement, ACCA, ZERO, ACCA, INH, NZVC, 2),
    // 0x44
    Descriptor::new("LSRA", Operation::ShiftRightLogical, ACCA, ZERO, ACCA, INH, NZVC, 2),
    // 0x45
    Descriptor::ILLEGAL,
    // 0x46
    Descriptor::new("RORA", Operation::RotateRight, ACCA, ZERO, ACCA, INH, NZVC, 2),
    // 0x47
    Descriptor::new("ASRA", Operation::ShiftRightArithmetic, ACCA, ZERO, ACCA, INH, NZVC, 2),
    // 0x48
    Descriptor::new("ASLA", Operation::ShiftLeft, ACCA, ZERO, ACCA, INH, NZVC, 2),
    // 0x49
    Descriptor::new("ROLA", Operation::RotateLeft, ACCA, ZERO, ACCA, INH, NZVC, 2),
    // 0x4A
    Descriptor::new("DECA", Operation::Sub, ACCA, ONE, ACCA, INH, NZV, 2),
    // 0x4B
    Descriptor::ILLEGAL,
    // 0x4C
    Descriptor::new("INCA", Operation::Add, ACCA, ONE, ACCA, INH, NZV, 2),
    // 0x4D
    Descriptor::new("TSTA", Operation::Sub, ACCA, ZERO, ZERO, INH, NZVC, 2),
    // 0x4E
    Descriptor::ILLEGAL,
    // 0x4F
    Descriptor::new("CLRA", Operation::Move8, ZERO, ZERO, ACCA, INH, NZVC, 2),
    // 0x50
    Descriptor::new("NEGB", Operation::Negate, ACCB, ZERO, ACCB, INH, NZVC, 2),
    // 0x51
    Descriptor::ILLEGAL,
    // 0x52
    Descriptor::ILLEGAL,
    // 0x53
    Descriptor::new("COMB", Operation::Complement, ACCB, ZERO, ACCB, INH, NZVC, 2),
    // 0x54
    Descriptor::new("LSRB", Operation::ShiftRightLogical, ACCB, ZERO, ACCB, INH, NZVC, 2),
    // 0x55
    Descriptor::ILLEGAL,
    // 0x56
    Descriptor::new("RORB", Operation::RotateRight, ACCB, ZERO, ACCB, INH, NZVC, 2),
    // 0x57
    Descriptor::new("ASRB", Operation::ShiftRightArithmetic, ACCB, ZERO, ACCB, INH, NZVC, 2),
    // 0x58
    Descriptor::new("ASLB", Operation::ShiftLeft, ACCB, ZERO, ACCB, INH, NZVC, 2),
    // 0x59
    Descriptor::new("ROLB", Operation::RotateLeft, ACCB, ZERO, ACCB, INH, NZVC, 2),
    // 0x5A
    Descriptor::new("DECB", Operation::Sub, ACCB, ONE, ACCB, INH, NZV, 2),
    // 0x5B
    Descriptor::ILLEGAL,
    // 0x5C
    Descriptor::new("INCB", Operation::Add, ACCB, ONE, ACCB, INH, NZV, 2),
    // 0x5D
    Descriptor::new("TSTB", Operation::Sub, ACCB, ZERO, ZERO, INH, NZVC, 2),
    // 0x5E
    Descriptor::ILLEGAL,
    // 0x5F
    Descriptor::new("CLRB", Operation::Move8, ZERO, ZERO, ACCB, INH, NZVC, 2),
    // 0x60
    Descriptor::new("NEG", Operation::Negate, MEM, ZERO, MEM, IDX, NZVC, 7),
    // 0x61
    Descriptor::ILLEGAL,
    // 0x62
    Descriptor::ILLEGAL,
    // 0x63
    Descriptor::new("COM", Operation::Complement, MEM, ZERO, MEM, IDX, NZVC, 7),
    // 0x64
    Descriptor::new("LSR", Operation::ShiftRightLogical, MEM, ZERO, MEM, IDX, NZVC, 7),
    // 0x65
    Descriptor::ILLEGAL,
    // 0x66
    Descriptor::new("ROR", Operation::RotateRight, MEM, ZERO, MEM, IDX, NZVC, 7),
    // 0x67
    Descriptor::new("ASR", Operation::ShiftRightArithmetic, MEM, ZERO, MEM, IDX, NZVC, 7),
    // 0x68
    Descriptor::new("ASL", Operation::ShiftLeft, MEM, ZERO, MEM, IDX, NZVC, 7),
    // 0x69
    Descriptor::new("ROL", Operation::RotateLeft, MEM, ZERO, MEM, IDX, NZVC, 7),
    // 0x6A
    Descriptor::new("DEC", Operation::Sub, MEM, ONE, MEM, IDX, NZV, 7),
    // 0x6B
    Descriptor::ILLEGAL,
    // 0x6C
    Descriptor::new("INC", Operation::Add, MEM, ONE, MEM, IDX, NZV, 7),
    // 0x6D
    Descriptor::new("TST", Operation::Sub, MEM, ZERO, ZERO, IDX, NZVC, 7),
    // 0x6E
    Descriptor::control("JMP", Operation::Jump, IDX, 4),
    // 0x6F
    Descriptor::new("CLR", Operation::Move8, ZERO, ZERO, MEM, IDX, NZVC, 7),
    // 0x70
    Descriptor::new("NEG", Operation::Negate, MEM, ZERO, MEM, EXT, NZVC, 6),
    // 0x71
    Descriptor::ILLEGAL,
    // 0x72
    Descriptor::ILLEGAL,
    // 0x73
    Descriptor::new("COM", Operation::Complement, MEM, ZERO, MEM, EXT, NZVC, 6),
    // 0x74
    Descriptor::new("LSR", Operation::ShiftRightLogical, MEM, ZERO, MEM, EXT, NZVC, 6),
    // 0x75
    Descriptor::ILLEGAL,
    // 0x76
    Descriptor::new("ROR", Operation::RotateRight, MEM, ZERO, MEM, EXT, NZVC, 6),
    // 0x77
    Descriptor::new("ASR", Operation::ShiftRightArithmetic, MEM, ZERO, MEM, EXT, NZVC, 6),
    // 0x78
    Descriptor::new("ASL", Operation::ShiftLeft, MEM, ZERO, MEM, EXT, NZVC, 6),
    // 0x79
    Descriptor::new("ROL", Operation::RotateLeft, MEM, ZERO, MEM, EXT, NZVC, 6),
    // 0x7A
    Descriptor::new("DEC", Operation::Sub, MEM, ONE, MEM, EXT, NZV, 6),
    // 0x7B
    Descriptor::ILLEGAL,
    // 0x7C
    Descriptor::new("INC", Operation::Add, MEM, ONE, MEM, EXT, NZV, 6),
    // 0x7D
    Descriptor::new("TST", Operation::Sub, MEM, ZERO, ZERO, EXT, NZVC, 6),
    // 0x7E
    Descriptor::control("JMP", Operation::Jump, EXT, 3),
    // 0x7F
    Descriptor::new("CLR", Operation::Move8, ZERO, ZERO, MEM, EXT, NZVC, 6),
    // 0x80
    Descriptor::new("SUBA", Operation::Sub, ACCA, MEM, ACCA, IMM, NZVC, 2),
    // 0x81
    Descriptor::new("CMPA", Operation::Sub, ACCA, MEM, ZERO, IMM, NZVC, 2),
    // 0x82
    Descriptor::new("SBCA", Operation::Sub, ACCA, MEM, ACCA, IMM, NZVC, 2).with_carry(),
    // 0x83
    Descriptor::ILLEGAL,
    // 0x84
    Descriptor::new("ANDA", Operation::And, ACCA, MEM, ACCA, IMM, NZV, 2),
    // 0x85
    Descriptor::new("BITA", Operation::And, ACCA, MEM, ZERO, IMM, NZV, 2),
    // 0x86
    Descriptor::new("LDAA", Operation::Move8, MEM, ZERO, ACCA, IMM, NZV, 2),
    // 0x87
    Descriptor::ILLEGAL,
    // 0x88
    Descriptor::new("EORA", Operation::Eor, ACCA, MEM, ACCA, IMM, NZV, 2),
    // 0x89
    Descriptor::new("ADCA", Operation::Add, ACCA, MEM, ACCA, IMM, HNZVC, 2).with_carry(),
    // 0x8A
    Descriptor::new("ORAA", Operation::Ora, ACCA, MEM, ACCA, IMM, NZV, 2),
    // 0x8B
    Descriptor::new("ADDA", Operation::Add, ACCA, MEM, ACCA, IMM, HNZVC, 2),
    // 0x8C
    Descriptor::new("CPX", Operation::Sub16, IX, MEM, ZERO, IMM, NZV, 3),
    // 0x8D
    Descriptor::control("BSR", Operation::BranchSubroutine, INH, 8),
    // 0x8E
    Descriptor::new("LDS", Operation::Move16, MEM, ZERO, SP, IMM, NZV, 3),
    // 0x8F
    Descriptor::ILLEGAL,
    // 0x90
    Descriptor::new("SUBA", Operation::Sub, ACCA, MEM, ACCA, DIR, NZVC, 3),
    // 0x91
    Descriptor::new("CMPA", Operation::Sub, ACCA, MEM, ZERO, DIR, NZVC, 3),
    // 0x92
    Descriptor::new("SBCA", Operation::Sub, ACCA, MEM, ACCA, DIR, NZVC, 3).with_carry(),
    // 0x93
    Descriptor::ILLEGAL,
    // 0x94
    Descriptor::new("ANDA", Operation::And, ACCA, MEM, ACCA, DIR, NZV, 3),
    // 0x95
    Descriptor::new("BITA", Operation::And, ACCA, MEM, ZERO, DIR, NZV, 3),
    // 0x96
    Descriptor::new("LDAA", Operation::Move8, MEM, ZERO, ACCA, DIR, NZV, 3),
    // 0x97
    Descriptor::new("STAA", Operation::Move8, ACCA, ZERO, MEM, DIR, NZV, 4),
    // 0x98
    Descriptor::new("EORA", Operation::Eor, ACCA, MEM, ACCA, DIR, NZV, 3),
    // 0x99
    Descriptor::new("ADCA", Operation::Add, ACCA, MEM, ACCA, DIR, HNZVC, 3).with_carry(),
    // 0x9A
    Descriptor::new("ORAA", Operation::Ora, ACCA, MEM, ACCA, DIR, NZV, 3),
    // 0x9B
    Descriptor::new("ADDA", Operation::Add, ACCA, MEM, ACCA, DIR, HNZVC, 3),
    // 0x9C
    Descriptor::new("CPX", Operation::Sub16, IX, MEM, ZERO, DIR, NZV, 4),
    // 0x9D
    Descriptor::ILLEGAL,
    // 0x9E
    Descriptor::new("LDS", Operation::Move16, MEM, ZERO, SP, DIR, NZV, 4),
    // 0x9F
    Descriptor::new("STS", Operation::Move16, SP, ZERO, MEM, DIR, NZV, 5),
    // 0xA0
    Descriptor::new("SUBA", Operation::Sub, ACCA, MEM, ACCA, IDX, NZVC, 5),
    // 0xA1
    Descriptor::new("CMPA", Operation::Sub, ACCA, MEM, ZERO, IDX, NZVC, 5),
    // 0xA2
    Descriptor::new("SBCA", Operation::Sub, ACCA, MEM, ACCA, IDX, NZVC, 5).with_carry(),
    // 0xA3
    Descriptor::ILLEGAL,
    // 0xA4
    Descriptor::new("ANDA", Operation::And, ACCA, MEM, ACCA, IDX, NZV, 5),
    // 0xA5
    Descriptor::new("BITA", Operation::And, ACCA, MEM, ZERO, IDX, NZV, 5),
    // 0xA6
    Descriptor::new("LDAA", Operation::Move8, MEM, ZERO, ACCA, IDX, NZV, 5),
    // 0xA7
    Descriptor::new("STAA", Operation::Move8, ACCA, ZERO, MEM, IDX, NZV, 6),
    // 0xA8
    Descriptor::new("EORA", Operation::Eor, ACCA, MEM, ACCA, IDX, NZV, 5),
    // 0xA9
    Descriptor::new("ADCA", Operation::Add, ACCA, MEM, ACCA, IDX, HNZVC, 5).with_carry(),
    // 0xAA
    Descriptor::new("ORAA", Operation::Ora, ACCA, MEM, ACCA, IDX, NZV, 5),
    // 0xAB
    Descriptor::new("ADDA", Operation::Add, ACCA, MEM, ACCA, IDX, HNZVC, 5),
    // 0xAC
    Descriptor::new("CPX", Operation::Sub16, IX, MEM, ZERO, IDX, NZV, 6),
    // 0xAD
    Descriptor::control("JSR", Operation::JumpSubroutine, IDX, 8),
    // 0xAE
    Descriptor::new("LDS", Operation::Move16, MEM, ZERO, SP, IDX, NZV, 6),
    // 0xAF
    Descriptor::new("STS", Operation::Move16, SP, ZERO, MEM, IDX, NZV, 7),
    // 0xB0
    Descriptor::new("SUBA", Operation::Sub, ACCA, MEM, ACCA, EXT, NZVC, 4),
    // 0xB1
    Descriptor::new("CMPA", Operation::Sub, ACCA, MEM, ZERO, EXT, NZVC, 4),
    // 0xB2
    Descriptor::new("SBCA", Operation::Sub, ACCA, MEM, ACCA, EXT, NZVC, 4).with_carry(),
    // 0xB3
    Descriptor::ILLEGAL,
    // 0xB4
    Descriptor::new("ANDA", Operation::And, ACCA, MEM, ACCA, EXT, NZV, 4),
    // 0xB5
    Descriptor::new("BITA", Operation::And, ACCA, MEM, ZERO, EXT, NZV, 4),
    // 0xB6
    Descriptor::new("LDAA", Operation::Move8, MEM, ZERO, ACCA, EXT, NZV, 4),
    // 0xB7
    Descriptor::new("STAA", Operation::Move8, ACCA, ZERO, MEM, EXT, NZV, 5),
    // 0xB8
    Descriptor::new("EORA", Operation::Eor, ACCA, MEM, ACCA, EXT, NZV, 4),
    // 0xB9
    Descriptor::new("ADCA", Operation::Add, ACCA, MEM, ACCA, EXT, HNZVC, 4).with_carry(),
    // 0xBA
    Descriptor::new("ORAA", Operation::Ora, ACCA, MEM, ACCA, EXT, NZV, 4),
    // 0xBB
    Descriptor::new("ADDA", Operation::Add, ACCA, MEM, ACCA, EXT, HNZVC, 4),
    // 0xBC
    Descriptor::new("CPX", Operation::Sub16, IX, MEM, ZERO, EXT, NZV, 5),
    // 0xBD
    Descriptor::control("JSR", Operation::JumpSubroutine, EXT, 9),
    // 0xBE
    Descriptor::new("LDS", Operation::Move16, MEM, ZERO, SP, EXT, NZV, 5),
    // 0xBF
    Descriptor::new("STS", Operation::Move16, SP, ZERO, MEM, EXT, NZV, 6),
    // 0xC0
    Descriptor::new("SUBB", Operation::Sub, ACCB, MEM, ACCB, IMM, NZVC, 2),
    // 0xC1
    Descriptor::new("CMPB", Operation::Sub, ACCB, MEM, ZERO, IMM, NZVC, 2),
    // 0xC2
    Descriptor::new("SBCB", Operation::Sub, ACCB, MEM, ACCB, IMM, NZVC, 2).with_carry(),
    // 0xC3
    Descriptor::ILLEGAL,
    // 0xC4
    Descriptor::new("ANDB", Operation::And, ACCB, MEM, ACCB, IMM, NZV, 2),
    // 0xC5
    Descriptor::new("BITB", Operation::And, ACCB, MEM, ZERO, IMM, NZV, 2),
    // 0xC6
    Descriptor::new("LDAB", Operation::Move8, MEM, ZERO, ACCB, IMM, NZV, 2),
    // 0xC7
    Descriptor::ILLEGAL,
    // 0xC8
    Descriptor::new("EORB", Operation::Eor, ACCB, MEM, ACCB, IMM, NZV, 2),
    // 0xC9
    Descriptor::new("ADCB", Operation::Add, ACCB, MEM, ACCB, IMM, HNZVC, 2).with_carry(),
    // 0xCA
    Descriptor::new("ORAB", Operation::Ora, ACCB, MEM, ACCB, IMM, NZV, 2),
    // 0xCB
    Descriptor::new("ADDB", Operation::Add, ACCB, MEM, ACCB, IMM, HNZVC, 2),
    // 0xCC
    Descriptor::ILLEGAL,
    // 0xCD
    Descriptor::ILLEGAL,
    // 0xCE
    Descriptor::new("LDX", Operation::Move16, MEM, ZERO, IX, IMM, NZV, 3),
    // 0xCF
    Descriptor::ILLEGAL,
    // 0xD0
    Descriptor::new("SUBB", Operation::Sub, ACCB, MEM, ACCB, DIR, NZVC, 3),
    // 0xD1
    Descriptor::new("CMPB", Operation::Sub, ACCB, MEM, ZERO, DIR, NZVC, 3),
    // 0xD2
    Descriptor::new("SBCB", Operation::Sub, ACCB, MEM, ACCB, DIR, NZVC, 3).with_carry(),
    // 0xD3
    Descriptor::ILLEGAL,
    // 0xD4
    Descriptor::new("ANDB", Operation::And, ACCB, MEM, ACCB, DIR, NZV, 3),
    // 0xD5
    Descriptor::new("BITB", Operation::And, ACCB, MEM, ZERO, DIR, NZV, 3),
    // 0xD6
    Descriptor::new("LDAB", Operation::Move8, MEM, ZERO, ACCB, DIR, NZV, 3),
    // 0xD7
    Descriptor::new("STAB", Operation::Move8, ACCB, ZERO, MEM, DIR, NZV, 4),
    // 0xD8
    Descriptor::new("EORB", Operation::Eor, ACCB, MEM, ACCB, DIR, NZV, 3),
    // 0xD9
    Descriptor::new("ADCB", Operation::Add, ACCB, MEM, ACCB, DIR, HNZVC, 3).with_carry(),
    // 0xDA
    Descriptor::new("ORAB", Operation::Ora, ACCB, MEM, ACCB, DIR, NZV, 3),
    // 0xDB
    Descriptor::new("ADDB", Operation::Add, ACCB, MEM, ACCB, DIR, HNZVC, 3),
    // 0xDC
    Descriptor::ILLEGAL,
    // 0xDD
    Descriptor::ILLEGAL,
    // 0xDE
    Descriptor::new("LDX", Operation::Move16, MEM, ZERO, IX, DIR, NZV, 4),
    // 0xDF
    Descriptor::new("STX", Operation::Move16, IX, ZERO, MEM, DIR, NZV, 5),
    // 0xE0
    Descriptor::new("SUBB", Operation::Sub, ACCB, MEM, ACCB, IDX, NZVC, 5),
    // 0xE1
    Descriptor::new("CMPB", Operation::Sub, ACCB, MEM, ZERO, IDX, NZVC, 5),
    // 0xE2
    Descriptor::new("SBCB", Operation::Sub, ACCB, MEM, ACCB, IDX, NZVC, 5).with_carry(),
    // 0xE3
    Descriptor::ILLEGAL,
    // 0xE4
    Descriptor::new("ANDB", Operation::And, ACCB, MEM, ACCB, IDX, NZV, 5),
    // 0xE5
    Descriptor::new("BITB", Operation::And, ACCB, MEM, ZERO, IDX, NZV, 5),
    // 0xE6
    Descriptor::new("LDAB", Operation::Move8, MEM, ZERO, ACCB, IDX, NZV, 5),
    // 0xE7
    Descriptor::new("STAB", Operation::Move8, ACCB, ZERO, MEM, IDX, NZV, 6),
    // 0xE8
    Descriptor::new("EORB", Operation::Eor, ACCB, MEM, ACCB, IDX, NZV, 5),
    // 0xE9
    Descriptor::new("ADCB", Operation::Add, ACCB, MEM, ACCB, IDX, HNZVC, 5).with_carry(),
    // 0xEA
    Descriptor::new("ORAB", Operation::Ora, ACCB, MEM, ACCB, IDX, NZV, 5),
    // 0xEB
    Descriptor::new("ADDB", Operation::Add, ACCB, MEM, ACCB, IDX, HNZVC, 5),
    // 0xEC
    Descriptor::ILLEGAL,
    // 0xED
    Descriptor::ILLEGAL,
    // 0xEE
    Descriptor::new("LDX", Operation::Move16, MEM, ZERO, IX, IDX, NZV, 6),
    // 0xEF
    Descriptor::new("STX", Operation::Move16, IX, ZERO, MEM, IDX, NZV, 7),
    // 0xF0
    Descriptor::new("SUBB", Operation::Sub, ACCB, MEM, ACCB, EXT, NZVC, 4),
    // 0xF1
    Descriptor::new("CMPB", Operation::Sub, ACCB, MEM, ZERO, EXT, NZVC, 4),
    // 0xF2
    Descriptor::new("SBCB", Operation::Sub, ACCB, MEM, ACCB, EXT, NZVC, 4).with_carry(),
    // 0xF3
    Descriptor::ILLEGAL,
    // 0xF4
    Descriptor::new("ANDB", Operation::And, ACCB, MEM, ACCB, EXT, NZV, 4),
    // 0xF5
    Descriptor::new("BITB", Operation::And, ACCB, MEM, ZERO, EXT, NZV, 4),
    // 0xF6
    Descriptor::new("LDAB", Operation::Move8, MEM, ZERO, ACCB, EXT, NZV, 4),
    // 0xF7
    Descriptor::new("STAB", Operation::Move8, ACCB, ZERO, MEM, EXT, NZV, 5),
    // 0xF8
    Descriptor::new("EORB", Operation::Eor, ACCB, MEM, ACCB, EXT, NZV, 4),
    // 0xF9
    Descriptor::new("ADCB", Operation::Add, ACCB, MEM, ACCB, EXT, HNZVC, 4).with_carry(),
    // 0xFA
    Descriptor::new("ORAB", Operation::Ora, ACCB, MEM, ACCB, EXT, NZV, 4),
    // 0xFB
    Descriptor::new("ADDB", Operation::Add, ACCB, MEM, ACCB, EXT, HNZVC, 4),
    // 0xFC
    Descriptor::ILLEGAL,
    // 0xFD
    Descriptor::ILLEGAL,
    // 0xFE
    Descriptor::new("LDX", Operation::Move16, MEM, ZERO, IX, EXT, NZV, 5),
    // 0xFF
    Descriptor::new("STX", Operation::Move16, IX, ZERO, MEM, EXT, NZV, 6),
];

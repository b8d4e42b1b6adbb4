//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6800 processor state, the
//! operand resolver shared by every instruction, and the fetch-decode-execute step.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Accumulators**: A and B (8-bit)
//! - **Index register** (IX): 16-bit
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 16-bit, grows downward, points at the next free byte
//! - **Condition codes**: H, I, N, Z, V, C
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction
//! - `run_for_cycles()`: Execute until cycle budget exhausted
//! - `service_nmi()` / `service_irq()`: Enter an interrupt handler
//!
//! This type is single-threaded. [`crate::Motorola6800`] drives it from a
//! dispatch thread and adds the control lines.

use crate::addressing::{AddressingMode, Operand};
use crate::disassembler::{decoder, formatter, Instruction};
use crate::flags::ConditionCodes;
use crate::opcodes::{decode, Descriptor};
use crate::state::CpuState;
use crate::stats::OpcodeStats;
use crate::{instructions, ExecutionError, MemoryBus};

/// Address of the big-endian IRQ vector.
pub const IRQ_VECTOR: u16 = 0xFFF8;
/// Address of the big-endian SWI vector.
pub const SWI_VECTOR: u16 = 0xFFFA;
/// Address of the big-endian NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFC;
/// Address of the big-endian RESET vector.
pub const RESET_VECTOR: u16 = 0xFFFE;

/// Cycles spent stacking the registers and fetching a vector.
pub(crate) const INTERRUPT_CYCLES: u64 = 12;

/// What the caller should do after a successful `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Keep fetching instructions.
    Continue,
    /// WAI executed: no further instructions until an interrupt is taken.
    WaitForInterrupt,
}

/// 6800 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, condition
/// codes, program counter, stack pointer, and cycle counter. It is generic over
/// the memory implementation via the `MemoryBus` trait.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use mc6800::{Cpu, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write_u16(0xFFFE, 0xE000);
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = Cpu::new(memory);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0xE000);
/// assert_eq!(cpu.flag_i(), true); // Interrupts masked on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Accumulator A
    pub(crate) a: u8,

    /// Accumulator B
    pub(crate) b: u8,

    /// Index register
    pub(crate) ix: u16,

    /// Stack pointer (next free byte)
    pub(crate) sp: u16,

    /// Program counter (address of next byte to fetch)
    pub(crate) pc: u16,

    /// Condition code register
    pub(crate) cc: ConditionCodes,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Opcode of the instruction being executed
    pub(crate) opcode: u8,

    /// Per-opcode counters, when enabled
    pub(crate) stats: Option<OpcodeStats>,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a new CPU with the given memory bus.
    ///
    /// The CPU is initialized to the 6800 power-on state:
    /// - Program counter (PC) is loaded from the reset vector at 0xFFFE/0xFFFF (big-endian)
    /// - Interrupt mask (I) is set
    /// - All other registers are zeroed
    /// - Cycle counter is reset to 0
    pub fn new(memory: M) -> Self {
        let pc = memory.read_u16(RESET_VECTOR);

        Self {
            a: 0x00,
            b: 0x00,
            ix: 0x0000,
            sp: 0x0000,
            pc,
            cc: ConditionCodes::I,
            cycles: 0,
            opcode: 0x00,
            stats: None,
            memory,
        }
    }

    /// Performs a RESET: sets the interrupt mask and reloads PC from 0xFFFE.
    ///
    /// The other registers keep their values, as on hardware.
    pub fn reset(&mut self) {
        self.cc.insert(ConditionCodes::I);
        self.pc = self.memory.read_u16(RESET_VECTOR);
        log::debug!("reset: PC={:04X}", self.pc);
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Look up the instruction descriptor
    /// 3. Charge the base cycle count
    /// 4. Dispatch on the descriptor's operation
    ///
    /// With `trace` logging enabled the operand bytes of each instruction are
    /// read a second time to build the log line. The opcode byte and every
    /// address outside the instruction are read only by the instruction itself.
    ///
    /// # Returns
    ///
    /// - `Ok(StepOutcome::Continue)` for ordinary instructions
    /// - `Ok(StepOutcome::WaitForInterrupt)` after WAI
    /// - `Err(ExecutionError::IllegalOpcode { .. })` for undefined opcodes; PC has
    ///   moved past the byte and 2 cycles were charged
    ///
    /// # Examples
    ///
    /// ```
    /// use mc6800::{Cpu, FlatMemory, MemoryBus, ExecutionError};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_u16(0xFFFE, 0x8000);
    /// mem.write(0x8000, 0x01); // NOP
    /// mem.write(0x8001, 0x02); // illegal
    ///
    /// let mut cpu = Cpu::new(mem);
    /// cpu.step().unwrap();
    ///
    /// match cpu.step() {
    ///     Err(ExecutionError::IllegalOpcode { opcode, address }) => {
    ///         assert_eq!(opcode, 0x02);
    ///         assert_eq!(address, 0x8001);
    ///     }
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// assert_eq!(cpu.pc(), 0x8002);
    /// ```
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        let address = self.pc;
        let opcode = self.fetch8();
        let desc = decode(opcode);
        if log::log_enabled!(log::Level::Trace) {
            self.trace(address, opcode, desc);
        }

        self.opcode = opcode;
        self.cycles += desc.cycles as u64;
        if let Some(stats) = self.stats.as_mut() {
            stats.record(opcode);
        }

        instructions::execute(self, desc)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted, an error
    /// occurs, or a WAI instruction stops the processor.
    ///
    /// # Returns
    ///
    /// The number of cycles actually executed (may exceed the budget by up to
    /// one instruction).
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            if self.step()? == StepOutcome::WaitForInterrupt {
                break;
            }
        }

        Ok(self.cycles - start_cycles)
    }

    /// Takes a non-maskable interrupt through 0xFFFC.
    pub fn service_nmi(&mut self) {
        self.enter_interrupt(NMI_VECTOR, "NMI");
    }

    /// Takes a maskable interrupt through 0xFFF8 unless I is set.
    ///
    /// Returns whether the interrupt was taken.
    pub fn service_irq(&mut self) -> bool {
        if self.cc.contains(ConditionCodes::I) {
            return false;
        }
        self.enter_interrupt(IRQ_VECTOR, "IRQ");
        true
    }

    /// Stacks PC, IX, A, B and CC, sets I and jumps through `vector`.
    ///
    /// After the sequence the stack reads, from SP+1 upward:
    /// CC, B, A, IXH, IXL, PCH, PCL.
    pub(crate) fn enter_interrupt(&mut self, vector: u16, source: &str) {
        let return_pc = self.pc;
        self.push16(self.pc);
        self.push16(self.ix);
        self.push8(self.a);
        self.push8(self.b);
        self.push8(self.cc.to_byte());
        self.cc.insert(ConditionCodes::I);
        self.pc = self.memory.read_u16(vector);
        self.cycles += INTERRUPT_CYCLES;
        log::debug!(
            "{} taken: return PC={:04X}, vector {:04X} -> {:04X}",
            source,
            return_pc,
            vector,
            self.pc
        );
    }

    /// Logs the instruction at `address` before it executes.
    ///
    /// The operand bytes are read once more for the listing. Nothing past the
    /// end of the instruction is read.
    fn trace(&self, address: u16, opcode: u8, desc: &Descriptor) {
        let size = desc.size_bytes() as usize;
        let mut bytes = [opcode, 0, 0];
        for (offset, byte) in bytes.iter_mut().enumerate().take(size).skip(1) {
            *byte = self.memory.read(address.wrapping_add(offset as u16));
        }
        let instr = decoder::decode_instruction(&bytes[..size], address)
            .unwrap_or_else(|| Instruction::data_byte(address, opcode));
        log::trace!(
            "PC:{:04X}  SP:{:04X}  IX:{:04X}  A:{:02X}  B:{:02X}  CC:{}  {:<12} [{:?} {:?},{:?}->{:?} {:?} cc:{}/{}]",
            address,
            self.sp,
            self.ix,
            self.a,
            self.b,
            self.cc,
            formatter::format_instruction(&instr),
            desc.operation,
            desc.src1,
            desc.src2,
            desc.dst,
            desc.mode,
            desc.affects,
            desc.cc_value
        );
    }

    // ========== Operand resolver ==========

    pub(crate) fn fetch8(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    pub(crate) fn fetch16(&mut self) -> u16 {
        let value = self.memory.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Computes the effective address for `mode`, consuming operand bytes at PC.
    ///
    /// `width` is the operand size in bytes; it decides how far an immediate
    /// operand or a stack access moves PC or SP.
    pub(crate) fn resolve_address(&mut self, mode: AddressingMode, width: u8) -> u16 {
        match mode {
            AddressingMode::None => 0,
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(width as u16);
                addr
            }
            AddressingMode::Direct => self.fetch8() as u16,
            AddressingMode::Indexed => {
                let offset = self.fetch8() as u16;
                self.ix.wrapping_add(offset)
            }
            AddressingMode::Extended => self.fetch16(),
            AddressingMode::Push => {
                self.sp = self.sp.wrapping_sub(width as u16);
                self.sp.wrapping_add(1)
            }
            AddressingMode::Pull => {
                let addr = self.sp.wrapping_add(1);
                self.sp = self.sp.wrapping_add(width as u16);
                addr
            }
        }
    }

    /// Reads an 8-bit operand.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor names a 16-bit register.
    pub(crate) fn load8(&self, operand: Operand, addr: u16) -> u8 {
        match operand {
            Operand::AccA => self.a,
            Operand::AccB => self.b,
            Operand::ConditionCodes => self.cc.to_byte(),
            Operand::Memory => self.memory.read(addr),
            Operand::Zero => 0,
            Operand::One => 1,
            Operand::IndexReg | Operand::StackReg => panic!(
                "opcode ${:02X}: 8-bit read of {:?}",
                self.opcode, operand
            ),
        }
    }

    /// Writes an 8-bit operand. Storing to `Zero` discards the value.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor names a 16-bit register or `One`.
    pub(crate) fn store8(&mut self, operand: Operand, addr: u16, value: u8) {
        match operand {
            Operand::AccA => self.a = value,
            Operand::AccB => self.b = value,
            Operand::ConditionCodes => self.cc = ConditionCodes::from_byte(value),
            Operand::Memory => self.memory.write(addr, value),
            Operand::Zero => {}
            Operand::One | Operand::IndexReg | Operand::StackReg => panic!(
                "opcode ${:02X}: 8-bit write to {:?}",
                self.opcode, operand
            ),
        }
    }

    /// Reads a 16-bit operand; memory is read high byte first.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor names an 8-bit register.
    pub(crate) fn load16(&self, operand: Operand, addr: u16) -> u16 {
        match operand {
            Operand::IndexReg => self.ix,
            Operand::StackReg => self.sp,
            Operand::Memory => self.memory.read_u16(addr),
            Operand::Zero => 0,
            Operand::One => 1,
            Operand::AccA | Operand::AccB | Operand::ConditionCodes => panic!(
                "opcode ${:02X}: 16-bit read of {:?}",
                self.opcode, operand
            ),
        }
    }

    /// Writes a 16-bit operand; memory is written high byte first.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor names an 8-bit register or `One`.
    pub(crate) fn store16(&mut self, operand: Operand, addr: u16, value: u16) {
        match operand {
            Operand::IndexReg => self.ix = value,
            Operand::StackReg => self.sp = value,
            Operand::Memory => self.memory.write_u16(addr, value),
            Operand::Zero => {}
            Operand::One | Operand::AccA | Operand::AccB | Operand::ConditionCodes => panic!(
                "opcode ${:02X}: 16-bit write to {:?}",
                self.opcode, operand
            ),
        }
    }

    /// Merges freshly computed flags under the descriptor's affected mask.
    pub(crate) fn apply_cc(&mut self, desc: &Descriptor, new: ConditionCodes) {
        self.cc = self.cc.merge(new, desc.affects);
    }

    pub(crate) fn push8(&mut self, value: u8) {
        self.memory.write(self.sp, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pushes low byte first so the value reads big-endian from SP+1.
    pub(crate) fn push16(&mut self, value: u16) {
        self.push8(value as u8);
        self.push8((value >> 8) as u8);
    }

    pub(crate) fn pull8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(self.sp)
    }

    pub(crate) fn pull16(&mut self) -> u16 {
        let high = self.pull8() as u16;
        let low = self.pull8() as u16;
        (high << 8) | low
    }

    // ========== Snapshots and statistics ==========

    /// Copies the register file.
    pub fn snapshot(&self) -> CpuState {
        CpuState {
            pc: self.pc,
            sp: self.sp,
            ix: self.ix,
            a: self.a,
            b: self.b,
            cc: self.cc,
            cycles: self.cycles,
        }
    }

    /// Overwrites the register file. Memory is not touched.
    pub fn restore(&mut self, state: &CpuState) {
        self.pc = state.pc;
        self.sp = state.sp;
        self.ix = state.ix;
        self.a = state.a;
        self.b = state.b;
        self.cc = ConditionCodes::from_byte(state.cc.bits());
        self.cycles = state.cycles;
    }

    /// Starts counting executed opcodes. Existing counts are kept.
    pub fn enable_stats(&mut self) {
        if self.stats.is_none() {
            self.stats = Some(OpcodeStats::new());
        }
    }

    /// Opcode counters, if enabled.
    pub fn stats(&self) -> Option<&OpcodeStats> {
        self.stats.as_ref()
    }

    /// Mutable opcode counters, if enabled.
    pub fn stats_mut(&mut self) -> Option<&mut OpcodeStats> {
        self.stats.as_mut()
    }

    // ========== Register Getters ==========

    /// Returns the value of accumulator A.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the value of accumulator B.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Returns the index register.
    pub fn ix(&self) -> u16 {
        self.ix
    }

    /// Returns the stack pointer.
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the condition code register.
    pub fn cc(&self) -> ConditionCodes {
        self.cc
    }

    /// Returns the condition code register as read by TPA (bits 6-7 set).
    pub fn cc_byte(&self) -> u8 {
        self.cc.to_byte()
    }

    /// Returns the total number of cycles executed.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn flag_h(&self) -> bool {
        self.cc.contains(ConditionCodes::H)
    }

    pub fn flag_i(&self) -> bool {
        self.cc.contains(ConditionCodes::I)
    }

    pub fn flag_n(&self) -> bool {
        self.cc.contains(ConditionCodes::N)
    }

    pub fn flag_z(&self) -> bool {
        self.cc.contains(ConditionCodes::Z)
    }

    pub fn flag_v(&self) -> bool {
        self.cc.contains(ConditionCodes::V)
    }

    pub fn flag_c(&self) -> bool {
        self.cc.contains(ConditionCodes::C)
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_b(&mut self, value: u8) {
        self.b = value;
    }

    pub fn set_ix(&mut self, value: u16) {
        self.ix = value;
    }

    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_cc(&mut self, value: ConditionCodes) {
        self.cc = value;
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// Useful for loading programs or inspecting memory from tests.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}

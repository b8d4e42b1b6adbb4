//! # Motorola 6800 CPU Emulator Core
//!
//! An instruction-level emulator for the Motorola 6800 8-bit microprocessor, as
//! found on the SWTPC 6800 MP-A processor card.
//!
//! The crate is organized around a 256-entry instruction descriptor table: every
//! opcode is described by its operation kind, operand locations, addressing mode
//! and the condition-code bits it is allowed to touch. A single dispatcher reads
//! the descriptor and routes to a small set of ALU routines, so the opcode map
//! is data rather than 197 hand-written functions.
//!
//! ## Quick Start
//!
//! ```rust
//! use mc6800::{Cpu, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Reset vector (big-endian) points to 0x0100
//! memory.write_u16(0xFFFE, 0x0100);
//!
//! // LDAA #$42
//! memory.write(0x0100, 0x86);
//! memory.write(0x0101, 0x42);
//!
//! let mut cpu = Cpu::new(memory);
//! assert_eq!(cpu.pc(), 0x0100);
//! assert!(cpu.flag_i());
//!
//! cpu.step().unwrap();
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x0102);
//! ```
//!
//! ## Threaded Execution
//!
//! [`Motorola6800`] runs a [`Cpu`] on a dedicated dispatch thread and exposes the
//! processor's control lines (IRQ, NMI, RESET, HALT) to any other thread. All
//! line changes go through one monitor, so `raise_reset` only returns once the
//! processor has actually stopped issuing bus cycles.
//!
//! ## Modules
//!
//! - `cpu` - Register file, operand resolver and single-step execution
//! - `machine` - Threaded dispatch loop and control-line protocol
//! - `opcodes` - Instruction descriptor table
//! - `addressing` - Addressing modes and operand locations
//! - `flags` - Condition code register
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `disassembler` - Mnemonic decoding and formatting
//! - `state` / `stats` / `config` - Snapshots, opcode counters and settings

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod disassembler;
pub mod flags;
pub mod machine;
pub mod memory;
pub mod opcodes;
pub mod state;
pub mod stats;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::Config;
pub use cpu::{Cpu, StepOutcome, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, SWI_VECTOR};
pub use disassembler::{disassemble, DisassemblyOptions, Instruction};
pub use flags::ConditionCodes;
pub use machine::Motorola6800;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{decode, BranchTest, Descriptor, Operation, DESCRIPTOR_TABLE};
pub use state::CpuState;
pub use stats::OpcodeStats;

#[cfg(feature = "wasm")]
pub use wasm::Emulator6800;

/// Errors that can occur during CPU execution.
///
/// None of these are fatal: the CPU state is always consistent after an error
/// and execution may simply continue with the next `step()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched byte is not a 6800 instruction.
    ///
    /// The program counter has already been advanced past the byte, so the
    /// opcode behaves as a one-byte no-op.
    #[error("illegal opcode ${opcode:02X} at ${address:04X}")]
    IllegalOpcode {
        /// The offending opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        address: u16,
    },
}

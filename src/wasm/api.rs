//! WASM API for the 6800 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection
//! and disassembly.

use crate::disassembler::formatter::format_operand;
use crate::{
    disassemble, Cpu, DisassemblyOptions, ExecutionError, FlatMemory, MemoryBus, RESET_VECTOR,
};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One line of disassembly
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    mnemonic: String,
    operand: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> String {
        self.mnemonic.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn operand(&self) -> String {
        self.operand.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6800 {
    cpu: Cpu<FlatMemory>,
    on_illegal: Option<js_sys::Function>,
    program_start: u16,
    program_end: u16,
}

#[wasm_bindgen]
impl Emulator6800 {
    /// Create a 6800 over 64K of RAM.
    ///
    /// `on_illegal`, when given, is called with the opcode and its address
    /// whenever execution reaches an undefined opcode.
    #[wasm_bindgen(constructor)]
    pub fn new(on_illegal: Option<js_sys::Function>) -> Self {
        Emulator6800 {
            cpu: Cpu::new(FlatMemory::new()),
            on_illegal,
            program_start: 0x0000,
            program_end: 0x0000,
        }
    }

    /// Execute a single instruction. Returns `true` when the CPU executed WAI.
    pub fn step(&mut self) -> Result<bool, JsError> {
        match self.cpu.step() {
            Ok(outcome) => Ok(outcome == crate::StepOutcome::WaitForInterrupt),
            Err(e) => Err(self.report(e)),
        }
    }

    /// Execute instructions until the budget is spent or WAI is reached.
    /// Returns the cycles actually executed.
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        match self.cpu.run_for_cycles(cycles as u64) {
            Ok(elapsed) => Ok(elapsed as u32),
            Err(e) => Err(self.report(e)),
        }
    }

    /// Reset the CPU through the reset vector. Memory is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Service a non-maskable interrupt.
    pub fn trigger_nmi(&mut self) {
        self.cpu.service_nmi();
    }

    /// Request a maskable interrupt. Returns `false` if I masked it.
    pub fn trigger_irq(&mut self) -> bool {
        self.cpu.service_irq()
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn b(&self) -> u8 {
        self.cpu.b()
    }

    #[wasm_bindgen(getter)]
    pub fn ix(&self) -> u16 {
        self.cpu.ix()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn cc(&self) -> u8 {
        self.cpu.cc_byte()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        // JavaScript numbers are f64
        self.cpu.cycles() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn flag_h(&self) -> bool {
        self.cpu.flag_h()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.cpu.memory().read(start + i)).collect()
    }

    /// Load a program, point the reset vector at it and set PC.
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.memory_mut().load(start_addr, program);
        self.cpu.memory_mut().write_u16(RESET_VECTOR, start_addr);
        self.cpu.set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(program.len() as u16);
    }

    /// Disassemble memory starting at an address
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        // Three bytes per instruction is the worst case
        let window: Vec<u8> = (0..num_instructions.saturating_mul(3).min(0x10000))
            .map(|offset| self.cpu.memory().read(start_addr.wrapping_add(offset as u16)))
            .collect();

        let opts = DisassemblyOptions {
            start_address: start_addr,
            ..Default::default()
        };

        disassemble(&window, opts)
            .iter()
            .take(num_instructions as usize)
            .map(|instr| {
                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes: instr.bytes(),
                    mnemonic: instr.mnemonic.to_string(),
                    operand: format_operand(instr),
                })
            })
            .collect()
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}

impl Emulator6800 {
    /// Hands an execution error to the `on_illegal` callback and converts it.
    fn report(&self, error: ExecutionError) -> JsError {
        let ExecutionError::IllegalOpcode { opcode, address } = error;
        if let Some(callback) = &self.on_illegal {
            let _ = callback.call2(
                &JsValue::NULL,
                &JsValue::from(opcode),
                &JsValue::from(address),
            );
        }
        JsError::new(&error.to_string())
    }
}

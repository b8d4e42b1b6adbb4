//! Tests for instruction tracing at `trace` log level.
//!
//! This binary installs its own logger, so every test in it runs with tracing
//! enabled.

use log::{LevelFilter, Log, Metadata, Record};
use mc6800::{Cpu, FlatMemory, MemoryBus};
use std::cell::RefCell;
use std::sync::Mutex;

static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        LINES.lock().unwrap().push(format!("{}", record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn enable_tracing() {
    // Only the first test to get here installs it
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
}

/// Flat memory that records the address of every bus read.
struct RecordingBus {
    memory: FlatMemory,
    reads: RefCell<Vec<u16>>,
}

impl MemoryBus for RecordingBus {
    fn read(&self, addr: u16) -> u8 {
        self.reads.borrow_mut().push(addr);
        self.memory.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }
}

fn setup_cpu(program: &[u8]) -> Cpu<RecordingBus> {
    enable_tracing();
    let mut memory = FlatMemory::new();
    memory.write_u16(0xFFFE, 0x8000);
    memory.load(0x8000, program);
    let cpu = Cpu::new(RecordingBus {
        memory,
        reads: RefCell::new(Vec::new()),
    });
    cpu.memory().reads.borrow_mut().clear();
    cpu
}

fn reads_of(cpu: &Cpu<RecordingBus>, addr: u16) -> usize {
    cpu.memory().reads.borrow().iter().filter(|&&a| a == addr).count()
}

#[test]
fn test_trace_inherent_reads_only_opcode() {
    // NOP / NOP
    let mut cpu = setup_cpu(&[0x01, 0x01]);
    cpu.step().unwrap();

    assert_eq!(*cpu.memory().reads.borrow(), vec![0x8000]);
}

#[test]
fn test_trace_stays_inside_instruction() {
    // LDAA $1234, followed by a byte that must not be touched
    let mut cpu = setup_cpu(&[0xB6, 0x12, 0x34, 0x7E]);
    cpu.memory_mut().memory.write(0x1234, 0x5A);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(reads_of(&cpu, 0x8000), 1);
    assert_eq!(reads_of(&cpu, 0x1234), 1);
    assert_eq!(reads_of(&cpu, 0x8003), 0);

    let lines = LINES.lock().unwrap();
    assert!(lines
        .iter()
        .any(|line| line.starts_with("PC:8000") && line.contains("LDAA $1234")));
}

#[test]
fn test_trace_illegal_opcode() {
    let mut cpu = setup_cpu(&[0x02, 0x01]);
    assert!(cpu.step().is_err());

    assert_eq!(*cpu.memory().reads.borrow(), vec![0x8000]);
}

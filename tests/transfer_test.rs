//! Tests for register transfers and direct flag manipulation.

use mc6800::{ConditionCodes, Cpu, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write_u16(0xFFFE, 0x8000);
    let mut cpu = Cpu::new(memory);
    cpu.set_sp(0x01FF);
    cpu.set_cc(ConditionCodes::empty());
    cpu
}

#[test]
fn test_tab_tba() {
    let mut cpu = setup_cpu();

    // TAB / TBA
    cpu.memory_mut().load(0x8000, &[0x16, 0x17]);
    cpu.set_a(0x80);
    cpu.set_cc(ConditionCodes::V | ConditionCodes::C);

    cpu.step().unwrap();
    assert_eq!(cpu.b(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_v());
    assert!(cpu.flag_c());

    cpu.set_b(0x00);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_tpa_reads_unused_bits_as_ones() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x07]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xC0);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_tap_sets_every_flag() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x06, 0x06]);

    cpu.set_a(0xFF);
    cpu.step().unwrap();
    assert_eq!(cpu.cc(), ConditionCodes::all());
    assert_eq!(cpu.cc_byte(), 0xFF);

    cpu.set_a(0x00);
    cpu.step().unwrap();
    assert_eq!(cpu.cc(), ConditionCodes::empty());
    assert_eq!(cpu.cc_byte(), 0xC0);
}

#[test]
fn test_tap_tpa_round_trip() {
    let mut cpu = setup_cpu();

    // TAP / CLRA / TPA
    cpu.memory_mut().load(0x8000, &[0x06, 0x4F, 0x07]);
    cpu.set_a(0x2A);

    cpu.step().unwrap();
    cpu.step().unwrap();
    // CLRA rewrote N, Z, V and C
    assert_eq!(cpu.cc(), ConditionCodes::H | ConditionCodes::Z);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0xE4);
}

#[test]
fn test_flag_instructions() {
    let mut cpu = setup_cpu();

    // SEC / SEV / SEI / CLC / CLV / CLI
    cpu.memory_mut()
        .load(0x8000, &[0x0D, 0x0B, 0x0F, 0x0C, 0x0A, 0x0E]);

    cpu.step().unwrap();
    assert!(cpu.flag_c());
    cpu.step().unwrap();
    assert!(cpu.flag_v());
    cpu.step().unwrap();
    assert!(cpu.flag_i());
    assert_eq!(
        cpu.cc(),
        ConditionCodes::C | ConditionCodes::V | ConditionCodes::I
    );

    cpu.step().unwrap();
    assert!(!cpu.flag_c());
    cpu.step().unwrap();
    assert!(!cpu.flag_v());
    cpu.step().unwrap();
    assert!(!cpu.flag_i());
    assert_eq!(cpu.cc(), ConditionCodes::empty());
    assert_eq!(cpu.cycles(), 12);
}

#[test]
fn test_nop() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x01);
    cpu.set_a(0x12);
    let before = cpu.snapshot();

    cpu.step().unwrap();
    let after = cpu.snapshot();

    assert_eq!(after.pc, 0x8001);
    assert_eq!(after.cycles, 2);
    assert_eq!(after.a, before.a);
    assert_eq!(after.cc, before.cc);
}

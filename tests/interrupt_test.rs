//! Tests for the stack instructions and the interrupt sequence.
//!
//! Covers PSH/PUL, SWI, RTI, WAI, and interrupts requested through
//! `service_irq`/`service_nmi` on a single-stepped CPU.

use mc6800::{
    ConditionCodes, Cpu, FlatMemory, MemoryBus, StepOutcome, IRQ_VECTOR, NMI_VECTOR, SWI_VECTOR,
};

/// Helper function to create a CPU with reset vector at 0x8000 and the other
/// vectors at 0x9000 (IRQ), 0xA000 (SWI) and 0xB000 (NMI)
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write_u16(0xFFFE, 0x8000);
    memory.write_u16(IRQ_VECTOR, 0x9000);
    memory.write_u16(SWI_VECTOR, 0xA000);
    memory.write_u16(NMI_VECTOR, 0xB000);
    let mut cpu = Cpu::new(memory);
    cpu.set_sp(0x01FF);
    cpu.set_cc(ConditionCodes::empty());
    cpu
}

#[test]
fn test_psha_pulb() {
    let mut cpu = setup_cpu();

    // PSHA / PULB
    cpu.memory_mut().load(0x8000, &[0x36, 0x33]);
    cpu.set_a(0x42);

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x01FF), 0x42);
    assert_eq!(cpu.sp(), 0x01FE);
    assert_eq!(cpu.cycles(), 4);

    cpu.step().unwrap();
    assert_eq!(cpu.b(), 0x42);
    assert_eq!(cpu.sp(), 0x01FF);
    assert_eq!(cpu.cycles(), 8);
}

#[test]
fn test_push_pull_leave_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x37, 0x32]);
    cpu.set_b(0x00);
    cpu.set_cc(ConditionCodes::N);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.cc(), ConditionCodes::N);
}

#[test]
fn test_swi_stack_frame() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x3F);
    cpu.set_a(0x56);
    cpu.set_b(0x78);
    cpu.set_ix(0x1234);
    cpu.set_cc(ConditionCodes::C | ConditionCodes::Z);

    cpu.step().unwrap();

    // From SP+1 upward: CC, B, A, IXH, IXL, PCH, PCL
    assert_eq!(cpu.sp(), 0x01F8);
    let frame: Vec<u8> = (0x01F9..=0x01FF).map(|a| cpu.memory().read(a)).collect();
    assert_eq!(frame, vec![0xC5, 0x78, 0x56, 0x12, 0x34, 0x80, 0x01]);

    assert_eq!(cpu.pc(), 0xA000);
    assert!(cpu.flag_i());
    assert_eq!(cpu.cycles(), 12);
}

#[test]
fn test_swi_rti_round_trip() {
    let mut cpu = setup_cpu();

    // SWI at $8000, handler trashes registers and returns
    cpu.memory_mut().write(0x8000, 0x3F);
    // $A000: LDAA #$00 / LDAB #$FF / LDX #$0000 / RTI
    cpu.memory_mut()
        .load(0xA000, &[0x86, 0x00, 0xC6, 0xFF, 0xCE, 0x00, 0x00, 0x3B]);

    cpu.set_a(0x11);
    cpu.set_b(0x22);
    cpu.set_ix(0xBEEF);
    cpu.set_cc(ConditionCodes::H | ConditionCodes::V);

    for _ in 0..5 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.sp(), 0x01FF);
    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.b(), 0x22);
    assert_eq!(cpu.ix(), 0xBEEF);
    assert_eq!(cpu.cc(), ConditionCodes::H | ConditionCodes::V);
    assert_eq!(cpu.cycles(), 12 + 2 + 2 + 3 + 10);
}

#[test]
fn test_rti_restores_stacked_interrupt_mask() {
    let mut cpu = setup_cpu();

    // Hand-built frame with I set in the stacked CC
    cpu.memory_mut()
        .load(0x01F9, &[0xD0, 0x02, 0x01, 0x00, 0x10, 0x40, 0x00]);
    cpu.set_sp(0x01F8);
    cpu.memory_mut().write(0x8000, 0x3B);

    cpu.step().unwrap();

    assert!(cpu.flag_i());
    assert_eq!(cpu.b(), 0x02);
    assert_eq!(cpu.a(), 0x01);
    assert_eq!(cpu.ix(), 0x0010);
    assert_eq!(cpu.pc(), 0x4000);
    assert_eq!(cpu.cycles(), 10);
}

#[test]
fn test_irq_respects_mask() {
    let mut cpu = setup_cpu();
    cpu.set_cc(ConditionCodes::I);

    assert!(!cpu.service_irq());
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0x01FF);
    assert_eq!(cpu.cycles(), 0);

    // CLI
    cpu.memory_mut().write(0x8000, 0x0E);
    cpu.step().unwrap();

    assert!(cpu.service_irq());
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0x01F8);
    assert!(cpu.flag_i());
    assert_eq!(cpu.cycles(), 2 + 12);
    // Return address is the next instruction
    assert_eq!(cpu.memory().read_u16(0x01FE), 0x8001);
}

#[test]
fn test_nmi_ignores_mask() {
    let mut cpu = setup_cpu();
    cpu.set_cc(ConditionCodes::I);

    cpu.service_nmi();

    assert_eq!(cpu.pc(), 0xB000);
    assert_eq!(cpu.sp(), 0x01F8);
    // Stacked CC has I set and the two unused bits high
    assert_eq!(cpu.memory().read(0x01F9), 0xD0);
}

#[test]
fn test_wai_reports_wait() {
    let mut cpu = setup_cpu();

    // WAI / NOP
    cpu.memory_mut().load(0x8000, &[0x3E, 0x01]);

    assert_eq!(cpu.step().unwrap(), StepOutcome::WaitForInterrupt);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 9);

    // The interrupt wakes it and the handler returns past the WAI
    cpu.service_nmi();
    assert_eq!(cpu.pc(), 0xB000);
    assert_eq!(cpu.memory().read_u16(0x01FE), 0x8001);
}

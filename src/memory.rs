//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! cards plugged into the system bus. This enables flexible memory
//! configurations including:
//!
//! - Flat 64KB RAM (FlatMemory implementation provided)
//! - Memory-mapped I/O such as the MP-S serial interface
//! - ROM monitors mapped over the interrupt vectors
//! - Debugging wrappers that count or log bus cycles
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6800 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads may return garbage
//! - Writes to ROM/unmapped regions may be ignored
//! - 16-bit quantities are big-endian: high byte at the lower address

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, ROM, I/O) through this abstraction.
///
/// A bus driven by [`crate::Motorola6800`] is moved onto the dispatch thread,
/// so it must also be `Send + 'static` there.
///
/// # Examples
///
/// ```
/// use mc6800::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// mem.write_u16(0xFFFE, 0xE0D0);
/// assert_eq!(mem.read(0xFFFE), 0xE0);
/// assert_eq!(mem.read(0xFFFF), 0xD0);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use mc6800::MemoryBus;
///
/// struct MonitorSystem {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x0400],  // 1KB monitor ROM mirrored at 0xE000-0xFFFF
/// }
///
/// impl MemoryBus for MonitorSystem {
///     fn read(&self, addr: u16) -> u8 {
///         match addr {
///             0x0000..=0x7FFF => self.ram[addr as usize],
///             0xE000..=0xFFFF => self.rom[(addr & 0x03FF) as usize],
///             _ => 0xFF,
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. If the address is unmapped,
    /// implementations may return garbage data (matching hardware behavior).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only or unmapped,
    /// implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a big-endian 16-bit value as two bus cycles, high byte first.
    fn read_u16(&self, addr: u16) -> u16 {
        let high = self.read(addr) as u16;
        let low = self.read(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Writes a big-endian 16-bit value as two bus cycles, high byte first.
    fn write_u16(&mut self, addr: u16, value: u16) {
        self.write(addr, (value >> 8) as u8);
        self.write(addr.wrapping_add(1), value as u8);
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous RAM
/// array initialized to 0x00. Useful for tests and for programs that do not
/// need ROM/RAM distinction.
///
/// # Examples
///
/// ```
/// use mc6800::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_u16(0xFFFE, 0x0100); // Reset vector
/// memory.write(0x0100, 0x01);       // NOP
///
/// let cpu = Cpu::new(memory);
/// assert_eq!(cpu.pc(), 0x0100);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `addr`, wrapping at 0xFFFF.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut addr = addr;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        // Initially all zeros
        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_word_access_is_big_endian() {
        let mut mem = FlatMemory::new();
        mem.write_u16(0x2000, 0xABCD);
        assert_eq!(mem.read(0x2000), 0xAB);
        assert_eq!(mem.read(0x2001), 0xCD);
        assert_eq!(mem.read_u16(0x2000), 0xABCD);
    }

    #[test]
    fn test_word_access_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write_u16(0xFFFF, 0x1234);
        assert_eq!(mem.read(0xFFFF), 0x12);
        assert_eq!(mem.read(0x0000), 0x34);
    }

    #[test]
    fn test_load_block() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFE, &[0x01, 0x02, 0x03]);
        assert_eq!(mem.read(0xFFFE), 0x01);
        assert_eq!(mem.read(0xFFFF), 0x02);
        assert_eq!(mem.read(0x0000), 0x03);
    }
}

//! # Threaded Processor
//!
//! [`Motorola6800`] runs a [`Cpu`] on its own dispatch thread and exposes the
//! processor's input pins to the rest of the system:
//!
//! - **IRQ**: level sensitive, honored while the I flag is clear
//! - **NMI**: edge triggered, latched by `trip_nmi` and consumed when serviced
//! - **RESET**: stops the processor; releasing it restarts from the reset vector
//! - **HALT**: stops the processor; releasing it resumes where it stopped
//!
//! ## Locking
//!
//! Two locks are involved. The control lines and the running/powered flags
//! live in one mutex with a condition variable; every line change notifies it.
//! The register file and bus sit behind a second mutex that the dispatch thread
//! holds for exactly one instruction at a time and never while it is blocked.
//! When both are needed the register file is always locked first.
//!
//! Control methods must not be called from inside a [`MemoryBus`]
//! implementation: the bus runs on the dispatch thread, and `raise_reset` or
//! `raise_halt` would wait for that same thread to acknowledge.

use crate::config::Config;
use crate::cpu::{Cpu, StepOutcome};
use crate::state::CpuState;
use crate::stats::OpcodeStats;
use crate::MemoryBus;
use std::io;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

/// State of the processor's input pins plus the dispatch thread's status.
#[derive(Debug, Default)]
struct ControlLines {
    irq: bool,
    nmi: bool,
    reset: bool,
    halt: bool,
    /// The dispatch thread is issuing bus cycles.
    running: bool,
    powered: bool,
}

struct Monitor {
    lines: Mutex<ControlLines>,
    signal: Condvar,
}

impl Monitor {
    fn lock(&self) -> MutexGuard<'_, ControlLines> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait<'a>(&self, guard: MutexGuard<'a, ControlLines>) -> MutexGuard<'a, ControlLines> {
        self.signal
            .wait(guard)
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.signal.notify_all();
    }

    /// Blocks until the dispatch thread has stopped for RESET/HALT, the lines
    /// are released, or power is cut.
    fn wait_for_stop(&self, mut lines: MutexGuard<'_, ControlLines>) {
        while (lines.reset || lines.halt) && lines.running && lines.powered {
            lines = self.wait(lines);
        }
    }
}

fn lock_core<M: MemoryBus>(core: &Mutex<Cpu<M>>) -> MutexGuard<'_, Cpu<M>> {
    core.lock().unwrap_or_else(PoisonError::into_inner)
}

enum Interrupt {
    Nmi,
    Irq,
}

/// A 6800 processor running on a dedicated thread.
///
/// All methods take `&self`, so the processor can be shared between threads
/// behind an `Arc`.
///
/// # Examples
///
/// ```
/// use mc6800::{FlatMemory, MemoryBus, Motorola6800};
/// use std::time::{Duration, Instant};
///
/// let mut memory = FlatMemory::new();
/// memory.write_u16(0xFFFE, 0x0100);
/// // 0100: INCA / BRA $0100
/// memory.load(0x0100, &[0x4C, 0x20, 0xFD]);
///
/// let cpu = Motorola6800::new(memory);
/// cpu.power_on().unwrap();
///
/// let deadline = Instant::now() + Duration::from_secs(5);
/// while cpu.snapshot().cycles < 1000 && Instant::now() < deadline {
///     std::thread::yield_now();
/// }
///
/// cpu.raise_halt();
/// let state = cpu.snapshot();
/// assert!(state.cycles >= 1000);
/// assert!(!cpu.is_running());
///
/// cpu.power_off();
/// assert!(!cpu.is_powered_on());
/// ```
pub struct Motorola6800<M: MemoryBus + Send + 'static> {
    core: Arc<Mutex<Cpu<M>>>,
    monitor: Arc<Monitor>,
    config: Config,
    dispatcher: Mutex<Option<JoinHandle<()>>>,
}

impl<M: MemoryBus + Send + 'static> Motorola6800<M> {
    /// Creates a powered-off processor attached to `bus`.
    pub fn new(bus: M) -> Self {
        Self::with_config(bus, Config::default())
    }

    /// Creates a powered-off processor with explicit settings.
    pub fn with_config(bus: M, config: Config) -> Self {
        let mut cpu = Cpu::new(bus);
        if config.collect_stats {
            cpu.enable_stats();
        }
        Self {
            core: Arc::new(Mutex::new(cpu)),
            monitor: Arc::new(Monitor {
                lines: Mutex::new(ControlLines::default()),
                signal: Condvar::new(),
            }),
            config,
            dispatcher: Mutex::new(None),
        }
    }

    /// Powers the processor on and starts the dispatch thread.
    ///
    /// Clears the IRQ, NMI and RESET latches, sets I and loads PC from the
    /// reset vector. A HALT line that is held stays held. Does nothing if the
    /// processor is already on.
    ///
    /// # Errors
    ///
    /// Returns the error from the OS if the thread cannot be spawned.
    pub fn power_on(&self) -> io::Result<()> {
        let mut dispatcher = self
            .dispatcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.monitor.lock().powered {
            return Ok(());
        }
        // A previous dispatch thread has already exited; reap it
        if let Some(stale) = dispatcher.take() {
            let _ = stale.join();
        }

        let mut cpu = lock_core(&self.core);
        cpu.reset();
        {
            let mut lines = self.monitor.lock();
            lines.irq = false;
            lines.nmi = false;
            lines.reset = false;
            lines.powered = true;
            lines.running = true;
        }
        drop(cpu);

        let core = Arc::clone(&self.core);
        let monitor = Arc::clone(&self.monitor);
        let spawned = thread::Builder::new()
            .name(self.config.thread_name.clone())
            .spawn(move || dispatch_loop(&core, &monitor));

        match spawned {
            Ok(handle) => {
                log::debug!("power on: dispatch thread '{}' started", self.config.thread_name);
                *dispatcher = Some(handle);
                Ok(())
            }
            Err(err) => {
                let mut lines = self.monitor.lock();
                lines.powered = false;
                lines.running = false;
                Err(err)
            }
        }
    }

    /// Powers the processor off and joins the dispatch thread.
    ///
    /// Any thread blocked in `raise_reset` or `raise_halt` is released.
    pub fn power_off(&self) {
        {
            let mut lines = self.monitor.lock();
            lines.powered = false;
            self.monitor.notify();
        }
        let handle = self
            .dispatcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if handle.thread().id() == thread::current().id() {
                return;
            }
            if handle.join().is_err() {
                log::warn!("dispatch thread panicked before power off");
            }
            log::debug!("power off: dispatch thread joined");
        }
    }

    pub fn is_powered_on(&self) -> bool {
        self.monitor.lock().powered
    }

    /// Whether the dispatch thread is currently executing (not stopped by
    /// RESET or HALT, and powered).
    pub fn is_running(&self) -> bool {
        let lines = self.monitor.lock();
        lines.running && lines.powered
    }

    /// Asserts the IRQ line. It stays asserted until `lower_irq`.
    pub fn raise_irq(&self) {
        self.monitor.lock().irq = true;
        self.monitor.notify();
    }

    pub fn lower_irq(&self) {
        self.monitor.lock().irq = false;
        self.monitor.notify();
    }

    /// Latches a non-maskable interrupt. It is serviced once.
    pub fn trip_nmi(&self) {
        self.monitor.lock().nmi = true;
        self.monitor.notify();
    }

    /// Asserts RESET and waits until the processor has stopped.
    ///
    /// On return the dispatch thread issues no more bus cycles until RESET
    /// (and HALT) are released, or the processor is powered off.
    pub fn raise_reset(&self) {
        let mut lines = self.monitor.lock();
        lines.reset = true;
        self.monitor.notify();
        self.monitor.wait_for_stop(lines);
    }

    /// Releases RESET. The processor restarts from the reset vector.
    pub fn lower_reset(&self) {
        self.monitor.lock().reset = false;
        self.monitor.notify();
    }

    /// Asserts HALT and waits until the processor has stopped.
    pub fn raise_halt(&self) {
        let mut lines = self.monitor.lock();
        lines.halt = true;
        self.monitor.notify();
        self.monitor.wait_for_stop(lines);
    }

    /// Releases HALT. The processor resumes where it stopped.
    pub fn lower_halt(&self) {
        self.monitor.lock().halt = false;
        self.monitor.notify();
    }

    /// Copies the register file between two instructions.
    pub fn snapshot(&self) -> CpuState {
        lock_core(&self.core).snapshot()
    }

    /// Copies the opcode counters, if `collect_stats` is enabled.
    pub fn opcode_stats(&self) -> Option<OpcodeStats> {
        lock_core(&self.core).stats().cloned()
    }

    /// Runs `f` with exclusive access to the CPU and its bus.
    ///
    /// The dispatch thread is paused between instructions for the duration.
    ///
    /// `f` must not call `raise_reset`, `raise_halt` or `power_off` on this
    /// processor. Each of them waits for the dispatch thread, which cannot
    /// proceed while `f` holds the register file, so the call deadlocks.
    pub fn with_cpu<R>(&self, f: impl FnOnce(&mut Cpu<M>) -> R) -> R {
        f(&mut lock_core(&self.core))
    }
}

impl<M: MemoryBus + Send + 'static> Drop for Motorola6800<M> {
    fn drop(&mut self) {
        self.power_off();
    }
}

/// Body of the dispatch thread.
///
/// After WAI the thread issues no instructions until an interrupt has actually
/// been taken or RESET restarts the processor. Waking for any other reason
/// (HALT, or an IRQ lowered before it was serviced) goes back to waiting.
fn dispatch_loop<M: MemoryBus>(core: &Mutex<Cpu<M>>, monitor: &Monitor) {
    let mut waiting = false;
    loop {
        let reset_seen = match wait_while_stopped(monitor) {
            Some(reset_seen) => reset_seen,
            None => return,
        };
        if reset_seen {
            lock_core(core).reset();
            waiting = false;
        }

        let mut cpu = lock_core(core);
        let pending = {
            let mut lines = monitor.lock();
            if !lines.powered {
                lines.running = false;
                monitor.notify();
                return;
            }
            if lines.reset || lines.halt {
                continue;
            }
            if lines.nmi {
                lines.nmi = false;
                Some(Interrupt::Nmi)
            } else if lines.irq && !cpu.flag_i() {
                Some(Interrupt::Irq)
            } else {
                None
            }
        };

        match pending {
            Some(Interrupt::Nmi) => {
                cpu.service_nmi();
                waiting = false;
            }
            Some(Interrupt::Irq) => {
                cpu.service_irq();
                waiting = false;
            }
            None if waiting => {
                let masked = cpu.flag_i();
                drop(cpu);
                wait_for_interrupt(monitor, masked);
                continue;
            }
            None => {}
        }

        match cpu.step() {
            Ok(StepOutcome::Continue) => {}
            Ok(StepOutcome::WaitForInterrupt) => waiting = true,
            Err(err) => log::warn!("{}", err),
        }
    }
}

/// Parks the dispatch thread while RESET or HALT is asserted.
///
/// Returns `None` once power is cut, otherwise whether RESET was seen.
fn wait_while_stopped(monitor: &Monitor) -> Option<bool> {
    let mut lines = monitor.lock();
    let mut reset_seen = false;
    while lines.powered && (lines.reset || lines.halt) {
        reset_seen |= lines.reset;
        if lines.running {
            lines.running = false;
            log::debug!("stopped (reset={}, halt={})", lines.reset, lines.halt);
            monitor.notify();
        }
        lines = monitor.wait(lines);
    }
    if !lines.powered {
        lines.running = false;
        monitor.notify();
        return None;
    }
    if !lines.running {
        lines.running = true;
        log::debug!("resumed{}", if reset_seen { " from reset" } else { "" });
    }
    Some(reset_seen)
}

/// Parks the dispatch thread after WAI until an interrupt can be taken.
///
/// RESET, HALT and power-off also end the wait so the main loop can handle
/// them. The caller keeps waiting if nothing was serviced.
fn wait_for_interrupt(monitor: &Monitor, masked: bool) {
    let mut lines = monitor.lock();
    log::debug!("WAI: waiting for interrupt");
    while !lines.nmi && !(lines.irq && !masked) && !lines.reset && !lines.halt && lines.powered {
        lines = monitor.wait(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_new_is_powered_off() {
        let cpu = Motorola6800::new(FlatMemory::new());
        assert!(!cpu.is_powered_on());
        assert!(!cpu.is_running());
        // Stop requests on a powered-off processor return immediately
        cpu.raise_reset();
        cpu.raise_halt();
        cpu.power_off();
    }

    #[test]
    fn test_power_on_twice_is_noop() {
        let mut memory = FlatMemory::new();
        memory.write_u16(0xFFFE, 0x0200);
        memory.load(0x0200, &[0x20, 0xFE]); // BRA *
        let cpu = Motorola6800::new(memory);

        cpu.power_on().unwrap();
        cpu.power_on().unwrap();
        assert!(cpu.is_powered_on());

        cpu.power_off();
        assert!(!cpu.is_powered_on());
        assert!(!cpu.is_running());

        // And it can be switched back on
        cpu.power_on().unwrap();
        assert!(cpu.is_powered_on());
    }

    #[test]
    fn test_stats_enabled_by_config() {
        let config = Config {
            collect_stats: true,
            ..Config::default()
        };
        let cpu = Motorola6800::with_config(FlatMemory::new(), config);
        assert_eq!(cpu.opcode_stats().map(|s| s.total()), Some(0));

        let cpu = Motorola6800::new(FlatMemory::new());
        assert!(cpu.opcode_stats().is_none());
    }
}

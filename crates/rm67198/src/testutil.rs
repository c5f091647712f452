//! Recording test doubles for the hardware seams.
//!
//! The mocks keep their observable state behind `Rc` handles so tests
//! can inspect traffic and counters while the panel owns the mock.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::interface::DsiInterface;
use crate::power::PowerSupply;

/// One recorded transport operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Generic(Vec<u8>),
    Dcs(u8, Vec<u8>),
    DcsRead(u8),
    LowPower(bool),
}

/// Shared recording of every operation a [`MockDsi`] saw.
pub type OpLog = Rc<RefCell<Vec<Op>>>;

/// DSI transport double: records all traffic, optionally rejects the
/// n-th write (0-based, counting generic writes, DCS writes and reads).
pub struct MockDsi {
    ops: OpLog,
    fail_at: Option<usize>,
    writes: usize,
    /// 16-bit value returned for brightness reads.
    pub brightness: u16,
}

impl MockDsi {
    pub fn new() -> Self {
        Self {
            ops: Rc::new(RefCell::new(Vec::new())),
            fail_at: None,
            writes: 0,
            brightness: 0,
        }
    }

    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::new()
        }
    }

    /// Handle onto the operation log, alive after the mock moves into
    /// a panel.
    pub fn ops(&self) -> OpLog {
        Rc::clone(&self.ops)
    }

    fn check_fail(&mut self) -> Result<(), &'static str> {
        let index = self.writes;
        self.writes += 1;
        if self.fail_at == Some(index) {
            return Err("write rejected");
        }
        Ok(())
    }
}

impl DsiInterface for MockDsi {
    type Error = &'static str;

    fn generic_write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.ops.borrow_mut().push(Op::Generic(data.to_vec()));
        self.check_fail()
    }

    fn dcs_write(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error> {
        self.ops.borrow_mut().push(Op::Dcs(cmd, params.to_vec()));
        self.check_fail()
    }

    fn dcs_read(&mut self, cmd: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.ops.borrow_mut().push(Op::DcsRead(cmd));
        self.check_fail()?;
        let bytes = self.brightness.to_le_bytes();
        let n = buf.len().min(2);
        buf[..n].copy_from_slice(&bytes[..n]);
        Ok(n)
    }

    fn set_low_power(&mut self, low_power: bool) {
        self.ops.borrow_mut().push(Op::LowPower(low_power));
    }
}

/// Reset-line double exposing the driven level through a handle.
pub struct RecordingPin {
    level: Rc<Cell<bool>>,
}

impl RecordingPin {
    pub fn new() -> Self {
        Self {
            level: Rc::new(Cell::new(false)),
        }
    }

    /// Handle onto the pin level (`true` = high = reset asserted).
    pub fn handle(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.level)
    }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

/// Power rail double counting enable/disable calls.
pub struct MockSupply {
    enables: Rc<Cell<u32>>,
    disables: Rc<Cell<u32>>,
    fail_enable: bool,
}

impl MockSupply {
    pub fn new() -> Self {
        Self {
            enables: Rc::new(Cell::new(0)),
            disables: Rc::new(Cell::new(0)),
            fail_enable: false,
        }
    }

    pub fn failing_enable() -> Self {
        Self {
            fail_enable: true,
            ..Self::new()
        }
    }

    /// Handles onto the counters, alive after the supply moves into a
    /// panel.
    pub fn counters(&self) -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        (Rc::clone(&self.enables), Rc::clone(&self.disables))
    }
}

impl PowerSupply for MockSupply {
    type Error = &'static str;

    fn enable(&mut self) -> Result<(), Self::Error> {
        if self.fail_enable {
            return Err("supply unavailable");
        }
        self.enables.set(self.enables.get() + 1);
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.disables.set(self.disables.get() + 1);
        Ok(())
    }
}

/// Delay double; the vendor settling times are irrelevant in tests.
pub struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

//! Secure monitor (SiP) calls
//!
//! Older i.MX8MQ parts do not expose their silicon revision in fuses;
//! the trusted firmware reports it through a SiP service call instead.
//! The same interface answers whether the Cortex-M4 coprocessor was
//! started. [`SecureMonitor`] abstracts the SMC dispatch.

use log::info;

/// SiP function: query SoC info (revision in the low byte).
pub const SIP_GET_SOC_INFO: u32 = 0xC200_0006;
/// SiP function: system reset controller services.
pub const SIP_SRC: u32 = 0xC200_0005;
/// SIP_SRC subfunction: has the M4 been started?
pub const SIP_SRC_M4_STARTED: u32 = 0x01;

/// Standard SMCCC "function not implemented" return.
pub const SMCCC_NOT_SUPPORTED: i64 = -1;

/// Dispatcher for secure monitor calls.
///
/// `call` returns the a0 result register of the SMC.
pub trait SecureMonitor {
    fn call(&mut self, function: u32, arg: u32) -> i64;
}

/// Query the silicon revision from the trusted firmware.
///
/// Returns 0 when the firmware does not implement the service; the
/// caller falls back to the fuse sentinel.
pub fn soc_revision<M: SecureMonitor>(monitor: &mut M) -> u8 {
    let res = monitor.call(SIP_GET_SOC_INFO, 0);
    if res == SMCCC_NOT_SUPPORTED {
        0
    } else {
        (res & 0xff) as u8
    }
}

/// Ask the firmware whether the M4 coprocessor is running.
pub fn m4_started<M: SecureMonitor>(monitor: &mut M) -> bool {
    let started = monitor.call(SIP_SRC, SIP_SRC_M4_STARTED) != 0;
    if started {
        info!("M4 is started");
    }
    started
}

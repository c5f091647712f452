//! DSI transport abstraction
//!
//! This module provides the [`DsiInterface`] trait the panel driver talks
//! through. The RM67198 sits on a MIPI-DSI link; there is no embedded-hal
//! trait for DSI, so the host transport (a platform DSI peripheral, a
//! bridge chip, or a test double) implements this seam.
//!
//! The panel only ever needs:
//! - ordered generic byte-sequence writes (manufacturer configuration),
//! - DCS writes and one DCS read (brightness),
//! - a toggle between low-power command mode and high-speed mode.

use core::fmt::Debug;

/// Trait for the MIPI-DSI transport carrying panel traffic.
///
/// Implementations must preserve call order: the manufacturer command
/// set depends on earlier page-select writes reaching the panel before
/// the registers that live on that page.
pub trait DsiInterface {
    /// Error type for transport operations
    type Error: Debug;

    /// Send a generic (non-DCS) packet.
    fn generic_write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Send a DCS command with optional parameters.
    fn dcs_write(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error>;

    /// Read the response of a DCS command into `buf`, returning the
    /// number of bytes received.
    fn dcs_read(&mut self, cmd: u8, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Switch the link between low-power command mode (`true`) and
    /// high-speed mode (`false`). Pure link-layer state, cannot fail.
    fn set_low_power(&mut self, low_power: bool);
}

//! Fuse and revision register windows
//!
//! The i.MX8M keeps its unique ID in one-time-programmable OCOTP fuses
//! and (on the Mini/Nano/Plus family) its silicon revision in the
//! anatop DIGPROG register. [`FuseMap`] is the seam a memory-mapped
//! register window or a test double implements; the reader only ever
//! issues 32-bit reads at fixed offsets.

use core::fmt::Debug;

/// OCOTP offset of the unique-ID low word.
pub const OCOTP_UID_LOW: u32 = 0x410;
/// OCOTP offset of the unique-ID high word.
pub const OCOTP_UID_HIGH: u32 = 0x420;

/// OCOTP offset of the i.MX8MQ software-info sentinel word.
pub const OCOTP_SW_INFO_B1: u32 = 0x40;
/// Sentinel value marking a B1 revision part.
pub const SW_MAGIC_B1: u32 = 0xFF00_55AA;
/// Silicon revision encoded by the B1 sentinel (2.1).
pub const REV_B1: u8 = 0x21;

/// Anatop offset of the DIGPROG revision word (same layout as the
/// i.MX7D).
pub const ANADIG_DIGPROG: u32 = 0x800;

/// A 32-bit register window over a fuse or revision block.
pub trait FuseMap {
    /// Error type for window accesses
    type Error: Debug;

    /// Read the 32-bit word at `offset` bytes into the window.
    fn read(&mut self, offset: u32) -> Result<u32, Self::Error>;
}

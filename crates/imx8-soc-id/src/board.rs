//! Vendor board identification (optional capability)
//!
//! Some carrier boards strap a handful of GPIOs to encode the SOM
//! revision. This is a board-level extra, not part of SoC
//! identification proper, so it lives behind the `board-info` feature
//! and is only invoked when the platform actually wires the straps up.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::identity::SocIdentity;

/// BSP release string reported alongside the board revision.
pub const BSP_VERSION: &str = "iW-PRGJZ-SC-01-R1.0-REL0.1-Linux5.4.24";

/// The SOM revision strap pins, LSB first.
pub struct SomStraps<P, const N: usize> {
    pins: [P; N],
}

impl<P: InputPin, const N: usize> SomStraps<P, N> {
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Read the strap word. Returns `None` if any pin read fails; the
    /// caller degrades to revision 0 rather than failing.
    pub fn revision(&mut self) -> Option<u8> {
        let mut revision = 0u8;
        for (i, pin) in self.pins.iter_mut().enumerate() {
            match pin.is_high() {
                Ok(true) => revision |= 1 << i,
                Ok(false) => {}
                Err(e) => {
                    warn!("unable to read SOM revision strap {i}: {e:?}");
                    return None;
                }
            }
        }
        Some(revision)
    }
}

/// Decoded SOM revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardInfo {
    /// PCB revision, 1-based
    pub pcb_rev: u8,
    /// BOM revision
    pub bom_rev: u8,
}

impl BoardInfo {
    /// Decode the strap word; an unreadable word decodes to 0/0.
    pub fn from_revision(revision: Option<u8>) -> Self {
        match revision {
            Some(rev) => BoardInfo {
                pcb_rev: (rev & 0x03) + 1,
                bom_rev: (rev & 0x78) >> 3,
            },
            None => BoardInfo {
                pcb_rev: 0,
                bom_rev: 0,
            },
        }
    }
}

/// Boot-time board report, rendered in the vendor's banner format.
pub struct BoardReport<'a> {
    pub info: BoardInfo,
    pub identity: &'a SocIdentity<'a>,
}

impl core::fmt::Display for BoardReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Board Info:")?;
        writeln!(f, "\tBSP Version               : {BSP_VERSION}")?;
        writeln!(
            f,
            "\tSOM Version               : iW-PRGJZ-AP-01-R{:x}.{:x}",
            self.info.pcb_rev, self.info.bom_rev
        )?;
        writeln!(
            f,
            "\tCPU Unique ID             : 0x{:016X}",
            self.identity.uid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    struct StrapPin(bool);

    impl ErrorType for StrapPin {
        type Error = Infallible;
    }

    impl InputPin for StrapPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[test]
    fn straps_read_lsb_first() {
        let mut straps = SomStraps::new([
            StrapPin(true),
            StrapPin(false),
            StrapPin(true),
            StrapPin(false),
        ]);
        assert_eq!(straps.revision(), Some(0b0101));
    }

    #[test]
    fn board_info_decodes_pcb_and_bom() {
        let info = BoardInfo::from_revision(Some(0b0000_0101));
        assert_eq!(info.pcb_rev, 2); // (rev & 0x03) + 1
        assert_eq!(info.bom_rev, 0); // (rev & 0x78) >> 3

        let info = BoardInfo::from_revision(Some(0b0101_1010));
        assert_eq!(info.pcb_rev, 3);
        assert_eq!(info.bom_rev, 0b1011);
    }

    #[test]
    fn unreadable_straps_decode_to_zero() {
        let info = BoardInfo::from_revision(None);
        assert_eq!((info.pcb_rev, info.bom_rev), (0, 0));
    }
}

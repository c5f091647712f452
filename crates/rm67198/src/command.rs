//! RM67198 command definitions
//!
//! DCS opcodes the driver issues, the panel-specific interface pixel
//! format codes, and the vendor manufacturer command set (CMD2 pages).

// Display Command Set (DCS) opcodes
pub const SOFT_RESET: u8 = 0x01; // Software reset
pub const ENTER_SLEEP_MODE: u8 = 0x10; // Enter low-power sleep
pub const EXIT_SLEEP_MODE: u8 = 0x11; // Exit low-power sleep
pub const SET_DISPLAY_OFF: u8 = 0x28; // Blank the display output
pub const SET_DISPLAY_ON: u8 = 0x29; // Unblank the display output
pub const SET_TEAR_ON: u8 = 0x35; // Enable tearing effect signal
pub const SET_PIXEL_FORMAT: u8 = 0x3A; // Interface pixel format
pub const SET_TEAR_SCANLINE: u8 = 0x44; // Tearing effect scanline
pub const SET_DISPLAY_BRIGHTNESS: u8 = 0x51; // Write display brightness
pub const GET_DISPLAY_BRIGHTNESS: u8 = 0x52; // Read display brightness

// Tearing effect mode parameter for SET_TEAR_ON
pub const TEAR_MODE_VBLANK: u8 = 0x00;

// Write Manufacture Command Set Control. Selects the manufacturer
// command page; page 0x00 returns to the User Command Set (CMD1).
pub const WRMAUCCTR: u8 = 0xFE;

// DSI mode register on CMD1, written as a generic packet
pub const DSI_MODE_REG: u8 = 0xC2;
pub const DSI_MODE_VIDEO: u8 = 0x08;

// Panel-specific interface pixel format codes for SET_PIXEL_FORMAT
pub const COL_FMT_16BPP: u8 = 0x55;
pub const COL_FMT_18BPP: u8 = 0x66;
pub const COL_FMT_24BPP: u8 = 0x77;

/// A single manufacturer configuration write: one register, one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterCommand {
    /// Register address
    pub addr: u8,
    /// Value written to the register
    pub value: u8,
}

impl RegisterCommand {
    pub const fn new(addr: u8, value: u8) -> Self {
        Self { addr, value }
    }
}

/// Manufacturer Command Set (CMD2) initialization table.
///
/// There is no description in the panel reference manual for these
/// writes; the vendor supplied them and they are applied as-is. Order
/// matters: `WRMAUCCTR` entries select the command page the following
/// registers live on, so the table must be pushed in full, in order.
pub static MANUFACTURER_CMD_SET: [RegisterCommand; 117] = [
    RegisterCommand::new(0xFE, 0xD0),
    RegisterCommand::new(0x40, 0x02),
    RegisterCommand::new(0x4B, 0x4C),
    RegisterCommand::new(0x49, 0x01),
    RegisterCommand::new(0xFE, 0x70),
    RegisterCommand::new(0x48, 0x05),
    RegisterCommand::new(0x52, 0x00),
    RegisterCommand::new(0x5A, 0xFF),
    RegisterCommand::new(0x5C, 0xF6),
    RegisterCommand::new(0x5D, 0x07),
    RegisterCommand::new(0x7D, 0x35),
    RegisterCommand::new(0x86, 0x07),
    RegisterCommand::new(0xA7, 0x02),
    RegisterCommand::new(0xA9, 0x2C),
    RegisterCommand::new(0xFE, 0xA0),
    RegisterCommand::new(0x2B, 0x18),
    RegisterCommand::new(0xFE, 0x90),
    RegisterCommand::new(0x26, 0x10),
    RegisterCommand::new(0x28, 0x20),
    RegisterCommand::new(0x2A, 0x40),
    RegisterCommand::new(0x2D, 0x60),
    RegisterCommand::new(0x30, 0x70),
    RegisterCommand::new(0x32, 0x80),
    RegisterCommand::new(0x34, 0x90),
    RegisterCommand::new(0x36, 0x98),
    RegisterCommand::new(0x38, 0xA0),
    RegisterCommand::new(0x3A, 0xC0),
    RegisterCommand::new(0x3D, 0xE0),
    RegisterCommand::new(0x40, 0xF0),
    RegisterCommand::new(0x42, 0x00),
    RegisterCommand::new(0x43, 0x01),
    RegisterCommand::new(0x44, 0x40),
    RegisterCommand::new(0x45, 0x01),
    RegisterCommand::new(0x46, 0x80),
    RegisterCommand::new(0x47, 0x01),
    RegisterCommand::new(0x48, 0xC0),
    RegisterCommand::new(0x49, 0x01),
    RegisterCommand::new(0x4A, 0x00),
    RegisterCommand::new(0x4B, 0x02),
    RegisterCommand::new(0x4C, 0x40),
    RegisterCommand::new(0x4D, 0x02),
    RegisterCommand::new(0x4E, 0x80),
    RegisterCommand::new(0x4F, 0x02),
    RegisterCommand::new(0x50, 0x00),
    RegisterCommand::new(0x51, 0x03),
    RegisterCommand::new(0x52, 0x80),
    RegisterCommand::new(0x53, 0x03),
    RegisterCommand::new(0x54, 0x00),
    RegisterCommand::new(0x55, 0x04),
    RegisterCommand::new(0x56, 0x8D),
    RegisterCommand::new(0x58, 0x04),
    RegisterCommand::new(0x59, 0x20),
    RegisterCommand::new(0x5A, 0x05),
    RegisterCommand::new(0x5B, 0xBD),
    RegisterCommand::new(0x5C, 0x05),
    RegisterCommand::new(0x5D, 0x63),
    RegisterCommand::new(0x5E, 0x06),
    RegisterCommand::new(0x5F, 0x13),
    RegisterCommand::new(0x60, 0x07),
    RegisterCommand::new(0x61, 0xCD),
    RegisterCommand::new(0x62, 0x07),
    RegisterCommand::new(0x63, 0x91),
    RegisterCommand::new(0x64, 0x08),
    RegisterCommand::new(0x65, 0x60),
    RegisterCommand::new(0x66, 0x09),
    RegisterCommand::new(0x67, 0x38),
    RegisterCommand::new(0x68, 0x0A),
    RegisterCommand::new(0x69, 0x1A),
    RegisterCommand::new(0x6A, 0x0B),
    RegisterCommand::new(0x6B, 0x07),
    RegisterCommand::new(0x6C, 0x0C),
    RegisterCommand::new(0x6D, 0xFE),
    RegisterCommand::new(0x6E, 0x0C),
    RegisterCommand::new(0x6F, 0x00),
    RegisterCommand::new(0x70, 0x0E),
    RegisterCommand::new(0x71, 0x0C),
    RegisterCommand::new(0x72, 0x0F),
    RegisterCommand::new(0x73, 0x96),
    RegisterCommand::new(0x74, 0x0F),
    RegisterCommand::new(0x75, 0xDC),
    RegisterCommand::new(0x76, 0x0F),
    RegisterCommand::new(0x77, 0xFF),
    RegisterCommand::new(0x78, 0x0F),
    RegisterCommand::new(0x79, 0x00),
    RegisterCommand::new(0x7A, 0x00),
    RegisterCommand::new(0x7B, 0x00),
    RegisterCommand::new(0x7C, 0x01),
    RegisterCommand::new(0x7D, 0x02),
    RegisterCommand::new(0x7E, 0x04),
    RegisterCommand::new(0x7F, 0x08),
    RegisterCommand::new(0x80, 0x10),
    RegisterCommand::new(0x81, 0x20),
    RegisterCommand::new(0x82, 0x30),
    RegisterCommand::new(0x83, 0x40),
    RegisterCommand::new(0x84, 0x50),
    RegisterCommand::new(0x85, 0x60),
    RegisterCommand::new(0x86, 0x70),
    RegisterCommand::new(0x87, 0x78),
    RegisterCommand::new(0x88, 0x88),
    RegisterCommand::new(0x89, 0x96),
    RegisterCommand::new(0x8A, 0xA3),
    RegisterCommand::new(0x8B, 0xAF),
    RegisterCommand::new(0x8C, 0xBA),
    RegisterCommand::new(0x8D, 0xC4),
    RegisterCommand::new(0x8E, 0xCE),
    RegisterCommand::new(0x8F, 0xD7),
    RegisterCommand::new(0x90, 0xE0),
    RegisterCommand::new(0x91, 0xE8),
    RegisterCommand::new(0x92, 0xF0),
    RegisterCommand::new(0x93, 0xF8),
    RegisterCommand::new(0x94, 0xFF),
    RegisterCommand::new(0x99, 0x20),
    RegisterCommand::new(0xFE, 0x00),
    RegisterCommand::new(0xC2, 0x08),
    RegisterCommand::new(0x35, 0x00),
    RegisterCommand::new(0x11, 0x00),
    RegisterCommand::new(0x29, 0x00),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_starts_with_page_select() {
        // The first write must select a manufacturer page before any
        // page-local register is touched.
        assert_eq!(MANUFACTURER_CMD_SET[0], RegisterCommand::new(WRMAUCCTR, 0xD0));
    }

    #[test]
    fn table_returns_to_user_command_set() {
        // The tail of the table switches back to CMD1 before the
        // standard DCS writes that finish initialization.
        let cmd1_select = MANUFACTURER_CMD_SET
            .iter()
            .rposition(|c| *c == RegisterCommand::new(WRMAUCCTR, 0x00))
            .expect("CMD1 select present");
        assert!(cmd1_select > 0);
        assert!(MANUFACTURER_CMD_SET[cmd1_select + 1..]
            .iter()
            .all(|c| c.addr != WRMAUCCTR));
    }
}

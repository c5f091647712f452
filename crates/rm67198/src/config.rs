//! Panel configuration types and builder

use log::warn;

use crate::command::{COL_FMT_16BPP, COL_FMT_18BPP, COL_FMT_24BPP};

pub use crate::error::BuilderError;

/// Maximum number of DSI data lanes the RM67198 supports.
pub const MAX_LANES: u8 = 4;

/// DSI video transmission mode, as selected by the platform's
/// `video-mode` property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoMode {
    /// Burst mode
    Burst,
    /// Non-burst mode with sync events
    NonBurstSyncEvent,
    /// Non-burst mode with sync pulses
    NonBurstSyncPulse,
}

impl VideoMode {
    /// Decode the platform `video-mode` selector.
    ///
    /// Returns `None` for unknown selectors; the caller keeps its
    /// existing mode flags in that case.
    pub fn from_selector(selector: u32) -> Option<Self> {
        match selector {
            0 => Some(VideoMode::Burst),
            1 => Some(VideoMode::NonBurstSyncEvent),
            2 => Some(VideoMode::NonBurstSyncPulse),
            _ => None,
        }
    }
}

/// Pixel format negotiated on the DSI link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// 16 bits per pixel
    Rgb565,
    /// 18 bits per pixel, loosely packed
    Rgb666,
    /// 18 bits per pixel, packed
    Rgb666Packed,
    /// 24 bits per pixel
    #[default]
    Rgb888,
}

impl PixelFormat {
    /// Map the link format to the panel's interface pixel format code.
    ///
    /// Unknown raw formats decode to [`PixelFormat::Rgb888`] upstream,
    /// so 24bpp doubles as the backward-compatibility fallback.
    pub fn color_format(self) -> u8 {
        match self {
            PixelFormat::Rgb565 => COL_FMT_16BPP,
            PixelFormat::Rgb666 | PixelFormat::Rgb666Packed => COL_FMT_18BPP,
            PixelFormat::Rgb888 => COL_FMT_24BPP,
        }
    }

    /// Decode a raw negotiated format value, falling back to 24bpp for
    /// anything unrecognized (backward compatibility with old platform
    /// descriptions).
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => PixelFormat::Rgb888,
            1 => PixelFormat::Rgb666,
            2 => PixelFormat::Rgb666Packed,
            3 => PixelFormat::Rgb565,
            _ => PixelFormat::Rgb888,
        }
    }
}

/// DSI operating mode flags, mirroring the link flags the panel requires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeFlags(u16);

impl ModeFlags {
    /// Video mode (as opposed to command mode)
    pub const VIDEO: ModeFlags = ModeFlags(1 << 0);
    /// Transmit HSYNC end packets
    pub const VIDEO_HSE: ModeFlags = ModeFlags(1 << 1);
    /// Burst mode
    pub const VIDEO_BURST: ModeFlags = ModeFlags(1 << 2);
    /// Transmit sync pulses rather than sync events
    pub const VIDEO_SYNC_PULSE: ModeFlags = ModeFlags(1 << 3);

    pub const fn empty() -> Self {
        ModeFlags(0)
    }

    pub const fn contains(self, other: ModeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: ModeFlags) -> Self {
        ModeFlags(self.0 | other.0)
    }
}

impl core::ops::BitOr for ModeFlags {
    type Output = ModeFlags;

    fn bitor(self, rhs: ModeFlags) -> ModeFlags {
        self.union(rhs)
    }
}

impl core::ops::BitOrAssign for ModeFlags {
    fn bitor_assign(&mut self, rhs: ModeFlags) {
        *self = self.union(rhs);
    }
}

/// Panel configuration
///
/// Holds the negotiated link parameters. Use [`Builder`] to create one.
#[derive(Clone, Debug)]
pub struct Config {
    /// Number of DSI data lanes (1..=4)
    pub lanes: u8,
    /// Negotiated pixel format
    pub pixel_format: PixelFormat,
    /// DSI mode flags
    pub mode_flags: ModeFlags,
}

/// Builder for [`Config`]
///
/// # Example
///
/// ```
/// use rm67198::{Builder, VideoMode};
///
/// let config = Builder::new()
///     .lanes(4)
///     .video_mode(VideoMode::Burst)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.lanes, 4);
/// ```
pub struct Builder {
    lanes: Option<u8>,
    pixel_format: PixelFormat,
    mode_flags: ModeFlags,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            lanes: None,
            // The panel defaults to RGB888 and always drives video
            // mode with HSYNC end packets.
            pixel_format: PixelFormat::Rgb888,
            mode_flags: ModeFlags::VIDEO | ModeFlags::VIDEO_HSE,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the DSI lane count (required)
    pub fn lanes(mut self, lanes: u8) -> Self {
        self.lanes = Some(lanes);
        self
    }

    /// Set the negotiated pixel format
    pub fn pixel_format(mut self, format: PixelFormat) -> Self {
        self.pixel_format = format;
        self
    }

    /// Apply a decoded video mode to the mode flags
    pub fn video_mode(mut self, mode: VideoMode) -> Self {
        match mode {
            VideoMode::Burst => self.mode_flags |= ModeFlags::VIDEO_BURST,
            VideoMode::NonBurstSyncEvent => {}
            VideoMode::NonBurstSyncPulse => self.mode_flags |= ModeFlags::VIDEO_SYNC_PULSE,
        }
        self
    }

    /// Apply a raw platform `video-mode` selector.
    ///
    /// Unknown selectors are logged and ignored; the flags keep their
    /// current value.
    pub fn video_mode_selector(self, selector: u32) -> Self {
        match VideoMode::from_selector(selector) {
            Some(mode) => self.video_mode(mode),
            None => {
                warn!("invalid video mode {selector}");
                self
            }
        }
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingLanes`] if the lane count was not
    /// set and [`BuilderError::InvalidLanes`] if it is out of range.
    pub fn build(self) -> Result<Config, BuilderError> {
        let lanes = self.lanes.ok_or(BuilderError::MissingLanes)?;
        if lanes == 0 || lanes > MAX_LANES {
            return Err(BuilderError::InvalidLanes { lanes });
        }
        Ok(Config {
            lanes,
            pixel_format: self.pixel_format,
            mode_flags: self.mode_flags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_selector_sets_burst_flag_only() {
        let config = Builder::new().lanes(4).video_mode_selector(0).build().unwrap();
        assert!(config.mode_flags.contains(ModeFlags::VIDEO_BURST));
        assert!(!config.mode_flags.contains(ModeFlags::VIDEO_SYNC_PULSE));
    }

    #[test]
    fn sync_event_selector_leaves_base_flags() {
        let config = Builder::new().lanes(2).video_mode_selector(1).build().unwrap();
        assert_eq!(config.mode_flags, ModeFlags::VIDEO | ModeFlags::VIDEO_HSE);
    }

    #[test]
    fn sync_pulse_selector_sets_pulse_flag() {
        let config = Builder::new().lanes(4).video_mode_selector(2).build().unwrap();
        assert!(config.mode_flags.contains(ModeFlags::VIDEO_SYNC_PULSE));
        assert!(!config.mode_flags.contains(ModeFlags::VIDEO_BURST));
    }

    #[test]
    fn unknown_selector_is_ignored() {
        // An unknown selector also emits a warn!; only the
        // flags-unchanged half is asserted here as no log capture is
        // wired up in this suite.
        let with_unknown = Builder::new().lanes(4).video_mode_selector(99).build().unwrap();
        let baseline = Builder::new().lanes(4).build().unwrap();
        assert_eq!(with_unknown.mode_flags, baseline.mode_flags);
        assert!(VideoMode::from_selector(99).is_none());
    }

    #[test]
    fn lanes_are_required_and_bounded() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingLanes)
        ));
        assert!(matches!(
            Builder::new().lanes(5).build(),
            Err(BuilderError::InvalidLanes { lanes: 5 })
        ));
        assert!(matches!(
            Builder::new().lanes(0).build(),
            Err(BuilderError::InvalidLanes { lanes: 0 })
        ));
    }

    #[test]
    fn color_format_mapping() {
        assert_eq!(PixelFormat::Rgb565.color_format(), 0x55);
        assert_eq!(PixelFormat::Rgb666.color_format(), 0x66);
        assert_eq!(PixelFormat::Rgb666Packed.color_format(), 0x66);
        assert_eq!(PixelFormat::Rgb888.color_format(), 0x77);
    }

    #[test]
    fn raw_format_decoding() {
        // Link-format numbering: 0 = RGB888 down to 3 = RGB565.
        assert_eq!(PixelFormat::from_raw(0), PixelFormat::Rgb888);
        assert_eq!(PixelFormat::from_raw(1), PixelFormat::Rgb666);
        assert_eq!(PixelFormat::from_raw(2), PixelFormat::Rgb666Packed);
        assert_eq!(PixelFormat::from_raw(3), PixelFormat::Rgb565);
    }

    #[test]
    fn unknown_raw_format_falls_back_to_24bpp() {
        assert_eq!(PixelFormat::from_raw(42).color_format(), 0x77);
    }
}

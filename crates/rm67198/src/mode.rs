//! Fixed display timing
//!
//! The RM67198 supports exactly one mode. [`RM67198_MODE`] carries the
//! timings and the bus metadata the transport needs; there is nothing to
//! negotiate.

/// Sync polarity and data-enable flags for the fixed mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModePolarity {
    /// HSYNC is active low
    pub hsync_negative: bool,
    /// VSYNC is active low
    pub vsync_negative: bool,
}

/// Bus-level flags the panel requires from the video source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusFlags {
    /// Data enable is active low
    pub de_low: bool,
    /// Pixel data is driven on the negative clock edge
    pub pixdata_negedge: bool,
}

/// Media bus formats the panel accepts, most preferred first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusFormat {
    Rgb888_1x24,
    Rgb666_1x18,
    Rgb565_1x16,
}

/// A complete display timing descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayMode {
    /// Pixel clock in kHz
    pub clock_khz: u32,
    /// Active horizontal pixels
    pub hactive: u16,
    /// Horizontal front porch
    pub hfront_porch: u16,
    /// HSYNC pulse width
    pub hsync_len: u16,
    /// Horizontal back porch
    pub hback_porch: u16,
    /// Active vertical lines
    pub vactive: u16,
    /// Vertical front porch
    pub vfront_porch: u16,
    /// VSYNC pulse width
    pub vsync_len: u16,
    /// Vertical back porch
    pub vback_porch: u16,
    /// Nominal refresh rate in Hz
    pub refresh_hz: u16,
    /// Physical width in millimeters
    pub width_mm: u16,
    /// Physical height in millimeters
    pub height_mm: u16,
    /// Sync polarities
    pub polarity: ModePolarity,
}

impl DisplayMode {
    /// Total horizontal pixels per line including blanking.
    pub const fn htotal(&self) -> u32 {
        self.hactive as u32
            + self.hfront_porch as u32
            + self.hsync_len as u32
            + self.hback_porch as u32
    }

    /// Total lines per frame including blanking.
    pub const fn vtotal(&self) -> u32 {
        self.vactive as u32
            + self.vfront_porch as u32
            + self.vsync_len as u32
            + self.vback_porch as u32
    }
}

/// The single mode the panel runs: 1080x1920@60.
pub const RM67198_MODE: DisplayMode = DisplayMode {
    clock_khz: 132_000,
    hactive: 1080,
    hfront_porch: 26,
    hsync_len: 2,
    hback_porch: 36,
    vactive: 1920,
    vfront_porch: 8,
    vsync_len: 4,
    vback_porch: 4,
    refresh_hz: 60,
    width_mm: 68,
    height_mm: 121,
    polarity: ModePolarity {
        hsync_negative: true,
        vsync_negative: true,
    },
};

/// Bus flags the panel unconditionally reports.
pub const RM67198_BUS_FLAGS: BusFlags = BusFlags {
    de_low: true,
    pixdata_negedge: true,
};

/// Bus formats the panel unconditionally reports, preferred first.
pub const RM67198_BUS_FORMATS: [BusFormat; 3] = [
    BusFormat::Rgb888_1x24,
    BusFormat::Rgb666_1x18,
    BusFormat::Rgb565_1x16,
];

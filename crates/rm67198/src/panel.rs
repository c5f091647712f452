//! Panel lifecycle control
//!
//! The compositor-facing state machine: power sequencing, the vendor
//! initialization sequence, output on/off and the brightness register
//! pair.
//!
//! Every operation takes `&mut self`, so exclusive access stands in for
//! the serialized-callback guarantee a display framework would give a
//! panel driver. Callers sharing one panel across threads must wrap it
//! in a mutex; the driver itself adds no locking.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, error};

use crate::command::{
    DSI_MODE_REG, DSI_MODE_VIDEO, ENTER_SLEEP_MODE, EXIT_SLEEP_MODE, GET_DISPLAY_BRIGHTNESS,
    MANUFACTURER_CMD_SET, SET_DISPLAY_BRIGHTNESS, SET_DISPLAY_OFF, SET_DISPLAY_ON,
    SET_PIXEL_FORMAT, SET_TEAR_ON, SET_TEAR_SCANLINE, SOFT_RESET, TEAR_MODE_VBLANK, WRMAUCCTR,
};
use crate::config::Config;
use crate::error::Error;
use crate::interface::DsiInterface;
use crate::mode::{DisplayMode, RM67198_MODE};
use crate::power::PowerSupply;

/// Brightness range reported to the backlight consumer.
pub const MAX_BRIGHTNESS: u16 = 255;
/// Boot-time brightness, full scale.
pub const DEFAULT_BRIGHTNESS: u16 = 255;

/// Scanline at which the tearing effect signal fires.
const TEAR_SCANLINE: u16 = 0x380;

// Vendor settling times, lower bound of the allowed window.
const RESET_RELEASE_SETTLE_US: u32 = 18_000; // 18-20 ms after releasing reset
const RESET_PULSE_US: u32 = 15_000; // 15-17 ms reset assert hold
const SOFT_RESET_SETTLE_US: u32 = 15_000; // 15-17 ms after DCS soft reset
const EXIT_SLEEP_SETTLE_US: u32 = 5_000; // 5-7 ms after exit sleep
const BACKLIGHT_OFF_SETTLE_US: u32 = 10_000; // 10-12 ms after backlight off
const DISPLAY_OFF_SETTLE_US: u32 = 5_000; // 5-10 ms after display off

/// Lifecycle state of a panel instance.
///
/// Transitions are strictly linear: `Unprepared` → `Prepared` →
/// `Enabled` → `Disabled`, back through `Unprepared`. A failed
/// `enable()` parks the panel in [`Failed`](PanelState::Failed) with the
/// reset line asserted; only [`Panel::unprepare`] leaves that state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    /// Power rails off, panel held in or released from reset
    Unprepared,
    /// Power rails on, reset released, no initialization sent
    Prepared,
    /// Initialized and driving the output
    Enabled,
    /// Initialized with the output blanked (still prepared)
    Disabled,
    /// `enable()` aborted; reset is asserted, `unprepare()` required
    Failed,
}

/// Result alias tying the error type to the panel's hardware generics.
pub type PanelResult<T, I, RST, S> = Result<
    T,
    Error<
        <I as DsiInterface>::Error,
        <RST as embedded_hal::digital::ErrorType>::Error,
        <S as PowerSupply>::Error,
    >,
>;

/// RM67198 panel instance.
///
/// Owns its hardware for its whole lifetime: the DSI transport, the
/// reset line and `N` power rails (the stock panel wiring uses two, see
/// [`SUPPLY_NAMES`](crate::power::SUPPLY_NAMES)).
///
/// The reset pin follows the vendor sequence convention: `set_high()`
/// asserts reset (panel held in reset), `set_low()` releases it. The
/// physical line is active low; an inverting HAL pin maps onto this
/// directly.
pub struct Panel<I, RST, S, const N: usize> {
    dsi: I,
    reset: RST,
    supplies: [S; N],
    config: Config,
    state: PanelState,
    /// Last known brightness register value, 0..=255 effective.
    brightness: u16,
}

impl<I, RST, S, const N: usize> Panel<I, RST, S, N>
where
    I: DsiInterface,
    RST: OutputPin,
    S: PowerSupply,
{
    /// Create a new panel instance and hold it in reset.
    ///
    /// # Errors
    ///
    /// Fails if the reset line cannot be driven; no partially
    /// constructed panel is returned.
    pub fn new(
        dsi: I,
        mut reset: RST,
        supplies: [S; N],
        config: Config,
    ) -> PanelResult<Self, I, RST, S> {
        reset.set_high().map_err(Error::Pin)?;
        Ok(Self {
            dsi,
            reset,
            supplies,
            config,
            state: PanelState::Unprepared,
            brightness: DEFAULT_BRIGHTNESS,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Negotiated link configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The panel's one and only display timing. Always succeeds.
    pub fn mode(&self) -> DisplayMode {
        RM67198_MODE
    }

    /// Tear down, returning the owned hardware.
    pub fn release(self) -> (I, RST, [S; N]) {
        (self.dsi, self.reset, self.supplies)
    }

    fn is_prepared(&self) -> bool {
        matches!(
            self.state,
            PanelState::Prepared | PanelState::Enabled | PanelState::Disabled
        )
    }

    /// Power the panel up: enable all rails, release reset, settle.
    ///
    /// No-op if already prepared. Rail enabling fails fast; rails that
    /// were already switched on stay on, and the caller recovers by
    /// calling [`unprepare`](Self::unprepare) before retrying.
    pub fn prepare<D: DelayNs>(&mut self, delay: &mut D) -> PanelResult<(), I, RST, S> {
        match self.state {
            PanelState::Unprepared => {}
            PanelState::Failed => return Err(Error::InvalidState(self.state)),
            _ => return Ok(()),
        }

        for supply in &mut self.supplies {
            supply.enable().map_err(Error::Supply)?;
        }

        self.reset.set_low().map_err(Error::Pin)?;
        delay.delay_us(RESET_RELEASE_SETTLE_US);

        self.state = PanelState::Prepared;
        Ok(())
    }

    /// Power the panel down: pulse reset, then disable all rails.
    ///
    /// No-op if already unprepared. The reset line is deliberately left
    /// released after the pulse so a co-packaged touch controller
    /// sharing the line keeps its connection while the display is off.
    /// A rail-disable failure propagates without undoing the pulse.
    pub fn unprepare<D: DelayNs>(&mut self, delay: &mut D) -> PanelResult<(), I, RST, S> {
        if self.state == PanelState::Unprepared {
            return Ok(());
        }

        self.reset.set_high().map_err(Error::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        self.reset.set_low().map_err(Error::Pin)?;

        for supply in &mut self.supplies {
            supply.disable().map_err(Error::Supply)?;
        }

        self.state = PanelState::Unprepared;
        Ok(())
    }

    /// Initialize the panel and turn the output on.
    ///
    /// No-op if already enabled; requires a prepared panel. Any step
    /// failing aborts the sequence, asserts reset as the attached
    /// cleanup action and parks the state machine in
    /// [`PanelState::Failed`].
    pub fn enable<D: DelayNs>(&mut self, delay: &mut D) -> PanelResult<(), I, RST, S> {
        match self.state {
            PanelState::Enabled => return Ok(()),
            PanelState::Prepared | PanelState::Disabled => {}
            PanelState::Unprepared | PanelState::Failed => {
                return Err(Error::InvalidState(self.state))
            }
        }

        match self.enable_sequence(delay) {
            Ok(()) => {
                self.state = PanelState::Enabled;
                Ok(())
            }
            Err(e) => {
                // Hold the panel in reset; recovery goes through
                // unprepare() and a fresh prepare()/enable() pass.
                let _ = self.reset.set_high();
                self.state = PanelState::Failed;
                Err(e)
            }
        }
    }

    fn enable_sequence<D: DelayNs>(&mut self, delay: &mut D) -> PanelResult<(), I, RST, S> {
        self.dsi.set_low_power(true);

        for (i, cmd) in MANUFACTURER_CMD_SET.iter().enumerate() {
            self.dsi
                .generic_write(&[cmd.addr, cmd.value])
                .map_err(|e| {
                    error!("failed to send manufacturer command set at entry {i}");
                    Error::Interface(e)
                })?;
        }

        // Back to the User Command Set (CMD1)
        self.dsi
            .generic_write(&[WRMAUCCTR, 0x00])
            .map_err(Error::Interface)?;

        self.dsi.dcs_write(SOFT_RESET, &[]).map_err(|e| {
            error!("failed to do software reset");
            Error::Interface(e)
        })?;
        delay.delay_us(SOFT_RESET_SETTLE_US);

        self.dsi
            .generic_write(&[DSI_MODE_REG, DSI_MODE_VIDEO])
            .map_err(|e| {
                error!("failed to set DSI mode");
                Error::Interface(e)
            })?;

        self.dsi
            .dcs_write(SET_TEAR_ON, &[TEAR_MODE_VBLANK])
            .map_err(|e| {
                error!("failed to set tear ON");
                Error::Interface(e)
            })?;

        self.dsi
            .dcs_write(SET_TEAR_SCANLINE, &TEAR_SCANLINE.to_be_bytes())
            .map_err(|e| {
                error!("failed to set tear scanline");
                Error::Interface(e)
            })?;

        let color_format = self.config.pixel_format.color_format();
        self.dsi
            .dcs_write(SET_PIXEL_FORMAT, &[color_format])
            .map_err(|e| {
                error!("failed to set pixel format");
                Error::Interface(e)
            })?;
        debug!("interface color format set to {color_format:#04x}");

        self.dsi.dcs_write(EXIT_SLEEP_MODE, &[]).map_err(|e| {
            error!("failed to exit sleep mode");
            Error::Interface(e)
        })?;
        delay.delay_us(EXIT_SLEEP_SETTLE_US);

        self.dsi.dcs_write(SET_DISPLAY_ON, &[]).map_err(|e| {
            error!("failed to set display ON");
            Error::Interface(e)
        })?;

        // Backlight on at the cached level; brightness traffic runs in
        // high-speed mode.
        self.write_brightness((self.brightness & 0xff) as u8)?;

        Ok(())
    }

    /// Blank the output and put the panel to sleep.
    ///
    /// No-op unless enabled. The first DCS failure is returned
    /// immediately with no cleanup; the panel stays `Enabled` from the
    /// caller's perspective and the operation may be retried.
    pub fn disable<D: DelayNs>(&mut self, delay: &mut D) -> PanelResult<(), I, RST, S> {
        if self.state != PanelState::Enabled {
            return Ok(());
        }

        self.dsi.set_low_power(true);

        // Backlight off; like the enable path, the brightness write
        // drops the link back to high-speed mode.
        self.write_brightness(0)?;
        delay.delay_us(BACKLIGHT_OFF_SETTLE_US);

        self.dsi.dcs_write(SET_DISPLAY_OFF, &[]).map_err(|e| {
            error!("failed to set display OFF");
            Error::Interface(e)
        })?;
        delay.delay_us(DISPLAY_OFF_SETTLE_US);

        self.dsi.dcs_write(ENTER_SLEEP_MODE, &[]).map_err(|e| {
            error!("failed to enter sleep mode");
            Error::Interface(e)
        })?;

        self.state = PanelState::Disabled;
        Ok(())
    }

    /// Best-effort teardown: blank the output, then power down.
    pub fn shutdown<D: DelayNs>(&mut self, delay: &mut D) -> PanelResult<(), I, RST, S> {
        if let Err(e) = self.disable(delay) {
            error!("panel disable failed during shutdown: {e}");
        }
        self.unprepare(delay)
    }

    /// Read the brightness register, returning the low byte of the
    /// 16-bit value on the 0..=255 reporting scale.
    ///
    /// Returns 0 without any transport traffic while the panel is not
    /// prepared; the hardware cannot be queried safely then.
    pub fn get_brightness(&mut self) -> PanelResult<u8, I, RST, S> {
        if !self.is_prepared() {
            return Ok(0);
        }

        self.dsi.set_low_power(false);

        let mut buf = [0u8; 2];
        let n = self
            .dsi
            .dcs_read(GET_DISPLAY_BRIGHTNESS, &mut buf)
            .map_err(Error::Interface)?;
        let value = if n >= 2 {
            u16::from_le_bytes(buf)
        } else {
            buf[0] as u16
        };

        self.brightness = value;
        Ok((value & 0xff) as u8)
    }

    /// Write the brightness register.
    ///
    /// A no-op returning success while the panel is not prepared.
    pub fn set_brightness(&mut self, level: u8) -> PanelResult<(), I, RST, S> {
        if !self.is_prepared() {
            return Ok(());
        }

        self.write_brightness(level)?;
        self.brightness = level as u16;
        Ok(())
    }

    /// Raw brightness register write, cache untouched.
    fn write_brightness(&mut self, level: u8) -> PanelResult<(), I, RST, S> {
        self.dsi.set_low_power(false);
        self.dsi
            .dcs_write(SET_DISPLAY_BRIGHTNESS, &[level])
            .map_err(Error::Interface)
    }
}

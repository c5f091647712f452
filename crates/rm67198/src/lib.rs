//! Driver for the Raydium RM67198 MIPI-DSI display panel
//!
//! The RM67198 drives a fixed 1080x1920@60 AMOLED panel behind a
//! MIPI-DSI link. This crate implements the panel's power and
//! initialization lifecycle on top of embedded-hal v1.0 plus two small
//! crate-local seams for the things embedded-hal has no trait for: the
//! DSI transport ([`DsiInterface`]) and switchable power rails
//! ([`PowerSupply`]).
//!
//! ## Lifecycle
//!
//! A panel moves through four states, always in order:
//!
//! 1. [`Panel::prepare`]: rails on, reset released
//! 2. [`Panel::enable`]: vendor init pushed, output and backlight on
//! 3. [`Panel::disable`]: backlight and output off, panel asleep
//! 4. [`Panel::unprepare`]: reset pulsed, rails off
//!
//! A failed `enable()` asserts reset and parks the panel in a `Failed`
//! state that only `unprepare()` clears.
//!
//! ## Example
//!
//! ```rust,ignore
//! use rm67198::{Builder, Panel, VideoMode};
//!
//! let config = Builder::new()
//!     .lanes(4)
//!     .video_mode(VideoMode::Burst)
//!     .build()?;
//!
//! // dsi: DsiInterface, reset: OutputPin, supplies: [PowerSupply; 2]
//! let mut panel = Panel::new(dsi, reset, supplies, config)?;
//!
//! panel.prepare(&mut delay)?;
//! panel.enable(&mut delay)?;
//!
//! panel.set_brightness(128)?;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod config;
pub mod error;
pub mod interface;
pub mod mode;
pub mod panel;
pub mod power;

#[cfg(test)]
mod testutil;

pub use command::{RegisterCommand, MANUFACTURER_CMD_SET};
pub use config::{Builder, Config, ModeFlags, PixelFormat, VideoMode};
pub use error::{BuilderError, Error};
pub use interface::DsiInterface;
pub use mode::{
    BusFlags, BusFormat, DisplayMode, RM67198_BUS_FLAGS, RM67198_BUS_FORMATS, RM67198_MODE,
};
pub use panel::{Panel, PanelState, DEFAULT_BRIGHTNESS, MAX_BRIGHTNESS};
pub use power::{PowerSupply, SUPPLY_NAMES};

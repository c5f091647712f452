//! Error types for the driver

use core::fmt::Debug;

/// Errors that can occur during a panel operation.
///
/// Generic over the transport, reset-pin and power-supply error types so
/// callers can match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<IfErr, PinErr, SupErr> {
    /// DSI transport error
    Interface(IfErr),
    /// Reset line GPIO error
    Pin(PinErr),
    /// Power rail enable/disable error
    Supply(SupErr),
    /// Operation not legal in the current lifecycle state.
    ///
    /// In particular, a panel parked in [`PanelState::Failed`] after an
    /// aborted `enable()` only accepts `unprepare()`.
    ///
    /// [`PanelState::Failed`]: crate::panel::PanelState::Failed
    InvalidState(crate::panel::PanelState),
}

impl<IfErr: Debug, PinErr: Debug, SupErr: Debug> core::fmt::Display
    for Error<IfErr, PinErr, SupErr>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "DSI error: {e:?}"),
            Error::Pin(e) => write!(f, "Reset pin error: {e:?}"),
            Error::Supply(e) => write!(f, "Supply error: {e:?}"),
            Error::InvalidState(s) => write!(f, "Invalid panel state: {s:?}"),
        }
    }
}

impl<IfErr: Debug, PinErr: Debug, SupErr: Debug> core::error::Error
    for Error<IfErr, PinErr, SupErr>
{
}

/// Errors that can occur when building configuration
#[derive(Debug)]
pub enum BuilderError {
    /// The DSI lane count was not specified.
    ///
    /// [`Builder::lanes()`](crate::config::Builder::lanes) must be called
    /// before building; the platform description is required to carry it.
    MissingLanes,
    /// Lane count outside 1..=4
    InvalidLanes {
        /// Lane count requested
        lanes: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::MissingLanes => write!(f, "DSI lane count must be specified"),
            BuilderError::InvalidLanes { lanes } => {
                write!(f, "Invalid lane count {lanes} (supported: 1..=4)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}

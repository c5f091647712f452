//! Power rail abstraction
//!
//! The RM67198 is fed by two rails ("v3p3" and "v1p8") that are enabled
//! as a group with no sequencing between them. [`PowerSupply`] is the
//! seam a platform regulator, a load switch GPIO, or a test double
//! implements.

use core::fmt::Debug;

/// Names of the rails the panel expects, in enable order.
pub const SUPPLY_NAMES: [&str; 2] = ["v3p3", "v1p8"];

/// A single switchable voltage rail.
pub trait PowerSupply {
    /// Error type for supply operations
    type Error: Debug;

    /// Enable the rail. Enabling an already-enabled rail is a no-op.
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Disable the rail. Disabling an already-disabled rail is a no-op.
    fn disable(&mut self) -> Result<(), Self::Error>;
}

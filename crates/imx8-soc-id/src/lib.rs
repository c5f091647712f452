//! i.MX8M SoC identification
//!
//! One-shot boot-time identification of an i.MX8M-family SoC: silicon
//! revision and the 64-bit unique ID burned into the OCOTP fuses, with
//! a secure-monitor fallback for i.MX8MQ parts whose revision fuse was
//! never populated.
//!
//! The hardware boundaries are traits: [`FuseMap`] for the memory-mapped
//! register windows and [`SecureMonitor`] for SiP service calls. The
//! result is an immutable [`SocIdentity`] descriptor; its unique ID
//! renders through [`SocIdentity::uid_attribute`] in the published
//! read-only format (16 uppercase hex digits, newline-terminated).
//!
//! ## Example
//!
//! ```rust,ignore
//! use imx8_soc_id::{IdentityReader, Variant};
//!
//! let identity = IdentityReader::read(
//!     Variant::Imx8mm,
//!     machine,            // platform model string
//!     Some(&mut ocotp),   // FuseMap over the OCOTP window
//!     Some(&mut anatop),  // FuseMap over the anatop window
//!     &mut monitor,       // SecureMonitor
//! );
//!
//! println!("{} {} rev {}", identity.family, identity.soc_id, identity.revision);
//! print!("{}", identity.uid_attribute());
//! ```
//!
//! Missing register windows degrade to revision "unknown" and unique ID
//! 0; identity construction never fails.

#![cfg_attr(not(test), no_std)]

pub mod firmware;
pub mod fuse;
pub mod identity;

#[cfg(feature = "board-info")]
pub mod board;

pub use firmware::SecureMonitor;
pub use fuse::FuseMap;
pub use identity::{IdentityReader, Revision, SocIdentity, UidAttribute, Variant};

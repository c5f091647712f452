//! SoC identity construction
//!
//! A one-shot read of the revision and unique-ID sources, producing an
//! immutable [`SocIdentity`] descriptor. Missing hardware degrades to
//! "unknown"/zero rather than failing; identity construction itself
//! cannot fail once the platform model string is in hand.

use core::fmt;

use log::warn;

use crate::firmware::{self, SecureMonitor};
use crate::fuse::{
    FuseMap, ANADIG_DIGPROG, OCOTP_SW_INFO_B1, OCOTP_UID_HIGH, OCOTP_UID_LOW, REV_B1, SW_MAGIC_B1,
};

/// The i.MX8M family members this reader understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Imx8mq,
    Imx8mm,
    Imx8mn,
    Imx8mp,
}

impl Variant {
    /// SoC family shared by all variants.
    pub fn family(self) -> &'static str {
        "Freescale i.MX"
    }

    /// Marketing name of the SoC.
    pub fn soc_id(self) -> &'static str {
        match self {
            Variant::Imx8mq => "i.MX8MQ",
            Variant::Imx8mm => "i.MX8MM",
            Variant::Imx8mn => "i.MX8MN",
            Variant::Imx8mp => "i.MX8MP",
        }
    }

    /// Platform compatible string this variant matches.
    pub fn compatible(self) -> &'static str {
        match self {
            Variant::Imx8mq => "fsl,imx8mq",
            Variant::Imx8mm => "fsl,imx8mm",
            Variant::Imx8mn => "fsl,imx8mn",
            Variant::Imx8mp => "fsl,imx8mp",
        }
    }
}

/// Silicon revision, possibly unknown.
///
/// The raw byte encodes major.minor in its two nibbles; `Display`
/// renders "2.1" style, or "unknown" when no revision source answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Revision(Option<u8>);

impl Revision {
    pub const UNKNOWN: Revision = Revision(None);

    /// Decode a raw revision word; zero means "not populated".
    pub fn from_raw(raw: u32) -> Self {
        match (raw & 0xff) as u8 {
            0 => Revision(None),
            rev => Revision(Some(rev)),
        }
    }

    pub fn is_known(self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(rev) => write!(f, "{}.{}", (rev >> 4) & 0xf, rev & 0xf),
            None => write!(f, "unknown"),
        }
    }
}

/// Immutable SoC descriptor, populated exactly once by
/// [`IdentityReader::read`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocIdentity<'a> {
    /// SoC family name
    pub family: &'static str,
    /// Platform/board model string
    pub machine: &'a str,
    /// SoC marketing name
    pub soc_id: &'static str,
    /// Silicon revision
    pub revision: Revision,
    /// 64-bit unique ID from the fuses, 0 when unavailable
    pub uid: u64,
    /// Whether the M4 coprocessor was started by firmware
    pub m4_enabled: bool,
}

impl SocIdentity<'_> {
    /// The published read-only unique-ID attribute: 16 uppercase hex
    /// digits, newline-terminated.
    pub fn uid_attribute(&self) -> UidAttribute {
        UidAttribute(self.uid)
    }
}

/// `Display` adapter for the unique-ID attribute format.
#[derive(Clone, Copy, Debug)]
pub struct UidAttribute(pub u64);

impl fmt::Display for UidAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:016X}", self.0)
    }
}

/// One-shot reader producing a [`SocIdentity`].
pub struct IdentityReader;

impl IdentityReader {
    /// Read revision and unique ID for `variant`.
    ///
    /// `ocotp` and `anatop` are the fuse and revision register windows;
    /// either may be absent on a stripped-down platform description, in
    /// which case the affected fields degrade to unknown/zero. Fuse
    /// read errors degrade the same way and are logged, never fatal.
    pub fn read<'a, F, M>(
        variant: Variant,
        machine: &'a str,
        ocotp: Option<&mut F>,
        anatop: Option<&mut F>,
        monitor: &mut M,
    ) -> SocIdentity<'a>
    where
        F: FuseMap,
        M: SecureMonitor,
    {
        let (revision, uid) = match variant {
            Variant::Imx8mq => Self::read_imx8mq(ocotp, monitor),
            Variant::Imx8mm | Variant::Imx8mn | Variant::Imx8mp => {
                Self::read_imx8mm(ocotp, anatop)
            }
        };

        SocIdentity {
            family: variant.family(),
            machine,
            soc_id: variant.soc_id(),
            revision,
            uid,
            m4_enabled: firmware::m4_started(monitor),
        }
    }

    /// i.MX8MQ: firmware call first; older firmware leaves the service
    /// unimplemented, in which case a fuse sentinel marks B1 silicon.
    fn read_imx8mq<F, M>(ocotp: Option<&mut F>, monitor: &mut M) -> (Revision, u64)
    where
        F: FuseMap,
        M: SecureMonitor,
    {
        let ocotp = match ocotp {
            Some(map) => map,
            None => return (Revision::UNKNOWN, 0),
        };

        let mut rev = firmware::soc_revision(monitor);
        if rev == 0 {
            match ocotp.read(OCOTP_SW_INFO_B1) {
                Ok(magic) if magic == SW_MAGIC_B1 => rev = REV_B1,
                Ok(_) => {}
                Err(e) => warn!("failed to read SW_INFO sentinel: {e:?}"),
            }
        }

        (Revision::from_raw(rev as u32), read_uid(ocotp))
    }

    /// i.MX8MM/MN/MP: revision lives in the anatop DIGPROG word; the
    /// unique ID stays in the OCOTP fuses.
    fn read_imx8mm<F>(ocotp: Option<&mut F>, anatop: Option<&mut F>) -> (Revision, u64)
    where
        F: FuseMap,
    {
        let anatop = match anatop {
            Some(map) => map,
            None => return (Revision::UNKNOWN, 0),
        };

        let revision = match anatop.read(ANADIG_DIGPROG) {
            Ok(raw) => Revision::from_raw(raw),
            Err(e) => {
                warn!("failed to read DIGPROG: {e:?}");
                Revision::UNKNOWN
            }
        };

        let uid = match ocotp {
            Some(map) => read_uid(map),
            None => 0,
        };

        (revision, uid)
    }
}

/// Concatenate the two 32-bit UID fuse words, high word first.
fn read_uid<F: FuseMap>(map: &mut F) -> u64 {
    match (map.read(OCOTP_UID_HIGH), map.read(OCOTP_UID_LOW)) {
        (Ok(high), Ok(low)) => ((high as u64) << 32) | low as u64,
        _ => {
            warn!("failed to read unique ID fuses");
            0
        }
    }
}

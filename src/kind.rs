use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

use crate::crc::{Crc4, Crc8, Crc16, Crc32};
use crate::report;
use crate::variant::{Crc4Variant, Crc8Variant, Crc16Variant, Crc32Variant, Variant};

/// CRC flavour picked at runtime, e.g. from a command line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    Crc4,
    #[default]
    Crc8,
    Crc16,
    Crc32,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Crc4, Kind::Crc8, Kind::Crc16, Kind::Crc32];

    pub fn name(self) -> &'static str {
        match self {
            Kind::Crc4 => "crc4",
            Kind::Crc8 => "crc8",
            Kind::Crc16 => "crc16",
            Kind::Crc32 => "crc32",
        }
    }

    pub fn width(self) -> u32 {
        match self {
            Kind::Crc4 => Crc4Variant::WIDTH,
            Kind::Crc8 => Crc8Variant::WIDTH,
            Kind::Crc16 => Crc16Variant::WIDTH,
            Kind::Crc32 => Crc32Variant::WIDTH,
        }
    }

    pub fn poly(self) -> u32 {
        match self {
            Kind::Crc4 => Crc4Variant::POLY.into(),
            Kind::Crc8 => Crc8Variant::POLY.into(),
            Kind::Crc16 => Crc16Variant::POLY.into(),
            Kind::Crc32 => Crc32Variant::POLY,
        }
    }

    /// Runs the matching engine over `reader` until it is exhausted.
    pub fn encode<R: Read>(self, reader: R) -> io::Result<Checksum> {
        let value: u32 = match self {
            Kind::Crc4 => Crc4::new().encode(reader)?.into(),
            Kind::Crc8 => Crc8::new().encode(reader)?.into(),
            Kind::Crc16 => Crc16::new().encode(reader)?.into(),
            Kind::Crc32 => Crc32::new().encode(reader)?,
        };

        Ok(Checksum::new(self, value))
    }

    pub fn checksum(self, data: &[u8]) -> Checksum {
        let value: u32 = match self {
            Kind::Crc4 => Crc4::checksum(data).into(),
            Kind::Crc8 => Crc8::checksum(data).into(),
            Kind::Crc16 => Crc16::checksum(data).into(),
            Kind::Crc32 => Crc32::checksum(data),
        };

        Checksum::new(self, value)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown CRC type `{}` (expected crc4, crc8, crc16 or crc32)", self.0)
    }
}

impl std::error::Error for ParseKindError {}

/// A finished checksum with its width erased into a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum {
    kind: Kind,
    value: u32,
}

impl Checksum {
    pub(crate) fn new(kind: Kind, value: u32) -> Self {
        Checksum { kind, value }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn to_binary(&self) -> String {
        report::binary(self.value, self.kind.width())
    }

    pub fn to_hex(&self) -> String {
        report::hex(self.value)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&report::render(self.value, self.kind.width()))
    }
}

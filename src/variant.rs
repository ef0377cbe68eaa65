use std::fmt::{Binary, Debug, LowerHex};

use crate::kind::Kind;
use crate::table;

/// Storage for a running CRC.
pub trait Register: Copy + Eq + Debug + LowerHex + Binary + Into<u32> + 'static {
    const ALL_ONES: Self;
}

impl Register for u8 {
    const ALL_ONES: Self = u8::MAX;
}

impl Register for u16 {
    const ALL_ONES: Self = u16::MAX;
}

impl Register for u32 {
    const ALL_ONES: Self = u32::MAX;
}

/// One of the supported CRC flavours.
///
/// The set is closed: the only implementors are the four types in this
/// module, so an engine of any other width cannot be built.
pub trait Variant: sealed::Sealed {
    type Register: Register;

    const KIND: Kind;
    /// Width of the checksum in bits. CRC-4 is stored in a `u8`.
    const WIDTH: u32;
    const POLY: Self::Register;
    /// Register value before the first byte is folded in.
    const INIT: Self::Register;
    /// Bits are consumed least-significant first.
    const REFLECTED: bool;

    /// The memoized lookup table shared by every engine of this variant.
    fn table() -> &'static [Self::Register; 256];

    /// Builds the lookup table from `POLY` at runtime.
    fn generate_table() -> [Self::Register; 256];

    fn fold(table: &[Self::Register; 256], crc: Self::Register, byte: u8) -> Self::Register;

    fn finalize(crc: Self::Register) -> Self::Register;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Crc4Variant {}
    impl Sealed for super::Crc8Variant {}
    impl Sealed for super::Crc16Variant {}
    impl Sealed for super::Crc32Variant {}
}

static CRC4_TABLE: [u8; 256] = table::msb_first_u8(Crc4Variant::POLY);
static CRC8_TABLE: [u8; 256] = table::msb_first_u8(Crc8Variant::POLY);
static CRC16_TABLE: [u16; 256] = table::msb_first_u16(Crc16Variant::POLY);
static CRC32_TABLE: [u32; 256] = table::reflected_u32(Crc32Variant::POLY);

#[inline]
fn fold_narrow(table: &[u8; 256], crc: u8, byte: u8) -> u8 {
    table[(crc ^ byte) as usize]
}

/// x^4 + x + 1, run through an 8-bit register seeded with all ones.
#[derive(Debug, Clone, Copy)]
pub struct Crc4Variant;

impl Variant for Crc4Variant {
    type Register = u8;

    const KIND: Kind = Kind::Crc4;
    const WIDTH: u32 = 4;
    const POLY: u8 = 0x03;
    const INIT: u8 = u8::ALL_ONES;
    const REFLECTED: bool = false;

    fn table() -> &'static [u8; 256] {
        &CRC4_TABLE
    }

    fn generate_table() -> [u8; 256] {
        table::msb_first_u8(Self::POLY)
    }

    fn fold(table: &[u8; 256], crc: u8, byte: u8) -> u8 {
        fold_narrow(table, crc, byte)
    }

    fn finalize(crc: u8) -> u8 {
        crc & 0x0F
    }
}

/// x^8 + x^5 + x^4 + 1
#[derive(Debug, Clone, Copy)]
pub struct Crc8Variant;

impl Variant for Crc8Variant {
    type Register = u8;

    const KIND: Kind = Kind::Crc8;
    const WIDTH: u32 = 8;
    const POLY: u8 = 0x31;
    const INIT: u8 = u8::ALL_ONES;
    const REFLECTED: bool = false;

    fn table() -> &'static [u8; 256] {
        &CRC8_TABLE
    }

    fn generate_table() -> [u8; 256] {
        table::msb_first_u8(Self::POLY)
    }

    fn fold(table: &[u8; 256], crc: u8, byte: u8) -> u8 {
        fold_narrow(table, crc, byte)
    }

    fn finalize(crc: u8) -> u8 {
        crc
    }
}

/// x^16 + x^12 + x^5 + 1
#[derive(Debug, Clone, Copy)]
pub struct Crc16Variant;

impl Variant for Crc16Variant {
    type Register = u16;

    const KIND: Kind = Kind::Crc16;
    const WIDTH: u32 = 16;
    const POLY: u16 = 0x1021;
    const INIT: u16 = u16::ALL_ONES;
    const REFLECTED: bool = false;

    fn table() -> &'static [u16; 256] {
        &CRC16_TABLE
    }

    fn generate_table() -> [u16; 256] {
        table::msb_first_u16(Self::POLY)
    }

    fn fold(table: &[u16; 256], crc: u16, byte: u8) -> u16 {
        (crc << 8) ^ table[((crc >> 8) as u8 ^ byte) as usize]
    }

    fn finalize(crc: u16) -> u16 {
        crc
    }
}

/// The IEEE 802.3 CRC, processed reflected. `POLY` is the bit-reversed
/// form of 0x04C11DB7.
#[derive(Debug, Clone, Copy)]
pub struct Crc32Variant;

impl Variant for Crc32Variant {
    type Register = u32;

    const KIND: Kind = Kind::Crc32;
    const WIDTH: u32 = 32;
    const POLY: u32 = 0xEDB8_8320;
    const INIT: u32 = u32::ALL_ONES;
    const REFLECTED: bool = true;

    fn table() -> &'static [u32; 256] {
        &CRC32_TABLE
    }

    fn generate_table() -> [u32; 256] {
        table::reflected_u32(Self::POLY)
    }

    fn fold(table: &[u32; 256], crc: u32, byte: u8) -> u32 {
        table[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8)
    }

    fn finalize(crc: u32) -> u32 {
        !crc
    }
}

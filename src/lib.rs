mod crc;
mod io_ext;
mod kind;
pub mod report;
pub mod table;
mod variant;

pub use crc::{Crc, Crc4, Crc8, Crc16, Crc32};
pub use kind::{Checksum, Kind, ParseKindError};
pub use variant::{Crc4Variant, Crc8Variant, Crc16Variant, Crc32Variant, Register, Variant};

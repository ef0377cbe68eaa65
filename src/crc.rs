use std::fmt;
use std::io::{self, Read};
use std::marker::PhantomData;

use crate::io_ext::ReadExt;
use crate::kind::Checksum;
use crate::variant::{Crc4Variant, Crc8Variant, Crc16Variant, Crc32Variant, Variant};

pub type Crc4 = Crc<Crc4Variant>;
pub type Crc8 = Crc<Crc8Variant>;
pub type Crc16 = Crc<Crc16Variant>;
pub type Crc32 = Crc<Crc32Variant>;

/// Table-driven CRC engine.
///
/// Each call to [`Crc::encode`] starts from a fresh register, so an engine
/// can be reused for any number of inputs. The last result stays readable
/// through [`Crc::crc`] until the next successful encode.
///
/// ```
/// use crckit::Crc16;
///
/// let mut crc = Crc16::new();
/// assert_eq!(crc.encode_bytes(b"123456789"), 0x29B1);
/// assert_eq!(crc.crc(), Some(0x29B1));
/// ```
pub struct Crc<V: Variant> {
    table: &'static [V::Register; 256],
    crc: Option<V::Register>,
    _v: PhantomData<V>,
}

impl<V: Variant> Crc<V> {
    pub fn new() -> Self {
        Crc {
            table: V::table(),
            crc: None,
            _v: PhantomData,
        }
    }

    /// One-shot checksum of `data`.
    pub fn checksum(data: &[u8]) -> V::Register {
        Self::new().encode_bytes(data)
    }

    pub fn poly(&self) -> V::Register {
        V::POLY
    }

    pub fn width(&self) -> u32 {
        V::WIDTH
    }

    pub fn table(&self) -> &[V::Register; 256] {
        self.table
    }

    /// The checksum computed by the last completed encode, if any.
    pub fn crc(&self) -> Option<V::Register> {
        self.crc
    }

    pub fn report(&self) -> Option<Checksum> {
        self.crc.map(|crc| Checksum::new(V::KIND, crc.into()))
    }

    /// Consumes `reader` until it is exhausted and returns the checksum of
    /// everything it produced.
    ///
    /// On a read error the previously recorded result is left untouched.
    pub fn encode<R: Read>(&mut self, mut reader: R) -> io::Result<V::Register> {
        let mut crc = V::INIT;
        reader.drain_chunks(|chunk| crc = self.fold(crc, chunk))?;

        Ok(self.finish(crc))
    }

    pub fn encode_bytes(&mut self, data: &[u8]) -> V::Register {
        let crc = self.fold(V::INIT, data);
        self.finish(crc)
    }

    fn fold(&self, mut crc: V::Register, data: &[u8]) -> V::Register {
        for &byte in data {
            crc = V::fold(self.table, crc, byte);
        }
        crc
    }

    fn finish(&mut self, crc: V::Register) -> V::Register {
        let crc = V::finalize(crc);
        self.crc = Some(crc);
        crc
    }
}

impl<V: Variant> Default for Crc<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Clone for Crc<V> {
    fn clone(&self) -> Self {
        Crc {
            table: self.table,
            crc: self.crc,
            _v: PhantomData,
        }
    }
}

impl<V: Variant> fmt::Debug for Crc<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crc")
            .field("kind", &V::KIND)
            .field("poly", &V::POLY)
            .field("crc", &self.crc)
            .finish()
    }
}

impl<V: Variant> fmt::Display for Crc<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.report() {
            Some(checksum) => fmt::Display::fmt(&checksum, f),
            None => write!(f, "{}: no input encoded", V::KIND),
        }
    }
}

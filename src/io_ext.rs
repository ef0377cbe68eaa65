use std::io;
use std::io::Read;

const CHUNK_SIZE: usize = 8 * 1024; // 8 KiB

pub trait ReadExt {
    /// Reads until the source reports end of stream, handing each chunk to
    /// `f`. Returns the number of bytes consumed.
    fn drain_chunks<F: FnMut(&[u8])>(&mut self, f: F) -> io::Result<u64>;
}

impl<R: Read> ReadExt for R {
    fn drain_chunks<F: FnMut(&[u8])>(&mut self, mut f: F) -> io::Result<u64> {
        let mut buf = [0u8; CHUNK_SIZE];
        let mut total = 0u64;

        loop {
            let n = match self.read(&mut buf) {
                Ok(0) => return Ok(total),
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            f(&buf[..n]);
            total += n as u64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Yields its data one byte per read, interrupting every other call.
    struct Stuttering {
        data: Vec<u8>,
        pos: usize,
        interrupt: bool,
    }

    impl Read for Stuttering {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "again"));
            }

            if self.pos == self.data.len() || buf.is_empty() {
                return Ok(0);
            }

            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    #[test]
    fn test_drain_collects_everything() {
        let data: Vec<u8> = (0..20_000u32).map(|i| i as u8).collect();
        let mut out = Vec::new();

        let n = data.as_slice().drain_chunks(|chunk| out.extend_from_slice(chunk)).unwrap();

        assert_eq!(n, 20_000);
        assert_eq!(out, data);
    }

    #[test]
    fn test_drain_retries_interrupted() {
        let mut reader = Stuttering {
            data: b"abc".to_vec(),
            pos: 0,
            interrupt: false,
        };
        let mut out = Vec::new();

        let n = reader.drain_chunks(|chunk| out.extend_from_slice(chunk)).unwrap();

        assert_eq!(n, 3);
        assert_eq!(out, b"abc");
    }

    #[test]
    fn test_drain_propagates_errors() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }

        let err = Broken.drain_chunks(|_| {}).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn test_drain_empty() {
        let mut called = false;
        let n = io::empty().drain_chunks(|_| called = true).unwrap();

        assert_eq!(n, 0);
        assert!(!called);
    }
}

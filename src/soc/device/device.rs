//! Defines the `Device` trait a host bus uses to reach a peripheral. Devices
//! expose their register window span and take raw byte accesses, so the
//! bus never needs to know the register layout; failures surface as
//! `AccessError` for the bus to turn into a bus error.
use std::ops::Range;

use super::{endianness::Endianness, error::AccessResult};

pub trait Device: Send + Sync {
    fn name(&self) -> &str;
    fn span(&self) -> Range<usize>;

    #[inline(always)]
    fn endianness(&self) -> Endianness {
        Endianness::Little
    }

    /// Read `out.len()` bytes from the register window at `offset` into `out`.
    fn read_bytes(&mut self, offset: usize, out: &mut [u8]) -> AccessResult<()>;

    /// Write `data` into the register window at `offset`.
    fn write_bytes(&mut self, offset: usize, data: &[u8]) -> AccessResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soc::device::AccessError;

    #[derive(Default)]
    struct FaultyDevice;

    impl Device for FaultyDevice {
        fn name(&self) -> &str {
            "faulty"
        }

        fn span(&self) -> Range<usize> {
            0..4
        }

        fn read_bytes(&mut self, offset: usize, _out: &mut [u8]) -> AccessResult<()> {
            Err(AccessError::InvalidOffset { offset })
        }

        fn write_bytes(&mut self, offset: usize, data: &[u8]) -> AccessResult<()> {
            Err(AccessError::InvalidSize {
                offset,
                size: data.len(),
            })
        }
    }

    #[test]
    fn trait_objects_propagate_access_errors() {
        let mut dev: Box<dyn Device> = Box::new(FaultyDevice);
        let mut buf = [0u8; 4];
        assert_eq!(dev.endianness(), Endianness::Little);
        assert!(
            dev.read_bytes(0, &mut buf).is_err(),
            "read should surface device errors"
        );
        assert_eq!(
            dev.write_bytes(0, &buf[..2]),
            Err(AccessError::InvalidSize { offset: 0, size: 2 })
        );
    }
}

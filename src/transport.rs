// Register-level access to the board's register file.
//
// `BusTransport` is the seam between the driver and the hardware: the real
// I2C backend lives in `transport_i2c`, and tests drive the session against a
// scripted in-memory implementation.

use thiserror::Error;

/// Error from a single bus transaction.
///
/// Nothing is retried; a failed transaction aborts the operation that issued
/// it and surfaces directly to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("device 0x{address:02X} did not acknowledge")]
    NoAcknowledge { address: u8 },

    #[error("bus fault: {kind:?}")]
    Bus { kind: embedded_hal::i2c::ErrorKind },
}

/// Byte- and word-level register I/O against a fixed device address.
///
/// Implementations supply the two raw block operations; the typed helpers
/// handle the board's little-endian word encoding on top of them.
pub trait BusTransport {
    /// Write `data` to consecutive registers starting at `reg`, as one
    /// transaction.
    fn write_block(&mut self, reg: u8, data: &[u8]) -> Result<(), TransportError>;

    /// Set the register pointer to `reg`, then read `buf.len()` bytes back.
    fn read_block(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), TransportError>;

    /// Write one byte at `reg`.
    fn write_u8(&mut self, reg: u8, value: u8) -> Result<(), TransportError> {
        self.write_block(reg, &[value])
    }

    /// Write a 16-bit value at `reg`, low byte first.
    fn write_u16(&mut self, reg: u8, value: u16) -> Result<(), TransportError> {
        self.write_block(reg, &value.to_le_bytes())
    }

    /// Write consecutive little-endian 16-bit values starting at `reg`, as
    /// one transaction.
    fn write_u16s(&mut self, reg: u8, values: &[u16]) -> Result<(), TransportError> {
        let mut buf = Vec::with_capacity(2 * values.len());
        for value in values {
            buf.extend_from_slice(&value.to_le_bytes());
        }
        self.write_block(reg, &buf)
    }

    /// Read one byte from `reg`.
    fn read_u8(&mut self, reg: u8) -> Result<u8, TransportError> {
        let mut buf = [0u8; 1];
        self.read_block(reg, &mut buf)?;
        Ok(buf[0])
    }

    /// Read `buf.len()` consecutive bytes starting at `reg`.
    fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), TransportError> {
        self.read_block(reg, buf)
    }

    /// Read a little-endian 16-bit value from `reg`, decoded as
    /// two's complement (raw values with bit 15 set come back negative).
    fn read_i16(&mut self, reg: u8) -> Result<i16, TransportError> {
        let mut buf = [0u8; 2];
        self.read_block(reg, &mut buf)?;
        Ok(i16::from_le_bytes(buf))
    }

    /// Read `count` consecutive little-endian 16-bit signed values starting
    /// at `reg`.
    fn read_i16s(&mut self, reg: u8, count: usize) -> Result<Vec<i16>, TransportError> {
        let mut raw = vec![0u8; 2 * count];
        self.read_block(reg, &mut raw)?;
        Ok(raw
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat register image; reads and writes go straight to it.
    struct ImageBus {
        image: [u8; 32],
    }

    impl ImageBus {
        fn new() -> Self {
            Self { image: [0; 32] }
        }
    }

    impl BusTransport for ImageBus {
        fn write_block(&mut self, reg: u8, data: &[u8]) -> Result<(), TransportError> {
            let start = reg as usize;
            self.image[start..start + data.len()].copy_from_slice(data);
            Ok(())
        }

        fn read_block(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), TransportError> {
            let start = reg as usize;
            buf.copy_from_slice(&self.image[start..start + buf.len()]);
            Ok(())
        }
    }

    #[test]
    fn read_i16_decodes_twos_complement() {
        let mut bus = ImageBus::new();
        bus.image[0..2].copy_from_slice(&[0xFF, 0xFF]);
        bus.image[2..4].copy_from_slice(&[0xFF, 0x7F]);
        bus.image[4..6].copy_from_slice(&[0x00, 0x80]);

        assert_eq!(bus.read_i16(0).unwrap(), -1);
        assert_eq!(bus.read_i16(2).unwrap(), 32767);
        assert_eq!(bus.read_i16(4).unwrap(), -32768);
    }

    #[test]
    fn read_i16s_decodes_each_word() {
        let mut bus = ImageBus::new();
        bus.image[6..12].copy_from_slice(&[0x2C, 0x01, 0x00, 0x00, 0xFF, 0xFF]);

        assert_eq!(bus.read_i16s(6, 3).unwrap(), vec![300, 0, -1]);
    }

    #[test]
    fn write_u16_is_low_byte_first() {
        let mut bus = ImageBus::new();
        bus.write_u16(6, 0x0102).unwrap();
        assert_eq!(bus.image[6..8], [0x02, 0x01]);
    }

    #[test]
    fn write_u16s_packs_consecutive_words() {
        let mut bus = ImageBus::new();
        bus.write_u16s(0, &[3, 500]).unwrap();
        assert_eq!(bus.image[0..4], [3, 0, 0xF4, 0x01]);
    }

    #[test]
    fn byte_helpers_round_trip() {
        let mut bus = ImageBus::new();
        bus.write_u8(4, 0xAB).unwrap();
        assert_eq!(bus.read_u8(4).unwrap(), 0xAB);

        let mut buf = [0u8; 2];
        bus.write_block(16, &[7, 1]).unwrap();
        bus.read_bytes(16, &mut buf).unwrap();
        assert_eq!(buf, [7, 1]);
    }
}

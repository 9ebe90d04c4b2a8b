// I2C backend for `BusTransport`, generic over any embedded-hal bus.

use embedded_hal::i2c::{ErrorKind, I2c};
use tracing::debug;

use crate::transport::{BusTransport, TransportError};

/// Bus transport bound to one 7-bit device address.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cTransport<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address this transport talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Hand the bus back, e.g. to share it with another device.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

fn map_bus_err<E: embedded_hal::i2c::Error>(address: u8, err: E) -> TransportError {
    match err.kind() {
        ErrorKind::NoAcknowledge(_) => TransportError::NoAcknowledge { address },
        kind => TransportError::Bus { kind },
    }
}

impl<I2C: I2c> BusTransport for I2cTransport<I2C> {
    fn write_block(&mut self, reg: u8, data: &[u8]) -> Result<(), TransportError> {
        debug!("write reg={} data={:02X?}", reg, data);
        let address = self.address;

        let mut frame = Vec::with_capacity(1 + data.len());
        frame.push(reg);
        frame.extend_from_slice(data);
        self.i2c
            .write(address, &frame)
            .map_err(|e| map_bus_err(address, e))
    }

    fn read_block(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), TransportError> {
        let address = self.address;

        // The register-pointer write and the read-back are two separate
        // transactions; the board firmware does not handle a combined
        // write-read.
        self.i2c
            .write(address, &[reg])
            .map_err(|e| map_bus_err(address, e))?;
        self.i2c
            .read(address, buf)
            .map_err(|e| map_bus_err(address, e))?;
        debug!("read reg={} data={:02X?}", reg, buf);
        Ok(())
    }
}

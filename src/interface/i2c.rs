//! I2C implementation of [`BusTransport`] over `embedded-hal`.

use embedded_hal::i2c::I2c;
use heapless::Vec;

use super::BusTransport;

/// Bytes per transaction, matching the 32-byte wire buffer the controller's
/// common host stacks provide.
pub const I2C_TRANSACTION_BYTES: usize = 32;

/// Failure of the I2C transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError<E> {
    /// The underlying I2C bus reported an error.
    Bus(E),
    /// More bytes were queued than one transaction can carry.
    Overrun,
}

/// [`BusTransport`] over any `embedded_hal::i2c::I2c` peripheral.
///
/// Bytes written between `begin_transaction` and `end_transaction` are
/// buffered and shipped as a single `write` when the transaction closes, so
/// the device sees one I2C transfer per transaction.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
    buf: Vec<u8, I2C_TRANSACTION_BYTES>,
}

impl<I2C: I2c> I2cTransport<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: 0,
            buf: Vec::new(),
        }
    }

    /// Recover the wrapped peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> BusTransport for I2cTransport<I2C> {
    type Error = TransportError<I2C::Error>;

    const MAX_TRANSACTION_BYTES: usize = I2C_TRANSACTION_BYTES;

    fn begin_transaction(&mut self, address: u8) -> Result<(), Self::Error> {
        self.address = address;
        self.buf.clear();
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.buf.push(byte).map_err(|_| TransportError::Overrun)
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        let result = self
            .i2c
            .write(self.address, &self.buf)
            .map_err(TransportError::Bus);
        self.buf.clear();
        result
    }
}

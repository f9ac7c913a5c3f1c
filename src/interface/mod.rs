//! Bus transport abstraction.
//!
//! The controller sits behind a byte-oriented bus that frames writes in
//! transactions with a bounded payload. [`BusTransport`] captures exactly
//! that: open a transaction to a device address, push bytes one at a time,
//! close the transaction. The chunked senders in [`crate::transfer`] never
//! push more than [`BusTransport::MAX_TRANSACTION_BYTES`] bytes per
//! transaction, so implementations may buffer the whole transaction before
//! touching the wire.

mod i2c;

pub use i2c::{I2cTransport, TransportError};

/// Control byte announcing that the following bytes are commands.
pub const COMMAND_MODE: u8 = 0x00;
/// Control byte announcing that the following bytes are display data.
pub const DATA_MODE: u8 = 0x40;

/// A byte-oriented bus with transaction framing.
///
/// The driver only ever performs `begin`, then `write_byte` at most
/// `MAX_TRANSACTION_BYTES` times, then `end`. Implementations are free to
/// buffer and defer the physical transfer to `end_transaction`.
pub trait BusTransport {
    /// Transport failure type, surfaced unchanged through flush and command
    /// calls.
    type Error;

    /// Maximum number of bytes (control prefix included) accepted between
    /// `begin_transaction` and `end_transaction`.
    const MAX_TRANSACTION_BYTES: usize;

    /// Open a transaction addressed to `address`.
    fn begin_transaction(&mut self, address: u8) -> Result<(), Self::Error>;

    /// Queue one payload byte in the open transaction.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Close the open transaction, committing any buffered bytes.
    fn end_transaction(&mut self) -> Result<(), Self::Error>;
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    type Error = T::Error;

    const MAX_TRANSACTION_BYTES: usize = T::MAX_TRANSACTION_BYTES;

    fn begin_transaction(&mut self, address: u8) -> Result<(), Self::Error> {
        T::begin_transaction(self, address)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        T::write_byte(self, byte)
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        T::end_transaction(self)
    }
}

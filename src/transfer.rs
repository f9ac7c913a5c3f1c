//! Chunked command and data transmission.
//!
//! The bus forgets whether it is in command or data mode at every
//! transaction boundary, so each transaction starts with the control byte
//! for its mode. The chunk loop mirrors that constraint: whenever writing
//! the next byte would overflow [`BusTransport::MAX_TRANSACTION_BYTES`],
//! the transaction is closed, a fresh one is opened, and the control byte is
//! re-emitted before the payload continues. A payload of `n` bytes therefore
//! occupies `ceil(n / (limit - 1))` transactions.

use log::trace;

use crate::interface::{BusTransport, COMMAND_MODE, DATA_MODE};

/// Send one command byte.
pub fn send_command<B: BusTransport>(bus: &mut B, address: u8, command: u8) -> Result<(), B::Error> {
    send_chunked(bus, address, COMMAND_MODE, [command])
}

/// Send an ordered command list, chunking as needed.
pub fn send_command_list<B: BusTransport>(
    bus: &mut B,
    address: u8,
    list: &[u8],
) -> Result<(), B::Error> {
    send_chunked(bus, address, COMMAND_MODE, list.iter().copied())
}

/// Stream display data bytes, chunking as needed.
///
/// The caller addresses the target window first (see
/// [`send_window`]); this sends exactly the bytes yielded by `data`, no
/// more and no fewer.
pub fn send_data<B, I>(bus: &mut B, address: u8, data: I) -> Result<(), B::Error>
where
    B: BusTransport,
    I: IntoIterator<Item = u8>,
{
    send_chunked(bus, address, DATA_MODE, data)
}

/// Address the page/column window the next data stream will fill.
pub fn send_window<B: BusTransport>(
    bus: &mut B,
    address: u8,
    pages: (u8, u8),
    columns: (u8, u8),
) -> Result<(), B::Error> {
    trace!(
        "window pages {}..={} columns {}..={}",
        pages.0,
        pages.1,
        columns.0,
        columns.1
    );
    let list = [
        crate::command::SET_PAGE_ADDRESS,
        pages.0,
        pages.1,
        crate::command::SET_COLUMN_ADDRESS,
        columns.0,
        columns.1,
    ];
    send_command_list(bus, address, &list)
}

fn send_chunked<B, I>(bus: &mut B, address: u8, control: u8, bytes: I) -> Result<(), B::Error>
where
    B: BusTransport,
    I: IntoIterator<Item = u8>,
{
    let limit = B::MAX_TRANSACTION_BYTES;
    bus.begin_transaction(address)?;
    bus.write_byte(control)?;
    let mut sent = 1usize;
    for byte in bytes {
        if sent >= limit {
            bus.end_transaction()?;
            bus.begin_transaction(address)?;
            bus.write_byte(control)?;
            sent = 1;
        }
        bus.write_byte(byte)?;
        sent += 1;
    }
    bus.end_transaction()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::mock::MockBus;
    use alloc::vec::Vec;

    #[test]
    fn single_command_is_one_prefixed_transaction() {
        let mut bus = MockBus::<32>::new();
        send_command(&mut bus, 0x3C, 0xAE).unwrap();
        assert_eq!(bus.transactions, alloc::vec![alloc::vec![0x00, 0xAE]]);
    }

    #[test]
    fn long_list_splits_at_the_transaction_limit() {
        // Limit 8 leaves 7 payload bytes per transaction.
        let list: Vec<u8> = (0..20).collect();
        let mut bus = MockBus::<8>::new();
        send_command_list(&mut bus, 0x3C, &list).unwrap();

        assert_eq!(bus.transactions.len(), 3); // ceil(20 / 7)
        for transaction in &bus.transactions {
            assert_eq!(transaction[0], 0x00);
            assert!(transaction.len() <= 8);
        }
        assert_eq!(bus.payload(), list);
    }

    #[test]
    fn chunk_count_matches_payload_capacity() {
        for len in [1usize, 7, 8, 14, 15, 63, 64] {
            let list: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let mut bus = MockBus::<8>::new();
            send_command_list(&mut bus, 0x3C, &list).unwrap();
            let expected = len.div_ceil(7);
            assert_eq!(bus.transactions.len(), expected, "len {}", len);
            assert_eq!(bus.payload(), list, "len {}", len);
        }
    }

    #[test]
    fn data_stream_uses_the_data_prefix_in_every_chunk() {
        let mut bus = MockBus::<8>::new();
        send_data(&mut bus, 0x3C, (0..10u8).map(|_| 0x55)).unwrap();

        assert_eq!(bus.transactions.len(), 2);
        for transaction in &bus.transactions {
            assert_eq!(transaction[0], 0x40);
        }
        assert_eq!(bus.payload().len(), 10);
    }

    #[test]
    fn window_command_carries_page_and_column_ranges() {
        let mut bus = MockBus::<32>::new();
        send_window(&mut bus, 0x3C, (0, 7), (0, 127)).unwrap();
        assert_eq!(
            bus.transactions,
            alloc::vec![alloc::vec![0x00, 0x22, 0, 7, 0x21, 0, 127]]
        );
    }
}

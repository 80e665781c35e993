//! Register datagrams for the SPI and UART buses
//!
//! ## SPI
//! Every SPI exchange is a 40-bit datagram: one address byte followed by a big-endian
//! 32-bit word. Bit 7 of the address byte selects a write. The chip answers a read
//! request with the *next* exchange, and byte 0 of every reply carries the chip status
//! flags.
//!
//! ## UART
//! The single-wire UART uses sync-framed datagrams protected by a CRC8:
//! - read request: `[0x05, node, address, crc]`
//! - read reply: `[0x05, 0xFF, address, d3, d2, d1, d0, crc]`
//! - write request: `[0x05, node, address | 0x80, d3, d2, d1, d0, crc]`

use crate::{ADDRESS_MASK, WRITE_BIT};

/// Length of an SPI datagram in bytes
pub const SPI_FRAME_LEN: usize = 5;
/// Length of a UART read request in bytes
pub const UART_READ_REQUEST_LEN: usize = 4;
/// Length of a UART write request or read reply in bytes
pub const UART_FRAME_LEN: usize = 8;
/// Sync nibble that starts every UART datagram
pub const UART_SYNC: u8 = 0x05;
/// Node address the chip uses when replying to the bus master
pub const UART_MASTER_ADDRESS: u8 = 0xFF;

/// Reason a UART reply was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReplyError {
    /// First byte was not the sync byte
    InvalidSync(u8),
    /// Reply was not addressed to the bus master
    InvalidMasterAddress(u8),
    /// Reply belongs to a different register
    AddressMismatch {
        /// Register that was requested
        expected: u8,
        /// Register the reply names
        actual: u8,
    },
    /// CRC byte does not match the datagram
    CrcMismatch {
        /// CRC computed over the received bytes
        expected: u8,
        /// CRC byte that was received
        actual: u8,
    },
}

/// Trinamic UART CRC8 (polynomial `x^8 + x^2 + x + 1`, bits taken LSB first)
#[must_use]
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &byte in data {
        let mut current = byte;
        for _ in 0..8 {
            if (crc >> 7) ^ (current & 0x01) != 0 {
                crc = (crc << 1) ^ 0x07;
            } else {
                crc <<= 1;
            }
            current >>= 1;
        }
    }
    crc
}

/// SPI datagram requesting a register read
#[must_use]
pub const fn spi_read_request(address: u8) -> [u8; SPI_FRAME_LEN] {
    [address & ADDRESS_MASK, 0, 0, 0, 0]
}

/// SPI datagram writing a register
#[must_use]
pub const fn spi_write_request(address: u8, value: u32) -> [u8; SPI_FRAME_LEN] {
    let [d3, d2, d1, d0] = value.to_be_bytes();
    [(address & ADDRESS_MASK) | WRITE_BIT, d3, d2, d1, d0]
}

/// Split an SPI reply into its status byte and data word
#[must_use]
pub const fn spi_reply(frame: &[u8; SPI_FRAME_LEN]) -> (u8, u32) {
    (
        frame[0],
        u32::from_be_bytes([frame[1], frame[2], frame[3], frame[4]]),
    )
}

/// UART datagram requesting a register read
#[must_use]
pub fn uart_read_request(node: u8, address: u8) -> [u8; UART_READ_REQUEST_LEN] {
    let mut frame = [UART_SYNC, node, address & ADDRESS_MASK, 0];
    frame[3] = crc8(&frame[..3]);
    frame
}

/// UART datagram writing a register
#[must_use]
pub fn uart_write_request(node: u8, address: u8, value: u32) -> [u8; UART_FRAME_LEN] {
    let [d3, d2, d1, d0] = value.to_be_bytes();
    let mut frame = [
        UART_SYNC,
        node,
        (address & ADDRESS_MASK) | WRITE_BIT,
        d3,
        d2,
        d1,
        d0,
        0,
    ];
    frame[7] = crc8(&frame[..7]);
    frame
}

/// Validate a UART read reply and return the register word
///
/// # Errors
///
/// Returns a [`ReplyError`] if the sync byte, master address, register address or CRC
/// does not match.
pub fn uart_reply(address: u8, frame: &[u8; UART_FRAME_LEN]) -> Result<u32, ReplyError> {
    if frame[0] != UART_SYNC {
        return Err(ReplyError::InvalidSync(frame[0]));
    }
    if frame[1] != UART_MASTER_ADDRESS {
        return Err(ReplyError::InvalidMasterAddress(frame[1]));
    }

    let expected = crc8(&frame[..7]);
    if frame[7] != expected {
        return Err(ReplyError::CrcMismatch {
            expected,
            actual: frame[7],
        });
    }

    let requested = address & ADDRESS_MASK;
    if frame[2] & ADDRESS_MASK != requested {
        return Err(ReplyError::AddressMismatch {
            expected: requested,
            actual: frame[2] & ADDRESS_MASK,
        });
    }

    Ok(u32::from_be_bytes([frame[3], frame[4], frame[5], frame[6]]))
}

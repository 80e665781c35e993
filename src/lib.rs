#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod access;
pub mod cache;
pub mod device;
pub mod field;
pub mod frame;
pub mod interface;
pub mod registers;

pub mod tmc2225;
pub mod tmc2240;

// Re-export main types
pub use access::{Access, RegisterConstant, RegisterMap};
pub use cache::{NoCache, RegisterCache, ShadowCache};
pub use device::{ChipInterface, TmcDriver};
pub use field::RegisterField;
pub use frame::ReplyError;
pub use interface::{BusType, InterfaceError, SpiInterface, TmcBus, UartInterface};

/// Number of register addresses on every supported chip
pub const REGISTER_COUNT: usize = 128;

/// Mask selecting the register address bits of an address byte
pub const ADDRESS_MASK: u8 = 0x7F;

/// Address byte flag marking a write access
pub const WRITE_BIT: u8 = 0x80;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Address beyond the register space (contains the address)
    InvalidAddress(u8),
    /// No register exists at this address
    ReservedRegister(u8),
    /// Write to a register that can only be read
    ReadOnlyRegister(u8),
    /// Read of a write-only register that has no cache entry
    WriteOnlyUncached(u8),
    /// The chip sits on a bus the register layer cannot frame
    UnsupportedBus(BusType),
    /// The transport has no UART node address for this chip id
    InvalidChip(u16),
    /// UART reply failed validation
    InvalidReply(ReplyError),
    /// Typed access with a register size other than 32 bits (contains the size)
    InvalidAccessWidth(u32),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}

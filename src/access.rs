//! Static register metadata
//!
//! Every supported chip provides a [`RegisterMap`]: one access classification and one
//! optional reset value per address, plus a sparse list of hardware-preset constants.
//! Maps are built in `const` context with [`RegisterMap::new`] and the chained
//! [`RegisterMap::register`] / [`RegisterMap::preset`] calls, so a chip's whole table is
//! a single `const` item.

use crate::REGISTER_COUNT;

/// Access classification of a register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    /// Reserved address, no register
    #[default]
    None,
    /// Read only
    Read,
    /// Write only
    Write,
    /// Read and write
    ReadWrite,
    /// Read and write, reads return different data than what was written
    ReadWriteSeparate,
    /// Flag register, writing 1 clears a flag
    ReadWriteClear,
    /// Write only, content set by hardware on reset
    WritePreset,
}

impl Access {
    /// Whether the chip can return this register's content
    #[must_use]
    pub const fn is_readable(self) -> bool {
        matches!(
            self,
            Self::Read | Self::ReadWrite | Self::ReadWriteSeparate | Self::ReadWriteClear
        )
    }

    /// Whether the register accepts writes
    #[must_use]
    pub const fn is_writable(self) -> bool {
        !matches!(self, Self::None | Self::Read)
    }

    /// Whether the register can only be read back from the shadow cache
    #[must_use]
    pub const fn is_write_only(self) -> bool {
        matches!(self, Self::Write | Self::WritePreset)
    }
}

/// Fixed content of a hardware-preset register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterConstant {
    /// Register address
    pub address: u8,
    /// Content after reset
    pub value: u32,
}

/// Register table of one chip variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterMap {
    name: &'static str,
    access: [Access; REGISTER_COUNT],
    reset: [Option<u32>; REGISTER_COUNT],
    constants: &'static [RegisterConstant],
}

impl RegisterMap {
    /// Empty map: every address reserved, no defaults, no constants
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            access: [Access::None; REGISTER_COUNT],
            reset: [None; REGISTER_COUNT],
            constants: &[],
        }
    }

    /// Declare a register with a known reset value
    ///
    /// # Panics
    ///
    /// Panics in `const` evaluation if the address is out of range.
    #[must_use]
    pub const fn register(mut self, address: u8, access: Access, reset: u32) -> Self {
        assert!((address as usize) < REGISTER_COUNT, "register address out of range");
        self.access[address as usize] = access;
        self.reset[address as usize] = Some(reset);
        self
    }

    /// Declare a register whose reset value is chip-determined and unknown
    ///
    /// # Panics
    ///
    /// Panics in `const` evaluation if the address is out of range.
    #[must_use]
    pub const fn preset(mut self, address: u8, access: Access) -> Self {
        assert!((address as usize) < REGISTER_COUNT, "register address out of range");
        self.access[address as usize] = access;
        self.reset[address as usize] = None;
        self
    }

    /// Attach the hardware-preset constants
    ///
    /// # Panics
    ///
    /// Panics in `const` evaluation unless the addresses are strictly ascending.
    #[must_use]
    pub const fn constants(mut self, constants: &'static [RegisterConstant]) -> Self {
        assert!(
            constants_ascending(constants),
            "register constants must use ascending addresses"
        );
        self.constants = constants;
        self
    }

    /// Chip name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Access classification, `None` for out-of-range addresses
    #[must_use]
    pub const fn access(&self, address: u8) -> Option<Access> {
        if (address as usize) < REGISTER_COUNT {
            Some(self.access[address as usize])
        } else {
            None
        }
    }

    /// Reset value of a register, `None` if unknown or out of range
    #[must_use]
    pub const fn reset_value(&self, address: u8) -> Option<u32> {
        if (address as usize) < REGISTER_COUNT {
            self.reset[address as usize]
        } else {
            None
        }
    }

    /// Hardware-preset constants in ascending address order
    #[must_use]
    pub const fn preset_constants(&self) -> &'static [RegisterConstant] {
        self.constants
    }

    /// Fixed content of a hardware-preset register
    #[must_use]
    pub fn constant(&self, address: u8) -> Option<u32> {
        self.constants
            .binary_search_by_key(&address, |constant| constant.address)
            .ok()
            .map(|index| self.constants[index].value)
    }

    /// Iterate over the addresses of all non-reserved registers
    #[allow(clippy::cast_possible_truncation)]
    pub fn addresses(&self) -> impl Iterator<Item = u8> + '_ {
        (0..REGISTER_COUNT)
            .filter(|&index| self.access[index] != Access::None)
            .map(|index| index as u8)
    }
}

const fn constants_ascending(constants: &[RegisterConstant]) -> bool {
    let mut index = 1;
    while index < constants.len() {
        if constants[index - 1].address >= constants[index].address {
            return false;
        }
        index += 1;
    }
    true
}

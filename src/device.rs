//! High-level register access for TMC driver ICs
//!
//! [`TmcDriver`] owns the bus transport and the shadow cache and implements the access
//! rules that make write-only registers behave like readable ones:
//! - readable registers are always read from the chip
//! - write-only registers are read from the shadow cache, never from the chip
//! - every successful write is forwarded to the chip and then shadowed (dirty), except
//!   flag acknowledgements to write-1-to-clear registers
//! - field writes read the whole register first so sibling fields survive
//!
//! One driver serves every chip id reachable through its transport; the cache decides
//! how many of them get shadow storage.

use device_driver::RegisterInterface;

use crate::access::{Access, RegisterMap};
use crate::cache::RegisterCache;
use crate::field::RegisterField;
use crate::frame::{self, UART_FRAME_LEN, UART_READ_REQUEST_LEN};
use crate::interface::{BusType, TmcBus};
use crate::Error;

/// Register access driver
pub struct TmcDriver<B, C> {
    bus: B,
    cache: C,
    map: &'static RegisterMap,
    spi_status: u8,
}

impl<B, C> TmcDriver<B, C>
where
    B: TmcBus,
    C: RegisterCache,
{
    /// Create a driver for the chips described by `map`
    ///
    /// The cache is cleared and seeded from the map's reset values and preset
    /// constants (see [`init_cache`](Self::init_cache)) before this returns, so
    /// write-only registers read back their reset content right away.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use tmc_registers::{ShadowCache, SpiInterface, TmcDriver, tmc2240};
    ///
    /// let interface = SpiInterface::new(spi_device);
    /// let mut driver = TmcDriver::new(interface, ShadowCache::<1>::new(), &tmc2240::MAP);
    /// driver.write_field(0, tmc2240::IRUN, 16)?;
    /// ```
    pub fn new(bus: B, cache: C, map: &'static RegisterMap) -> Self {
        let mut driver = Self {
            bus,
            cache,
            map,
            spi_status: 0,
        };
        driver.init_cache();
        driver
    }

    /// Register map this driver was created with
    pub fn map(&self) -> &'static RegisterMap {
        self.map
    }

    /// Shared access to the shadow cache
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Exclusive access to the transport
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consume the driver and return the transport and the cache
    pub fn release(self) -> (B, C) {
        (self.bus, self.cache)
    }

    /// Status byte returned by the chip with the last SPI datagram
    pub fn spi_status(&self) -> u8 {
        self.spi_status
    }

    /// Reset the cache and seed it from the register map
    ///
    /// Every entry of every cached chip returns to value 0, clean. Registers with a
    /// known reset value, and hardware-preset registers with a known constant, are then
    /// filled without marking them dirty. Registers whose reset value is unknown stay 0.
    pub fn init_cache(&mut self) {
        self.cache.clear();

        let map = self.map;
        let chips = (0..self.cache.capacity()).filter_map(|chip| u16::try_from(chip).ok());

        for chip in chips {
            for address in map.addresses() {
                if let Some(value) = map.reset_value(address) {
                    self.cache.fill_default(chip, address, value);
                }
            }
            for constant in map.preset_constants() {
                self.cache
                    .fill_default(chip, constant.address, constant.value);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: cache seeded for {} chip(s)",
            map.name(),
            self.cache.capacity()
        );
    }

    /// Read a complete register word
    ///
    /// Readable registers are read from the chip. Write-only registers are answered
    /// from the shadow cache.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the address is out of range or reserved
    /// - the register is write-only and the chip has no cache entry
    /// - communication with the device fails or the reply is invalid
    pub fn read_register(&mut self, chip: u16, address: u8) -> Result<u32, Error<B::Error>> {
        let access = self.access(address)?;

        if access.is_readable() {
            return self.read_bus(chip, address);
        }

        self.cache.read(chip, address).ok_or_else(|| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Write-only register {=u8:#x} of chip {} is not cached", address, chip);
            Error::WriteOnlyUncached(address)
        })
    }

    /// Write a complete register word
    ///
    /// The word is sent to the chip first; only once the transport accepted it is it
    /// stored in the cache and marked dirty. Writes to write-1-to-clear status
    /// registers acknowledge flags and are not shadowed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the address is out of range or reserved
    /// - the register is read-only
    /// - communication with the device fails
    pub fn write_register(
        &mut self,
        chip: u16,
        address: u8,
        value: u32,
    ) -> Result<(), Error<B::Error>> {
        self.cache_write(chip, address, value).map(|_| ())
    }

    /// Read a field
    ///
    /// Signed fields come back as the two's-complement bit pattern; see
    /// [`read_field_signed`](Self::read_field_signed).
    ///
    /// # Errors
    ///
    /// Same as [`read_register`](Self::read_register).
    pub fn read_field(&mut self, chip: u16, field: RegisterField) -> Result<u32, Error<B::Error>> {
        let word = self.read_register(chip, field.address)?;
        Ok(field.extract(word))
    }

    /// Read a field as a signed value
    ///
    /// # Errors
    ///
    /// Same as [`read_register`](Self::read_register).
    pub fn read_field_signed(
        &mut self,
        chip: u16,
        field: RegisterField,
    ) -> Result<i32, Error<B::Error>> {
        let word = self.read_register(chip, field.address)?;
        Ok(field.extract_signed(word))
    }

    /// Write a field, preserving the other fields of the register
    ///
    /// The current word is read (from the chip or the cache, per the access rules),
    /// the field is merged in and the whole word is written back. Fields of
    /// write-1-to-clear registers are merged into zero instead, so only the addressed
    /// flags are acknowledged.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the current word or writing the new one fails.
    pub fn write_field(
        &mut self,
        chip: u16,
        field: RegisterField,
        value: u32,
    ) -> Result<(), Error<B::Error>> {
        // Ones written back to a write-1-to-clear register would acknowledge sibling flags
        let word = match self.access(field.address)? {
            Access::ReadWriteClear => 0,
            _ => self.read_register(chip, field.address)?,
        };
        self.write_register(chip, field.address, field.update(word, value))
    }

    /// Shadow value of a register, whatever its access class
    pub fn cache_read(&self, chip: u16, address: u8) -> Option<u32> {
        self.cache.read(chip, address)
    }

    /// Write a register word to the chip and shadow it
    ///
    /// Same as [`write_register`](Self::write_register), but reports whether the value
    /// landed in the cache: `false` if the chip or address has no cache entry, or the
    /// register is write-1-to-clear.
    ///
    /// # Errors
    ///
    /// Same as [`write_register`](Self::write_register). Nothing is cached on error.
    pub fn cache_write(
        &mut self,
        chip: u16,
        address: u8,
        value: u32,
    ) -> Result<bool, Error<B::Error>> {
        let access = self.access(address)?;

        if !access.is_writable() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejected write to read-only register {=u8:#x}", address);
            return Err(Error::ReadOnlyRegister(address));
        }

        self.write_bus(chip, address, value)?;

        if access == Access::ReadWriteClear {
            return Ok(false);
        }
        Ok(self.cache.write(chip, address, value))
    }

    /// Seed a shadow entry without marking it dirty
    ///
    /// Returns `false` if the chip or address is not cached.
    pub fn cache_fill_default(&mut self, chip: u16, address: u8, value: u32) -> bool {
        self.cache.fill_default(chip, address, value)
    }

    /// Whether a register was written since the cache was last initialised
    pub fn dirty_bit(&self, chip: u16, address: u8) -> bool {
        self.cache.is_dirty(chip, address)
    }

    /// Set or clear the dirty bit of a shadow entry
    pub fn set_dirty_bit(&mut self, chip: u16, address: u8, dirty: bool) {
        self.cache.set_dirty(chip, address, dirty);
    }

    /// Replay every dirty shadow entry of a chip
    ///
    /// Use after the chip lost its configuration (power cycle, reset). Entries are
    /// written in ascending address order straight to the transport; entries that were
    /// only filled from the reset tables are skipped, and so are write-1-to-clear status
    /// registers. Dirty bits are left set.
    ///
    /// Returns the number of registers written.
    ///
    /// # Errors
    ///
    /// Stops at the first transport failure and returns it; registers below the failing
    /// address have been written, the rest have not.
    pub fn restore(&mut self, chip: u16) -> Result<usize, Error<B::Error>> {
        let map = self.map;
        let mut replayed = 0;

        for address in map.addresses() {
            if map.access(address) == Some(Access::ReadWriteClear)
                || !self.cache.is_dirty(chip, address)
            {
                continue;
            }
            let Some(value) = self.cache.read(chip, address) else {
                continue;
            };

            #[cfg(feature = "defmt")]
            defmt::trace!("Restore chip {} register {=u8:#x} = {=u32:#x}", chip, address, value);

            self.write_bus(chip, address, value)?;
            replayed += 1;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Restored {} register(s) of chip {}", replayed, chip);

        Ok(replayed)
    }

    /// Restore a chip if its reset flag is set, then clear the flag
    ///
    /// `reset_flag` is a write-1-to-clear status bit such as
    /// [`tmc2240::RESET`](crate::tmc2240::RESET). Returns whether a restore happened.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the flag, restoring or clearing the flag fails.
    pub fn restore_if_reset(
        &mut self,
        chip: u16,
        reset_flag: RegisterField,
    ) -> Result<bool, Error<B::Error>> {
        if self.read_field(chip, reset_flag)? == 0 {
            return Ok(false);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Chip {} reports a reset, restoring registers", chip);

        self.restore(chip)?;
        self.write_register(
            chip,
            reset_flag.address,
            reset_flag.update(0, reset_flag.max_raw()),
        )?;
        Ok(true)
    }

    /// Typed register access for one chip
    ///
    /// The returned handle implements `device_driver::RegisterInterface`, so it can back
    /// a generated register block such as [`crate::registers::Tmc2240`].
    pub fn chip(&mut self, chip: u16) -> ChipInterface<'_, B, C> {
        ChipInterface { driver: self, chip }
    }

    fn access(&self, address: u8) -> Result<Access, Error<B::Error>> {
        match self.map.access(address) {
            None => Err(Error::InvalidAddress(address)),
            Some(Access::None) => Err(Error::ReservedRegister(address)),
            Some(access) => Ok(access),
        }
    }

    fn node_address(&self, chip: u16) -> Result<u8, Error<B::Error>> {
        self.bus.node_address(chip).ok_or_else(|| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Chip {} has no UART node address", chip);
            Error::InvalidChip(chip)
        })
    }

    fn read_bus(&mut self, chip: u16, address: u8) -> Result<u32, Error<B::Error>> {
        match self.bus.bus_type(chip) {
            BusType::Spi => {
                // The reply to a read request arrives with the following datagram
                let mut request = frame::spi_read_request(address);
                self.bus.read_write_spi(chip, &mut request)?;

                let mut reply = frame::spi_read_request(address);
                self.bus.read_write_spi(chip, &mut reply)?;

                let (status, value) = frame::spi_reply(&reply);
                self.spi_status = status;
                Ok(value)
            }
            BusType::Uart => {
                let node = self.node_address(chip)?;
                let mut data = [0u8; UART_FRAME_LEN];
                data[..UART_READ_REQUEST_LEN]
                    .copy_from_slice(&frame::uart_read_request(node, address));

                self.bus
                    .read_write_uart(chip, &mut data, UART_READ_REQUEST_LEN, UART_FRAME_LEN)?;

                frame::uart_reply(address, &data).map_err(|error| {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Rejected UART reply from chip {}: {}", chip, error);
                    Error::InvalidReply(error)
                })
            }
            bus @ BusType::Wlan => Err(Error::UnsupportedBus(bus)),
        }
    }

    fn write_bus(&mut self, chip: u16, address: u8, value: u32) -> Result<(), Error<B::Error>> {
        match self.bus.bus_type(chip) {
            BusType::Spi => {
                let mut data = frame::spi_write_request(address, value);
                self.bus.read_write_spi(chip, &mut data)?;
                self.spi_status = data[0];
                Ok(())
            }
            BusType::Uart => {
                let node = self.node_address(chip)?;
                let mut data = frame::uart_write_request(node, address, value);
                self.bus
                    .read_write_uart(chip, &mut data, UART_FRAME_LEN, 0)?;
                Ok(())
            }
            bus @ BusType::Wlan => Err(Error::UnsupportedBus(bus)),
        }
    }
}

/// Register interface for a single chip behind a [`TmcDriver`]
///
/// Created by [`TmcDriver::chip`]. Reads and writes follow the same cache rules as
/// [`TmcDriver::read_register`] and [`TmcDriver::write_register`].
pub struct ChipInterface<'a, B, C> {
    driver: &'a mut TmcDriver<B, C>,
    chip: u16,
}

impl<B, C> ChipInterface<'_, B, C> {
    /// Chip id this handle addresses
    pub fn id(&self) -> u16 {
        self.chip
    }
}

impl<B, C> RegisterInterface for ChipInterface<'_, B, C>
where
    B: TmcBus,
    C: RegisterCache,
{
    type Error = Error<B::Error>;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        if size_bits != u32::BITS || read_data.len() != 4 {
            return Err(Error::InvalidAccessWidth(size_bits));
        }
        let value = self.driver.read_register(self.chip, address)?;
        read_data.copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let Ok(bytes) = <[u8; 4]>::try_from(write_data) else {
            return Err(Error::InvalidAccessWidth(size_bits));
        };
        self.driver
            .write_register(self.chip, address, u32::from_be_bytes(bytes))
    }
}

//! Shadow register cache
//!
//! Write-only registers cannot be read back over the bus, so the driver keeps a shadow
//! copy of every value it writes. Each entry carries a dirty bit that is set only by a
//! real write: entries seeded from the reset tables with
//! [`RegisterCache::fill_default`] stay clean and are therefore skipped when the driver
//! replays the cache after a chip reset.
//!
//! The cache is a trait so applications can bring their own storage. Two
//! implementations ship with the crate:
//! - [`ShadowCache`]: fixed-capacity storage for `N` chips
//! - [`NoCache`]: caching disabled, every lookup misses

use crate::REGISTER_COUNT;

const DIRTY_BYTES: usize = REGISTER_COUNT / 8;

/// Storage for shadow register values and dirty bits
///
/// Implementations are plain storage. Deciding which registers go through the cache is
/// the driver's job.
pub trait RegisterCache {
    /// Shadow value of a register, `None` if the chip or address is not cached
    fn read(&self, chip: u16, address: u8) -> Option<u32>;

    /// Store a written value and mark it dirty
    ///
    /// Returns `false` if the chip or address is not cached.
    fn write(&mut self, chip: u16, address: u8, value: u32) -> bool;

    /// Store a value without touching the dirty bit
    ///
    /// Returns `false` if the chip or address is not cached.
    fn fill_default(&mut self, chip: u16, address: u8, value: u32) -> bool;

    /// Whether the entry was written since the last reset of the cache
    fn is_dirty(&self, chip: u16, address: u8) -> bool;

    /// Set or clear the dirty bit of an entry
    fn set_dirty(&mut self, chip: u16, address: u8, dirty: bool);

    /// Reset every entry of every chip to value 0, clean
    fn clear(&mut self);

    /// Number of chips this cache holds entries for
    fn capacity(&self) -> usize;
}

/// Built-in cache for up to `N` chips
///
/// Chip ids `0..N` are cached, any other id misses. Values are kept in a
/// `[[u32; 128]; N]` array and dirty bits are packed eight to a byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowCache<const N: usize> {
    values: [[u32; REGISTER_COUNT]; N],
    dirty: [[u8; DIRTY_BYTES]; N],
}

impl<const N: usize> ShadowCache<N> {
    /// Create a cache with every entry at value 0, clean
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [[0; REGISTER_COUNT]; N],
            dirty: [[0; DIRTY_BYTES]; N],
        }
    }

    fn slot(chip: u16, address: u8) -> Option<(usize, usize)> {
        let chip = usize::from(chip);
        let address = usize::from(address);
        (chip < N && address < REGISTER_COUNT).then_some((chip, address))
    }

    /// Number of dirty entries for a chip
    #[must_use]
    pub fn dirty_count(&self, chip: u16) -> usize {
        self.dirty
            .get(usize::from(chip))
            .map_or(0, |bits| bits.iter().map(|byte| byte.count_ones() as usize).sum())
    }
}

impl<const N: usize> Default for ShadowCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RegisterCache for ShadowCache<N> {
    fn read(&self, chip: u16, address: u8) -> Option<u32> {
        let (chip, address) = Self::slot(chip, address)?;
        Some(self.values[chip][address])
    }

    fn write(&mut self, chip: u16, address: u8, value: u32) -> bool {
        let Some((index, slot)) = Self::slot(chip, address) else {
            return false;
        };
        self.values[index][slot] = value;
        self.set_dirty(chip, address, true);
        true
    }

    fn fill_default(&mut self, chip: u16, address: u8, value: u32) -> bool {
        let Some((chip, address)) = Self::slot(chip, address) else {
            return false;
        };
        self.values[chip][address] = value;
        true
    }

    fn is_dirty(&self, chip: u16, address: u8) -> bool {
        Self::slot(chip, address)
            .is_some_and(|(chip, address)| self.dirty[chip][address / 8] & (1 << (address % 8)) != 0)
    }

    fn set_dirty(&mut self, chip: u16, address: u8, dirty: bool) {
        let Some((chip, address)) = Self::slot(chip, address) else {
            return;
        };
        let byte = &mut self.dirty[chip][address / 8];
        if dirty {
            *byte |= 1 << (address % 8);
        } else {
            *byte &= !(1 << (address % 8));
        }
    }

    fn clear(&mut self) {
        self.values = [[0; REGISTER_COUNT]; N];
        self.dirty = [[0; DIRTY_BYTES]; N];
    }

    fn capacity(&self) -> usize {
        N
    }
}

/// Cache that holds nothing
///
/// With this cache write-only registers cannot be read and field writes to them fail;
/// use [`crate::TmcDriver::write_register`] with complete words instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoCache;

impl RegisterCache for NoCache {
    fn read(&self, _chip: u16, _address: u8) -> Option<u32> {
        None
    }

    fn write(&mut self, _chip: u16, _address: u8, _value: u32) -> bool {
        false
    }

    fn fill_default(&mut self, _chip: u16, _address: u8, _value: u32) -> bool {
        false
    }

    fn is_dirty(&self, _chip: u16, _address: u8) -> bool {
        false
    }

    fn set_dirty(&mut self, _chip: u16, _address: u8, _dirty: bool) {}

    fn clear(&mut self) {}

    fn capacity(&self) -> usize {
        0
    }
}

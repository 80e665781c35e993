//! Register field descriptors and the bit-level codec
//!
//! A [`RegisterField`] names a contiguous run of bits inside a 32-bit register word.
//! Fields are plain `const` data: the chip modules ([`crate::tmc2240`],
//! [`crate::tmc2225`]) declare one per datasheet field, and several fields usually share
//! the same register address.
//!
//! # Example
//!
//! ```
//! use tmc_registers::RegisterField;
//!
//! const IRUN: RegisterField = RegisterField::new(0x0000_1F00, 8, 0x10);
//!
//! let word = IRUN.update(0x0007_0A03, 31);
//! assert_eq!(word, 0x0007_1F03);
//! assert_eq!(IRUN.extract(word), 31);
//! ```

/// Descriptor of a bitfield inside a register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterField {
    /// Bits occupied by the field, in register position
    pub mask: u32,
    /// Position of the field's least significant bit
    pub shift: u8,
    /// Address of the owning register
    pub address: u8,
    /// Whether the field holds a two's-complement value
    pub signed: bool,
}

impl RegisterField {
    /// Create an unsigned field descriptor
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if `shift` is not below 32 or
    /// if `mask` has no bit set at `shift`.
    #[must_use]
    pub const fn new(mask: u32, shift: u8, address: u8) -> Self {
        assert!(shift < 32, "field shift out of range");
        assert!((mask >> shift) & 1 == 1, "mask must start at shift");
        Self {
            mask,
            shift,
            address,
            signed: false,
        }
    }

    /// Create a two's-complement field descriptor
    ///
    /// # Panics
    ///
    /// Same conditions as [`RegisterField::new`].
    #[must_use]
    pub const fn signed(mask: u32, shift: u8, address: u8) -> Self {
        let mut field = Self::new(mask, shift, address);
        field.signed = true;
        field
    }

    /// Field width in bits
    #[must_use]
    pub const fn width(&self) -> u32 {
        u32::BITS - (self.mask >> self.shift).leading_zeros()
    }

    /// Largest raw value the field can hold
    #[must_use]
    pub const fn max_raw(&self) -> u32 {
        self.mask >> self.shift
    }

    /// Extract the field from a raw register word
    ///
    /// Signed fields are sign-extended from the field's own most significant bit, so the
    /// returned `u32` is the two's-complement bit pattern of the value.
    #[must_use]
    pub const fn extract(&self, word: u32) -> u32 {
        let value = (word & self.mask) >> self.shift;

        if self.signed {
            let base = self.mask >> self.shift;
            let sign = base & (!base >> 1);
            (value ^ sign).wrapping_sub(sign)
        } else {
            value
        }
    }

    /// Extract the field and reinterpret it as a signed integer
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn extract_signed(&self, word: u32) -> i32 {
        self.extract(word) as i32
    }

    /// Return `word` with this field replaced by `value`
    ///
    /// Bits of `value` that do not fit in the field are discarded. All other bits of
    /// `word` are preserved.
    #[must_use]
    pub const fn update(&self, word: u32, value: u32) -> u32 {
        (word & !self.mask) | ((value << self.shift) & self.mask)
    }

    /// Whether two fields share at least one bit of the same register
    #[must_use]
    pub const fn overlaps(&self, other: &RegisterField) -> bool {
        self.address == other.address && self.mask & other.mask != 0
    }
}

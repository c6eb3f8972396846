//! Named bit flags stored as an integer dictionary entry.
//!
//! Annotation flags (`/F`) and field flags (`/Ff`) share one accessor
//! contract: bits are addressed by lowercase snake_case names
//! (`"no_view"`, `"multi_select"`), listed in ascending bit order, and an
//! unknown name is an error rather than a silent no-op.

use crate::document::DictionaryObject;
use crate::error::{Error, Result};
use crate::object::Object;
use bitflags::Flags;

/// Named flag access over an integer dictionary entry.
pub trait FlagBitset: DictionaryObject {
    /// The `bitflags` type naming each bit.
    type Flags: Flags<Bits = u32> + Copy;

    /// Dictionary key holding the flags integer.
    const FLAGS_KEY: &'static str;

    /// Raw flags integer (0 when absent).
    fn raw_flags(&self) -> u32 {
        self.get(Self::FLAGS_KEY)
            .and_then(Object::as_integer)
            .map(|value| flag_bits(Self::FLAGS_KEY, value))
            .unwrap_or(0)
    }

    /// Overwrite the raw flags integer.
    fn set_raw_flags(&mut self, bits: u32) -> Result<()> {
        self.set(Self::FLAGS_KEY, Object::Integer(bits as i64))
    }

    /// Current flags as a typed set. Undefined bits are retained.
    fn flag_set(&self) -> Self::Flags {
        Self::Flags::from_bits_retain(self.raw_flags())
    }

    /// Names of all set flags in ascending bit order.
    fn flags(&self) -> Vec<String> {
        let current = self.flag_set();
        Self::Flags::FLAGS
            .iter()
            .filter(|flag| !flag.value().is_empty() && current.contains(*flag.value()))
            .map(|flag| flag.name().to_ascii_lowercase())
            .collect()
    }

    /// Whether every bit of `flags` is set.
    fn is_flagged(&self, flags: Self::Flags) -> bool {
        self.flag_set().contains(flags)
    }

    /// Whether the flag called `name` is set.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownFlagName`] if `name` is not a flag of this kind.
    fn flagged(&self, name: &str) -> Result<bool> {
        let flag = lookup_flag::<Self::Flags>(name)?;
        Ok(self.is_flagged(flag))
    }

    /// Set `flags`, first clearing all others if `clear_existing` is true.
    fn insert_flags(&mut self, flags: Self::Flags, clear_existing: bool) -> Result<()> {
        let mut bits = if clear_existing { 0 } else { self.raw_flags() };
        bits |= flags.bits();
        self.set_raw_flags(bits)
    }

    /// Clear `flags`.
    fn remove_flags(&mut self, flags: Self::Flags) -> Result<()> {
        let bits = self.raw_flags() & !flags.bits();
        self.set_raw_flags(bits)
    }

    /// Set the flag called `name`.
    ///
    /// With `clear_existing` the flags integer ends up holding only this bit.
    fn flag(&mut self, name: &str, clear_existing: bool) -> Result<()> {
        let flag = lookup_flag::<Self::Flags>(name)?;
        self.insert_flags(flag, clear_existing)
    }

    /// Clear the flag called `name`.
    fn unflag(&mut self, name: &str) -> Result<()> {
        let flag = lookup_flag::<Self::Flags>(name)?;
        self.remove_flags(flag)
    }
}

/// Flag bits of a stored flags integer; values outside `u32` count as 0.
pub(crate) fn flag_bits(key: &str, value: i64) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| {
        log::warn!("Ignoring out-of-range /{} value {}", key, value);
        0
    })
}

fn lookup_flag<F: Flags>(name: &str) -> Result<F> {
    if name.is_empty() || name.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(Error::UnknownFlagName(name.to_string()));
    }
    F::from_name(&name.to_ascii_uppercase()).ok_or_else(|| Error::UnknownFlagName(name.to_string()))
}

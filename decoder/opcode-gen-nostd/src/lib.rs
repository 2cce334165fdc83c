#![no_std]

use core::ops::BitAnd;

/// An instruction word that a generated table can be matched against.
pub trait Word: Copy + Eq + BitAnd<Output = Self> {}

impl Word for u8 {}

impl Word for u16 {}

impl Word for u32 {}

impl Word for u64 {}

/// A word matches a rule iff every selected bit has the required value.
#[inline(always)]
pub fn matches<W: Word>(word: W, select: W, value: W) -> bool {
    (word & select) == value
}

/// Index of the first entry in `table` that matches `word`.
#[inline]
pub fn position<W: Word, C>(table: &[(W, W, C)], word: W) -> Option<usize> {
    table
        .iter()
        .position(|(select, value, _)| matches(word, *select, *value))
}

/// First match wins. Tables are expected to be ordered most specific first.
#[inline]
pub fn classify<W: Word, C>(table: &[(W, W, C)], word: W) -> Option<&C> {
    position(table, word).map(|ndx| &table[ndx].2)
}

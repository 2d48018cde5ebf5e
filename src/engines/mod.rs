//! Phonetic annotation engines.
//!
//! This module contains implementations of pronunciation annotators.
//!
//! # Available Engines
//!
//! Enable engines via Cargo features:
//! - `english` - IPA over English words (CMUdict + Arpabet symbol table)
//! - `japanese` - Furigana over kanji (vibrato morphological analysis)

#[cfg(feature = "english")]
pub mod ipa;

#[cfg(feature = "japanese")]
pub mod furigana;

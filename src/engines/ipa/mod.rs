//! English IPA annotation engine.
//!
//! This module provides an engine that annotates English words with their
//! International Phonetic Alphabet pronunciation. Words are looked up in the
//! CMU pronouncing dictionary (read with `cmudict_fast`) and their Arpabet
//! codes are mapped to IPA through a symbol table.
//!
//! # Lexicon Directory Layout
//!
//! ```text
//! dict/english/
//! ├── cmudict    # CMUdict word list: `apple AE1 P AH0 L`
//! ├── symbols    # Arpabet to IPA: `AE1 æ`, first variant wins
//! └── vowels     # one line of vowel glyphs: `ɑ æ ə ʌ ...`
//! ```
//!
//! The `symbols` and `vowels` files may be replaced by the built-in tables
//! with [`IpaModelParams::builtin_tables`].
//!
//! # Pronunciation of "the"
//!
//! | Next word | Reading |
//! |---|---|
//! | starts with a vowel sound (`apple`, `hour`) | `ðiː` |
//! | anything else (`book`, `university`) | `ðə` (from the dictionary) |
//! | punctuation only (`--`) | `ðə` |
//! | not in the dictionary | `ðə` |
//!
//! Only a word whose transcription starts with a vowel glyph sets the vowel
//! context. Anything without a transcription clears it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use phonetics_rs::{PhoneticsEngine, engines::ipa::{IpaEngine, IpaModelParams}};
//! use std::path::PathBuf;
//!
//! let params = IpaModelParams {
//!     builtin_tables: true,
//!     ..Default::default()
//! };
//! let engine = IpaEngine::load_with_params(&PathBuf::from("dict/english"), params)?;
//!
//! let annotation = engine.annotate("I just read the article on the newspaper.");
//! println!("{} of {} words annotated", annotation.annotated_count(), annotation.units.len());
//! println!("{}", annotation.to_html());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engine;
pub mod lexicon;
pub mod phonemizer;
pub mod symbols;

pub use engine::{IpaEngine, IpaModelParams, IpaModelParamsBuilder};
pub use lexicon::{IpaError, IpaLexicon};

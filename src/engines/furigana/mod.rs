//! Japanese furigana annotation engine.
//!
//! This module provides an engine that puts hiragana readings over kanji.
//! Text is segmented with the [vibrato](https://github.com/daac-tools/vibrato)
//! morphological analyzer, and the katakana reading of each token is taken
//! from the dictionary's feature string.
//!
//! # Model Directory Layout
//!
//! ```text
//! dict/ipadic/
//! └── system.dic.zst   # compiled vibrato dictionary (IPADIC, zstd-compressed)
//! ```
//!
//! A plain `*.dic` file, or MeCab sources (`lex.csv`, `matrix.def`,
//! `char.def`, `unk.def`) compiled at load time, are accepted as well.
//!
//! # Which tokens get ruby
//!
//! | Surface | Example | Ruby |
//! |---|---|---|
//! | contains kanji | `囲碁`, `楽しい` | reading in hiragana, visible hiragana blanked |
//! | contains full-width symbols | `１０` | reading in hiragana |
//! | ASCII, hiragana, katakana only | `FUJI`, `は`, `カラー` | none |
//!
//! # Examples
//!
//! ```rust,no_run
//! use phonetics_rs::{PhoneticsEngine, engines::furigana::{FuriganaEngine, FuriganaModelParams}};
//! use std::path::PathBuf;
//!
//! let params = FuriganaModelParams {
//!     dictionary_file: "unidic.dic.zst".to_string(),
//!     reading_field: 9,
//!     ..Default::default()
//! };
//! let engine = FuriganaEngine::load_with_params(&PathBuf::from("dict/unidic"), params)?;
//! println!("{}", engine.export_html("樹木希林はFUJIカラーで写せない遠いお正月へ旅立ったよ。"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engine;
pub mod kana;
pub mod model;

#[cfg(test)]
mod test_utils;

pub use engine::{FuriganaEngine, FuriganaModelParams, FuriganaModelParamsBuilder};
pub use model::{FuriganaError, FuriganaModel, Morpheme};

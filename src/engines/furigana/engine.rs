use std::path::Path;
use std::sync::Arc;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::markup::{normalize_line_breaks, RubyStyle, BREAK_MARKER};
use crate::{Annotation, AnnotationUnit, PhoneticsEngine};

use super::kana::furigana;
use super::model::{FuriganaError, FuriganaModel};

/// Parameters for configuring Japanese model loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
#[builder(default, setter(into))]
pub struct FuriganaModelParams {
    /// Preferred compiled dictionary inside the model directory.
    ///
    /// Files ending in `.zst` are zstd-decompressed while loading.
    pub dictionary_file: String,
    /// Index of the katakana reading in the comma-separated feature string.
    ///
    /// 7 for IPADIC. UniDic-based dictionaries keep it elsewhere (usually 6 or 9).
    pub reading_field: usize,
    /// Drop whitespace tokens instead of copying them to the output.
    /// Requires a `SPACE` category in the dictionary's `char.def`.
    pub ignore_space: bool,
}

impl Default for FuriganaModelParams {
    fn default() -> Self {
        Self {
            dictionary_file: "system.dic.zst".to_string(),
            reading_field: 7,
            ignore_space: false,
        }
    }
}

impl FuriganaModelParams {
    /// Read params from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, FuriganaError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FuriganaError::Config(format!("Failed to parse JSON: {e}")))
    }
}

/// Japanese furigana annotation engine.
///
/// Segments text with the vibrato morphological analyzer and puts hiragana
/// readings over every token that contains kanji or full-width symbols.
/// Hiragana already visible in a token is blanked out of its reading.
///
/// # Quick Start
///
/// ```rust,no_run
/// use phonetics_rs::{PhoneticsEngine, engines::furigana::FuriganaEngine};
/// use std::path::PathBuf;
///
/// // Directory holding an IPADIC system.dic.zst
/// let engine = FuriganaEngine::load(&PathBuf::from("dict/ipadic"))?;
/// let html = engine.export_html("囲碁は楽しい。");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct FuriganaEngine {
    model: Arc<FuriganaModel>,
}

impl FuriganaEngine {
    /// Create an engine over an already loaded model.
    pub fn from_model(model: Arc<FuriganaModel>) -> Self {
        Self { model }
    }

    /// The model this engine reads from.
    pub fn model(&self) -> &Arc<FuriganaModel> {
        &self.model
    }
}

impl PhoneticsEngine for FuriganaEngine {
    type ModelParams = FuriganaModelParams;

    fn load_with_params(
        model_path: &Path,
        params: Self::ModelParams,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let model = FuriganaModel::load(model_path, &params)?;
        Ok(Self::from_model(Arc::new(model)))
    }

    fn annotate(&self, text: &str) -> Annotation {
        let line = normalize_line_breaks(text);
        let segments: Vec<&str> = line.split(BREAK_MARKER).collect();
        let last = segments.len() - 1;

        let mut units = Vec::new();
        for (idx, morphemes) in self.model.tokenize_segments(&segments).into_iter().enumerate() {
            let start = units.len();
            units.extend(morphemes.into_iter().map(|m| {
                let reading = furigana(&m.surface, m.reading.as_deref());
                AnnotationUnit::new(m.surface, reading)
            }));

            if idx < last {
                match units[start..].last_mut() {
                    Some(unit) => unit.line_break = true,
                    None => units.push(AnnotationUnit::line_break()),
                }
            }
        }

        Annotation {
            units,
            style: RubyStyle::FURIGANA,
        }
    }
}

use std::path::Path;
use std::sync::Arc;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::markup::{normalize_line_breaks, RubyStyle};
use crate::{Annotation, PhoneticsEngine};

use super::lexicon::{IpaError, IpaLexicon};
use super::phonemizer::{resolve_words, split_words};

/// Parameters for configuring English lexicon loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
#[builder(default, setter(into))]
pub struct IpaModelParams {
    /// File name of the CMUdict-style word list inside the model directory.
    pub dictionary_file: String,
    /// File name of the Arpabet to IPA symbol table.
    pub symbols_file: String,
    /// File name of the vowel glyph set.
    pub vowels_file: String,
    /// Reading of "the" in front of a vowel sound.
    pub the_before_vowel: String,
    /// Use the built-in symbol table and vowel set instead of the
    /// `symbols` and `vowels` files.
    pub builtin_tables: bool,
}

impl Default for IpaModelParams {
    fn default() -> Self {
        Self {
            dictionary_file: "cmudict".to_string(),
            symbols_file: "symbols".to_string(),
            vowels_file: "vowels".to_string(),
            the_before_vowel: "ðiː".to_string(),
            builtin_tables: false,
        }
    }
}

impl IpaModelParams {
    /// Read params from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, IpaError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| IpaError::Config(format!("Failed to parse JSON: {e}")))
    }
}

/// English IPA annotation engine.
///
/// Looks every word up in a CMUdict-style pronouncing dictionary, converts
/// its Arpabet codes to IPA and renders it as underlined ruby. "the" is read
/// `ðiː` in front of a vowel sound.
///
/// # Quick Start
///
/// ```rust,no_run
/// use phonetics_rs::{PhoneticsEngine, engines::ipa::IpaEngine};
/// use std::path::PathBuf;
///
/// let engine = IpaEngine::load(&PathBuf::from("dict/english"))?;
/// let html = engine.export_html("I read the apple.");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Sharing a lexicon
///
/// ```rust,no_run
/// use phonetics_rs::engines::ipa::{IpaEngine, IpaLexicon, IpaModelParams};
/// use phonetics_rs::LazyModel;
/// use std::path::Path;
///
/// static ENGLISH: LazyModel<IpaLexicon> = LazyModel::new();
///
/// let lexicon = ENGLISH.get_or_try_init(|| {
///     IpaLexicon::load(Path::new("dict/english"), &IpaModelParams::default())
/// })?;
/// let engine = IpaEngine::from_lexicon(lexicon);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct IpaEngine {
    lexicon: Arc<IpaLexicon>,
}

impl IpaEngine {
    /// Create an engine over an already loaded lexicon.
    pub fn from_lexicon(lexicon: Arc<IpaLexicon>) -> Self {
        Self { lexicon }
    }

    /// The lexicon this engine reads from.
    pub fn lexicon(&self) -> &Arc<IpaLexicon> {
        &self.lexicon
    }
}

impl PhoneticsEngine for IpaEngine {
    type ModelParams = IpaModelParams;

    fn load_with_params(
        model_path: &Path,
        params: Self::ModelParams,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let lexicon = IpaLexicon::load(model_path, &params)?;
        Ok(Self::from_lexicon(Arc::new(lexicon)))
    }

    fn annotate(&self, text: &str) -> Annotation {
        let line = normalize_line_breaks(text);
        let words = split_words(&line);
        Annotation {
            units: resolve_words(&words, &self.lexicon),
            style: RubyStyle::IPA,
        }
    }
}

//! # phonetics-rs
//!
//! A Rust library that annotates raw text with ruby pronunciation markup.
//!
//! ## Features
//!
//! - **English IPA**: CMUdict lookup, Arpabet to IPA conversion and the
//!   vowel-sensitive pronunciation of "the"
//! - **Japanese furigana**: morphological analysis with vibrato, hiragana
//!   readings over kanji without repeating visible okurigana
//! - **Shared models**: dictionaries load once and are shared across engines
//!   and threads
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! phonetics-rs = { version = "2026.2", features = ["english"] }
//! ```
//!
//! ```ignore
//! use std::path::PathBuf;
//! use phonetics_rs::{engines::ipa::IpaEngine, PhoneticsEngine};
//!
//! let engine = IpaEngine::load(&PathBuf::from("dict/english"))?;
//!
//! let html = engine.export_html("I read the apple.");
//! println!("{html}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engines;
pub mod markup;

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

pub use markup::RubyStyle;

/// One annotated span of text.
///
/// An empty `reading` renders the surface verbatim. `line_break` asks the
/// renderer for a line break after this unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationUnit {
    /// Text as it appeared in the input, break markers removed
    pub surface: String,
    /// Phonetic reading, IPA or hiragana
    pub reading: String,
    /// Whether an original line boundary follows this unit
    pub line_break: bool,
}

impl AnnotationUnit {
    pub fn new(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
            line_break: false,
        }
    }

    /// A unit that stands for an empty line.
    pub fn line_break() -> Self {
        Self {
            surface: String::new(),
            reading: String::new(),
            line_break: true,
        }
    }
}

/// The result of annotating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Annotated units in document order
    pub units: Vec<AnnotationUnit>,
    /// Ruby markup flavour used by [`Annotation::to_html`]
    #[serde(skip)]
    pub style: RubyStyle,
}

impl Annotation {
    /// Render the units into a ruby markup fragment.
    pub fn to_html(&self) -> String {
        markup::render(&self.units, &self.style)
    }

    /// Write the rendered fragment to a file.
    pub fn write_html(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, self.to_html())?;
        Ok(())
    }

    /// Number of units that carry a reading.
    pub fn annotated_count(&self) -> usize {
        self.units.iter().filter(|u| !u.reading.is_empty()).count()
    }
}

/// Common interface for phonetic annotation engines.
///
/// Engines are constructed from a model directory and are immutable
/// afterwards, so a single instance can serve any number of documents,
/// from any number of threads.
pub trait PhoneticsEngine: Sized {
    /// Parameters for configuring model loading (file names, fields, etc.)
    type ModelParams: Default;

    /// Load the engine from the specified path using default parameters.
    fn load(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_with_params(model_path, Self::ModelParams::default())
    }

    /// Load the engine from the specified path with custom parameters.
    fn load_with_params(
        model_path: &Path,
        params: Self::ModelParams,
    ) -> Result<Self, Box<dyn std::error::Error>>;

    /// Segment and resolve the given text into annotation units.
    fn annotate(&self, text: &str) -> Annotation;

    /// Annotate the given text and render it as a ruby markup fragment.
    fn export_html(&self, text: &str) -> String {
        self.annotate(text).to_html()
    }

    /// Annotate the given text and write the fragment to a file.
    ///
    /// Default implementation calls `annotate()` then `Annotation::write_html()`.
    fn export_html_to_file(
        &self,
        text: &str,
        html_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.annotate(text).write_html(html_path)
    }
}

/// A model that is loaded on first use and shared afterwards.
///
/// Meant to live in a `static` owned by the application, so that the
/// expensive dictionary load happens exactly once per process:
///
/// ```ignore
/// static ENGLISH: LazyModel<IpaLexicon> = LazyModel::new();
///
/// let lexicon = ENGLISH.get_or_try_init(|| IpaLexicon::load(dir, &params))?;
/// let engine = IpaEngine::from_lexicon(lexicon);
/// ```
///
/// A failed load leaves the cell empty, so a later call may retry.
pub struct LazyModel<T> {
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> LazyModel<T> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached model, loading it with `init` if this is the first use.
    pub fn get_or_try_init<E, F>(&self, init: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(model) = slot.as_ref() {
            return Ok(Arc::clone(model));
        }
        let model = Arc::new(init()?);
        *slot = Some(Arc::clone(&model));
        Ok(model)
    }

    /// Return the cached model without loading it.
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(Arc::clone)
    }
}

impl<T> Default for LazyModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

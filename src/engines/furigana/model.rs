use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use vibrato::{Dictionary, SystemDictionaryBuilder, Tokenizer};

use super::engine::FuriganaModelParams;

/// MeCab source files accepted in place of a compiled dictionary.
const MECAB_SOURCES: [&str; 4] = ["lex.csv", "matrix.def", "char.def", "unk.def"];

#[derive(thiserror::Error, Debug)]
pub enum FuriganaError {
    #[error("Morphological analyzer error: {0}")]
    Vibrato(#[from] vibrato::errors::VibratoError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(
        "No system dictionary found in {0}. Expected system.dic.zst, any *.dic / *.dic.zst \
         file, or MeCab sources (lex.csv, matrix.def, char.def, unk.def)."
    )]
    DictionaryNotFound(PathBuf),
    #[error("Invalid params: {0}")]
    Config(String),
}

/// A token produced by morphological analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// Surface form as it appears in the text
    pub surface: String,
    /// Katakana reading assigned by the dictionary, if any
    pub reading: Option<String>,
}

/// Internal morphological analysis state.
pub struct FuriganaModel {
    tokenizer: Tokenizer,
    reading_field: usize,
}

impl FuriganaModel {
    /// Load the analyzer from a dictionary file or directory.
    ///
    /// `model_path` may be a compiled dictionary file, or a directory that
    /// contains one (preferably `params.dictionary_file`), or a directory of
    /// MeCab sources which is compiled on the spot.
    pub fn load(model_path: &Path, params: &FuriganaModelParams) -> Result<Self, FuriganaError> {
        let dict = if model_path.is_file() {
            read_dictionary(model_path)?
        } else if has_mecab_sources(model_path) {
            log::info!("Compiling MeCab sources from {}", model_path.display());
            let [lex, matrix, chars, unk] =
                MECAB_SOURCES.map(|name| File::open(model_path.join(name)));
            SystemDictionaryBuilder::from_readers(lex?, matrix?, chars?, unk?)?
        } else {
            read_dictionary(&find_dictionary_file(model_path, &params.dictionary_file)?)?
        };

        Self::from_dictionary(dict, params)
    }

    /// Build the analyzer from a dictionary that is already in memory.
    pub fn from_dictionary(
        dict: Dictionary,
        params: &FuriganaModelParams,
    ) -> Result<Self, FuriganaError> {
        let tokenizer = Tokenizer::new(dict).ignore_space(params.ignore_space)?;
        Ok(Self {
            tokenizer,
            reading_field: params.reading_field,
        })
    }

    /// Tokenize each segment independently, reusing one worker.
    pub fn tokenize_segments(&self, segments: &[&str]) -> Vec<Vec<Morpheme>> {
        let mut worker = self.tokenizer.new_worker();
        segments
            .iter()
            .map(|segment| {
                if segment.is_empty() {
                    return Vec::new();
                }
                worker.reset_sentence(*segment);
                worker.tokenize();
                worker
                    .token_iter()
                    .map(|token| Morpheme {
                        surface: token.surface().to_string(),
                        reading: reading_from_feature(token.feature(), self.reading_field),
                    })
                    .collect()
            })
            .collect()
    }

    /// Tokenize a single piece of text.
    pub fn tokenize(&self, text: &str) -> Vec<Morpheme> {
        self.tokenize_segments(&[text])
            .pop()
            .unwrap_or_default()
    }
}

/// Extract the reading column from a comma-separated feature string.
///
/// `*` and missing columns mean the dictionary has no reading, which is the
/// case for most unknown words.
pub fn reading_from_feature(feature: &str, field: usize) -> Option<String> {
    feature
        .split(',')
        .nth(field)
        .filter(|r| !r.is_empty() && *r != "*")
        .map(str::to_string)
}

fn has_mecab_sources(dir: &Path) -> bool {
    MECAB_SOURCES.iter().all(|name| dir.join(name).is_file())
}

/// Find the compiled dictionary in the given directory.
///
/// Prefers `preferred`, then falls back to the first `*.dic` or `*.dic.zst` file found.
fn find_dictionary_file(dir: &Path, preferred: &str) -> Result<PathBuf, FuriganaError> {
    let preferred = dir.join(preferred);
    if preferred.is_file() {
        return Ok(preferred);
    }

    if dir.is_dir() {
        let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(".dic") || n.ends_with(".dic.zst"))
            })
            .collect();
        candidates.sort();
        if let Some(path) = candidates.into_iter().next() {
            log::warn!(
                "{} not found, using dictionary {}",
                preferred.display(),
                path.display()
            );
            return Ok(path);
        }
    }

    Err(FuriganaError::DictionaryNotFound(dir.to_path_buf()))
}

/// Read a compiled dictionary, decompressing it first if it is zstd-compressed.
fn read_dictionary(path: &Path) -> Result<Dictionary, FuriganaError> {
    log::info!("Loading system dictionary from {}", path.display());
    let file = File::open(path)?;
    let reader: Box<dyn Read> = if path.extension().and_then(|e| e.to_str()) == Some("zst") {
        Box::new(zstd::Decoder::new(file)?)
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(Dictionary::read(reader)?)
}

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use cmudict_fast::{Cmudict, Rule};

use super::engine::IpaModelParams;
use super::symbols;

#[derive(thiserror::Error, Debug)]
pub enum IpaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0} not found. The English lexicon needs cmudict, symbols and vowels files.")]
    ResourceNotFound(PathBuf),
    #[error("Malformed pronouncing dictionary: {0}")]
    Dictionary(String),
    #[error("Malformed symbol table: {0}")]
    Symbols(String),
    #[error("Malformed vowel set: {0}")]
    Vowels(String),
    #[error("Invalid params: {0}")]
    Config(String),
}

/// Immutable English pronunciation data: word list, symbol table and vowel set.
pub struct IpaLexicon {
    dictionary: Cmudict,
    symbols: HashMap<String, Vec<String>>,
    vowels: Vec<String>,
    the_before_vowel: String,
}

impl std::fmt::Debug for IpaLexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpaLexicon")
            .field("symbols", &self.symbols.len())
            .field("vowels", &self.vowels)
            .field("the_before_vowel", &self.the_before_vowel)
            .finish_non_exhaustive()
    }
}

impl IpaLexicon {
    /// Load the lexicon from a directory.
    ///
    /// The directory must contain:
    /// - a CMUdict word list (`cmudict` by default)
    /// - a phoneme symbol table (`symbols`), unless `builtin_tables` is set
    /// - a vowel set (`vowels`), unless `builtin_tables` is set
    pub fn load(dir: &Path, params: &IpaModelParams) -> Result<Self, IpaError> {
        let dict_path = require(dir, &params.dictionary_file)?;
        let dictionary = load_dictionary(&dict_path)?;

        let (symbol_table, vowels) = if params.builtin_tables {
            log::info!("Using built-in Arpabet symbol table and vowel set");
            (symbols::builtin_symbols(), symbols::builtin_vowels())
        } else {
            let symbols_path = require(dir, &params.symbols_file)?;
            let vowels_path = require(dir, &params.vowels_file)?;
            (
                symbols::parse_symbols(BufReader::new(File::open(symbols_path)?))?,
                symbols::parse_vowels(BufReader::new(File::open(vowels_path)?))?,
            )
        };

        if params.the_before_vowel.is_empty() {
            return Err(IpaError::Config(
                "'the_before_vowel' must not be empty".to_string(),
            ));
        }

        log::info!(
            "Loaded {} phoneme symbols, {} vowel glyphs",
            symbol_table.len(),
            vowels.len()
        );

        Ok(Self::from_parts(
            dictionary,
            symbol_table,
            vowels,
            params.the_before_vowel.clone(),
        ))
    }

    /// Build a lexicon from tables that are already in memory.
    pub fn from_parts(
        dictionary: Cmudict,
        symbols: HashMap<String, Vec<String>>,
        vowels: Vec<String>,
        the_before_vowel: String,
    ) -> Self {
        Self {
            dictionary,
            symbols,
            vowels,
            the_before_vowel,
        }
    }

    /// First pronunciation listed for a lowercase lookup key.
    ///
    /// Falls back to the uppercase spelling used by the classic CMUdict
    /// distribution.
    pub fn pronunciation(&self, key: &str) -> Option<&Rule> {
        self.dictionary
            .get(key)
            .or_else(|| self.dictionary.get(&key.to_uppercase()))?
            .first()
    }

    /// IPA transcription of a lowercase lookup key.
    ///
    /// Returns `None` if the word is unknown or one of its phoneme codes has
    /// no symbol.
    pub fn transcribe(&self, key: &str) -> Option<String> {
        self.pronunciation(key)?
            .pronunciation()
            .iter()
            .map(|code| {
                let code = code.to_string();
                self.symbols.get(&code)?.first().map(String::as_str)
            })
            .collect()
    }

    /// Whether an IPA transcription begins with one of the vowel glyphs.
    pub fn starts_with_vowel(&self, ipa: &str) -> bool {
        self.vowels.iter().any(|v| ipa.starts_with(v.as_str()))
    }

    /// Reading used for "the" in front of a vowel sound.
    pub fn the_before_vowel(&self) -> &str {
        &self.the_before_vowel
    }
}

/// Read a CMUdict word list. Alternates (`word(2)`) are kept after the
/// first pronunciation of the word.
pub fn load_dictionary(path: &Path) -> Result<Cmudict, IpaError> {
    log::info!("Loading pronouncing dictionary from {}", path.display());
    Cmudict::new(path).map_err(|e| IpaError::Dictionary(e.to_string()))
}

fn require(dir: &Path, file_name: &str) -> Result<PathBuf, IpaError> {
    let path = dir.join(file_name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(IpaError::ResourceNotFound(path))
    }
}

#[cfg(test)]
mod tests {
    use super::{load_dictionary, IpaError, IpaLexicon};
    use crate::engines::ipa::engine::IpaModelParams;
    use std::fs;
    use tempfile::tempdir;

    fn write_resources(dir: &std::path::Path) {
        fs::write(dir.join("cmudict"), "apple AE1 P AH0 L\nthe DH AH0\nzoo Z UW1\n").unwrap();
        fs::write(dir.join("symbols"), "AE1 æ ˈæ\nP p\nAH0 ə\nL l\nDH ð\nUW1 u\n").unwrap();
        fs::write(dir.join("vowels"), "æ ə\n").unwrap();
    }

    #[test]
    fn loads_all_three_resources() {
        let dir = tempdir().unwrap();
        write_resources(dir.path());

        let lexicon = IpaLexicon::load(dir.path(), &IpaModelParams::default()).unwrap();
        assert_eq!(lexicon.transcribe("apple").as_deref(), Some("æpəl"));
        assert_eq!(lexicon.transcribe("the").as_deref(), Some("ðə"));
        assert!(lexicon.starts_with_vowel("æpəl"));
        assert!(!lexicon.starts_with_vowel("ðə"));
        assert_eq!(lexicon.the_before_vowel(), "ðiː");
    }

    #[test]
    fn unknown_symbol_makes_word_untranscribable() {
        let dir = tempdir().unwrap();
        write_resources(dir.path());

        let lexicon = IpaLexicon::load(dir.path(), &IpaModelParams::default()).unwrap();
        assert!(lexicon.pronunciation("zoo").is_some());
        assert_eq!(lexicon.transcribe("zoo"), None);
        assert_eq!(lexicon.transcribe("banana"), None);
    }

    #[test]
    fn first_pronunciation_wins_over_alternates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cmudict");
        fs::write(&path, "read R IY1 D\nread(2) R EH1 D\nthe DH AH0\nthe(2) DH IY0\n").unwrap();

        let dictionary = load_dictionary(&path).unwrap();
        let lexicon = IpaLexicon::from_parts(
            dictionary,
            crate::engines::ipa::symbols::builtin_symbols(),
            crate::engines::ipa::symbols::builtin_vowels(),
            "ðiː".to_string(),
        );
        assert_eq!(lexicon.transcribe("read").as_deref(), Some("ɹid"));
        assert_eq!(lexicon.transcribe("the").as_deref(), Some("ðə"));
    }

    #[test]
    fn missing_resource_is_fatal() {
        let dir = tempdir().unwrap();
        write_resources(dir.path());
        fs::remove_file(dir.path().join("vowels")).unwrap();

        let err = IpaLexicon::load(dir.path(), &IpaModelParams::default()).unwrap_err();
        assert!(matches!(err, IpaError::ResourceNotFound(path) if path.ends_with("vowels")));
    }

    #[test]
    fn builtin_tables_need_only_the_dictionary() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cmudict"), "hour AW1 ER0\n").unwrap();

        let params = IpaModelParams {
            builtin_tables: true,
            ..Default::default()
        };
        let lexicon = IpaLexicon::load(dir.path(), &params).unwrap();
        assert_eq!(lexicon.transcribe("hour").as_deref(), Some("aʊɚ"));
        assert!(lexicon.starts_with_vowel("aʊɚ"));
    }
}

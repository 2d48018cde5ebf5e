use crate::markup::{strip_break, BREAK_MARKER};
use crate::AnnotationUnit;

use super::lexicon::IpaLexicon;

/// Split a normalized line into words.
///
/// Words are whitespace-delimited. A break marker ends the word it is
/// attached to, so `"apple.\u{E000}Next"` yields `"apple.\u{E000}"` and `"Next"`.
pub fn split_words(line: &str) -> Vec<&str> {
    line.split_whitespace()
        .flat_map(|word| word.split_inclusive(BREAK_MARKER))
        .collect()
}

/// Lookup key for a word: only ASCII alphanumerics and apostrophes, lowercased.
pub fn lookup_key(surface: &str) -> String {
    surface
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '\'')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Resolve words to IPA readings.
///
/// The pronunciation of "the" depends on the word after it, so words are
/// resolved from the end of the document backwards while carrying one bit of
/// state: whether the next word starts with a vowel sound. The result is in
/// document order.
pub fn resolve_words(words: &[&str], lexicon: &IpaLexicon) -> Vec<AnnotationUnit> {
    let mut units: Vec<AnnotationUnit> = words
        .iter()
        .rev()
        .scan(false, |next_is_vowel, word| {
            Some(resolve_word(word, lexicon, next_is_vowel))
        })
        .collect();
    units.reverse();
    units
}

fn resolve_word(word: &str, lexicon: &IpaLexicon, next_is_vowel: &mut bool) -> AnnotationUnit {
    let (surface, line_break) = strip_break(word);
    let key = lookup_key(&surface);

    let reading = if key.is_empty() {
        *next_is_vowel = false;
        String::new()
    } else if key == "the" && *next_is_vowel {
        *next_is_vowel = false;
        lexicon.the_before_vowel().to_string()
    } else {
        match lexicon.transcribe(&key) {
            Some(ipa) => {
                *next_is_vowel = lexicon.starts_with_vowel(&ipa);
                ipa
            }
            None => {
                log::debug!("{key:?} is not in the pronouncing dictionary");
                *next_is_vowel = false;
                String::new()
            }
        }
    };

    AnnotationUnit {
        surface,
        reading,
        line_break,
    }
}

#[cfg(test)]
mod tests {
    use super::{lookup_key, resolve_words, split_words};
    use crate::engines::ipa::lexicon::{load_dictionary, IpaLexicon};
    use crate::engines::ipa::symbols::{builtin_symbols, builtin_vowels};
    use std::fs;
    use tempfile::tempdir;

    const CMUDICT: &str = "\
the DH AH0
apple AE1 P AH0 L
book B UH1 K
old OW1 L D
read R IY1 D
i AY1
it's IH1 T S
";

    fn lexicon() -> IpaLexicon {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cmudict");
        fs::write(&path, CMUDICT).unwrap();
        let dictionary = load_dictionary(&path).unwrap();
        IpaLexicon::from_parts(dictionary, builtin_symbols(), builtin_vowels(), "ðiː".to_string())
    }

    fn readings(text: &str) -> Vec<String> {
        let lexicon = lexicon();
        resolve_words(&split_words(text), &lexicon)
            .into_iter()
            .map(|u| u.reading)
            .collect()
    }

    #[test]
    fn splits_words_after_break_markers() {
        assert_eq!(
            split_words("the apple.\u{E000}the  book"),
            vec!["the", "apple.\u{E000}", "the", "book"]
        );
        assert_eq!(
            split_words("a\u{E000}\u{E000}b"),
            vec!["a\u{E000}", "\u{E000}", "b"]
        );
    }

    #[test]
    fn builds_lookup_key() {
        assert_eq!(lookup_key("\"It's,"), "it's");
        assert_eq!(lookup_key("APPLE."), "apple");
        assert_eq!(lookup_key("--"), "");
    }

    #[test]
    fn the_before_vowel_uses_vowel_variant() {
        assert_eq!(readings("I read the apple."), vec!["aɪ", "ɹid", "ðiː", "æpəl"]);
    }

    #[test]
    fn the_before_consonant_uses_default() {
        assert_eq!(readings("I read the book."), vec!["aɪ", "ɹid", "ðə", "bʊk"]);
    }

    #[test]
    fn vowel_context_is_case_insensitive() {
        assert_eq!(readings("THE Old")[0], "ðiː");
    }

    #[test]
    fn vowel_context_does_not_leak_to_earlier_the() {
        assert_eq!(readings("the the apple"), vec!["ðə", "ðiː", "æpəl"]);
    }

    #[test]
    fn punctuation_resets_vowel_context() {
        assert_eq!(readings("the -- apple"), vec!["ðə", "", "æpəl"]);
        assert_eq!(readings("the apple."), vec!["ðiː", "æpəl"]);
    }

    #[test]
    fn unknown_word_resets_vowel_context() {
        assert_eq!(readings("the xyzzy apple"), vec!["ðə", "", "æpəl"]);
    }

    #[test]
    fn keeps_surface_and_break_flag() {
        let lexicon = lexicon();
        let units = resolve_words(&split_words("the\u{E000}apple"), &lexicon);
        assert_eq!(units[0].surface, "the");
        assert!(units[0].line_break);
        assert_eq!(units[0].reading, "ðiː");
        assert!(!units[1].line_break);
    }
}

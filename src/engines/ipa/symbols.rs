use std::collections::HashMap;
use std::io::BufRead;

use super::lexicon::IpaError;

/// Parse a phoneme symbol table.
///
/// Each line maps an Arpabet code to one or more IPA variants:
/// `AH0 ə`, `AH1 ʌ ˈʌ`. Only the first variant is used for transcription.
pub fn parse_symbols<R: BufRead>(reader: R) -> Result<HashMap<String, Vec<String>>, IpaError> {
    let mut symbols = HashMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(code) = fields.next() else {
            continue;
        };

        let variants: Vec<String> = fields.map(str::to_string).collect();
        if variants.is_empty() {
            return Err(IpaError::Symbols(format!(
                "line {}: code {code:?} has no IPA symbol",
                idx + 1
            )));
        }
        symbols.insert(code.to_string(), variants);
    }

    if symbols.is_empty() {
        return Err(IpaError::Symbols("symbol table is empty".to_string()));
    }
    Ok(symbols)
}

/// Parse the vowel set: the whitespace-separated glyphs on the first non-empty line.
pub fn parse_vowels<R: BufRead>(reader: R) -> Result<Vec<String>, IpaError> {
    for line in reader.lines() {
        let line = line?;
        let vowels: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if !vowels.is_empty() {
            return Ok(vowels);
        }
    }
    Err(IpaError::Vowels("vowel set is empty".to_string()))
}

/// Built-in Arpabet to IPA table (General American).
///
/// Vowel codes are listed with and without CMUdict stress digits. Only used
/// when the model params ask for built-in tables instead of a `symbols` file.
pub fn builtin_symbols() -> HashMap<String, Vec<String>> {
    const VOWELS: &[(&str, &str, &str)] = &[
        // (code, unstressed, stressed)
        ("AA", "ɑ", "ɑ"),
        ("AE", "æ", "æ"),
        ("AH", "ə", "ʌ"),
        ("AO", "ɔ", "ɔ"),
        ("AW", "aʊ", "aʊ"),
        ("AY", "aɪ", "aɪ"),
        ("EH", "ɛ", "ɛ"),
        ("ER", "ɚ", "ɝ"),
        ("EY", "eɪ", "eɪ"),
        ("IH", "ɪ", "ɪ"),
        ("IY", "i", "i"),
        ("OW", "oʊ", "oʊ"),
        ("OY", "ɔɪ", "ɔɪ"),
        ("UH", "ʊ", "ʊ"),
        ("UW", "u", "u"),
    ];
    const CONSONANTS: &[(&str, &str)] = &[
        ("B", "b"),
        ("CH", "tʃ"),
        ("D", "d"),
        ("DH", "ð"),
        ("F", "f"),
        ("G", "ɡ"),
        ("HH", "h"),
        ("JH", "dʒ"),
        ("K", "k"),
        ("L", "l"),
        ("M", "m"),
        ("N", "n"),
        ("NG", "ŋ"),
        ("P", "p"),
        ("R", "ɹ"),
        ("S", "s"),
        ("SH", "ʃ"),
        ("T", "t"),
        ("TH", "θ"),
        ("V", "v"),
        ("W", "w"),
        ("Y", "j"),
        ("Z", "z"),
        ("ZH", "ʒ"),
    ];

    let mut table = HashMap::new();
    for &(code, unstressed, stressed) in VOWELS {
        table.insert(code.to_string(), vec![stressed.to_string()]);
        table.insert(format!("{code}0"), vec![unstressed.to_string()]);
        table.insert(format!("{code}1"), vec![stressed.to_string()]);
        table.insert(format!("{code}2"), vec![stressed.to_string()]);
    }
    for &(code, ipa) in CONSONANTS {
        table.insert(code.to_string(), vec![ipa.to_string()]);
    }
    table
}

/// Built-in vowel glyph prefixes matching [`builtin_symbols`].
pub fn builtin_vowels() -> Vec<String> {
    ["ɑ", "æ", "ə", "ʌ", "ɔ", "a", "ɛ", "ɚ", "ɝ", "e", "ɪ", "i", "o", "ʊ", "u"]
        .iter()
        .map(|v| v.to_string())
        .collect()
}

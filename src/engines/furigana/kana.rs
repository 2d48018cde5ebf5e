//! Code-point classification and kana conversion.
//!
//! Everything here is a pure function of its input.

/// Script class of a single character, as far as ruby placement cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// CJK unified ideographs U+4E00..=U+9FA5
    Kanji,
    /// U+3041..=U+3093 (ぁ..ん)
    Hiragana,
    /// U+30A1..=U+30F3 (ァ..ン)
    Katakana,
    /// Vertical forms, compatibility forms and full-width ASCII U+FE30..=U+FF20
    FullwidthSymbol,
    /// Printable ASCII `!`..=`~`
    Ascii,
    Other,
}

pub fn script_of(ch: char) -> Script {
    match ch {
        '\u{4E00}'..='\u{9FA5}' => Script::Kanji,
        '\u{3041}'..='\u{3093}' => Script::Hiragana,
        '\u{30A1}'..='\u{30F3}' => Script::Katakana,
        '\u{FE30}'..='\u{FF20}' => Script::FullwidthSymbol,
        '!'..='~' => Script::Ascii,
        _ => Script::Other,
    }
}

/// A surface needs ruby if it has a kanji or a full-width symbol in it.
pub fn needs_ruby(surface: &str) -> bool {
    surface
        .chars()
        .any(|c| matches!(script_of(c), Script::Kanji | Script::FullwidthSymbol))
}

/// Convert katakana to hiragana, leaving every other character as is.
///
/// Covers ァ..ヶ and the iteration marks ヽヾ; the prolonged sound mark ー
/// has no hiragana form and is kept.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{30A1}'..='\u{30F6}' | '\u{30FD}'..='\u{30FE}' => {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Blank out of `reading` every hiragana that is already visible in `surface`.
///
/// Each hiragana of the surface is replaced, at every occurrence in the
/// reading, by an ideographic space (U+3000), so that `楽しい` read `たのしい`
/// is annotated `たの　　`.
pub fn blank_visible_kana(surface: &str, reading: &str) -> String {
    surface
        .chars()
        .filter(|&c| script_of(c) == Script::Hiragana)
        .fold(reading.to_string(), |reading, kana| {
            reading.replace(kana, "\u{3000}")
        })
}

/// Furigana for one token: empty unless the surface needs ruby.
pub fn furigana(surface: &str, katakana_reading: Option<&str>) -> String {
    match katakana_reading {
        Some(reading) if needs_ruby(surface) => {
            blank_visible_kana(surface, &katakana_to_hiragana(reading))
        }
        _ => String::new(),
    }
}

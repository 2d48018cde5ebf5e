//! Line-break normalization and ruby markup rendering shared by all engines.
//!
//! Engines work on a single line of text. [`normalize_line_breaks`] flattens
//! the input and leaves a [`BREAK_MARKER`] wherever a line boundary was, and
//! [`render`] turns every unit flagged with a break back into `<br>\n`, so the
//! number and placement of line breaks survives the round trip exactly.

use crate::AnnotationUnit;

/// Internal placeholder for an original line boundary (a private-use code point).
pub const BREAK_MARKER: char = '\u{E000}';

/// Markup emitted for every line break.
pub const LINE_BREAK_HTML: &str = "<br>\n";

/// Ruby markup flavour of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubyStyle {
    /// `class` attribute of the `<ruby>` element, if any
    pub class: Option<&'static str>,
    /// Fallback bracket shown before the reading by renderers without ruby support
    pub open: &'static str,
    /// Fallback bracket shown after the reading
    pub close: &'static str,
    /// Separator written after every unit that is not followed by a line break
    pub separator: &'static str,
}

impl RubyStyle {
    /// English: underlined ruby, square brackets, space-delimited words.
    pub const IPA: RubyStyle = RubyStyle {
        class: Some("under"),
        open: "[",
        close: "]",
        separator: " ",
    };

    /// Japanese: plain ruby, round brackets, no delimiter between tokens.
    pub const FURIGANA: RubyStyle = RubyStyle {
        class: None,
        open: "(",
        close: ")",
        separator: "",
    };
}

impl Default for RubyStyle {
    fn default() -> Self {
        Self::IPA
    }
}

/// Flatten `text` to one line, replacing each line boundary with [`BREAK_MARKER`].
///
/// `\r\n` and every character of [`is_line_boundary`] count as one boundary.
/// A trailing boundary is kept as a trailing marker. Any marker already
/// present in the input is dropped so it cannot be mistaken for a line break.
pub fn normalize_line_breaks(text: &str) -> String {
    let mut line = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                line.push(BREAK_MARKER);
            }
            BREAK_MARKER => {}
            c if is_line_boundary(c) => line.push(BREAK_MARKER),
            _ => line.push(ch),
        }
    }
    line
}

/// Line boundaries: LF, VT, FF, CR, the file/group/record separators,
/// NEL, LINE SEPARATOR and PARAGRAPH SEPARATOR.
pub fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | '\u{1C}'..='\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split a word into its visible surface and whether it carried a break marker.
pub fn strip_break(word: &str) -> (String, bool) {
    if word.contains(BREAK_MARKER) {
        (word.replace(BREAK_MARKER, ""), true)
    } else {
        (word.to_string(), false)
    }
}

/// Render units into a ruby markup fragment.
pub fn render(units: &[AnnotationUnit], style: &RubyStyle) -> String {
    let mut html = String::new();
    for unit in units {
        if unit.reading.is_empty() {
            html.push_str(&unit.surface);
        } else {
            push_ruby(&mut html, &unit.surface, &unit.reading, style);
        }

        if unit.line_break {
            html.push_str(LINE_BREAK_HTML);
        } else {
            html.push_str(style.separator);
        }
    }
    html
}

fn push_ruby(html: &mut String, base: &str, reading: &str, style: &RubyStyle) {
    match style.class {
        Some(class) => html.push_str(&format!("<ruby class=\"{class}\">")),
        None => html.push_str("<ruby>"),
    }
    html.push_str(&format!(
        "{base}<rp>{}</rp><rt>{reading}</rt><rp>{}</rp></ruby>",
        style.open, style.close
    ));
}

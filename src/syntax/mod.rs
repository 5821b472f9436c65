//! Syntax highlighting
//! Per-row classification driven by a language profile, with block-comment
//! state carried across row boundaries

use crate::color::Color;
use crate::constants::editing::SEPARATORS;
use crate::row::Row;

/// Classification of one rendered byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Normal,
    /// Single-line comment
    Comment,
    /// Multi-line (block) comment
    MultilineComment,
    /// Keyword of the first class (flow control and friends)
    Keyword1,
    /// Keyword of the second class (types), marked with `|` in the table
    Keyword2,
    String,
    Number,
    /// Current search match overlay
    Match,
}

impl Highlight {
    /// Terminal color used to draw a byte with this classification
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Highlight::Normal => Color::Reset,
            Highlight::Comment | Highlight::MultilineComment => Color::DarkCyan,
            Highlight::Keyword1 => Color::DarkYellow,
            Highlight::Keyword2 => Color::DarkGreen,
            Highlight::String => Color::DarkMagenta,
            Highlight::Number => Color::DarkRed,
            Highlight::Match => Color::DarkBlue,
        }
    }
}

/// A language profile: file patterns, comment markers, keyword table, flags
#[derive(Debug)]
pub struct Language {
    /// Display name for the status bar
    pub name: &'static str,
    /// Filename patterns; a leading `.` matches a suffix, anything else a substring
    pub patterns: &'static [&'static str],
    /// Keywords; a trailing `|` marks the second keyword class
    pub keywords: &'static [&'static str],
    /// Single-line comment marker, empty to disable
    pub line_comment: &'static str,
    /// Block comment start/end markers
    pub block_comment: Option<(&'static str, &'static str)>,
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}

/// Built-in language profile table
pub const LANGUAGES: &[Language] = &[
    Language {
        name: "c",
        patterns: &[".c", ".h", ".cpp"],
        keywords: &[
            "switch", "if", "while", "for", "break", "continue", "return", "else",
            "struct", "union", "typedef", "static", "enum", "class", "case",
            "int|", "long|", "double|", "float|", "char|", "unsigned|", "signed|",
            "void|",
        ],
        line_comment: "//",
        block_comment: Some(("/*", "*/")),
        highlight_numbers: true,
        highlight_strings: true,
    },
    Language {
        name: "rust",
        patterns: &[".rs"],
        keywords: &[
            "as", "break", "const", "continue", "else", "enum", "extern", "fn",
            "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
            "mut", "pub", "ref", "return", "static", "struct", "trait", "type",
            "unsafe", "use", "where", "while",
            "bool|", "char|", "str|", "String|", "i8|", "i16|", "i32|", "i64|",
            "u8|", "u16|", "u32|", "u64|", "usize|", "isize|", "f32|", "f64|",
            "self|", "Self|",
        ],
        line_comment: "//",
        block_comment: Some(("/*", "*/")),
        highlight_numbers: true,
        highlight_strings: true,
    },
];

/// Pick the profile whose pattern matches the file name, if any
#[must_use]
pub fn select_language(filename: &str) -> Option<&'static Language> {
    for lang in LANGUAGES {
        for pattern in lang.patterns {
            let matched = if let Some(suffix) = pattern.strip_prefix('.') {
                std::path::Path::new(filename)
                    .extension()
                    .is_some_and(|ext| ext.to_str() == Some(suffix))
            } else {
                filename.contains(pattern)
            };
            if matched {
                return Some(lang);
            }
        }
    }
    None
}

/// Whether a byte bounds keyword and number matches
#[must_use]
pub fn is_separator(c: u8) -> bool {
    c == b'\0' || c.is_ascii_whitespace() || SEPARATORS.contains(&c)
}

/// Classify every rendered byte of `row`.
///
/// `starts_in_comment` seeds the block-comment state from the previous row's
/// carry flag. Returns true when the row's own carry flag changed, which
/// obliges the caller to re-classify the next row.
pub fn highlight_row(row: &mut Row, lang: Option<&Language>, starts_in_comment: bool) -> bool {
    let render = row.render().to_vec();
    row.hl = vec![Highlight::Normal; render.len()];

    let Some(lang) = lang else {
        let changed = row.open_comment;
        row.open_comment = false;
        return changed;
    };

    let line_comment = lang.line_comment.as_bytes();
    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = starts_in_comment;

    let mut i = 0;
    while i < render.len() {
        let c = render[i];
        let prev_hl = if i > 0 { row.hl[i - 1] } else { Highlight::Normal };

        if !line_comment.is_empty()
            && in_string.is_none()
            && !in_comment
            && render[i..].starts_with(line_comment)
        {
            for h in &mut row.hl[i..] {
                *h = Highlight::Comment;
            }
            break;
        }

        if let Some((start, end)) = lang.block_comment {
            if in_string.is_none() {
                if in_comment {
                    row.hl[i] = Highlight::MultilineComment;
                    if render[i..].starts_with(end.as_bytes()) {
                        for h in &mut row.hl[i..i + end.len()] {
                            *h = Highlight::MultilineComment;
                        }
                        i += end.len();
                        in_comment = false;
                        prev_sep = true;
                    } else {
                        i += 1;
                    }
                    continue;
                } else if render[i..].starts_with(start.as_bytes()) {
                    for h in &mut row.hl[i..i + start.len()] {
                        *h = Highlight::MultilineComment;
                    }
                    i += start.len();
                    in_comment = true;
                    continue;
                }
            }
        }

        if lang.highlight_strings {
            if let Some(quote) = in_string {
                row.hl[i] = Highlight::String;
                // A backslash escapes the next byte without closing the string
                if c == b'\\' && i + 1 < render.len() {
                    row.hl[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = Some(c);
                row.hl[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if lang.highlight_numbers {
            let digit = c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number);
            let dot = c == b'.' && prev_hl == Highlight::Number;
            if digit || dot {
                row.hl[i] = Highlight::Number;
                i += 1;
                prev_sep = false;
                continue;
            }
        }

        if prev_sep {
            let mut matched = false;
            for keyword in lang.keywords {
                let (word, hl) = match keyword.strip_suffix('|') {
                    Some(word) => (word.as_bytes(), Highlight::Keyword2),
                    None => (keyword.as_bytes(), Highlight::Keyword1),
                };
                let end = i + word.len();
                let bounded = end == render.len() || (end < render.len() && is_separator(render[end]));
                if render[i..].starts_with(word) && bounded {
                    for h in &mut row.hl[i..end] {
                        *h = hl;
                    }
                    i = end;
                    matched = true;
                    break;
                }
            }
            if matched {
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    let changed = row.open_comment != in_comment;
    row.open_comment = in_comment;
    changed
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

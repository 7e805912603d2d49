//! Per-message text direction and language detection.
//!
//! The backend selects evaluation prompts from a three-way language hint,
//! so this is deliberately a character-range heuristic and not a general
//! language detector: Hebrew and Arabic script map to RTL, everything else
//! (including empty text) is reported as English/LTR.

/// Rendering direction of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Language hint sent to the backend alongside each message.
///
/// Crosses the wire as its [`code`](Self::code), never as the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    He,
    Ar,
}

impl Language {
    /// ISO 639-1 code used on the wire.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::He => "he",
            Self::Ar => "ar",
        }
    }
}

const fn is_hebrew(c: char) -> bool {
    matches!(c, '\u{0590}'..='\u{05FF}')
}

const fn is_arabic(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' | '\u{08A0}'..='\u{08FF}'
    )
}

/// Classifies `text` for bidirectional rendering.
///
/// Hebrew is checked before Arabic; the ranges are disjoint so the order
/// only matters for mixed-script text, where Hebrew wins.
pub fn detect_text_direction(text: &str) -> (Direction, Language) {
    if text.chars().any(is_hebrew) {
        (Direction::Rtl, Language::He)
    } else if text.chars().any(is_arabic) {
        (Direction::Rtl, Language::Ar)
    } else {
        (Direction::Ltr, Language::En)
    }
}

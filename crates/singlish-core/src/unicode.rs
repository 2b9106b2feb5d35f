//! Character-level Unicode classification for Sinhala text.

pub const AL_LAKUNA: char = '\u{0DCA}';
pub const ZWJ: char = '\u{200D}';
pub const ZWNJ: char = '\u{200C}';

/// Check the full Sinhala block (U+0D80..U+0DFF).
pub fn is_sinhala(c: char) -> bool {
    ('\u{0D80}'..='\u{0DFF}').contains(&c)
}

pub fn is_joiner(c: char) -> bool {
    c == ZWJ || c == ZWNJ
}

/// ZWJ is meaningful only between an al-lakuna and ර / ය, where it forms
/// rakaransaya / yansaya (ක්‍ර, ක්‍ය).
pub fn is_conjunct_joiner(prev: Option<char>, next: Option<char>) -> bool {
    prev == Some(AL_LAKUNA) && matches!(next, Some('ර') | Some('ය'))
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_sinhala('ක'));
        assert!(is_sinhala('ා'));
        assert!(!is_sinhala('k'));
        assert!(is_joiner(ZWJ));
        assert!(!is_joiner(AL_LAKUNA));
        assert!(is_latin('a'));
        assert!(!is_latin('අ'));
    }

    #[test]
    fn test_conjunct_joiner() {
        assert!(is_conjunct_joiner(Some(AL_LAKUNA), Some('ර')));
        assert!(is_conjunct_joiner(Some(AL_LAKUNA), Some('ය')));
        assert!(!is_conjunct_joiner(Some('ක'), Some('ර')));
        assert!(!is_conjunct_joiner(Some(AL_LAKUNA), Some('ක')));
        assert!(!is_conjunct_joiner(None, Some('ර')));
    }
}

//! Output normalization.
//!
//! [`normalize`] is run by the translator; [`comparison_key`] is only for
//! comparing outputs against expected text (accuracy runs, snapshots).

use unicode_normalization::UnicodeNormalization;

use crate::unicode::{self, ZWJ, ZWNJ};

/// Remove stray joiners, then compose to NFC. Whitespace is left alone.
///
/// ZWNJ is always dropped. ZWJ survives only between al-lakuna and ර / ය.
pub fn normalize(text: &str) -> String {
    strip_stray_joiners(text).nfc().collect()
}

fn strip_stray_joiners(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        let keep = match c {
            ZWNJ => false,
            ZWJ => {
                let prev = i.checked_sub(1).map(|p| chars[p]);
                unicode::is_conjunct_joiner(prev, chars.get(i + 1).copied())
            }
            _ => true,
        };
        if keep {
            out.push(c);
        }
    }
    out
}

/// Loose key for equality checks: trimmed, whitespace runs collapsed to one
/// space, all joiners dropped, NFC.
pub fn comparison_key(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .chars()
        .filter(|&c| !unicode::is_joiner(c))
        .nfc()
        .collect()
}

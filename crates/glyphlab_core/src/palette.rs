//! IPA palette data and key-label formatting helpers.
//!
//! # Responsibility
//! - Provide the fixed IPA key table the on-screen keyboard is built from.
//! - Format key labels: the example word is bolded except for the fragment
//!   that carries the sound.
//!
//! The widgets themselves are presentation-layer concerns; this module is
//! pure data and pure functions.

/// One key of the IPA palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpaKey {
    /// IPA token appended to a glyph's pronunciation when pressed.
    pub symbol: &'static str,
    /// English example word containing the sound.
    pub example: &'static str,
    /// Fragment of `example` that carries the sound.
    pub highlight: &'static str,
}

const fn key(symbol: &'static str, example: &'static str, highlight: &'static str) -> IpaKey {
    IpaKey {
        symbol,
        example,
        highlight,
    }
}

/// The fixed palette: consonants first, then vowels and diphthongs.
pub const IPA_KEYS: [IpaKey; 42] = [
    key("p", "pea", "p"),
    key("b", "bee", "b"),
    key("t", "tea", "t"),
    key("d", "deed", "d"),
    key("k", "key", "k"),
    key("g", "geese", "g"),
    key("f", "fee", "f"),
    key("v", "vee", "v"),
    key("θ", "thing", "th"),
    key("ð", "this", "th"),
    key("s", "see", "s"),
    key("z", "zebra", "z"),
    key("ʃ", "she", "sh"),
    key("ʒ", "vision", "sion"),
    key("h", "hat", "h"),
    key("m", "map", "m"),
    key("n", "nap", "n"),
    key("ŋ", "sing", "ng"),
    key("l", "lip", "l"),
    key("r", "red", "r"),
    key("j", "yes", "y"),
    key("w", "we", "w"),
    key("tʃ", "church", "ch"),
    key("dʒ", "judge", "j"),
    key("i", "beet", "ee"),
    key("ɪ", "bit", "i"),
    key("eɪ", "bait", "ai"),
    key("ɛ", "bed", "e"),
    key("æ", "cat", "a"),
    key("ɑ", "father", "a"),
    key("ɒ", "pot", "o"),
    key("ɔ", "saw", "aw"),
    key("oʊ", "go", "o"),
    key("ʊ", "book", "oo"),
    key("u", "food", "oo"),
    key("ʌ", "cup", "u"),
    key("ə", "about", "a"),
    key("ɜ", "nurse", "ur"),
    key("ɚ", "butter", "er"),
    key("aɪ", "bite", "i"),
    key("aʊ", "bout", "ou"),
    key("ɔɪ", "boy", "oy"),
];

/// Converts ASCII letters to their Unicode Mathematical Bold forms.
///
/// Non-letter characters pass through unchanged.
pub fn math_bold(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            'a'..='z' => bold_offset(ch, 'a', 0x1D41A),
            'A'..='Z' => bold_offset(ch, 'A', 0x1D400),
            other => other,
        })
        .collect()
}

fn bold_offset(ch: char, base: char, bold_base: u32) -> char {
    // The mathematical bold alphabets are contiguous, so the offset of a
    // basic Latin letter maps directly into the bold range.
    char::from_u32(bold_base + (ch as u32 - base as u32)).unwrap_or(ch)
}

/// Bolds everything in `word` except the first occurrence of `fragment`.
///
/// The match is case-insensitive; when the fragment does not occur, the
/// whole word is bolded. This is the inverse-highlight used on palette
/// keys: the sound-carrying letters stay plain while the rest goes bold.
pub fn highlight_example(word: &str, fragment: &str) -> String {
    // ASCII lowercasing preserves byte offsets, and the palette data is
    // plain ASCII, so the index found here is valid in the original word.
    let index = word
        .to_ascii_lowercase()
        .find(&fragment.to_ascii_lowercase());

    match index {
        Some(start) => {
            let end = start + fragment.len();
            format!(
                "{}{}{}",
                math_bold(&word[..start]),
                &word[start..end],
                math_bold(&word[end..])
            )
        }
        None => math_bold(word),
    }
}

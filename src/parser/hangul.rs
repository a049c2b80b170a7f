//! Page text cleanup before question parsing.
//!
//! pdftotext output from scanned-then-OCRed exam books often carries Hangul as
//! decomposed conjoining jamo, sometimes with spaces between them, and uses
//! `\r\n` line endings. Question markers are matched at line starts, so both
//! have to be fixed before segmentation.

use unicode_normalization::UnicodeNormalization;

fn is_conjoining_jamo(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x11FF | // Hangul Jamo
        0xA960..=0xA97F | // Hangul Jamo Extended-A
        0xD7B0..=0xD7FF   // Hangul Jamo Extended-B
    )
}

fn is_vowel_or_final(c: char) -> bool {
    matches!(c as u32, 0x1161..=0x11FF | 0xD7B0..=0xD7FF)
}

/// Drop spaces that split one syllable's jamo (`ᄒ ᅡ ᆫ` -> `한`), leaving
/// ordinary word spacing alone.
fn join_split_syllables(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != ' ' {
            result.push(c);
            prev = Some(c);
            i += 1;
            continue;
        }

        let run_end = chars[i..]
            .iter()
            .position(|ch| *ch != ' ')
            .map_or(chars.len(), |offset| i + offset);
        let splits_syllable = match (prev, chars.get(run_end)) {
            (Some(p), Some(&n)) => is_conjoining_jamo(p) && is_vowel_or_final(n),
            _ => false,
        };
        if !splits_syllable {
            result.extend(&chars[i..run_end]);
        }
        i = run_end;
    }

    result
}

/// Normalize one page of extracted text.
///
/// Uses NFC only: NFKC would fold circled option markers (`①`) into digits.
pub fn normalize_page_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let joined = join_split_syllables(&unified);
    joined.nfc().collect()
}

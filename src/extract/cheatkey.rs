use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_CHEATKEY_CHARS: usize = 500;

static CHEATKEY_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:cheatkey|치트키)\s*(\d+)\s*[:\-]?\s*").expect("cheatkey pattern is valid")
});

/// A numbered mnemonic found on a formula-sheet page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatkeyEntry<'a> {
    pub number: &'a str,
    pub content: String,
}

/// Find `Cheatkey N` / `치트키 N` entries. Each runs to the next entry or end
/// of text, and is cut to `max_chars` characters.
pub fn extract_cheatkeys(text: &str, max_chars: usize) -> Vec<CheatkeyEntry<'_>> {
    let markers: Vec<_> = CHEATKEY_MARKER.captures_iter(text).collect();

    markers
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?.as_str();
            let end = markers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(text.len());

            let content: String = text[whole.end()..end].trim().chars().take(max_chars).collect();
            (!content.is_empty()).then_some(CheatkeyEntry { number, content })
        })
        .collect()
}

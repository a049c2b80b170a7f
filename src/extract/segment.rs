use once_cell::sync::Lazy;
use regex::Regex;

/// Question numbering at line start: `문제 3`, `Q.3.`, `Q3)`, `3.`, `3)`.
/// The `Q` form needs the closing `.`/`)` so charge products like `Q1Q2`
/// are not read as numbering.
static QUESTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:문제\s*(\d+)[.)]?|Q\.?\s*(\d+)[.)]|(\d+)[.)])")
        .expect("question marker pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionBlock<'a> {
    /// Number as printed; not validated or required to be sequential.
    pub number: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segmentation<'a> {
    Questions(Vec<QuestionBlock<'a>>),
    /// No numbering on the page at all; treat it as a formula sheet.
    NoMarkers,
}

/// Split a page into question blocks. Each block runs from the end of its
/// marker to the start of the next marker, or to the end of the page.
pub fn segment_questions(text: &str) -> Segmentation<'_> {
    let markers: Vec<_> = QUESTION_MARKER.captures_iter(text).collect();
    if markers.is_empty() {
        return Segmentation::NoMarkers;
    }

    let mut blocks = Vec::with_capacity(markers.len());
    for (i, caps) in markers.iter().enumerate() {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let number = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
            .unwrap_or_default();
        let end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(text.len());

        let body = text[whole.end()..end].trim();
        if !body.is_empty() {
            blocks.push(QuestionBlock { number, text: body });
        }
    }

    Segmentation::Questions(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(text: &str) -> Vec<QuestionBlock<'_>> {
        match segment_questions(text) {
            Segmentation::Questions(blocks) => blocks,
            Segmentation::NoMarkers => panic!("expected question markers"),
        }
    }

    #[test]
    fn splits_on_each_marker_style() {
        let text = "1. 첫 번째 문제입니다\n① 가 ② 나\n문제 2 두 번째 문제\nQ.3) 세 번째\n4) 네 번째";
        let found = blocks(text);

        let numbers: Vec<_> = found.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec!["1", "2", "3", "4"]);
        assert_eq!(found[0].text, "첫 번째 문제입니다\n① 가 ② 나");
        assert_eq!(found[1].text, "두 번째 문제");
        assert_eq!(found[3].text, "네 번째");
    }

    #[test]
    fn single_question_runs_to_end_of_page() {
        let found = blocks("7. 유일한 문제\n계속되는 지문\n① a ② b");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].number, "7");
        assert_eq!(found[0].text, "유일한 문제\n계속되는 지문\n① a ② b");
    }

    #[test]
    fn accepts_gaps_and_duplicates() {
        let found = blocks("3. 셋\n3. 또 셋\n10. 열");
        let numbers: Vec<_> = found.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec!["3", "3", "10"]);
    }

    #[test]
    fn markers_must_start_a_line() {
        assert_eq!(
            segment_questions("Cheatkey 1: P = VI\n공식 정리 페이지"),
            Segmentation::NoMarkers
        );
        assert_eq!(
            segment_questions("전압은 1. 이 아니라"),
            Segmentation::NoMarkers
        );
    }

    #[test]
    fn charge_products_are_not_markers() {
        let found = blocks("1. 두 점전하 사이에 작용하는 힘은?\nQ1Q2가 클수록 커진다\n① 비례 ② 반비례");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].number, "1");
        assert!(found[0].text.contains("Q1Q2가 클수록 커진다\n① 비례"));

        let found = blocks("Q3. 세 번째\nQ 4) 네 번째");
        let numbers: Vec<_> = found.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec!["3", "4"]);
    }

    #[test]
    fn empty_blocks_are_dropped() {
        let found = blocks("1.\n2. 내용이 있는 문제");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].number, "2");
    }
}

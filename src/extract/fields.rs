//! Field extraction for a single question block.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::{NO_ANSWER, NO_EXPLANATION, REVIEW_PLACEHOLDER};

pub const MIN_STEM_CHARS: usize = 10;
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 4;
const MAX_FORMULA_SNIPPETS: usize = 3;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("field pattern is valid")
}

static OPTION_START: Lazy<Regex> = Lazy::new(|| compile(r"[①②③④⑤]|[가나다라마]\.|\d+\)"));

/// Option numbering conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFamily {
    Circled,
    KoreanLetter,
    ParenDigit,
}

/// Tried in order; the first family with any match supplies all options.
static OPTION_FAMILIES: Lazy<Vec<(OptionFamily, Regex)>> = Lazy::new(|| {
    vec![
        (OptionFamily::Circled, compile(r"[①②③④⑤]\s*([^\n①②③④⑤]+)")),
        (
            OptionFamily::KoreanLetter,
            compile(r"[가나다라마]\.\s*([^\n가나다라마]+)"),
        ),
        (OptionFamily::ParenDigit, compile(r"\d+\)\s*([^\n\d)]+)")),
    ]
});

static ANSWER_MARKER: Lazy<Regex> = Lazy::new(|| compile(r"정답\s*[:：]?\s*([①②③④⑤1-4가나다라])"));

static EXPLANATION_LABEL: Lazy<Regex> = Lazy::new(|| compile(r"(?:해설|설명|풀이)\s*[:：]?\s*"));
static EXPLANATION_STOP_LINE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^(?:💡|치트키|cheatkey|꿀팁|핵심|summary|정답|문제)"));
static EXPLANATION_STOP_INLINE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?:💡|치트키|cheatkey|꿀팁|summary|정답)\s*[:：]"));

static CHEATKEY_LABEL: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?:💡|치트키|cheatkey|꿀팁|핵심|summary)\s*[:：]?\s*"));
static CHEATKEY_STOP_LINE: Lazy<Regex> = Lazy::new(|| compile(r"^(?:문제|정답|해설)"));
static CHEATKEY_STOP_INLINE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?:해설|설명|풀이|정답)\s*[:：]"));

static FORMULA_SHEET_LABEL: Lazy<Regex> = Lazy::new(|| compile(r"\[공식\]\s*"));
static STAR_LINE: Lazy<Regex> = Lazy::new(|| compile(r"★\s*([^\n]+)"));
static FORMULA_SNIPPET: Lazy<Regex> = Lazy::new(|| compile(r"[A-Za-z]\s*=\s*[^,\n]+"));

/// Everything pulled out of one accepted block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFields {
    pub stem: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub cheat_key: String,
}

/// Returns `None` for blocks that do not look like a question: a stem under
/// [`MIN_STEM_CHARS`] characters or fewer than [`MIN_OPTIONS`] options.
pub fn extract_fields(block: &str) -> Option<QuestionFields> {
    let stem = extract_stem(block);
    if stem.chars().count() < MIN_STEM_CHARS {
        return None;
    }

    let options = extract_options(block);
    if options.len() < MIN_OPTIONS {
        return None;
    }

    Some(QuestionFields {
        correct_answer: extract_answer(block, &options),
        explanation: extract_explanation(block),
        cheat_key: extract_cheat_key(block),
        stem,
        options,
    })
}

pub fn extract_stem(block: &str) -> String {
    match OPTION_START.find(block) {
        Some(m) => block[..m.start()].trim().to_string(),
        None => block.lines().next().unwrap_or_default().trim().to_string(),
    }
}

pub fn extract_options(block: &str) -> Vec<String> {
    extract_options_with_family(block)
        .map(|(_, options)| options)
        .unwrap_or_default()
}

pub fn extract_options_with_family(block: &str) -> Option<(OptionFamily, Vec<String>)> {
    OPTION_FAMILIES.iter().find_map(|(family, re)| {
        let options: Vec<String> = re
            .captures_iter(block)
            .filter_map(|caps| caps.get(1))
            .take(MAX_OPTIONS)
            .map(|m| m.as_str().trim().to_string())
            .collect();
        (!options.is_empty()).then_some((*family, options))
    })
}

/// Zero-based option index for an answer marker. Only circled and plain
/// digits carry an index; Korean letters are recognized as markers but
/// resolve to `None`, so the answer falls back to the first option.
pub fn answer_index(marker: &str) -> Option<usize> {
    match marker {
        "①" | "1" => Some(0),
        "②" | "2" => Some(1),
        "③" | "3" => Some(2),
        "④" | "4" => Some(3),
        "⑤" => Some(4),
        _ => None,
    }
}

pub fn extract_answer(block: &str, options: &[String]) -> String {
    let marked = ANSWER_MARKER
        .captures(block)
        .and_then(|caps| caps.get(1))
        .and_then(|m| answer_index(m.as_str()))
        .and_then(|idx| options.get(idx));

    marked
        .or_else(|| options.first())
        .cloned()
        .unwrap_or_else(|| NO_ANSWER.to_string())
}

pub fn extract_explanation(block: &str) -> String {
    EXPLANATION_LABEL
        .find(block)
        .and_then(|m| {
            capture_section(
                &block[m.end()..],
                &EXPLANATION_STOP_LINE,
                &EXPLANATION_STOP_INLINE,
            )
        })
        .unwrap_or_else(|| NO_EXPLANATION.to_string())
}

pub fn extract_cheat_key(block: &str) -> String {
    labeled_cheat_key(block)
        .or_else(|| formula_sheet_section(block))
        .or_else(|| star_line(block))
        .or_else(|| formula_snippets(block))
        .unwrap_or_else(|| REVIEW_PLACEHOLDER.to_string())
}

fn labeled_cheat_key(block: &str) -> Option<String> {
    let m = CHEATKEY_LABEL.find(block)?;
    capture_section(&block[m.end()..], &CHEATKEY_STOP_LINE, &CHEATKEY_STOP_INLINE)
}

fn formula_sheet_section(block: &str) -> Option<String> {
    let m = FORMULA_SHEET_LABEL.find(block)?;
    let section = block[m.end()..]
        .split('\n')
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    non_empty(section.trim())
}

fn star_line(block: &str) -> Option<String> {
    let caps = STAR_LINE.captures(block)?;
    non_empty(caps.get(1)?.as_str().trim())
}

fn formula_snippets(block: &str) -> Option<String> {
    let snippets: Vec<&str> = FORMULA_SNIPPET
        .find_iter(block)
        .take(MAX_FORMULA_SNIPPETS)
        .map(|m| m.as_str().trim())
        .collect();
    if snippets.is_empty() {
        return None;
    }
    Some(format!("💡 공식: {}", snippets.join(" | ")))
}

/// Collect the text following a section label.
///
/// The first line is always taken; later lines are taken until a blank
/// line or a line that opens another section. Within any line an inline
/// label of another section ends the capture.
fn capture_section(rest: &str, stop_line: &Regex, stop_inline: &Regex) -> Option<String> {
    let mut taken: Vec<&str> = Vec::new();

    for (i, line) in rest.split('\n').enumerate() {
        if i > 0 && (line.is_empty() || stop_line.is_match(line)) {
            break;
        }
        if let Some(inline) = stop_inline.find(line) {
            taken.push(&line[..inline.start()]);
            break;
        }
        taken.push(line);
    }

    non_empty(taken.join("\n").trim())
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const OHM: &str = "What is Ohm's law? ① V=IR ② V=I/R ③ V=I+R ④ V=I-R 정답: 1 해설: Basic circuit law. 치트키: V=IR";

    #[test]
    fn stem_stops_at_first_option_marker() {
        assert_eq!(extract_stem(OHM), "What is Ohm's law?");
        assert_eq!(
            extract_stem("다음 중 옳지 않은 것은?\n가. 하나\n나. 둘"),
            "다음 중 옳지 않은 것은?"
        );
    }

    #[test]
    fn stem_without_options_is_first_line() {
        assert_eq!(extract_stem("  첫째 줄 지문입니다  \n둘째 줄"), "첫째 줄 지문입니다");
    }

    #[test]
    fn circled_options_win_over_other_families() {
        let block = "전압 관련 문제입니다\n① 1)형 ② 2)형\n가. 무시됨";
        let (family, options) = extract_options_with_family(block).unwrap();
        assert_eq!(family, OptionFamily::Circled);
        assert_eq!(options, vec!["1)형", "2)형"]);
    }

    #[test]
    fn falls_back_through_letter_and_digit_families() {
        let (family, options) =
            extract_options_with_family("지문\n가. 저항\n나. 전류\n").unwrap();
        assert_eq!(family, OptionFamily::KoreanLetter);
        assert_eq!(options, vec!["저항", "전류"]);

        let (family, options) =
            extract_options_with_family("지문\n1) 저항 R\n2) 전류 I\n").unwrap();
        assert_eq!(family, OptionFamily::ParenDigit);
        assert_eq!(options, vec!["저항 R", "전류 I"]);
    }

    #[test]
    fn options_are_capped_at_four_in_source_order() {
        let options = extract_options("지문 ① 일 ② 이 ③ 삼 ④ 사 ⑤ 오");
        assert_eq!(options, vec!["일", "이", "삼", "사"]);
    }

    #[test]
    fn answer_marker_selects_option() {
        let options: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(extract_answer("정답: ③", &options), "c");
        assert_eq!(extract_answer("정답 2", &options), "b");
        assert_eq!(extract_answer("정답：라", &options), "a");
    }

    #[test]
    fn korean_letter_answer_falls_back_to_first() {
        let options: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(answer_index("나"), None);
        assert_eq!(extract_answer("정답: 나", &options), "a");
    }

    #[test]
    fn out_of_range_or_missing_answer_falls_back_to_first() {
        let options: Vec<String> = vec!["a".to_string(), "b".to_string()];
        assert_eq!(extract_answer("정답: 4", &options), "a");
        assert_eq!(extract_answer("정답: ⑤", &options), "a");
        assert_eq!(extract_answer("답을 고르시오", &options), "a");
        assert_eq!(extract_answer("정답: 1", &[]), NO_ANSWER);
    }

    #[test]
    fn explanation_stops_at_inline_cheat_key() {
        assert_eq!(extract_explanation(OHM), "Basic circuit law.");
    }

    #[test]
    fn explanation_stops_at_cheat_key_line() {
        let block = "무부하손에 관한 문제 지문\n해설: 철손이 크다.\n💡 철손은 전압의 제곱에 비례\n꿀팁 무부하손";
        assert_eq!(extract_explanation(block), "철손이 크다.");

        let block = "지문\n해설: 첫째 줄\nSUMMARY 요약 줄";
        assert_eq!(extract_explanation(block), "첫째 줄");
    }

    #[test]
    fn explanation_spans_lines_until_next_section() {
        let block = "지문\n해설: 첫째 줄\n둘째 줄\n치트키: 요약\n셋째";
        assert_eq!(extract_explanation(block), "첫째 줄\n둘째 줄");

        let block = "지문\n풀이\n한 줄 풀이\n\n남은 내용";
        assert_eq!(extract_explanation(block), "한 줄 풀이");
    }

    #[test]
    fn missing_explanation_uses_sentinel() {
        assert_eq!(extract_explanation("지문 ① a ② b"), NO_EXPLANATION);
    }

    #[test]
    fn cheat_key_from_label() {
        assert_eq!(extract_cheat_key(OHM), "V=IR");
        assert_eq!(
            extract_cheat_key("지문\nsummary: 직렬은 더하고\n병렬은 역수\n정답: 1"),
            "직렬은 더하고\n병렬은 역수"
        );
    }

    #[test]
    fn cheat_key_rule_order() {
        assert_eq!(
            extract_cheat_key("지문\n[공식]\nP = VI\nW = Pt\n\n그 밖"),
            "P = VI\nW = Pt"
        );
        assert_eq!(extract_cheat_key("지문\n★ 단위는 옴\n"), "단위는 옴");
        assert_eq!(
            extract_cheat_key("F = ma, E = mc^2\nV = IR\nP = VI"),
            "💡 공식: F = ma | E = mc^2 | V = IR"
        );
        assert_eq!(extract_cheat_key("공식이 없는 블록"), REVIEW_PLACEHOLDER);
    }

    #[test]
    fn rejects_short_stem_and_too_few_options() {
        assert_eq!(extract_fields("짧은 지문 ① a ② b"), None);
        assert_eq!(extract_fields("충분히 긴 문제 지문입니다 ① 하나뿐"), None);
    }

    #[test]
    fn extracts_full_question() {
        let fields = extract_fields(OHM).unwrap();
        assert_eq!(fields.stem, "What is Ohm's law?");
        assert_eq!(fields.options.len(), 4);
        assert_eq!(fields.options[0], "V=IR");
        assert_eq!(fields.options[1], "V=I/R");
        assert_eq!(fields.correct_answer, "V=IR");
        assert_eq!(fields.explanation, "Basic circuit law.");
        assert!(fields.cheat_key.contains("V=IR"));
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::{Category, Difficulty, QuestionType};

/// Keyword table for subject inference.
/// Order matters: the first category with any matching keyword wins.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::CircuitTheory,
        &[
            "회로이론", "회로", "옴", "키르히", "KCL", "KVL", "circuit", "Ohm", "Kirchhoff",
        ],
    ),
    (
        Category::Electromagnetics,
        &[
            "전기자기학",
            "자기",
            "쿨롱",
            "전기장",
            "자기장",
            "맥스웰",
            "Coulomb",
            "magnetic",
            "electric field",
            "Maxwell",
        ],
    ),
    (
        Category::ElectricMachinery,
        &[
            "전기기기",
            "변압기",
            "전동기",
            "발전기",
            "유도기",
            "동기기",
            "transformer",
            "motor",
            "generator",
        ],
    ),
    (
        Category::PowerEngineering,
        &[
            "전력공학",
            "송전",
            "배전",
            "코로나",
            "전력",
            "변전",
            "transmission",
            "corona",
            "substation",
        ],
    ),
];

/// Formula indicators, tried in order.
const FORMULA_PATTERNS: &[&str] = &[
    r"[A-Z]\s*=\s*",  // V = IR
    r"\d+\s*×\s*10\^", // 9×10^9
    r"√",
    r"[∫∂∑∏]",
    r"sin|cos|tan|log",
];

static FORMULA_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    FORMULA_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("formula pattern is valid"))
        .collect()
});

const HARD_STEM_MARKERS: &[&str] = &["계산", "유도", "calculation", "derivation"];

pub const HARD_STEM_CHARS: usize = 200;
pub const EASY_STEM_CHARS: usize = 80;

pub fn infer_category(text: &str) -> Category {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|&(category, _)| category)
        .unwrap_or(Category::Other)
}

pub fn has_formula(text: &str) -> bool {
    FORMULA_REGEXES.iter().any(|re| re.is_match(text))
}

pub fn infer_type(text: &str) -> QuestionType {
    if has_formula(text) {
        QuestionType::Formula
    } else {
        QuestionType::Rote
    }
}

pub fn infer_difficulty(stem: &str) -> Difficulty {
    let len = stem.chars().count();

    if len > HARD_STEM_CHARS || HARD_STEM_MARKERS.iter().any(|m| stem.contains(m)) {
        Difficulty::High
    } else if len < EASY_STEM_CHARS {
        Difficulty::Low
    } else {
        Difficulty::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_category_wins() {
        // "변압기" (machinery) and "회로" (circuit) both present
        assert_eq!(infer_category("변압기 등가회로에 대한 설명"), Category::CircuitTheory);
        assert_eq!(infer_category("코로나 방전과 자기장"), Category::Electromagnetics);
    }

    #[test]
    fn unmatched_text_is_other() {
        assert_eq!(infer_category("전기설비기술기준의 접지"), Category::Other);
        assert_eq!(infer_category(""), Category::Other);
    }

    #[test]
    fn english_stem_matches_circuit_keywords() {
        assert_eq!(infer_category("What is Ohm's law?"), Category::CircuitTheory);
    }

    #[test]
    fn detects_formula_indicators() {
        assert_eq!(infer_type("P = VI"), QuestionType::Formula);
        assert_eq!(infer_type("k = 9×10^9"), QuestionType::Formula);
        assert_eq!(infer_type("√3 배"), QuestionType::Formula);
        assert_eq!(infer_type("∮ 대신 ∫ 사용"), QuestionType::Formula);
        assert_eq!(infer_type("역률 cos θ"), QuestionType::Formula);
        assert_eq!(infer_type("접지공사의 종류를 고르시오"), QuestionType::Rote);
    }

    #[test]
    fn lowercase_assignment_is_not_a_formula() {
        assert_eq!(infer_type("x = 3"), QuestionType::Rote);
    }

    #[test]
    fn difficulty_buckets() {
        assert_eq!(infer_difficulty(&"가".repeat(250)), Difficulty::High);
        assert_eq!(infer_difficulty(&"가".repeat(50)), Difficulty::Low);
        assert_eq!(infer_difficulty(&"가".repeat(100)), Difficulty::Medium);
    }

    #[test]
    fn difficulty_markers_beat_short_length() {
        assert_eq!(infer_difficulty("전압을 계산하시오."), Difficulty::High);
        assert_eq!(infer_difficulty("식을 유도하시오."), Difficulty::High);
    }

    #[test]
    fn difficulty_boundaries() {
        assert_eq!(infer_difficulty(&"a".repeat(200)), Difficulty::Medium);
        assert_eq!(infer_difficulty(&"a".repeat(201)), Difficulty::High);
        assert_eq!(infer_difficulty(&"a".repeat(80)), Difficulty::Medium);
        assert_eq!(infer_difficulty(&"a".repeat(79)), Difficulty::Low);
    }
}

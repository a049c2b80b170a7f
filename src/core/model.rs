use std::fmt;

use serde::{Deserialize, Serialize};

pub const NO_ANSWER: &str = "정답 없음";
pub const NO_EXPLANATION: &str = "해설이 제공되지 않았습니다.";
pub const REVIEW_PLACEHOLDER: &str = "핵심 내용을 복습하세요.";

/// Exam subject a question belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "회로이론")]
    CircuitTheory,
    #[serde(rename = "전기자기학")]
    Electromagnetics,
    #[serde(rename = "전기기기")]
    ElectricMachinery,
    #[serde(rename = "전력공학")]
    PowerEngineering,
    #[serde(rename = "기타")]
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CircuitTheory,
        Category::Electromagnetics,
        Category::ElectricMachinery,
        Category::PowerEngineering,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::CircuitTheory => "회로이론",
            Category::Electromagnetics => "전기자기학",
            Category::ElectricMachinery => "전기기기",
            Category::PowerEngineering => "전력공학",
            Category::Other => "기타",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QuestionType {
    /// Content carries a formula (`V = IR`, `√`, `sin`, ...).
    #[serde(rename = "공식")]
    Formula,
    /// Plain memorization.
    #[serde(rename = "암기")]
    Rote,
}

impl QuestionType {
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Formula => "공식",
            QuestionType::Rote => "암기",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[serde(rename = "하")]
    Low,
    #[serde(rename = "중")]
    Medium,
    #[serde(rename = "상")]
    High,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Low => "하",
            Difficulty::Medium => "중",
            Difficulty::High => "상",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_label!(Category, QuestionType, Difficulty);

/// One extracted question, in the shape of the seed file rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionRecord {
    pub category: Category,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub cheat_key: String,
    pub difficulty: Difficulty,
    pub source_file: String,
    pub page_number: usize,
}

/// Where a page of text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provenance<'a> {
    pub source_file: &'a str,
    pub page_number: usize,
}

pub mod cheatkey;
pub mod fields;
pub mod segment;

use tracing::trace;

use crate::core::classifier::{infer_category, infer_difficulty, infer_type};
use crate::core::model::{Difficulty, Provenance, QuestionRecord};
use crate::extract::cheatkey::{extract_cheatkeys, CheatkeyEntry, MAX_CHEATKEY_CHARS};
use crate::extract::fields::{extract_fields, QuestionFields};
use crate::extract::segment::{segment_questions, Segmentation};

const PLACEHOLDER_OPTIONS: [&str; 4] = ["선택지 1", "선택지 2", "선택지 3", "선택지 4"];

/// Turns one page of text into question records.
#[derive(Debug, Clone)]
pub struct QuestionExtractor {
    max_cheatkey_chars: usize,
}

impl Default for QuestionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionExtractor {
    pub fn new() -> Self {
        Self {
            max_cheatkey_chars: MAX_CHEATKEY_CHARS,
        }
    }

    pub fn with_max_cheatkey_chars(mut self, max_chars: usize) -> Self {
        self.max_cheatkey_chars = max_chars;
        self
    }

    /// Records for one page, in block order. Pages without any question
    /// numbering are read as formula sheets.
    pub fn parse_page(&self, text: &str, provenance: Provenance<'_>) -> Vec<QuestionRecord> {
        match segment_questions(text) {
            Segmentation::Questions(blocks) => blocks
                .iter()
                .filter_map(|block| {
                    let fields = extract_fields(block.text);
                    if fields.is_none() {
                        trace!(number = block.number, "rejected block");
                    }
                    fields
                })
                .map(|fields| question_record(fields, provenance))
                .collect(),
            Segmentation::NoMarkers => extract_cheatkeys(text, self.max_cheatkey_chars)
                .into_iter()
                .map(|entry| cheatkey_record(entry, provenance))
                .collect(),
        }
    }
}

fn question_record(fields: QuestionFields, provenance: Provenance<'_>) -> QuestionRecord {
    let category = infer_category(&format!("{} {}", fields.stem, fields.cheat_key));
    let question_type = infer_type(&format!("{}{}", fields.stem, fields.cheat_key));
    let difficulty = infer_difficulty(&fields.stem);

    QuestionRecord {
        category,
        question_type,
        question_text: fields.stem,
        options: fields.options,
        correct_answer: fields.correct_answer,
        explanation: fields.explanation,
        cheat_key: fields.cheat_key,
        difficulty,
        source_file: provenance.source_file.to_string(),
        page_number: provenance.page_number,
    }
}

/// Flashcard-style placeholder question built around a formula-sheet entry.
fn cheatkey_record(entry: CheatkeyEntry<'_>, provenance: Provenance<'_>) -> QuestionRecord {
    let category = infer_category(&entry.content);
    let options: Vec<String> = PLACEHOLDER_OPTIONS.iter().map(|s| s.to_string()).collect();

    QuestionRecord {
        category,
        question_type: infer_type(&entry.content),
        question_text: format!("{category} 관련 핵심 개념을 설명하시오."),
        correct_answer: options[0].clone(),
        options,
        explanation: format!("치트키 {} 참조", entry.number),
        cheat_key: format!("💡 {}", entry.content),
        difficulty: Difficulty::Medium,
        source_file: provenance.source_file.to_string(),
        page_number: provenance.page_number,
    }
}

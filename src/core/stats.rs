use crate::core::model::{Category, QuestionRecord, QuestionType};

/// Counts keyed in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<K> {
    entries: Vec<(K, usize)>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq + Copy> Tally<K> {
    pub fn add(&mut self, key: K) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key, 1)),
        }
    }

    pub fn get(&self, key: K) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, count)| count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.entries.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub documents_ok: usize,
    pub documents_failed: usize,
    pub by_category: Tally<Category>,
    pub by_type: Tally<QuestionType>,
}

impl RunStats {
    pub fn record(&mut self, question: &QuestionRecord) {
        self.by_category.add(question.category);
        self.by_type.add(question.question_type);
    }
}

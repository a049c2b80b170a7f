pub mod core;
pub mod error;
pub mod export;
pub mod extract;
pub mod parser;
pub mod pipeline;

pub use crate::core::model::{Category, Difficulty, QuestionRecord, QuestionType};
pub use error::ExtractError;

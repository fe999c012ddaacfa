//! The brain: an ordered, append-only list of question/answer pairs.
//!
//! Duplicated questions are kept as taught. Both matching and lookup walk the
//! list front to back, so the earliest copy always wins.

mod store;

pub use store::{load_brain, save_brain, BrainStore};

use serde::{Deserialize, Serialize};

/// One question with the answer the user taught for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Everything the agent knows, in the order it was taught
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brain {
    pub questions: Vec<QaPair>,
}

impl Brain {
    pub fn new(questions: Vec<QaPair>) -> Self {
        Self { questions }
    }

    /// Question texts in insertion order, used as match candidates
    pub fn questions(&self) -> Vec<&str> {
        self.questions.iter().map(|q| q.question.as_str()).collect()
    }

    /// Answer of the first pair whose question is exactly `question`
    pub fn get_answer(&self, question: &str) -> Option<&str> {
        self.questions
            .iter()
            .find(|q| q.question == question)
            .map(|q| q.answer.as_str())
    }

    /// Append a newly taught pair at the end
    pub fn teach(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.questions.push(QaPair::new(question, answer));
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Free-function form of [`Brain::get_answer`].
pub fn get_answer_for_question<'a>(question: &str, brain: &'a Brain) -> Option<&'a str> {
    brain.get_answer(question)
}

//! Interactive session: read a question, answer it or learn it.
//!
//! ```text
//! AwaitingInput --exit/quit--> Terminated
//!       |   \--no match--> Teaching --skip / taught--> AwaitingInput
//!       \--match--> Answering --> AwaitingInput
//! ```
//!
//! Every taught pair is saved before the next prompt.

use crate::brain::{Brain, BrainStore};
use crate::console::LineIo;
use crate::matcher::find_best_match;
use crate::{BrainConfig, Result};
use tracing::{debug, info, warn};

pub const INPUT_PROMPT: &str = "You: ";
pub const TEACH_PROMPT: &str = "type \"skip\" to skip: ";
pub const ANSWER_PREFIX: &str = "The Brain:";
pub const UNKNOWN_MESSAGE: &str =
    "The Brain: I don't know the answer to that question.\nCan you teach me?";
pub const THANKS_MESSAGE: &str = "The Brain: Thank you for teaching me something new!";
pub const FAREWELL_MESSAGE: &str = "Goodbye!";

const EXIT_KEYWORDS: [&str; 2] = ["exit", "quit"];
const SKIP_KEYWORD: &str = "skip";

/// Where the session is in its read / answer / teach cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    /// A known question matched the user's input
    Answering { question: String },
    /// Nothing matched; `question` is the user's raw input
    Teaching { question: String },
    Terminated,
}

/// A running conversation over one brain
#[derive(Debug)]
pub struct Session {
    brain: Brain,
    store: BrainStore,
}

impl Session {
    /// Start a session over an already loaded brain
    pub fn new(brain: Brain, store: BrainStore) -> Self {
        Self { brain, store }
    }

    /// Load the brain named by `config` and start a session over it
    pub fn open(config: &BrainConfig) -> Result<Self> {
        let store = BrainStore::new(config.brain_file.clone());
        let brain = store.load()?;
        Ok(Self::new(brain, store))
    }

    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    pub fn store(&self) -> &BrainStore {
        &self.store
    }

    /// Drive the session until the user leaves or input runs out
    pub fn run(&mut self, io: &mut impl LineIo) -> Result<()> {
        let mut state = SessionState::AwaitingInput;
        while state != SessionState::Terminated {
            state = self.step(state, io)?;
        }
        info!("Session ended with {} known questions", self.brain.len());
        Ok(())
    }

    /// Perform one transition
    pub fn step(&mut self, state: SessionState, io: &mut impl LineIo) -> Result<SessionState> {
        match state {
            SessionState::AwaitingInput => self.await_input(io),
            SessionState::Answering { question } => self.answer(&question, io),
            SessionState::Teaching { question } => self.teach(question, io),
            SessionState::Terminated => Ok(SessionState::Terminated),
        }
    }

    fn await_input(&mut self, io: &mut impl LineIo) -> Result<SessionState> {
        let Some(input) = io.read_line(INPUT_PROMPT)? else {
            debug!("End of input");
            return Ok(SessionState::Terminated);
        };

        if is_keyword(&input, &EXIT_KEYWORDS) {
            io.write_line(FAREWELL_MESSAGE)?;
            return Ok(SessionState::Terminated);
        }

        let candidates = self.brain.questions();
        match find_best_match(&input, &candidates) {
            Some(question) => Ok(SessionState::Answering {
                question: question.to_string(),
            }),
            None => Ok(SessionState::Teaching { question: input }),
        }
    }

    fn answer(&mut self, question: &str, io: &mut impl LineIo) -> Result<SessionState> {
        match self.brain.get_answer(question) {
            Some(answer) => io.write_line(&format!("{}{}", ANSWER_PREFIX, answer))?,
            None => warn!("Matched question {:?} has no answer", question),
        }
        Ok(SessionState::AwaitingInput)
    }

    fn teach(&mut self, question: String, io: &mut impl LineIo) -> Result<SessionState> {
        io.write_line(UNKNOWN_MESSAGE)?;
        let Some(answer) = io.read_line(TEACH_PROMPT)? else {
            debug!("End of input while teaching {:?}", question);
            return Ok(SessionState::Terminated);
        };

        if is_keyword(&answer, &[SKIP_KEYWORD]) {
            debug!("Skipped teaching {:?}", question);
            return Ok(SessionState::AwaitingInput);
        }

        self.brain.teach(question, answer);
        self.store.save(&self.brain)?;
        io.write_line(THANKS_MESSAGE)?;
        Ok(SessionState::AwaitingInput)
    }
}

/// Trimmed, case-insensitive comparison against a keyword list
fn is_keyword(input: &str, keywords: &[&str]) -> bool {
    let input = input.trim();
    keywords.iter().any(|k| input.eq_ignore_ascii_case(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::QaPair;
    use crate::console::ScriptedIo;
    use tempfile::TempDir;

    fn session_in(temp_dir: &TempDir, brain: Brain) -> Session {
        let store = BrainStore::new(temp_dir.path().join("the_brain.json"));
        store.save(&brain).unwrap();
        Session::new(brain, store)
    }

    #[test]
    fn test_keywords() {
        assert!(is_keyword("exit", &EXIT_KEYWORDS));
        assert!(is_keyword("  QUIT \t", &EXIT_KEYWORDS));
        assert!(is_keyword("Skip", &[SKIP_KEYWORD]));
        assert!(!is_keyword("exit now", &EXIT_KEYWORDS));
        assert!(!is_keyword("", &EXIT_KEYWORDS));
    }

    #[test]
    fn test_step_transitions() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(
            &temp_dir,
            Brain::new(vec![QaPair::new("what is your name", "I am The Brain")]),
        );
        let mut io = ScriptedIo::new(["what is your name", "hello", "skip", "Exit"]);

        let state = session.step(SessionState::AwaitingInput, &mut io).unwrap();
        assert_eq!(
            state,
            SessionState::Answering {
                question: "what is your name".to_string()
            }
        );
        let state = session.step(state, &mut io).unwrap();
        assert_eq!(state, SessionState::AwaitingInput);

        let state = session.step(state, &mut io).unwrap();
        assert_eq!(
            state,
            SessionState::Teaching {
                question: "hello".to_string()
            }
        );
        let state = session.step(state, &mut io).unwrap();
        assert_eq!(state, SessionState::AwaitingInput);

        let state = session.step(state, &mut io).unwrap();
        assert_eq!(state, SessionState::Terminated);
        assert_eq!(session.step(state, &mut io).unwrap(), SessionState::Terminated);
        assert_eq!(session.brain().len(), 1);
    }

    #[test]
    fn test_teach_keeps_raw_question() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(&temp_dir, Brain::default());
        let mut io = ScriptedIo::new(["  Hello There ", "General Kenobi", "quit"]);

        session.run(&mut io).unwrap();

        assert_eq!(
            session.brain().questions,
            vec![QaPair::new("  Hello There ", "General Kenobi")]
        );
    }

    #[test]
    fn test_end_of_input_while_teaching() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(&temp_dir, Brain::default());
        let mut io = ScriptedIo::new(["hello"]);

        session.run(&mut io).unwrap();

        assert!(session.brain().is_empty());
        assert!(!io.output().contains(FAREWELL_MESSAGE));
        assert!(session.store().load().unwrap().is_empty());
    }

    #[test]
    fn test_save_failure_ends_session() {
        let temp_dir = TempDir::new().unwrap();
        let store = BrainStore::new(temp_dir.path().join("gone").join("the_brain.json"));
        let mut session = Session::new(Brain::default(), store);
        let mut io = ScriptedIo::new(["hello", "hi there", "exit"]);

        let result = session.run(&mut io);

        assert!(matches!(result, Err(crate::BrainError::Io { .. })));
        // Still remembered in memory, just not on disk
        assert_eq!(session.brain().get_answer("hello"), Some("hi there"));
        assert_eq!(io.remaining(), 1);
        assert!(!io.output().contains(THANKS_MESSAGE));
    }
}

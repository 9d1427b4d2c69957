use crate::{
    error::Error,
    evaluate,
    interpreter::registers::Registers,
    session::{command::Command, history::History},
    util::num::{format_number, leading_number},
};

/// The text shown in place of the buffer after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

/// Identifier the `Answer` command appends to the buffer.
pub const ANSWER_REFERENCE: &str = "ans";

/// What an `Evaluate` command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The buffer evaluated to `result`.
    Evaluated {
        /// The buffer text before evaluation.
        expression: String,
        /// The result.
        result:     f64,
    },
    /// Evaluation failed; nothing but the error display changed.
    Failed(Error),
}

/// A calculator session.
///
/// Holds the editable expression buffer, the registers, the history and
/// whether the display currently shows an error. All state changes go
/// through [`Session::apply`].
///
/// ## Example
/// ```
/// use calcrs::session::{Command, Outcome, Session};
///
/// let mut session = Session::default();
/// session.apply(Command::Append("2*(3+4)".to_string()));
///
/// let outcome = session.apply(Command::Evaluate);
/// assert!(matches!(outcome, Some(Outcome::Evaluated { result, .. }) if result == 14.0));
/// assert_eq!(session.display(), "14");
/// assert_eq!(session.history().render(), "2*(3+4) = 14");
///
/// session.apply(Command::Append("/0".to_string()));
/// session.apply(Command::Evaluate);
/// assert_eq!(session.display(), "Error");
/// assert_eq!(session.registers().last_answer(), 14.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    buffer:    String,
    registers: Registers,
    history:   History,
    error:     bool,
}

impl Session {
    /// Creates an empty session whose history shows the last
    /// `history_display_len` entries.
    #[must_use]
    pub fn new(history_display_len: usize) -> Self {
        Self { history: History::new(history_display_len),
               ..Self::default() }
    }

    /// What the display shows: the buffer, or `Error` after a failed
    /// evaluation until the next command.
    #[must_use]
    pub fn display(&self) -> &str {
        if self.error { ERROR_DISPLAY } else { &self.buffer }
    }

    /// The expression buffer.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The memory and last-answer registers.
    #[must_use]
    pub const fn registers(&self) -> &Registers {
        &self.registers
    }

    /// The evaluation history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Applies one command.
    ///
    /// Every command first clears a pending error display. Only
    /// [`Command::Evaluate`] returns an outcome.
    ///
    /// # Parameters
    /// - `command`: The action to perform.
    ///
    /// # Returns
    /// `Some(Outcome)` for `Evaluate`, `None` otherwise.
    pub fn apply(&mut self, command: Command) -> Option<Outcome> {
        log::debug!("apply {command:?} to buffer {:?}", self.buffer);
        self.error = false;

        match command {
            Command::Append(text) => self.buffer.push_str(&text),
            Command::Clear => self.buffer.clear(),
            Command::Backspace => {
                self.buffer.pop();
            },
            Command::ToggleSign => self.toggle_sign(),
            Command::Evaluate => return Some(self.evaluate()),
            Command::MemoryStore => self.memory_store(),
            Command::MemoryRecall => self.buffer = format_number(self.registers.memory()),
            Command::MemoryClear => self.registers.clear_memory(),
            Command::Answer => self.buffer.push_str(ANSWER_REFERENCE),
            Command::InsertConstant(constant) => self.buffer.push_str(constant.symbol()),
            Command::InsertFunction(function) => self.buffer.push_str(function.prefix()),
            Command::Percent => self.buffer.push('%'),
            Command::Power => self.buffer.push('^'),
            Command::ClearHistory => self.history.clear(),
        }

        None
    }

    fn toggle_sign(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        if self.buffer.starts_with('-') {
            self.buffer.remove(0);
        } else {
            self.buffer.insert(0, '-');
        }
    }

    /// Stores the buffer's leading number. A buffer without one, or whose
    /// number overflows (`1e999`), stores zero.
    fn memory_store(&mut self) {
        let stored = leading_number(&self.buffer)
            .is_some_and(|value| self.registers.set_memory(value).is_ok());
        if !stored {
            self.registers.clear_memory();
        }
    }

    fn evaluate(&mut self) -> Outcome {
        let result = evaluate(&self.buffer, &self.registers).and_then(|value| {
                         self.registers.set_last_answer(value)?;
                         Ok(value)
                     });

        match result {
            Ok(value) => {
                let expression = std::mem::replace(&mut self.buffer, format_number(value));
                self.history.push(expression.clone(), self.buffer.clone());
                Outcome::Evaluated { expression,
                                     result: value }
            },
            Err(e) => {
                log::debug!("evaluation of {:?} failed: {e}", self.buffer);
                self.error = true;
                Outcome::Failed(e)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{ParseError, RuntimeError},
        session::command::{Constant, Function},
    };

    fn session_with(text: &str) -> Session {
        let mut session = Session::default();
        session.apply(Command::Append(text.to_string()));
        session
    }

    fn result_of(outcome: Option<Outcome>) -> f64 {
        match outcome {
            Some(Outcome::Evaluated { result, .. }) => result,
            other => panic!("expected a result, got {other:?}"),
        }
    }

    #[test]
    fn buffer_editing() {
        let mut session = session_with("12+");
        session.apply(Command::Backspace);
        assert_eq!(session.buffer(), "12");
        session.apply(Command::Power);
        session.apply(Command::Append("2".to_string()));
        session.apply(Command::Percent);
        assert_eq!(session.buffer(), "12^2%");
        session.apply(Command::Clear);
        assert_eq!(session.buffer(), "");
        session.apply(Command::Backspace);
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn backspace_removes_a_whole_character() {
        let mut session = session_with("2×π");
        session.apply(Command::Backspace);
        assert_eq!(session.buffer(), "2×");
    }

    #[test]
    fn toggle_sign() {
        let mut session = session_with("5+3");
        session.apply(Command::ToggleSign);
        assert_eq!(session.buffer(), "-5+3");
        session.apply(Command::ToggleSign);
        assert_eq!(session.buffer(), "5+3");

        let mut empty = Session::default();
        empty.apply(Command::ToggleSign);
        assert_eq!(empty.buffer(), "");
    }

    #[test]
    fn insertions() {
        let mut session = Session::default();
        session.apply(Command::InsertFunction(Function::Ln));
        session.apply(Command::InsertConstant(Constant::E));
        session.apply(Command::Append(")+".to_string()));
        session.apply(Command::InsertFunction(Function::Log));
        session.apply(Command::Append("100)+".to_string()));
        session.apply(Command::InsertConstant(Constant::Pi));
        session.apply(Command::Answer);
        assert_eq!(session.buffer(), "log(e)+log10(100)+πans");
    }

    #[test]
    fn evaluate_records_answer_and_history() {
        let mut session = session_with("2*(3+4)");
        assert_eq!(result_of(session.apply(Command::Evaluate)), 14.0);
        assert_eq!(session.registers().last_answer(), 14.0);
        assert_eq!(session.buffer(), "14");

        session.apply(Command::Clear);
        session.apply(Command::Answer);
        session.apply(Command::Append("+1".to_string()));
        assert_eq!(result_of(session.apply(Command::Evaluate)), 15.0);
        assert_eq!(session.history().render(), "2*(3+4) = 14 | ans+1 = 15");
    }

    #[test]
    fn failed_evaluation_changes_only_the_display() {
        let mut session = session_with("9");
        session.apply(Command::Evaluate);
        session.apply(Command::MemoryStore);
        session.apply(Command::Append("/0".to_string()));

        let outcome = session.apply(Command::Evaluate);
        assert!(matches!(outcome,
                         Some(Outcome::Failed(Error::Runtime(RuntimeError::ArithmeticDomain { .. })))));
        assert_eq!(session.display(), ERROR_DISPLAY);
        assert_eq!(session.buffer(), "9/0");
        assert_eq!(session.registers().last_answer(), 9.0);
        assert_eq!(session.registers().memory(), 9.0);
        assert_eq!(session.history().len(), 1);

        session.apply(Command::Backspace);
        assert_eq!(session.display(), "9/");
    }

    #[test]
    fn empty_buffer_fails_to_evaluate() {
        let mut session = Session::default();
        assert_eq!(session.apply(Command::Evaluate),
                   Some(Outcome::Failed(Error::Parse(ParseError::EmptyExpression))));
        assert_eq!(session.display(), ERROR_DISPLAY);
    }

    #[test]
    fn memory_commands() {
        let mut session = session_with("12.5+3");
        session.apply(Command::MemoryStore);
        assert_eq!(session.registers().memory(), 12.5);

        session.apply(Command::Clear);
        session.apply(Command::MemoryRecall);
        assert_eq!(session.buffer(), "12.5");

        session.apply(Command::MemoryClear);
        assert_eq!(session.registers().memory(), 0.0);

        let mut session = session_with("sin(30)");
        session.apply(Command::MemoryStore);
        assert_eq!(session.registers().memory(), 0.0);
    }

    #[test]
    fn memory_store_of_overflowing_number_is_zero() {
        let mut session = session_with("4");
        session.apply(Command::MemoryStore);
        session.apply(Command::Clear);
        session.apply(Command::Append("1e999+1".to_string()));
        session.apply(Command::MemoryStore);
        assert_eq!(session.registers().memory(), 0.0);
    }

    #[test]
    fn repeated_failures_leave_state_untouched() {
        let mut session = session_with("2*(3+4)");
        session.apply(Command::Evaluate);
        session.apply(Command::MemoryStore);

        let registers = *session.registers();
        let history = session.history().clone();

        for failing in ["5/0", "foo(2)"] {
            session.apply(Command::Clear);
            session.apply(Command::Append(failing.to_string()));
            assert!(matches!(session.apply(Command::Evaluate), Some(Outcome::Failed(_))));
            assert_eq!(session.buffer(), failing);
        }

        assert_eq!(session.display(), ERROR_DISPLAY);
        assert_eq!(*session.registers(), registers);
        assert_eq!(*session.history(), history);

        session.apply(Command::Evaluate);
        assert_eq!(session.buffer(), "foo(2)");
        assert_eq!(*session.registers(), registers);
        assert_eq!(*session.history(), history);
    }

    #[test]
    fn too_deep_nesting_fails_like_any_other_error() {
        let mut session = session_with("6*7");
        session.apply(Command::Evaluate);
        let registers = *session.registers();

        let deep = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
        session.apply(Command::Clear);
        session.apply(Command::Append(deep));
        let outcome = session.apply(Command::Evaluate);
        assert!(matches!(outcome,
                         Some(Outcome::Failed(Error::Parse(ParseError::NestingTooDeep { .. })))));
        assert_eq!(*session.registers(), registers);
        assert_eq!(session.history().render(), "6*7 = 42");
    }

    #[test]
    fn history_window_and_clear() {
        let mut session = Session::new(2);
        for expression in ["1+1", "2+2", "3+3"] {
            session.apply(Command::Clear);
            session.apply(Command::Append(expression.to_string()));
            session.apply(Command::Evaluate);
        }
        assert_eq!(session.history().render(), "2+2 = 4 | 3+3 = 6");

        session.apply(Command::ClearHistory);
        assert!(session.history().is_empty());
        assert_eq!(session.registers().last_answer(), 6.0);
    }

    #[test]
    fn result_text_re_enters_the_pipeline() {
        let mut session = session_with("10^25");
        session.apply(Command::Evaluate);
        assert_eq!(session.buffer(), "1e+25");
        session.apply(Command::Append("*2".to_string()));
        assert_eq!(result_of(session.apply(Command::Evaluate)), 2e25);
    }
}

use crate::session::command::Command;

/// Leading characters that continue the current buffer instead of starting
/// a new expression.
pub const CONTINUATION_OPERATORS: &[char] = &['+', '*', '/', '^', '×', '÷', '%'];

/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Commands to apply in order.
    Commands(Vec<Command>),
    /// Print the history.
    ShowHistory,
    /// Leave the prompt.
    Quit,
    /// A `:` command that does not exist.
    Unknown(String),
    /// Blank line.
    Empty,
}

/// Reads one line typed at the prompt.
///
/// A plain line replaces the buffer and evaluates it. A line starting with
/// a binary operator (`+`, `*`, `/`, `^`, `×`, `÷`) or `%` is appended to the
/// buffer, so it continues from the last result. `-` always starts a new
/// expression. Lines starting with `:` are meta commands:
///
/// | Line | Effect |
/// |---|---|
/// | `:ms` | store the buffer's leading number in memory |
/// | `:mr` | replace the buffer with memory |
/// | `:mc` | clear memory |
/// | `:ans` | append `ans` to the buffer |
/// | `:history` | show the history |
/// | `:clear-history` | clear the history |
/// | `:quit`, `:q` | leave |
///
/// ## Example
/// ```
/// use calcrs::session::{Command, input::{Input, parse_line}};
///
/// assert_eq!(parse_line("1+1"),
///            Input::Commands(vec![Command::Clear,
///                                 Command::Append("1+1".to_string()),
///                                 Command::Evaluate]));
/// assert_eq!(parse_line("*2"),
///            Input::Commands(vec![Command::Append("*2".to_string()), Command::Evaluate]));
/// assert_eq!(parse_line(":mr"), Input::Commands(vec![Command::MemoryRecall]));
/// assert_eq!(parse_line(":q"), Input::Quit);
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    if let Some(meta) = line.strip_prefix(':') {
        return parse_meta(meta.trim());
    }

    let text = line.to_string();
    if line.starts_with(CONTINUATION_OPERATORS) {
        Input::Commands(vec![Command::Append(text), Command::Evaluate])
    } else {
        Input::Commands(vec![Command::Clear, Command::Append(text), Command::Evaluate])
    }
}

fn parse_meta(name: &str) -> Input {
    let command = match name {
        "ms" => Command::MemoryStore,
        "mr" => Command::MemoryRecall,
        "mc" => Command::MemoryClear,
        "ans" => Command::Answer,
        "clear-history" => Command::ClearHistory,
        "history" => return Input::ShowHistory,
        "quit" | "q" => return Input::Quit,
        other => return Input::Unknown(other.to_string()),
    };
    Input::Commands(vec![command])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines() {
        assert_eq!(parse_line(""), Input::Empty);
        assert_eq!(parse_line("   \t"), Input::Empty);
    }

    #[test]
    fn negative_numbers_start_fresh() {
        assert_eq!(parse_line("-3+1"),
                   Input::Commands(vec![Command::Clear,
                                        Command::Append("-3+1".to_string()),
                                        Command::Evaluate]));
    }

    #[test]
    fn operators_continue() {
        for line in ["+1", "÷4", "^2", "%", "× 3"] {
            assert!(matches!(parse_line(line), Input::Commands(ref c) if c.len() == 2),
                    "{line}");
        }
    }

    #[test]
    fn meta_commands() {
        assert_eq!(parse_line(":ms"), Input::Commands(vec![Command::MemoryStore]));
        assert_eq!(parse_line(": mc"), Input::Commands(vec![Command::MemoryClear]));
        assert_eq!(parse_line(":ans"), Input::Commands(vec![Command::Answer]));
        assert_eq!(parse_line(":clear-history"),
                   Input::Commands(vec![Command::ClearHistory]));
        assert_eq!(parse_line(":history"), Input::ShowHistory);
        assert_eq!(parse_line(":quit"), Input::Quit);
        assert_eq!(parse_line(":frobnicate"), Input::Unknown("frobnicate".to_string()));
    }
}

use std::{error::Error, fs, process::ExitCode};

use calcrs::session::{
    Outcome, Session,
    history::DEFAULT_HISTORY_LEN,
    input::{Input, parse_line},
};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};

const PROMPT: &str = "> ";

/// calcrs is a scientific calculator. Trig functions take degrees, `ans`
/// refers to the last result and `%` divides by one hundred.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read expressions from a file, one per line, instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Number of recent evaluations shown by the history.
    #[arg(short = 'H', long, value_name = "N")]
    history: Option<usize>,

    /// Expressions to evaluate in order. Without any, an interactive prompt
    /// starts. Expressions may start with `-`, e.g. `calcrs -2^2`.
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut session = Session::new(args.history.unwrap_or(DEFAULT_HISTORY_LEN));

    let result = if args.expressions.is_empty() {
        repl(&mut session)
    } else {
        read_expressions(&args).map(|lines| run_batch(&mut session, &lines, args.history))
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Collects the expressions to evaluate, reading files when `--file` is set.
fn read_expressions(args: &Args) -> Result<Vec<String>, Box<dyn Error>> {
    if !args.file {
        return Ok(args.expressions.clone());
    }

    let mut lines = Vec::new();
    for path in &args.expressions {
        let contents = fs::read_to_string(path).map_err(|e| {
                           format!("Failed to read the input file '{path}'. Perhaps this file \
                                    does not exist? ({e})")
                       })?;
        lines.extend(contents.lines()
                             .map(str::trim)
                             .filter(|line| !line.is_empty())
                             .map(str::to_string));
    }
    Ok(lines)
}

/// Evaluates every expression in one session so `ans` chains across them.
///
/// Returns whether all of them succeeded.
fn run_batch(session: &mut Session,
             expressions: &[String],
             history: Option<usize>)
             -> bool {
    let mut all_ok = true;
    for expression in expressions {
        all_ok &= run_line(session, expression);
    }

    if history.is_some() && !session.history().is_empty() {
        println!("{}", session.history().render());
    }
    all_ok
}

/// Applies one line to the session and prints what the display shows.
///
/// Returns `false` if an evaluation failed.
fn run_line(session: &mut Session, line: &str) -> bool {
    let commands = match parse_line(line) {
        Input::Commands(commands) => commands,
        Input::ShowHistory => {
            println!("{}", session.history().render());
            return true;
        },
        Input::Unknown(name) => {
            eprintln!("unknown command ':{name}'");
            return true;
        },
        Input::Quit | Input::Empty => return true,
    };

    let mut ok = true;
    for command in commands {
        if let Some(Outcome::Failed(e)) = session.apply(command) {
            eprintln!("{e}");
            ok = false;
        }
    }
    println!("{}", session.display());
    ok
}

/// Runs the interactive prompt until `:quit`, Ctrl-C or end of input.
fn repl(session: &mut Session) -> Result<bool, Box<dyn Error>> {
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        editor.add_history_entry(line.as_str())?;

        if parse_line(&line) == Input::Quit {
            break;
        }
        run_line(session, &line);
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expressions(argv: &[&str]) -> Vec<String> {
        Args::try_parse_from(argv).unwrap().expressions
    }

    #[test]
    fn leading_minus_is_an_expression() {
        assert_eq!(expressions(&["calcrs", "-2^2"]), vec!["-2^2"]);
        assert_eq!(expressions(&["calcrs", "-5+3", "-e"]), vec!["-5+3", "-e"]);
        assert_eq!(expressions(&["calcrs", "1", "-ans"]), vec!["1", "-ans"]);
    }

    #[test]
    fn flags_still_parse() {
        let args = Args::try_parse_from(["calcrs", "-f", "-H", "2", "sums.txt"]).unwrap();
        assert!(args.file);
        assert_eq!(args.history, Some(2));
        assert_eq!(args.expressions, vec!["sums.txt"]);
    }

    #[test]
    fn batch_runs_in_one_session() {
        let mut session = Session::new(DEFAULT_HISTORY_LEN);
        let lines = ["-2^2".to_string(), "*3".to_string(), "ans+1".to_string()];
        assert!(run_batch(&mut session, &lines, None));
        assert_eq!(session.registers().last_answer(), -11.0);

        assert!(!run_batch(&mut session, &["1/0".to_string()], None));
        assert_eq!(session.registers().last_answer(), -11.0);
    }
}

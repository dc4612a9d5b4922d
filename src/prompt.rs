use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Asks the operator a yes/no question before anything destructive happens.
pub trait Confirm {
    /// Show `question` and return whether the answer was affirmative.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Only `y` in either case counts as yes. The line terminator is dropped
/// but other whitespace is kept, so `" y"` is a decline.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.strip_suffix('\n').unwrap_or(answer);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    answer.eq_ignore_ascii_case("y")
}

/// Reads one line per question from `input`, writing the question to
/// `output` first. EOF is treated as a decline.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }
        Ok(is_affirmative(&line))
    }
}

/// Canned answers, recording every question asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

impl Confirm for ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.asked.push(question.to_string());
        Ok(self
            .answers
            .pop_front()
            .is_some_and(|answer| is_affirmative(&answer)))
    }
}

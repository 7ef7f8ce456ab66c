//! In-memory console for replaying a fixed sequence of input lines

use super::Console;
use std::collections::VecDeque;
use std::io;

/// Console fed from a list of lines, recording everything written to it
///
/// Reading past the last scripted line fails with
/// [`io::ErrorKind::UnexpectedEof`], like a closed terminal.
///
/// # Examples
/// ```
/// use mastermind::console::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["rgyb"]);
/// assert_eq!(console.read_line("Propose a combination:").unwrap(), "rgyb");
/// console.write_line("4 blacks and 0 whites").unwrap();
///
/// assert_eq!(console.prompts(), ["Propose a combination:"]);
/// assert_eq!(console.output(), ["4 blacks and 0 whites"]);
/// assert!(console.read_line("again?").is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts shown so far, in order
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines written so far, in order
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Number of scripted lines not read yet
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.input.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_in_order() {
        let mut console = ScriptedConsole::new(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(console.read_line("a").unwrap(), "first");
        assert_eq!(console.remaining_input(), 1);
        assert_eq!(console.read_line("b").unwrap(), "second");
        assert_eq!(console.prompts(), ["a", "b"]);
    }

    #[test]
    fn exhausted_input_is_eof() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let error = console.read_line("prompt").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
        // The prompt is still recorded
        assert_eq!(console.prompts().len(), 1);
    }

    #[test]
    fn records_output_through_mutable_reference() {
        fn greet(mut console: impl Console) {
            console.write_line("hello").unwrap();
        }

        let mut console = ScriptedConsole::default();
        greet(&mut console);
        greet(&mut console);
        assert_eq!(console.output(), ["hello", "hello"]);
    }
}

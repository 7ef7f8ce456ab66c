//! Line-oriented console used by the text view
//!
//! The game loop only ever needs to ask for a line and to print one, so the
//! seam is a two-method trait. [`StdConsole`] talks to the terminal;
//! [`ScriptedConsole`] replays canned input and records output.

mod scripted;
mod std_console;

pub use scripted::ScriptedConsole;
pub use std_console::StdConsole;

use std::io;

/// Source of player input and sink for game output
pub trait Console {
    /// Show `prompt` and read one line, without its line terminator
    ///
    /// # Errors
    /// Returns an I/O error if reading fails, and
    /// [`io::ErrorKind::UnexpectedEof`] once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Print one line of text
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_line(prompt)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }
}

//! Operator-facing input and output.

use std::io::{self, BufRead, Write};

/// Where progress lines go and where confirmation answers come from.
pub trait Console {
    /// Print one line of progress output.
    fn print(&mut self, line: &str) -> io::Result<()>;

    /// Ask `question` and return the raw answer, without its line
    /// terminator. End of input reads as an empty answer.
    fn prompt(&mut self, question: &str) -> io::Result<String>;
}

/// A console over any reader and writer pair.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn print(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn prompt(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question} ")?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        let len = answer.trim_end_matches(['\r', '\n']).len();
        answer.truncate(len);
        Ok(answer)
    }
}

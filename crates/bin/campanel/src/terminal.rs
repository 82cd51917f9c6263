//! Terminal implementations of the display and prompt ports.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use campanel_app::ports::{StatusDisplay, UserPrompt};

/// Prints every status line on its own line of stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDisplay;

impl StatusDisplay for StdoutDisplay {
    fn show(&self, text: &str) {
        println!("{text}");
    }
}

/// y/N questions on a line-oriented terminal.
///
/// Anything other than `y` or `yes` (case-insensitive) is a refusal,
/// including end of input.
pub struct TerminalPrompt<R, W> {
    assume_yes: bool,
    input: RefCell<R>,
    output: RefCell<W>,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, read answers from stdin. With `assume_yes` no
    /// question is asked and every confirmation succeeds.
    #[must_use]
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), assume_yes)
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            assume_yes,
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    fn ask(&self, message: &str) -> io::Result<bool> {
        {
            let mut out = self.output.borrow_mut();
            write!(out, "{message} [y/N] ")?;
            out.flush()?;
        }
        let mut answer = String::new();
        self.input.borrow_mut().read_line(&mut answer)?;
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

impl<R: BufRead, W: Write> UserPrompt for TerminalPrompt<R, W> {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            tracing::debug!(%message, "confirmation skipped");
            return true;
        }
        self.ask(message).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "could not read answer");
            false
        })
    }

    fn acknowledge(&self, message: &str) {
        let mut out = self.output.borrow_mut();
        if let Err(err) = writeln!(out, "{message}") {
            tracing::debug!(error = %err, "could not write acknowledgement");
        }
    }
}

//! Modal dialog primitives.

use std::io::{self, BufRead, Write};

/// The two dialogs the main screen needs.
pub trait Dialogs {
    /// Tell the user something went wrong or nothing was found.
    fn warn(&mut self, title: &str, message: &str);

    /// Ask for confirmation. `true` only on an explicit yes.
    fn confirm(&mut self, header: &str, content: &str) -> bool;
}

/// Line-based terminal: reads commands and dialog answers from one input and
/// writes everything to one output.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without its line ending; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Dialogs for Terminal<R, W> {
    fn warn(&mut self, title: &str, message: &str) {
        if let Err(err) = writeln!(self.output, "[{title}] {message}") {
            tracing::error!(%err, title, "failed to show warning");
        }
    }

    fn confirm(&mut self, header: &str, content: &str) -> bool {
        if let Err(err) = self.prompt(&format!("{header} {content} [y/N]: ")) {
            tracing::error!(%err, header, "failed to show confirmation");
            return false;
        }
        match self.read_line() {
            Ok(Some(answer)) => matches!(
                answer.trim().to_ascii_lowercase().as_str(),
                "y" | "yes" | "ok"
            ),
            Ok(None) => false,
            Err(err) => {
                tracing::error!(%err, "failed to read confirmation");
                false
            }
        }
    }
}

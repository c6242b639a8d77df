//! Line sources for the input collector
//!
//! `TerminalPrompt` reads through rustyline. When stdin is not a tty rustyline
//! reads the line without showing the prompt, so the prompt is written to
//! stdout first. `ScriptedPrompt` replays canned answers and records a
//! transcript, for tests and non-interactive callers.

use crate::errors::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::io::{IsTerminal, Write};

/// Anything the collector can ask questions through
pub trait PromptSource {
    /// Show `prompt` and read one line
    ///
    /// Returns:
    /// - Ok(Some(line)) for normal input, without the trailing newline
    /// - Ok(None) for EOF (Ctrl-D / closed stdin)
    /// - Err on interrupt (Ctrl-C) or other errors
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Print a section header or other non-question text
    fn announce(&mut self, text: &str) -> Result<()>;
}

/// Readline-backed terminal prompt
pub struct TerminalPrompt {
    editor: DefaultEditor,
    interactive: bool,
}

impl TerminalPrompt {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;
        Ok(TerminalPrompt {
            editor,
            interactive: std::io::stdin().is_terminal(),
        })
    }

    /// Whether stdin is a terminal (rustyline shows the prompt itself)
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Write a prompt without a newline and flush it
pub fn write_prompt<W: Write>(out: &mut W, prompt: &str) -> Result<()> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    Ok(())
}

impl PromptSource for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if !self.interactive {
            write_prompt(&mut std::io::stdout(), prompt)?;
        }

        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn announce(&mut self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }
}

/// Replays a fixed list of answers
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every prompt and header shown so far, in order
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl PromptSource for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.transcript.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn announce(&mut self, text: &str) -> Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_replays_in_order() {
        let mut prompt = ScriptedPrompt::new(["first", "second"]);
        assert_eq!(prompt.read_line("a: ").unwrap(), Some("first".to_string()));
        assert_eq!(prompt.read_line("b: ").unwrap(), Some("second".to_string()));
        assert_eq!(prompt.read_line("c: ").unwrap(), None);
        assert_eq!(prompt.transcript(), &["a: ", "b: ", "c: "]);
    }

    #[test]
    fn test_write_prompt_has_no_newline() {
        let mut out = Vec::new();
        write_prompt(&mut out, "Heart Rate (bpm): ").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Heart Rate (bpm): ");
    }

    #[test]
    fn test_terminal_prompt_tracks_stdin_kind() {
        let prompt = TerminalPrompt::new().unwrap();
        assert_eq!(prompt.is_interactive(), std::io::stdin().is_terminal());
    }

    #[test]
    fn test_scripted_prompt_records_announcements() {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        prompt.announce("Header").unwrap();
        assert_eq!(prompt.transcript(), &["Header"]);
        assert_eq!(prompt.remaining(), 0);
    }
}

// src/application/prompt.rs
//
// Line input for the terminal UI.
//
// Parsing failures never leave this module: every `ask*` helper re-prompts
// until the typed text is valid. Ctrl-C / Ctrl-D surface as `UiError::Closed`
// so the menu can exit cleanly from any depth.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

use super::error_handling::ErrorResponse;
use crate::domain::input::{parse_yes_no, require_text};
use crate::domain::{DomainError, DomainResult};
use crate::error::AppError;

#[derive(Debug, Error)]
pub enum UiError {
    /// The user closed the input (Ctrl-C, Ctrl-D, end of script)
    #[error("input closed")]
    Closed,

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
}

pub type UiResult<T> = Result<T, UiError>;

/// Where typed lines come from
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> UiResult<String>;
}

/// Interactive source backed by rustyline (history, line editing)
pub struct RustylineSource {
    editor: DefaultEditor,
}

impl RustylineSource {
    pub fn new() -> UiResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for RustylineSource {
    fn read_line(&mut self, prompt: &str) -> UiResult<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(UiError::Closed),
            Err(e) => Err(e.into()),
        }
    }
}

/// Pre-recorded answers, consumed in order. Running out closes the input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> UiResult<String> {
        self.lines.pop_front().ok_or(UiError::Closed)
    }
}

/// Input plus output of one terminal session
pub struct Console<S: LineSource, W: Write> {
    input: S,
    out: W,
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub fn new(input: S, out: W) -> Self {
        Self { input, out }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn say(&mut self, texto: impl Display) -> UiResult<()> {
        writeln!(self.out, "{}", texto)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn line(&mut self, prompt: &str) -> UiResult<String> {
        self.input.read_line(prompt)
    }

    /// Re-prompt until `parse` accepts the line
    pub fn ask<T, F>(&mut self, prompt: &str, parse: F) -> UiResult<T>
    where
        F: Fn(&str) -> DomainResult<T>,
    {
        loop {
            let linha = self.line(prompt)?;
            match parse(&linha) {
                Ok(valor) => return Ok(valor),
                Err(e) => self.say(ErrorResponse::from_domain_error(e))?,
            }
        }
    }

    /// Blank answer means "keep / none"
    pub fn ask_optional<T, F>(&mut self, prompt: &str, parse: F) -> UiResult<Option<T>>
    where
        F: Fn(&str) -> DomainResult<T>,
    {
        self.ask(prompt, |linha| {
            if linha.trim().is_empty() {
                Ok(None)
            } else {
                parse(linha).map(Some)
            }
        })
    }

    pub fn ask_text(&mut self, prompt: &str, campo: &str) -> UiResult<String> {
        self.ask(prompt, |linha| require_text(linha, campo))
    }

    /// Free text, possibly blank
    pub fn ask_any(&mut self, prompt: &str) -> UiResult<String> {
        Ok(self.line(prompt)?.trim().to_string())
    }

    pub fn confirm(&mut self, prompt: &str) -> UiResult<bool> {
        self.ask(prompt, parse_yes_no)
    }

    /// Integer option in `min..=max`
    pub fn choose(&mut self, prompt: &str, min: usize, max: usize) -> UiResult<usize> {
        self.ask(prompt, |linha| {
            let opcao = linha.trim().parse::<usize>().map_err(|_| {
                DomainError::InputFormat(format!("'{}' is not an option", linha.trim()))
            })?;
            if !(min..=max).contains(&opcao) {
                return Err(DomainError::RangeViolation(format!(
                    "Option must be between {} and {}",
                    min, max
                )));
            }
            Ok(opcao)
        })
    }

    /// Numbered menu; returns the 0-based index of the chosen entry
    pub fn menu<T: Display>(&mut self, titulo: &str, opcoes: &[T]) -> UiResult<usize> {
        self.say(titulo)?;
        for (i, opcao) in opcoes.iter().enumerate() {
            self.say(format!("  {}. {}", i + 1, opcao))?;
        }
        Ok(self.choose("Opção: ", 1, opcoes.len())? - 1)
    }

    /// Show a failed operation
    pub fn report(&mut self, erro: AppError) -> UiResult<()> {
        self.say(ErrorResponse::from_app_error(erro))
    }
}

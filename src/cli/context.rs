//! CLI context - bundles parsed arguments and the random source.

use std::io::{self, Write};

use passgen::pass::{StrengthAssessment, charset};
use passgen::random::Source;
use passgen::state::{self, Notice};
use passgen::{Password, RandomSource, assess, generate_password};
use serde::Serialize;
use tracing::info;
use zeroize::Zeroizing;

use super::{Args, Error, prompts, quiet};
use crate::clipboard::Clipboard;
use crate::terminal::{RESET, color};
use crate::tui;

#[derive(Serialize)]
struct Record<'a> {
    password: &'a str,
    strength: StrengthAssessment,
}

/// Application context for CLI mode.
pub struct Context {
    args: Args,
    interactive: bool,
    rng: Source,
}

impl Context {
    /// `no_args` starts the TUI, as does `--interactive`.
    pub fn new(args: Args, no_args: bool) -> Self {
        let rng = Source::from_seed(args.seed);
        let interactive = no_args || args.interactive;
        Self {
            args,
            interactive,
            rng,
        }
    }

    pub fn run(mut self) -> Result<(), Error> {
        if let Some(password) = self.args.assess.take() {
            return self.print_assessment(Zeroizing::new(password));
        }
        if self.interactive {
            return tui::run(self.args.config(), self.rng);
        }
        self.generate_output()
    }

    fn print_assessment(&self, password: Zeroizing<String>) -> Result<(), Error> {
        let assessment = assess(&password);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.args.json {
            serde_json::to_writer(&mut out, &assessment)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", self.describe(&assessment))?;
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) -> Result<(), Error> {
        let config = self.args.config();
        let count = self.args.number as usize;

        let mut passwords = Vec::with_capacity(count);
        for _ in 0..count {
            passwords.push(generate_password(&config, &mut self.rng)?);
        }
        info!(
            count,
            pool = charset::size(&config),
            length = config.length(),
            source = self.rng.name(),
            "generated passwords"
        );

        let mut clipboard = if self.args.clipboard {
            match Clipboard::open() {
                Ok(c) => Some(c),
                Err(e) => {
                    prompts::warn(&e.to_string());
                    if !prompts::clipboard_fallback_prompt() {
                        return Ok(());
                    }
                    None
                }
            }
        } else {
            None
        };

        match clipboard.as_mut() {
            Some(clipboard) => {
                let joined = Zeroizing::new(
                    passwords
                        .iter()
                        .map(Password::as_str)
                        .collect::<Vec<_>>()
                        .join("\n"),
                );
                clipboard.copy(&joined)?;
                prompts::notice(&Notice::info(state::COPY_SUCCESS));
                Ok(())
            }
            None => self.print_passwords(&passwords),
        }
    }

    fn print_passwords(&self, passwords: &[Password]) -> Result<(), Error> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for password in passwords {
            if self.args.json {
                let record = Record {
                    password: password.as_str(),
                    strength: assess(password.as_str()),
                };
                serde_json::to_writer(&mut out, &record)?;
                writeln!(out)?;
            } else if self.args.strength {
                let assessment = assess(password.as_str());
                writeln!(out, "{}  {}", password.as_str(), self.describe(&assessment))?;
            } else {
                writeln!(out, "{}", password.as_str())?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// `Strong 75%`, colored when stdout is a terminal.
    fn describe(&self, assessment: &StrengthAssessment) -> String {
        if quiet::stdout_is_terminal() {
            format!(
                "{}{}{RESET} {}%",
                color(assessment.color),
                assessment.label,
                assessment.percent
            )
        } else {
            format!("{} {}%", assessment.label, assessment.percent)
        }
    }
}

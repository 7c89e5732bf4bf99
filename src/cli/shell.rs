//! Interactive finance shell
//!
//! Reads commands line by line, drives the finance service, and prints the
//! results. Generic over its input and output so it can run against stdin
//! and stdout or against in-memory buffers.

use std::io::{BufRead, Write};

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::{format_finance_card, format_finance_details, format_finance_list};
use crate::error::{FinanceError, FinanceResult};
use crate::export::export_finances;
use crate::form::{FieldError, FinanceForm, FormField, Parsed};
use crate::models::Finance;
use crate::services::FinanceService;

use super::commands::{ShellCommand, ShellLine, HELP_TEXT};

/// Whether the shell keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive shell over a finance service
pub struct Shell<'a, R, W> {
    service: FinanceService<'a>,
    settings: Settings,
    audit: Option<AuditLogger>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell reading commands from `input` and writing to `output`
    pub fn new(service: FinanceService<'a>, settings: Settings, input: R, output: W) -> Self {
        Self {
            service,
            settings,
            audit: None,
            input,
            output,
        }
    }

    /// Read history from the given audit log
    pub fn with_audit_log(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Run until `quit` or end of input
    ///
    /// Command failures (unknown IDs, rejected forms) are printed and the
    /// shell keeps going; only I/O failures end the session with an error.
    pub fn run(&mut self) -> FinanceResult<()> {
        writeln!(
            self.output,
            "finance-tracker {}. Type 'help' for commands.",
            env!("CARGO_PKG_VERSION")
        )?;

        while let Some(line) = self.prompt("> ")? {
            if line.trim().is_empty() {
                continue;
            }

            let command = match ShellLine::parse_line(&line) {
                Ok(command) => command,
                Err(e) => {
                    write!(self.output, "{}", e)?;
                    continue;
                }
            };
            tracing::debug!(?command, "running shell command");

            match self.execute(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e @ (FinanceError::Io(_) | FinanceError::Storage(_))) => return Err(e),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }

        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    fn execute(&mut self, command: ShellCommand) -> FinanceResult<Flow> {
        let currency = self.settings.currency_symbol.clone();

        match command {
            ShellCommand::List => {
                let finances = self.service.list()?;
                write!(self.output, "{}", format_finance_list(&finances, &currency))?;
            }
            ShellCommand::Show { id } => {
                let finance = self.service.get(id)?;
                write!(self.output, "{}", format_finance_details(&finance, &currency))?;
            }
            ShellCommand::Add => {
                let Some(form) = self.prompt_form(None)? else {
                    return Ok(Flow::Quit);
                };
                let created = self.service.create(&form)?;
                self.report("Added", &created, "used default for")?;
            }
            ShellCommand::Edit { id } => {
                let current = self.service.edit_form(id)?;
                let Some(form) = self.prompt_form(Some(&current))? else {
                    return Ok(Flow::Quit);
                };
                let edited = self.service.edit(id, &form)?;
                self.report("Updated", &edited, "kept previous value for")?;
            }
            ShellCommand::Delete { id } => {
                let deleted = self.service.delete(id)?;
                writeln!(self.output, "Deleted {} ({})", deleted.id, deleted.name)?;
            }
            ShellCommand::Export { format } => {
                let finances = self.service.list()?;
                export_finances(&finances, format, &mut self.output)?;
            }
            ShellCommand::History { count } => self.print_history(count)?,
            ShellCommand::Config => self.print_config()?,
            ShellCommand::Help => write!(self.output, "{}", HELP_TEXT)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Ask for each form field in turn
    ///
    /// With `initial`, the prompt shows the current text and an empty answer
    /// keeps it. Returns `None` if input ends mid-form.
    fn prompt_form(
        &mut self,
        initial: Option<&FinanceForm>,
    ) -> FinanceResult<Option<FinanceForm>> {
        let mut form = initial.cloned().unwrap_or_default();

        for field in FormField::ALL {
            let label = match field {
                FormField::Date => "Date (yyyy-MM-dd)",
                FormField::Category => "Category (INCOME/EXPENSE)",
                _ => field.label(),
            };
            let prompt = match initial {
                Some(current) => format!("{} [{}]: ", label, current.field(field)),
                None => format!("{}: ", label),
            };

            let Some(answer) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            if initial.is_none() || !answer.is_empty() {
                *form.field_mut(field) = answer;
            }
        }

        Ok(Some(form))
    }

    fn report(
        &mut self,
        verb: &str,
        parsed: &Parsed<Finance>,
        fallback_note: &str,
    ) -> FinanceResult<()> {
        let currency = &self.settings.currency_symbol;
        writeln!(self.output, "{} {}", verb, parsed.value.id)?;
        writeln!(self.output, "{}", format_finance_card(&parsed.value, currency))?;
        for fallback in &parsed.fallbacks {
            write_fallback(&mut self.output, fallback_note, fallback)?;
        }
        Ok(())
    }

    fn print_history(&mut self, count: usize) -> FinanceResult<()> {
        let Some(logger) = &self.audit else {
            writeln!(self.output, "Audit log is disabled.")?;
            return Ok(());
        };

        let entries = logger.read_recent(count)?;
        if entries.is_empty() {
            writeln!(self.output, "No audit entries.")?;
        }
        for entry in entries {
            writeln!(self.output, "{}", entry.format_human_readable())?;
        }
        Ok(())
    }

    fn print_config(&mut self) -> FinanceResult<()> {
        writeln!(self.output, "Settings:")?;
        writeln!(self.output, "  Parse policy:     {}", self.service.policy())?;
        writeln!(self.output, "  Currency symbol:  {}", self.settings.currency_symbol)?;
        writeln!(self.output, "  Sample data:      {}", self.settings.seed_sample_data)?;
        match &self.audit {
            Some(logger) => {
                writeln!(self.output, "  Audit log:        {}", logger.path().display())?
            }
            None => writeln!(self.output, "  Audit log:        disabled")?,
        }
        Ok(())
    }

    /// Print a prompt and read one line, without its line ending
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> FinanceResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

fn write_fallback<W: Write>(
    output: &mut W,
    note: &str,
    fallback: &FieldError,
) -> FinanceResult<()> {
    writeln!(
        output,
        "Note: {} {} ('{}' {})",
        note, fallback.field, fallback.input, fallback.reason
    )?;
    Ok(())
}

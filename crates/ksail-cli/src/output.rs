//! Output management and formatting.
//!
//! Scaffold events go to stdout, one line each. Everything else the user
//! should see goes to stderr so that stdout stays machine-readable under
//! `--output-format json`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use ksail_core::application::{EventSink, ScaffoldEvent};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    out: Term,
    err: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message on stdout; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(msg)
    }

    /// One scaffold event, rendered for the resolved format.
    pub fn event(&self, event: &ScaffoldEvent) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = match self.resolved_format {
            OutputFormat::Json => serde_json::to_string(event).map_err(io::Error::other)?,
            _ if self.no_color => event.to_string(),
            _ => match event {
                ScaffoldEvent::Created(_) => format!("{} {}", "+".green().bold(), event),
                ScaffoldEvent::Overwrote(_) => format!("{} {}", "~".yellow().bold(), event),
                ScaffoldEvent::Skipped(_) => format!("{} {}", "-".dimmed(), event.dimmed()),
            },
        };
        self.out.write_line(&line)
    }

    /// Success indicator on stderr: `✓ <msg>`. Not shown for JSON output.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet || self.resolved_format == OutputFormat::Json {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.err.write_line(&line)
    }

    /// Warning indicator on stderr: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.err.write_line(&line)
    }
}

/// Prints events as the scaffold reports them.
///
/// The sink cannot fail, so the first write error is kept for the caller.
pub struct EventPrinter<'a> {
    output: &'a OutputManager,
    written: usize,
    skipped: usize,
    error: Option<io::Error>,
}

impl<'a> EventPrinter<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self {
            output,
            written: 0,
            skipped: 0,
            error: None,
        }
    }

    /// Counts so far, or the first write error.
    pub fn finish(self) -> io::Result<(usize, usize)> {
        match self.error {
            Some(e) => Err(e),
            None => Ok((self.written, self.skipped)),
        }
    }
}

impl EventSink for EventPrinter<'_> {
    fn emit(&mut self, event: ScaffoldEvent) {
        if event.is_write() {
            self.written += 1;
        } else {
            self.skipped += 1;
        }
        if self.error.is_none() {
            self.error = self.output.event(&event).err();
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: true,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_events() {
        let out = make_manager(true, OutputFormat::Plain);
        // Term::stdout() in a test environment won't panic even without a TTY.
        assert!(out.event(&ScaffoldEvent::Created("ksail.yaml".into())).is_ok());
    }

    #[test]
    fn plain_format_disables_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Plain,
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(out.no_color);
        assert_eq!(out.resolved_format, OutputFormat::Plain);
    }

    #[test]
    fn printer_counts_events() {
        let out = make_manager(true, OutputFormat::Plain);
        let mut printer = EventPrinter::new(&out);
        printer.emit(ScaffoldEvent::Created("ksail.yaml".into()));
        printer.emit(ScaffoldEvent::Overwrote("kind.yaml".into()));
        printer.emit(ScaffoldEvent::Skipped("k8s/kustomization.yaml".into()));

        assert_eq!(printer.finish().unwrap(), (2, 1));
    }

    #[test]
    fn json_event_shape() {
        let line = serde_json::to_string(&ScaffoldEvent::Skipped("kind.yaml".into())).unwrap();
        assert_eq!(line, r#"{"event":"skipped","artifact":"kind.yaml"}"#);
    }
}

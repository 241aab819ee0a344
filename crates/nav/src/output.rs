//! Colored terminal output on stderr.
//!
//! Stdout is reserved for the site JSON written by `nav build`.

use console::{Style, Term};
use nav_site::ResolveWarning;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    ok: Style,
    warn: Style,
    fail: Style,
    label: Style,
    heading: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
            label: Style::new().dim(),
            heading: Style::new().cyan().bold(),
        }
    }

    fn line(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.ok.apply_to(msg).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.fail.apply_to(msg).to_string());
    }

    /// Print a section heading (cyan bold).
    pub(crate) fn heading(&self, msg: &str) {
        self.line(&self.heading.apply_to(msg).to_string());
    }

    /// Print an aligned `label: value` line.
    pub(crate) fn field(&self, label: &str, value: &str) {
        let label = format!("{label}:");
        self.line(&format!("  {} {value}", self.label.apply_to(format!("{label:<10}"))));
    }

    /// Print resolution warnings, one per line (yellow).
    pub(crate) fn warnings(&self, warnings: &[ResolveWarning]) {
        for warning in warnings {
            self.line(&self.warn.apply_to(format!("Warning: {warning}")).to_string());
        }
    }
}

use colored::{ColoredString, Colorize};
use sixdegrees_core::SearchOutcome;

use crate::utils::format_number;

/// Styling for the terminal report. A disabled scheme renders every piece as
/// plain text, so width specifiers in format strings still line up.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: String, style: impl FnOnce(ColoredString) -> ColoredString) -> ColoredString {
        let plain = ColoredString::from(text);
        if self.enabled { style(plain) } else { plain }
    }

    /// Quoted artist name.
    pub fn artist(&self, name: &str) -> ColoredString {
        self.paint(format!("\"{}\"", name), |text| text.yellow())
    }

    /// Quoted track title, the evidence for one hop.
    pub fn track(&self, title: &str) -> ColoredString {
        self.paint(format!("\"{}\"", title), |text| text.italic())
    }

    /// One-based step label such as `1.`.
    pub fn step_number(&self, step_index: usize) -> ColoredString {
        self.paint(format!("{}.", step_index + 1), |text| text.blue())
    }

    pub fn count(&self, value: usize) -> ColoredString {
        self.paint(format_number(value), |text| text.green())
    }

    pub fn weight(&self, value: f64) -> ColoredString {
        self.paint(format!("{:.3}", value), |text| text.green())
    }

    pub fn seconds(&self, value: f64) -> ColoredString {
        self.paint(format!("{:.3}", value), |text| text.green())
    }

    /// Why a search ended; a spent budget reads as a failure, running out of
    /// collaborators or depth as a plain miss.
    pub fn outcome(&self, outcome: &SearchOutcome) -> ColoredString {
        let text = outcome.describe().to_string();
        match outcome {
            SearchOutcome::Found { .. } => self.paint(text, |text| text.green()),
            SearchOutcome::BudgetExhausted => self.paint(text, |text| text.red()),
            SearchOutcome::FrontierExhausted | SearchOutcome::DepthExhausted => {
                self.paint(text, |text| text.yellow())
            }
        }
    }

    pub fn success(&self, text: &str) -> ColoredString {
        self.paint(text.to_string(), |text| text.green())
    }

    pub fn error(&self, text: &str) -> ColoredString {
        self.paint(text.to_string(), |text| text.red())
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        self.paint(text.to_string(), |text| text.blue())
    }
}

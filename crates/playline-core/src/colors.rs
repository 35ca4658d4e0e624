//! ANSI color codes for terminal output.
//!
//! Used by the code listing and the CLI log prefixes:
//! - Blue: node names, opcodes
//! - Green: string operands, line text
//! - Red / Yellow: error and warning prefixes
//! - Dim: indices, labels, comments

use crate::compilation::Severity;

/// ANSI color palette. Standard 16-color codes only.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub yellow: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        yellow: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        yellow: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Color for a severity prefix.
    pub fn severity(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Error => self.red,
            Severity::Warning => self.yellow,
            Severity::Info => self.blue,
        }
    }
}

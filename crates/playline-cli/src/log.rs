//! Status messages on stderr.
//!
//! stdout is reserved for command output (`--stdout` reports, listings).

use std::fmt::Display;

use playline_core::{Colors, Severity};

pub fn info(colors: Colors, message: impl Display) {
    emit(colors, Severity::Info, message);
}

pub fn warning(colors: Colors, message: impl Display) {
    emit(colors, Severity::Warning, message);
}

pub fn error(colors: Colors, message: impl Display) {
    emit(colors, Severity::Error, message);
}

/// Report a pipeline error and exit with its status.
pub fn fatal(colors: Colors, err: &playline_lib::Error) -> ! {
    error(colors, err);
    std::process::exit(err.exit_code());
}

fn emit(colors: Colors, severity: Severity, message: impl Display) {
    eprintln!(
        "{}{severity}{}: {message}",
        colors.severity(severity),
        colors.reset
    );
}

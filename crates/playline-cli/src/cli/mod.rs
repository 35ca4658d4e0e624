mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{CompileParams, CreateProjectParams, DumpCodeParams};

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Check both streams: `compile --stdout | jq` pipes stdout while
            // diagnostics still go to a terminal.
            ColorChoice::Auto => {
                std::io::IsTerminal::is_terminal(&std::io::stdout())
                    && std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }
}
